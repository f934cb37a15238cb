// Calendar Grid Library
// Exports all modules for testing and reuse

pub mod error;
pub mod models;
pub mod services;
pub mod utils;

pub use error::CalendarError;
pub use models::convention::CalendarConvention;
pub use models::grid::{DisplayMode, GridState};
pub use services::grid::GridController;

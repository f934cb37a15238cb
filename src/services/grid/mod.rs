//! Grid controller: the view state behind a month/week calendar grid.
//!
//! Owns the reference date, selection, display mode and year bounds, and
//! keeps the derived `visible_days` sequence current across navigation.
//! Hosts poll [`GridController::state`] after each mutating call; there is
//! no implicit reactivity.

use std::ops::RangeInclusive;

use chrono::{Datelike, NaiveDate};
use log::{debug, trace, warn};

use crate::error::CalendarError;
use crate::models::convention::CalendarConvention;
use crate::models::grid::{DisplayMode, GridState};
use crate::utils::date;

#[derive(Debug)]
pub struct GridController {
    state: GridState,
    convention: CalendarConvention,
}

impl GridController {
    /// Build a controller anchored at `initial_date`.
    ///
    /// Rejects inverted year bounds or an initial date outside them, so the
    /// `min_year <= reference_date.year <= max_year` invariant holds from
    /// the first frame on.
    pub fn new(
        initial_date: NaiveDate,
        min_year: i32,
        max_year: i32,
        display_mode: DisplayMode,
        convention: CalendarConvention,
    ) -> Result<Self, CalendarError> {
        convention.validate()?;
        if min_year > max_year || initial_date.year() < min_year || initial_date.year() > max_year
        {
            return Err(CalendarError::InvalidTarget {
                month: initial_date.month(),
                year: initial_date.year(),
            });
        }

        let mut controller = Self {
            state: GridState {
                reference_date: initial_date,
                selected_date: None,
                display_mode,
                min_year,
                max_year,
                visible_days: Vec::new(),
            },
            convention,
        };
        controller.recompute_visible_days();
        Ok(controller)
    }

    /// Month mode, years 1900 through `initial_date`'s, default convention.
    pub fn with_defaults(initial_date: NaiveDate) -> Result<Self, CalendarError> {
        Self::new(
            initial_date,
            1900,
            initial_date.year(),
            DisplayMode::Month,
            CalendarConvention::default(),
        )
    }

    pub fn state(&self) -> &GridState {
        &self.state
    }

    pub fn visible_days(&self) -> &[NaiveDate] {
        &self.state.visible_days
    }

    pub fn reference_date(&self) -> NaiveDate {
        self.state.reference_date
    }

    pub fn selected_date(&self) -> Option<NaiveDate> {
        self.state.selected_date
    }

    pub fn display_mode(&self) -> DisplayMode {
        self.state.display_mode
    }

    pub fn convention(&self) -> &CalendarConvention {
        &self.convention
    }

    /// The years a month/year picker may offer, inclusive.
    pub fn selectable_years(&self) -> RangeInclusive<i32> {
        self.state.min_year..=self.state.max_year
    }

    /// Switch between month and week grids and recompute the visible days.
    /// Setting the current mode again regenerates the same content.
    pub fn set_display_mode(&mut self, mode: DisplayMode) {
        self.state.display_mode = mode;
        self.recompute_visible_days();
    }

    /// Step forward one month or week, depending on mode.
    ///
    /// Returns whether the reference date moved; a step whose target year
    /// would pass `max_year` is a no-op, not an error.
    pub fn advance(&mut self) -> bool {
        self.step(1)
    }

    /// Step backward one month or week; the no-op clamp mirrors [`advance`]
    /// at `min_year`.
    ///
    /// [`advance`]: GridController::advance
    pub fn retreat(&mut self) -> bool {
        self.step(-1)
    }

    fn step(&mut self, direction: i32) -> bool {
        let candidate = match self.state.display_mode {
            DisplayMode::Month => date::shift_month(self.state.reference_date, direction),
            DisplayMode::Week => date::shift_week(self.state.reference_date, direction),
        };
        self.move_reference_within_bounds(candidate)
    }

    /// Jump straight to a month/year pair, preserving the day-of-month under
    /// the same clamping rule as month stepping.
    ///
    /// An out-of-range month or a year outside the configured bounds is
    /// rejected with [`CalendarError::InvalidTarget`] and leaves the state
    /// untouched.
    pub fn jump_to(&mut self, month: u32, year: i32) -> Result<(), CalendarError> {
        if !(1..=12).contains(&month) || year < self.state.min_year || year > self.state.max_year
        {
            warn!("rejected jump target month={month} year={year}");
            return Err(CalendarError::InvalidTarget { month, year });
        }

        let day = self
            .state
            .reference_date
            .day()
            .min(date::last_day_of_month(year, month));
        let target = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
            CalendarError::UnrepresentableDate(format!("{year:04}-{month:02}-{day:02}"))
        })?;

        debug!("jump to {target}");
        self.state.reference_date = target;
        self.recompute_visible_days();
        Ok(())
    }

    /// Re-anchor the grid on an arbitrary date (the host's "Today" button),
    /// clamped by the year bounds like any other navigation.
    pub fn go_to(&mut self, target: NaiveDate) -> bool {
        self.move_reference_within_bounds(target)
    }

    /// Mark a date selected. No containment check against the visible grid:
    /// an off-grid selection is legal and simply renders without a highlight.
    pub fn select(&mut self, selection: NaiveDate) {
        self.state.selected_date = Some(selection);
    }

    pub fn clear_selection(&mut self) {
        self.state.selected_date = None;
    }

    fn move_reference_within_bounds(&mut self, candidate: NaiveDate) -> bool {
        if candidate.year() < self.state.min_year || candidate.year() > self.state.max_year {
            debug!(
                "navigation clamped: {} outside years {}..={}",
                candidate, self.state.min_year, self.state.max_year
            );
            return false;
        }
        self.state.reference_date = candidate;
        self.recompute_visible_days();
        true
    }

    fn recompute_visible_days(&mut self) {
        let first_day = self.convention.first_day_of_week;
        self.state.visible_days = match self.state.display_mode {
            DisplayMode::Month => date::month_grid(self.state.reference_date, first_day),
            DisplayMode::Week => date::week_grid(self.state.reference_date, first_day),
        };
        trace!(
            "visible days recomputed: {} entries from {:?}",
            self.state.visible_days.len(),
            self.state.visible_days.first()
        );
    }
}

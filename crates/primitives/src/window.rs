//! Analysis window definition.

use serde::{Deserialize, Serialize};

use crate::Date;

/// Inclusive date range that bounds a session's returns and rates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisWindow {
    /// First date of the window (inclusive).
    pub start: Date,
    /// Last date of the window (inclusive).
    pub end: Date,
}

impl AnalysisWindow {
    /// Create a new window.
    #[must_use]
    pub const fn new(start: Date, end: Date) -> Self {
        Self { start, end }
    }

    /// Whether `date` falls inside the window.
    #[must_use]
    pub fn contains(&self, date: Date) -> bool {
        date >= self.start && date <= self.end
    }

    /// Whether the window holds no dates at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }
}

impl Default for AnalysisWindow {
    /// Five calendar years, 2020 through 2024.
    fn default() -> Self {
        Self {
            start: Date::from_ymd_opt(2020, 1, 1).unwrap_or_default(),
            end: Date::from_ymd_opt(2024, 12, 31).unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn d(y: i32, m: u32, day: u32) -> Date {
        Date::from_ymd_opt(y, m, day).unwrap()
    }

    #[rstest]
    #[case(d(2020, 1, 1), true)]
    #[case(d(2024, 12, 31), true)]
    #[case(d(2022, 6, 15), true)]
    #[case(d(2019, 12, 31), false)]
    #[case(d(2025, 1, 1), false)]
    fn default_window_bounds_are_inclusive(#[case] date: Date, #[case] inside: bool) {
        assert_eq!(AnalysisWindow::default().contains(date), inside);
    }

    #[test]
    fn inverted_window_is_empty() {
        let window = AnalysisWindow::new(d(2024, 1, 2), d(2024, 1, 1));
        assert!(window.is_empty());
        assert!(!window.contains(d(2024, 1, 1)));
    }
}

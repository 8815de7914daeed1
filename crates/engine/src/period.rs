use std::fmt;

use chrono::{Datelike, Local};

/// First year offered by the year selector.
pub const BASE_YEAR: i32 = 2023;
/// Number of consecutive years offered by the year selector.
pub const YEAR_SPAN: i32 = 5;

/// One month/year selection. Entries are fetched and aggregated per period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Period {
    pub year: i32,
    /// 1-based month, 1..=12.
    pub month: u32,
}

impl Period {
    /// The current local month/year, clamped into the selector range.
    pub fn current() -> Self {
        let now = Local::now();
        Self {
            year: now.year(),
            month: now.month(),
        }
        .clamped()
    }

    fn clamped(self) -> Self {
        Self {
            year: self.year.clamp(BASE_YEAR, BASE_YEAR + YEAR_SPAN - 1),
            month: self.month.clamp(1, 12),
        }
    }

    /// Years offered by the selector, in ascending order.
    pub fn years() -> impl Iterator<Item = i32> {
        BASE_YEAR..BASE_YEAR + YEAR_SPAN
    }

    pub fn next_month(self) -> Self {
        Self {
            month: if self.month == 12 { 1 } else { self.month + 1 },
            ..self
        }
    }

    pub fn prev_month(self) -> Self {
        Self {
            month: if self.month == 1 { 12 } else { self.month - 1 },
            ..self
        }
    }

    pub fn next_year(self) -> Self {
        let last = BASE_YEAR + YEAR_SPAN - 1;
        Self {
            year: if self.year >= last { BASE_YEAR } else { self.year + 1 },
            ..self
        }
    }

    pub fn prev_year(self) -> Self {
        let last = BASE_YEAR + YEAR_SPAN - 1;
        Self {
            year: if self.year <= BASE_YEAR { last } else { self.year - 1 },
            ..self
        }
    }
}

impl fmt::Display for Period {
    /// `"{month}-{year}"`, no zero padding. Used in titles and file names.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.month, self.year)
    }
}

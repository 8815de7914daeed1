//! Pure salary computation: single-entry derivation, form parsing and
//! column aggregation. No I/O lives here; the store client and the
//! presentation layer are consumers.

pub use error::EngineError;
pub use period::{BASE_YEAR, Period, YEAR_SPAN};
pub use salary::{PF_RATE, ParsedInput, RawInput, SalaryBreakdown, compute};
pub use totals::{Adjustments, ColumnTotals, aggregate};

mod error;
mod period;
mod salary;
mod totals;

pub(crate) type ResultEngine<T> = Result<T, EngineError>;

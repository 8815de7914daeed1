//! Statement rendering: a pure table model built from already-computed
//! values, plus PDF and CSV renderers. The renderers only format; every
//! number they receive was derived by the engine beforehand.

pub use error::{ReportError, Result};
pub use statement::{COLUMNS, Row, Statement, build, filename, format_amount};

pub mod csv;
pub mod pdf;

mod error;
mod statement;

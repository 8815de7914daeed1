//! CSV rendering of the statement table.

use ::csv::WriterBuilder;

use crate::{
    error::{ReportError, Result},
    statement::{COLUMNS, Statement},
};

/// Renders the statement as CSV bytes: title record, header record, one
/// record per entry, then the footer records.
pub fn render(statement: &Statement) -> Result<Vec<u8>> {
    // Flexible: the title record has a single field.
    let mut writer = WriterBuilder::new().flexible(true).from_writer(vec![]);

    writer.write_record([statement.title.as_str()])?;
    writer.write_record(COLUMNS)?;
    for row in &statement.rows {
        writer.write_record(row)?;
    }
    for row in &statement.footer {
        writer.write_record(row)?;
    }

    writer
        .into_inner()
        .map_err(|err| ReportError::Finalize(err.to_string()))
}

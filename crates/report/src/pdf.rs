//! PDF rendering, delegated to the `genpdf` table-layout library.

use std::path::Path;

use genpdf::{
    Document, Element, SimplePageDecorator,
    elements::{Break, FrameCellDecorator, Paragraph, TableLayout},
    fonts,
    style::Style,
};

use crate::{
    error::Result,
    statement::{COLUMNS, Row, Statement},
};

// Regular/bold/italic TTF files for this family must exist in the configured
// fonts directory at export time.
const FONT_FAMILY: &str = "LiberationSans";

const BODY_SIZE: u8 = 7;
const TITLE_SIZE: u8 = 14;

/// Renders the statement as PDF document bytes.
pub fn render(statement: &Statement, fonts_dir: &Path) -> Result<Vec<u8>> {
    let font_family = fonts::from_files(fonts_dir, FONT_FAMILY, None)?;
    let mut doc = Document::new(font_family);
    doc.set_title(statement.title.clone());

    let mut decorator = SimplePageDecorator::new();
    decorator.set_margins(10);
    doc.set_page_decorator(decorator);

    let mut title_style = Style::new();
    title_style.set_bold();
    title_style.set_font_size(TITLE_SIZE);
    doc.push(Paragraph::new(statement.title.clone()).styled(title_style));
    doc.push(Break::new(1.0));

    let mut table = TableLayout::new(vec![1; COLUMNS.len()]);
    table.set_cell_decorator(FrameCellDecorator::new(true, true, false));

    let mut body_style = Style::new();
    body_style.set_font_size(BODY_SIZE);
    let mut emphasis_style = Style::new();
    emphasis_style.set_bold();
    emphasis_style.set_font_size(BODY_SIZE);

    let mut header = table.row();
    for column in COLUMNS {
        header.push_element(Paragraph::new(column).styled(emphasis_style.clone()));
    }
    header.push()?;

    for row in &statement.rows {
        push_row(&mut table, row, &body_style)?;
    }
    for row in &statement.footer {
        push_row(&mut table, row, &emphasis_style)?;
    }

    doc.push(table);

    let mut bytes = Vec::new();
    doc.render(&mut bytes)?;
    Ok(bytes)
}

fn push_row(table: &mut TableLayout, cells: &Row, style: &Style) -> Result<()> {
    let mut row = table.row();
    for cell in cells {
        row.push_element(Paragraph::new(cell.clone()).styled(style.clone()));
    }
    row.push()?;
    Ok(())
}

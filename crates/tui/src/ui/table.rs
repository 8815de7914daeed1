use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Row, Table},
};

use report::COLUMNS;

use crate::{app::AppState, ui::theme::Theme};

pub fn render(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    // Formatting lives in the report crate so the on-screen table and the
    // exported statement always agree cell for cell.
    let statement = report::build(
        state.period,
        &state.entries,
        &state.totals,
        &state.adjustments,
        state.final_total,
    );

    let header = Row::new(COLUMNS).style(
        Style::default()
            .fg(theme.accent)
            .add_modifier(Modifier::BOLD),
    );

    let mut rows: Vec<Row> = statement
        .rows
        .iter()
        .map(|cells| Row::new(cells.iter().cloned()))
        .collect();
    rows.extend(statement.footer.iter().map(|cells| {
        Row::new(cells.iter().cloned()).style(
            Style::default()
                .fg(theme.text)
                .add_modifier(Modifier::BOLD),
        )
    }));

    let widths = vec![Constraint::Fill(1); COLUMNS.len()];
    let table = Table::new(rows, widths).header(header).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!("Salary Table for {}", state.period)),
    );

    frame.render_widget(table, area);
}

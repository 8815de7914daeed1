pub mod keymap;

mod form;
mod table;
mod terminal;
mod theme;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::AppState;

pub use terminal::{AppTerminal as Terminal, restore_terminal, setup_terminal};
pub use theme::Theme;

pub fn render(frame: &mut Frame<'_>, state: &AppState) {
    let theme = Theme::default();

    // Main layout: form, table, bottom bar
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(11),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(frame.area());

    form::render(frame, layout[0], state, &theme);
    table::render(frame, layout[1], state, &theme);
    render_bottom_bar(frame, layout[2], state, &theme);
}

fn render_bottom_bar(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let mut parts = vec![
        Span::styled("Tab", Style::default().fg(theme.accent)),
        Span::raw(" next field  "),
        Span::styled("Enter", Style::default().fg(theme.accent)),
        Span::raw(" submit  "),
        Span::styled("Up/Down", Style::default().fg(theme.accent)),
        Span::raw(" change month/year  "),
        Span::styled("Ctrl+P", Style::default().fg(theme.accent)),
        Span::raw(" pdf  "),
        Span::styled("Ctrl+X", Style::default().fg(theme.accent)),
        Span::raw(" csv  "),
        Span::styled("Esc", Style::default().fg(theme.accent)),
        Span::raw(" quit"),
    ];

    if let Some(status) = &state.status {
        parts.push(Span::styled("  |  ", Style::default().fg(theme.dim)));
        parts.push(Span::styled(
            status.clone(),
            Style::default().fg(theme.dim),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(parts)), area);
}

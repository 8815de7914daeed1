use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::{
    app::{AppState, FormField},
    ui::theme::Theme,
};

const INPUTS: [FormField; 5] = [
    FormField::SalaryRate,
    FormField::InTime,
    FormField::OutTime,
    FormField::RegularHours,
    FormField::OvertimeHours,
];

pub fn render(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let mut lines: Vec<Line> = INPUTS
        .iter()
        .map(|&field| input_line(state, field, theme))
        .collect();

    lines.push(Line::from(""));
    lines.push(selector_line(state, theme));

    if let Some(message) = &state.form.message {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            message.clone(),
            Style::default().fg(theme.error),
        )));
    }

    let block = Block::default().borders(Borders::ALL).title("Salary Form");
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn input_line<'a>(state: &'a AppState, field: FormField, theme: &Theme) -> Line<'a> {
    let focused = state.focus == field;
    let label_style = if focused {
        Style::default()
            .fg(theme.accent)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.dim)
    };

    let form = &state.form;
    let value = match field {
        FormField::SalaryRate => form.salary_rate.as_str(),
        FormField::InTime => form.in_time.as_str(),
        FormField::OutTime => form.out_time.as_str(),
        FormField::RegularHours => form.regular_hours.as_str(),
        FormField::OvertimeHours => form.overtime_hours.as_str(),
        FormField::Month | FormField::Year => "",
    };

    let mut spans = vec![
        Span::styled(format!("{:<15}", field.label()), label_style),
        Span::raw(value),
    ];
    if focused {
        spans.push(Span::styled("|", Style::default().fg(theme.accent)));
    }
    Line::from(spans)
}

fn selector_line(state: &AppState, theme: &Theme) -> Line<'static> {
    let selector = |field: FormField, value: String| {
        let focused = state.focus == field;
        let style = if focused {
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.text)
        };
        let marker = if focused { "<" } else { " " };
        Span::styled(format!("{}: {value}{marker}", field.label()), style)
    };

    Line::from(vec![
        selector(FormField::Month, state.period.month.to_string()),
        Span::raw("   "),
        selector(FormField::Year, state.period.year.to_string()),
    ])
}

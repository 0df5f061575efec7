use hard75::domain::{water_increment_allowed, DayRecord, TaskId, TaskValue, WATER_GOAL_ML};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::app::{App, WATER_INCREMENTS_ML};

use super::utils;

/// One checklist row: icon, name, and a completion marker. The water task
/// shows its milliliter tally instead of a bare marker.
pub fn build_task_row(day: &DayRecord, task: TaskId, is_focused: bool) -> Line<'static> {
    let value = day.tasks.get(&task).copied();
    let complete = value.map(TaskValue::is_complete).unwrap_or(false);

    let marker = if complete { "✓" } else { "○" };
    let marker_color = if complete { Color::Green } else { Color::DarkGray };
    let name_style = if is_focused {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else if complete {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::White)
    };

    let mut spans = vec![
        Span::raw(if is_focused { "▸ " } else { "  " }),
        Span::styled(format!("{} ", marker), Style::default().fg(marker_color)),
        Span::raw(format!("{} ", task.icon())),
        Span::styled(format!("{:<24}", task.display_name()), name_style),
    ];

    if let Some(TaskValue::Milliliters(ml)) = value {
        spans.push(Span::styled(
            format!("{} / {}ml", ml, WATER_GOAL_ML),
            Style::default().fg(Color::Cyan),
        ));
    }

    Line::from(spans)
}

/// The row of discrete increment amounts under the water tracker. The
/// selected amount is bracketed; amounts that would overshoot the goal are
/// dimmed, matching the pre-check in the controller.
pub fn build_water_amount_row(app: &App) -> Line<'static> {
    let current = app.current_water_ml();
    let mut spans = vec![Span::raw("  ")];
    for (i, &amount) in WATER_INCREMENTS_ML.iter().enumerate() {
        let selected = i == app.water_amount_index % WATER_INCREMENTS_ML.len();
        let allowed = water_increment_allowed(current, amount);
        let label = if selected {
            format!("[+{}ml]", amount)
        } else {
            format!(" +{}ml ", amount)
        };
        let style = match (selected, allowed) {
            (true, true) => Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
            (true, false) => Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
            (false, true) => Style::default().fg(Color::Blue),
            (false, false) => Style::default().fg(Color::DarkGray),
        };
        spans.push(Span::styled(label, style));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

pub fn render_date_overlay(frame: &mut Frame, app: &App) {
    let Some(input) = &app.date_input else {
        return;
    };
    let area = utils::centered_rect(40, 5, frame.area());
    frame.render_widget(Clear, area);

    let paragraph = Paragraph::new(vec![
        Line::from(vec![
            Span::styled("Date: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{}█", input.value),
                Style::default().fg(Color::White),
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Enter: load   Esc: cancel",
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow))
            .title(Span::styled(
                " Select date (YYYY-MM-DD) ",
                Style::default().fg(Color::Yellow),
            )),
    );
    frame.render_widget(paragraph, area);
}

pub fn render_photo_overlay(frame: &mut Frame, app: &App) {
    let Some(input) = &app.photo_input else {
        return;
    };
    let area = utils::centered_rect(60, 5, frame.area());
    frame.render_widget(Clear, area);

    let paragraph = Paragraph::new(vec![
        Line::from(vec![
            Span::styled("Path: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{}█", input.value),
                Style::default().fg(Color::White),
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Enter: upload   Esc: cancel",
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow))
            .title(Span::styled(
                " Attach progress photo ",
                Style::default().fg(Color::Yellow),
            )),
    );
    frame.render_widget(paragraph, area);
}

use hard75::domain::TaskId;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, LineGauge, Padding, Paragraph},
    Frame,
};

use crate::app::App;

use super::widgets::{build_task_row, build_water_amount_row};

pub fn render(frame: &mut Frame, app: &App, body: Rect) {
    let Some(day) = app.day.as_ref() else {
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3), // Completion summary
            Constraint::Min(9),    // Task list
            Constraint::Length(4), // Water tracker
        ])
        .split(body);

    // --- Completion summary ---
    let completed = day.completed_count();
    let total = day.total_count();
    let rate = day.completion_rate();
    let summary_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::White))
        .title(Span::styled(" Progress ", Style::default().fg(Color::White)))
        .padding(Padding::horizontal(1));
    let gauge = LineGauge::default()
        .ratio(f64::from(rate) / 100.0)
        .label(format!("{} / {} tasks ({}%)", completed, total, rate))
        .filled_style(Style::default().fg(Color::Green))
        .unfilled_style(Style::default().fg(Color::DarkGray));
    let summary_inner = summary_block.inner(chunks[0]);
    frame.render_widget(summary_block, chunks[0]);
    frame.render_widget(gauge, summary_inner);

    // --- Task list ---
    let focused = app.focused_task();
    let rows: Vec<Line> = TaskId::ALL
        .iter()
        .map(|&task| build_task_row(day, task, task == focused))
        .collect();
    let remaining = day.remaining_tasks().len();
    let list_title = if remaining == 0 {
        " Daily Tasks - all done! ".to_string()
    } else {
        format!(" Daily Tasks ({} remaining) ", remaining)
    };
    let list = Paragraph::new(rows).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .title(Span::styled(list_title, Style::default().fg(Color::White)))
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(list, chunks[1]);

    // --- Water tracker ---
    let water_color = if day.is_water_complete() {
        Color::Green
    } else {
        Color::Blue
    };
    let water_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(water_color))
        .title(Span::styled(
            " Water ",
            Style::default().fg(water_color),
        ))
        .padding(Padding::horizontal(1));
    let water_inner = water_block.inner(chunks[2]);
    frame.render_widget(water_block, chunks[2]);

    let water_rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(water_inner);

    let water_gauge = LineGauge::default()
        .ratio(day.water_progress_percent() / 100.0)
        .label(format!("{} / {}ml", day.water_ml(), hard75::domain::WATER_GOAL_ML))
        .filled_style(Style::default().fg(water_color))
        .unfilled_style(Style::default().fg(Color::DarkGray));
    frame.render_widget(water_gauge, water_rows[0]);
    frame.render_widget(Paragraph::new(build_water_amount_row(app)), water_rows[1]);
}

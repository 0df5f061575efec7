use hard75::domain::TaskId;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, LineGauge, Padding, Paragraph},
    Frame,
};

use crate::app::App;

pub fn render(frame: &mut Frame, app: &App, body: Rect) {
    let Some(stats) = app.stats.as_ref() else {
        let empty = Paragraph::new("No statistics yet")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(empty, body);
        return;
    };

    let panels = ratatui::layout::Layout::default()
        .direction(Direction::Horizontal)
        .margin(1)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(body);

    // --- Totals and streaks ---
    let white = Style::default().fg(Color::White);
    let label = Style::default().fg(Color::DarkGray);
    let lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled("Total days:      ", label),
            Span::styled(stats.total_days.to_string(), white),
        ]),
        Line::from(vec![
            Span::styled("Completed days:  ", label),
            Span::styled(stats.completed_days.to_string(), white),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Current streak:  ", label),
            Span::styled(
                format!("🔥 {}", stats.current_streak),
                Style::default().fg(Color::Yellow),
            ),
        ]),
        Line::from(vec![
            Span::styled("Longest streak:  ", label),
            Span::styled(stats.longest_streak.to_string(), white),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Completion rate: ", label),
            Span::styled(
                format!("{}%", stats.completion_rate),
                Style::default().fg(Color::Green),
            ),
        ]),
    ];
    let totals = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .title(Span::styled(" Overview ", white))
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(totals, panels[0]);

    // --- Per-task completion percentages ---
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::White))
        .title(Span::styled(" Per Task ", white))
        .padding(Padding::new(1, 1, 1, 0));
    let inner = block.inner(panels[1]);
    frame.render_widget(block, panels[1]);

    for (i, task) in TaskId::ALL.iter().enumerate() {
        let row = Rect {
            x: inner.x,
            y: inner.y + i as u16,
            width: inner.width,
            height: 1,
        };
        if row.y >= inner.y + inner.height {
            break;
        }
        let percentage = stats
            .task_stats
            .get(task)
            .map(|s| s.percentage.min(100))
            .unwrap_or(0);
        let gauge = LineGauge::default()
            .ratio(f64::from(percentage) / 100.0)
            .label(format!("{:<24} {:>3}%", task.display_name(), percentage))
            .filled_style(Style::default().fg(Color::Green))
            .unfilled_style(Style::default().fg(Color::DarkGray));
        frame.render_widget(gauge, row);
    }
}

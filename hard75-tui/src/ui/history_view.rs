use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};

use crate::app::App;

/// Recency-first listing of the fetched history window (the server returns
/// it date-ascending).
pub fn render(frame: &mut Frame, app: &App, body: Rect) {
    let entries = app.history_recent_first();

    if entries.is_empty() {
        let empty = Paragraph::new("No tracked days yet")
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::White))
                    .title(Span::styled(" History ", Style::default().fg(Color::White)))
                    .padding(Padding::horizontal(1)),
            );
        frame.render_widget(empty, body);
        return;
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::White))
        .title(Span::styled(
            format!(" History ({} days) ", entries.len()),
            Style::default().fg(Color::White),
        ))
        .padding(Padding::horizontal(1));
    let inner = block.inner(body);
    frame.render_widget(block, body);

    let max_rows = inner.height as usize;
    let scroll = app.history_scroll.min(entries.len().saturating_sub(1));

    let rows: Vec<Line> = entries
        .iter()
        .skip(scroll)
        .take(max_rows)
        .map(|day| {
            let completed = day.completed_count();
            let total = day.total_count();
            let all_done = total > 0 && completed == total;
            let day_color = if all_done {
                Color::Green
            } else if completed > 0 {
                Color::Yellow
            } else {
                Color::DarkGray
            };
            let marker = if all_done { "✓" } else { "○" };
            Line::from(vec![
                Span::styled(format!("{} ", marker), Style::default().fg(day_color)),
                Span::styled(
                    format!("{:<12}", hard75::date::format_for_display(&day.date)),
                    Style::default().fg(Color::White),
                ),
                Span::styled(
                    format!("  {}/{} tasks", completed, total),
                    Style::default().fg(day_color),
                ),
                Span::styled(
                    format!("  water {}ml", day.water_ml()),
                    Style::default().fg(Color::Cyan),
                ),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(rows), inner);
}

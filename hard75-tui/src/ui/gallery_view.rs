use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};

use crate::app::App;

/// Progress-photo gallery. Loads on its own flag, independent of the main
/// day/history/stats state.
pub fn render(frame: &mut Frame, app: &mut App, body: Rect) {
    if app.gallery_loading {
        let area = super::utils::centered_rect(24, 1, body);
        let throbber = throbber_widgets_tui::Throbber::default()
            .label("Loading photos...")
            .style(Style::default().fg(Color::Yellow))
            .throbber_style(Style::default().fg(Color::Yellow))
            .throbber_set(throbber_widgets_tui::BRAILLE_SIX)
            .use_type(throbber_widgets_tui::WhichUse::Spin);
        frame.render_stateful_widget(throbber, area, &mut app.throbber_state);
        return;
    }

    if app.gallery_photos.is_empty() {
        let empty = Paragraph::new("No progress photos yet. Press p on the Today tab to add one")
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::White))
                    .title(Span::styled(" Gallery ", Style::default().fg(Color::White)))
                    .padding(Padding::horizontal(1)),
            );
        frame.render_widget(empty, body);
        return;
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::White))
        .title(Span::styled(
            format!(" Gallery ({} photos) ", app.gallery_photos.len()),
            Style::default().fg(Color::White),
        ))
        .padding(Padding::horizontal(1));
    let inner = block.inner(body);
    frame.render_widget(block, body);

    let max_rows = inner.height as usize;
    let scroll = app
        .gallery_scroll
        .min(app.gallery_photos.len().saturating_sub(1));

    let rows: Vec<Line> = app
        .gallery_photos
        .iter()
        .skip(scroll)
        .take(max_rows)
        .map(|photo| {
            Line::from(vec![
                Span::styled("📷 ", Style::default().fg(Color::Magenta)),
                Span::styled(
                    format!("{:<12}", hard75::date::format_for_display(&photo.date)),
                    Style::default().fg(Color::White),
                ),
                Span::styled(
                    format!("  {}", photo.image_url),
                    Style::default().fg(Color::DarkGray),
                ),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(rows), inner);
}

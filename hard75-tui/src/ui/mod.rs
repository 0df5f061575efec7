use crate::app::{App, LoadState, Tab};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};

mod gallery_view;
mod history_view;
mod stats_view;
mod today_view;
pub(super) mod utils;
mod widgets;

pub fn render(frame: &mut Frame, app: &mut App) {
    let root = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(frame.area());

    render_header(frame, root[0], app);

    let body = root[1];
    if let LoadState::Error(message) = &app.load_state {
        render_error(frame, body, message);
    } else if matches!(app.load_state, LoadState::Idle | LoadState::Loading) {
        render_loading(frame, body, app);
    } else {
        match app.current_tab {
            Tab::Today => today_view::render(frame, app, body),
            Tab::History => history_view::render(frame, app, body),
            Tab::Stats => stats_view::render(frame, app, body),
            Tab::Gallery => gallery_view::render(frame, app, body),
        }
    }

    render_status_line(frame, root[2], app);

    if app.date_input.is_some() {
        widgets::render_date_overlay(frame, app);
    }
    if app.photo_input.is_some() {
        widgets::render_photo_overlay(frame, app);
    }
}

/// Tab bar with a throbber on the left and the selected date on the right.
fn render_header(frame: &mut Frame, area: Rect, app: &mut App) {
    let date_label = format!(" {} ", hard75::date::format_for_display(&app.selected_date));
    let date_width = date_label.len() as u16;

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(10),
            Constraint::Length(date_width),
        ])
        .split(area);

    let throbber_area = Rect {
        x: cols[0].x + 1,
        y: cols[0].y,
        width: 1,
        height: 1,
    };
    let throbber = throbber_widgets_tui::Throbber::default()
        .style(Style::default().fg(Color::Yellow))
        .throbber_style(Style::default().fg(Color::Yellow))
        .throbber_set(throbber_widgets_tui::BRAILLE_SIX)
        .use_type(if app.is_loading || app.gallery_loading {
            throbber_widgets_tui::WhichUse::Spin
        } else {
            throbber_widgets_tui::WhichUse::Full
        });
    frame.render_stateful_widget(throbber, throbber_area, &mut app.throbber_state);

    let titles: Vec<Line> = Tab::ALL
        .iter()
        .map(|tab| Line::from(format!(" {} ", tab.title())))
        .collect();
    let tabs = Tabs::new(titles)
        .select(app.current_tab.index())
        .style(Style::default().fg(Color::DarkGray))
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .divider("|");
    frame.render_widget(tabs, cols[1]);

    frame.render_widget(
        Paragraph::new(Span::styled(date_label, Style::default().fg(Color::Cyan)))
            .alignment(Alignment::Right),
        cols[2],
    );
}

fn render_loading(frame: &mut Frame, body: Rect, app: &mut App) {
    let area = utils::centered_rect(30, 1, body);
    let throbber = throbber_widgets_tui::Throbber::default()
        .label("Loading tracker data...")
        .style(Style::default().fg(Color::Yellow))
        .throbber_style(Style::default().fg(Color::Yellow))
        .throbber_set(throbber_widgets_tui::BRAILLE_SIX)
        .use_type(throbber_widgets_tui::WhichUse::Spin);
    frame.render_stateful_widget(throbber, area, &mut app.throbber_state);
}

/// The three-way load is all-or-nothing: any failure lands here with the
/// message shown verbatim.
fn render_error(frame: &mut Frame, body: Rect, message: &str) {
    let paragraph = Paragraph::new(vec![
        Line::from(Span::styled(
            format!("Error: {}", message),
            Style::default().fg(Color::Red),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "r: retry   d: change date   q: quit",
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Red)),
    );
    let area = utils::centered_rect(60, 5, body);
    frame.render_widget(paragraph, area);
}

fn render_status_line(frame: &mut Frame, area: Rect, app: &App) {
    let hint = match app.current_tab {
        Tab::Today => "j/k: move  Enter: toggle / +water  ←/→: amount  p: photo  d: date  r: refresh  q: quit",
        Tab::History => "j/k: scroll  d: date  r: refresh  q: quit",
        Tab::Stats => "1-4/Tab: switch tab  r: refresh  q: quit",
        Tab::Gallery => "j/k: scroll  r: refresh  q: quit",
    };
    let (text, color) = match &app.status_message {
        Some(message) => {
            let lower = message.to_lowercase();
            let color = if lower.contains("error")
                || lower.contains("failed")
                || lower.contains("invalid")
                || lower.contains("could not")
            {
                Color::Red
            } else {
                Color::Green
            };
            (message.as_str(), color)
        }
        None => (hint, Color::DarkGray),
    };
    frame.render_widget(
        Paragraph::new(Span::styled(format!(" {}", text), Style::default().fg(color))),
        area,
    );
}

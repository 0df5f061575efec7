use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::{App, Tab, TextField};

use super::action_queue::{Action, ActionTx};

fn enqueue(action_tx: &ActionTx, action: Action) {
    let _ = action_tx.send(action);
}

pub(super) fn handle_key(key: KeyEvent, app: &mut App, action_tx: &ActionTx) {
    // Overlays capture all input while open.
    if app.date_input.is_some() {
        handle_date_input_key(key, app, action_tx);
        return;
    }
    if app.photo_input.is_some() {
        handle_photo_input_key(key, app, action_tx);
        return;
    }

    match key.code {
        KeyCode::Char('q') => {
            app.running = false;
            return;
        }
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.running = false;
            return;
        }
        KeyCode::Tab => {
            select_tab(app, app.current_tab.next(), action_tx);
            return;
        }
        KeyCode::Char('1') => {
            select_tab(app, Tab::Today, action_tx);
            return;
        }
        KeyCode::Char('2') => {
            select_tab(app, Tab::History, action_tx);
            return;
        }
        KeyCode::Char('3') => {
            select_tab(app, Tab::Stats, action_tx);
            return;
        }
        KeyCode::Char('4') => {
            select_tab(app, Tab::Gallery, action_tx);
            return;
        }
        KeyCode::Char('d') => {
            app.date_input = Some(TextField::from_str(&app.selected_date));
            return;
        }
        KeyCode::Char('r') => {
            let generation = app.begin_fetch();
            enqueue(action_tx, Action::LoadAll { generation });
            return;
        }
        _ => {}
    }

    match app.current_tab {
        Tab::Today => handle_today_key(key, app, action_tx),
        Tab::History => handle_history_key(key, app),
        Tab::Stats => {}
        Tab::Gallery => handle_gallery_key(key, app),
    }
}

/// Switching to the gallery kicks off its own fetch, independent of the
/// main load.
fn select_tab(app: &mut App, tab: Tab, action_tx: &ActionTx) {
    app.select_tab(tab);
    if tab == Tab::Gallery {
        enqueue(action_tx, Action::LoadGallery);
    }
}

fn handle_today_key(key: KeyEvent, app: &mut App, action_tx: &ActionTx) {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => app.task_focus_up(),
        KeyCode::Down | KeyCode::Char('j') => app.task_focus_down(),
        KeyCode::Left | KeyCode::Char('h') => {
            if app.focused_task().is_water() {
                app.water_amount_left();
            }
        }
        KeyCode::Right | KeyCode::Char('l') => {
            if app.focused_task().is_water() {
                app.water_amount_right();
            }
        }
        KeyCode::Enter | KeyCode::Char(' ') => {
            let task = app.focused_task();
            if task.is_water() {
                enqueue(
                    action_tx,
                    Action::IncrementWater {
                        amount_ml: app.selected_water_amount(),
                    },
                );
            } else {
                enqueue(action_tx, Action::ToggleTask { task });
            }
        }
        KeyCode::Char('p') => {
            app.photo_input = Some(TextField::new());
        }
        _ => {}
    }
}

fn handle_history_key(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => {
            app.history_scroll = app.history_scroll.saturating_sub(1);
        }
        KeyCode::Down | KeyCode::Char('j') => {
            let max = app.history.len().saturating_sub(1);
            app.history_scroll = (app.history_scroll + 1).min(max);
        }
        _ => {}
    }
}

fn handle_gallery_key(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => {
            app.gallery_scroll = app.gallery_scroll.saturating_sub(1);
        }
        KeyCode::Down | KeyCode::Char('j') => {
            let max = app.gallery_photos.len().saturating_sub(1);
            app.gallery_scroll = (app.gallery_scroll + 1).min(max);
        }
        _ => {}
    }
}

/// Typed `YYYY-MM-DD` date picker. Enter validates and re-runs the full
/// three-way load for the new date; the generation bump invalidates any
/// load still queued for the previous date.
fn handle_date_input_key(key: KeyEvent, app: &mut App, action_tx: &ActionTx) {
    match key.code {
        KeyCode::Char(c) if c.is_ascii_digit() || c == '-' => {
            if let Some(input) = app.date_input.as_mut() {
                input.push_char(c);
            }
        }
        KeyCode::Backspace => {
            if let Some(input) = app.date_input.as_mut() {
                input.backspace();
            }
        }
        KeyCode::Esc => {
            app.date_input = None;
        }
        KeyCode::Enter => {
            let Some(input) = app.date_input.take() else {
                return;
            };
            if hard75::date::parse_date_key(&input.value).is_none() {
                app.set_status(format!("Invalid date: {} (want YYYY-MM-DD)", input.value));
                return;
            }
            app.selected_date = input.value;
            let generation = app.begin_fetch();
            enqueue(action_tx, Action::LoadAll { generation });
        }
        _ => {}
    }
}

fn handle_photo_input_key(key: KeyEvent, app: &mut App, action_tx: &ActionTx) {
    match key.code {
        KeyCode::Char(c) => {
            if let Some(input) = app.photo_input.as_mut() {
                input.push_char(c);
            }
        }
        KeyCode::Backspace => {
            if let Some(input) = app.photo_input.as_mut() {
                input.backspace();
            }
        }
        KeyCode::Esc => {
            app.photo_input = None;
        }
        KeyCode::Enter => {
            let Some(input) = app.photo_input.take() else {
                return;
            };
            if input.is_empty() {
                return;
            }
            enqueue(action_tx, Action::UploadPhoto { path: input.value });
        }
        _ => {}
    }
}

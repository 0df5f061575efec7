use crate::app::App;
use crate::ui;
use anyhow::Result;
use crossterm::event::{self, Event};
use hard75::ProgressClient;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;

use super::action_queue::{channel, Action};
use super::actions::run_action;
use super::keys::handle_key;

pub async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    client: &ProgressClient,
) -> Result<()> {
    let (action_tx, mut action_rx) = channel();

    // Initial three-way load for the mounted date.
    let generation = app.begin_fetch();
    let _ = action_tx.send(Action::LoadAll { generation });

    loop {
        terminal.draw(|f| ui::render(f, app))?;

        if app.is_loading || app.gallery_loading {
            app.throbber_state.calc_next();
        }

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                handle_key(key, app, &action_tx);
            }
        }

        while let Ok(action) = action_rx.try_recv() {
            run_action(action, app, client).await?;
        }

        if !app.running {
            break;
        }
    }

    Ok(())
}

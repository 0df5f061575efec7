mod app;
mod cli;
mod config;
mod runtime;
mod ui;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use hard75::ProgressClient;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

use app::App;
use cli::{Cli, Commands};
use config::HardConfig;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => run().await,
        Commands::ConfigPath => config_path(),
    }
}

async fn run() -> Result<()> {
    init_file_logging()?;

    let config = HardConfig::load()?;
    let client = ProgressClient::new(&config.api_url, config.user_id.clone())
        .with_context(|| format!("Invalid API URL: {}", config.api_url))?;

    let mut app = App::new(hard75::date::today_key());

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = runtime::run_app(&mut terminal, &mut app, &client).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn config_path() -> Result<()> {
    let path = HardConfig::config_path()?;
    if !path.exists() {
        HardConfig::default().save()?;
        println!("Created default config at {}", path.display());
    } else {
        println!("{}", path.display());
    }
    Ok(())
}

/// Write logs to the file named by `HARD75_LOG`, if set. The alternate
/// screen owns stdout/stderr while the UI runs, so there is no console
/// logging.
fn init_file_logging() -> Result<()> {
    let Ok(path) = std::env::var("HARD75_LOG") else {
        return Ok(());
    };
    let file = std::fs::File::create(&path)
        .with_context(|| format!("Failed to create log file {path}"))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hard75=debug,hard75_tui=debug".into()),
        )
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

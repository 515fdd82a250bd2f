use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use connect_four::config::AppConfig;
use connect_four::console::run_console;
use connect_four::game::GameEngine;
use connect_four::ui::App;

/// Two-player Connect Four in the terminal.
#[derive(Parser)]
#[command(name = "connect_four", about = "Play Connect Four in the terminal")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "connect4.toml")]
    config: PathBuf,

    /// Override board width
    #[arg(long)]
    columns: Option<usize>,

    /// Override board height
    #[arg(long)]
    rows: Option<usize>,

    /// Override number of aligned discs needed to win
    #[arg(long)]
    align: Option<usize>,

    /// Use the interactive terminal UI instead of the text prompt
    #[arg(long)]
    tui: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let mut app_config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(columns) = cli.columns {
        app_config.game.columns = columns;
    }
    if let Some(rows) = cli.rows {
        app_config.game.rows = rows;
    }
    if let Some(align) = cli.align {
        app_config.game.min_align = align;
    }

    let engine = GameEngine::with_config(app_config.game).context("invalid game settings")?;
    log::info!("starting game with {:?}", engine.config());

    if cli.tui {
        run_tui(engine).context("terminal UI failed")
    } else {
        let mut engine = engine;
        let stdin = io::stdin();
        run_console(&mut engine, stdin.lock(), io::stdout()).context("console I/O failed")
    }
}

fn run_tui(engine: GameEngine) -> io::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(engine);
    let res = app.run(&mut terminal);

    // Restore terminal, even on error
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    res
}

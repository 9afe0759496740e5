//! battle_tui - Interactive TUI for replaying and simulating battles

mod app;
mod error;
mod simulation;
mod ui;

use app::App;
use battle_core::{config, loader, BattleConstants, BattleEngine, StatBlock, Status};
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use error::AppError;
use ratatui::{backend::CrosstermBackend, Terminal};
use simulation::WinRateSimulation;
use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::str::FromStr;
use tracing_subscriber::EnvFilter;

/// Status override from the command line; `none` forces no status
#[derive(Debug, Clone, Copy)]
struct StatusArg(Option<Status>);

impl FromStr for StatusArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("none") {
            Ok(StatusArg(None))
        } else {
            s.parse::<Status>().map(|status| StatusArg(Some(status)))
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "battle_tui", about = "Replay and simulate two-combatant battles")]
struct Cli {
    /// Side A combatant JSON (acts first on speed ties)
    combatant_a: PathBuf,
    /// Side B combatant JSON
    combatant_b: PathBuf,
    /// Seed for status draws and paralysis rolls
    #[arg(long, default_value_t = 42)]
    seed: u64,
    /// Battle rules TOML file
    #[arg(long)]
    rules: Option<PathBuf>,
    /// Force side A's status (paralysis, burn, poison, none)
    #[arg(long)]
    status_a: Option<StatusArg>,
    /// Force side B's status (paralysis, burn, poison, none)
    #[arg(long)]
    status_b: Option<StatusArg>,
    /// Print the battle result as JSON instead of opening the TUI
    #[arg(long, conflicts_with = "simulate")]
    print: bool,
    /// Run N battles and print win rates
    #[arg(long, value_name = "N")]
    simulate: Option<u32>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn load(path: &Path) -> Result<StatBlock, AppError> {
    loader::load_stat_block(path).map_err(|source| AppError::Load {
        path: path.to_path_buf(),
        source,
    })
}

fn run(cli: Cli) -> Result<(), AppError> {
    let a = load(&cli.combatant_a)?;
    let b = load(&cli.combatant_b)?;

    let constants = match &cli.rules {
        Some(path) => config::load_battle_constants(path)?,
        None => BattleConstants::default(),
    };
    let engine = BattleEngine::new(constants)?;
    let forced = [cli.status_a.map(|s| s.0), cli.status_b.map(|s| s.0)];

    tracing::info!(a = %a.name, b = %b.name, seed = cli.seed, "combatants loaded");

    if let Some(battles) = cli.simulate {
        let sim = WinRateSimulation::run(&engine, &a, &b, forced, battles, cli.seed)?;
        for line in sim.report(&a.name, &b.name) {
            println!("{}", line);
        }
        return Ok(());
    }

    let mut app = App::new([a, b], engine, forced, cli.seed)?;

    if cli.print {
        println!("{}", serde_json::to_string_pretty(&app.result)?);
        return Ok(());
    }

    run_tui(&mut app)
}

fn run_tui(app: &mut App) -> Result<(), AppError> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let outcome = event_loop(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    outcome
}

fn event_loop<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<(), AppError> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                match (key.code, key.modifiers) {
                    (KeyCode::Char('q'), _) | (KeyCode::Char('c'), KeyModifiers::CONTROL) => break,
                    (KeyCode::Tab, _) => app.next_tab(),
                    (KeyCode::BackTab, _) => app.prev_tab(),
                    (KeyCode::Char('1'), _) => app.set_tab(0),
                    (KeyCode::Char('2'), _) => app.set_tab(1),
                    (KeyCode::Char('3'), _) => app.set_tab(2),
                    (KeyCode::Up, _) | (KeyCode::Char('k'), _) => app.on_up(),
                    (KeyCode::Down, _) | (KeyCode::Char('j'), _) => app.on_down(),
                    (KeyCode::Right, _) | (KeyCode::Char(' '), _) | (KeyCode::Char('l'), _) => {
                        app.step_forward()
                    }
                    (KeyCode::Left, _) | (KeyCode::Char('h'), _) => app.step_back(),
                    (KeyCode::Char('e'), _) => app.reveal_all(),
                    (KeyCode::Char('r'), _) => app.rerun()?,
                    _ => {}
                }
            }
        }
    }

    Ok(())
}

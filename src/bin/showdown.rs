use clap::Parser;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use poker_showdown::game::Game;
use poker_showdown::tui::{app::AppState, controller, plain};
use ratatui::prelude::*;
use std::io::{self, IsTerminal, Stdout};

/// Five-card showdown: deal, classify, reveal the winners.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Player name; repeat for each seat
    #[arg(short, long = "player", default_values = ["Joe", "Jen", "Bob"])]
    players: Vec<String>,

    /// Seed for reproducible rounds (round n uses seed + n)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Line-based console instead of the TUI
    #[arg(long)]
    plain: bool,
}

fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    crossterm::execute!(stdout, crossterm::terminal::EnterAlternateScreen)?;
    Terminal::new(CrosstermBackend::new(stdout))
}

fn restore_terminal(mut terminal: Terminal<CrosstermBackend<Stdout>>) -> io::Result<()> {
    disable_raw_mode()?;
    crossterm::execute!(terminal.backend_mut(), crossterm::terminal::LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

fn main() -> io::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let game = Game::new(args.players).map_err(io::Error::other)?;
    let mut app = AppState::new(game, args.seed).map_err(io::Error::other)?;
    log::info!("dealt first round for {} players", app.game.num_players());

    if args.plain || !io::stdout().is_terminal() {
        return plain::run(&mut app, io::stdin().lock(), io::stdout().lock());
    }

    let mut terminal = setup_terminal()?;
    let res = controller::run(&mut terminal, &mut app);

    // Always attempt to restore terminal
    restore_terminal(terminal)?;
    res
}

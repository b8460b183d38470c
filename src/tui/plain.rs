//! Line-based console front end for terminals without raw mode (or pipes).

use crate::tui::app::{AppState, InputAction, Scene};
use std::io::{self, BufRead, Write};

/// Run rounds until the user declines another one or input ends.
pub fn run<R: BufRead, W: Write>(app: &mut AppState, mut input: R, mut out: W) -> io::Result<()> {
    let mut line = String::new();
    while !app.should_quit() {
        print_table(app, &mut out)?;
        writeln!(out, "Press Enter to determine the winners.")?;
        out.flush()?;
        if read_line(&mut input, &mut line)?.is_none() {
            break;
        }

        let _ = app.handle_input(InputAction::Reveal);
        if let Some(err) = app.error() {
            writeln!(out, "Error: {err}")?;
            break;
        }
        print_winners(app, &mut out)?;

        writeln!(out, "Play again? (Y/n)")?;
        out.flush()?;
        let again = match read_line(&mut input, &mut line)? {
            Some(answer) => answer.is_empty() || answer.eq_ignore_ascii_case("y"),
            None => false,
        };
        let action = if again { InputAction::PlayAgain } else { InputAction::Quit };
        let _ = app.handle_input(action);
        if let Some(err) = app.error() {
            writeln!(out, "Error: {err}")?;
            break;
        }
        writeln!(out)?;
    }
    Ok(())
}

fn read_line<'a, R: BufRead>(input: &mut R, buf: &'a mut String) -> io::Result<Option<&'a str>> {
    buf.clear();
    if input.read_line(buf)? == 0 {
        return Ok(None);
    }
    Ok(Some(buf.trim()))
}

fn print_table<W: Write>(app: &AppState, out: &mut W) -> io::Result<()> {
    for p in app.game.players() {
        let (Some(hand), Some(category)) = (p.hand(), p.category()) else {
            continue;
        };
        writeln!(out, "{}'s cards: {category}", p.name())?;
        for card in hand.cards() {
            writeln!(out, "{}", card.long_name())?;
        }
        writeln!(out)?;
    }
    Ok(())
}

fn print_winners<W: Write>(app: &AppState, out: &mut W) -> io::Result<()> {
    if app.scene != Scene::Revealed {
        return Ok(());
    }
    writeln!(out, "{}", if app.is_draw() { "Winners (draw):" } else { "Winners:" })?;
    for w in app.winners() {
        writeln!(out, "{} {}", w.player(), w.category())?;
    }
    Ok(())
}

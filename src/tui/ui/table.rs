use crate::cards::{Card, Suit};
use crate::tui::app::{AppState, Scene};
use ratatui::prelude::*;
use ratatui::widgets::*;

use super::layout::{centered_rect, inner};

pub(super) fn draw_table(f: &mut Frame, app: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // header
            Constraint::Min(5),    // players
            Constraint::Length(4), // status bar
        ])
        .split(f.area());

    let header = Paragraph::new(Line::from(format!(
        "Round {}   Players: {}",
        app.game.rounds(),
        app.game.num_players()
    )))
    .block(Block::default().title("poker-showdown").borders(Borders::ALL));
    f.render_widget(header, chunks[0]);

    let revealed = app.scene == Scene::Revealed;
    let rows: Vec<Row> = app
        .game
        .players()
        .iter()
        .map(|p| {
            let cards = p.hand().map(|h| card_spans(h.cards())).unwrap_or_default();
            let category = p.category().map(|c| c.label()).unwrap_or("-");
            let won = revealed && app.is_winner(p.name());
            let outcome = match (revealed, won) {
                (false, _) => "",
                (true, true) if app.is_draw() => "Draw",
                (true, true) => "Winner",
                (true, false) => "",
            };
            let style = if won {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            Row::new(vec![
                Cell::from(p.name().to_string()),
                Cell::from(Line::from(cards)),
                Cell::from(category),
                Cell::from(outcome),
            ])
            .style(style)
        })
        .collect();

    let widths = [
        Constraint::Length(14),
        Constraint::Length(18),
        Constraint::Length(18),
        Constraint::Min(6),
    ];
    let table = Table::new(rows, widths)
        .header(
            Row::new(vec!["Player", "Cards", "Hand", ""])
                .style(Style::default().add_modifier(Modifier::BOLD)),
        )
        .block(Block::default().title("Table").borders(Borders::ALL));
    f.render_widget(table, chunks[1]);

    let status_area = chunks[2];
    f.render_widget(Block::default().borders(Borders::ALL).title("Status"), status_area);
    let mut lines = match app.scene {
        Scene::Dealt => vec![Line::from("Space/Enter: reveal winners   ? help   q quit")],
        _ => vec![Line::from("Play again? y / n   ? help")],
    };
    if let Some(err) = app.error() {
        lines.push(Line::from(Span::styled(
            format!("Error: {err}"),
            Style::default().fg(Color::Red),
        )));
    }
    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner(status_area));

    if app.help_open() {
        draw_help(f);
    }
}

fn card_spans(cards: &[Card]) -> Vec<Span<'static>> {
    let mut spans = Vec::with_capacity(cards.len() * 2);
    for card in cards {
        let color = match card.suit() {
            Suit::Hearts | Suit::Diamonds => Color::Red,
            Suit::Clubs | Suit::Spades => Color::White,
        };
        spans.push(Span::styled(card.to_string(), Style::default().fg(color)));
        spans.push(Span::raw(" "));
    }
    spans
}

fn draw_help(f: &mut Frame) {
    let area = centered_rect(60, 50, f.area());
    let lines = vec![
        Line::from("Flush > Three of a Kind > One Pair > High Card"),
        Line::from(""),
        Line::from("Ties: flushes and high cards compare card by card;"),
        Line::from("triples compare the triple only; pairs compare the"),
        Line::from("pair, then the three remaining cards."),
        Line::from(""),
        Line::from(Span::styled(
            "Close: ? or Esc",
            Style::default().add_modifier(Modifier::DIM),
        )),
    ];
    f.render_widget(Clear, area);
    f.render_widget(Block::default().title("Help").borders(Borders::ALL), area);
    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner(area));
}

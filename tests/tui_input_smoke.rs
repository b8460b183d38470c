use crossterm::event::KeyCode;
use poker_showdown::game::Game;
use poker_showdown::tui::app::{AppState, InputAction, Scene};
use poker_showdown::tui::controller::action_for;

fn app() -> AppState {
    AppState::new(Game::new(["Joe", "Jen", "Bob"]).unwrap(), Some(42)).unwrap()
}

#[test]
fn starts_dealt_with_winners_hidden() {
    let app = app();
    assert_eq!(app.scene, Scene::Dealt);
    assert_eq!(app.game.rounds(), 1);
    assert!(app.winners().is_empty());
}

#[test]
fn reveal_then_play_again() {
    let mut app = app();
    assert!(!app.handle_input(InputAction::PlayAgain), "cannot redeal before reveal");
    assert!(app.handle_input(InputAction::Reveal));
    assert_eq!(app.scene, Scene::Revealed);
    assert!(!app.winners().is_empty());
    let first = app.winners()[0].player().to_string();
    assert!(app.is_winner(&first));
    assert!(!app.handle_input(InputAction::Reveal), "already revealed");

    assert!(app.handle_input(InputAction::PlayAgain));
    assert_eq!(app.scene, Scene::Dealt);
    assert_eq!(app.game.rounds(), 2);
    assert!(app.winners().is_empty());
}

#[test]
fn seeded_apps_deal_the_same_rounds() {
    let mut a = app();
    let mut b = app();
    for _ in 0..3 {
        a.handle_input(InputAction::Reveal);
        b.handle_input(InputAction::Reveal);
        assert_eq!(a.winners(), b.winners());
        a.handle_input(InputAction::PlayAgain);
        b.handle_input(InputAction::PlayAgain);
    }
}

#[test]
fn key_mapping() {
    let mut app = app();
    assert_eq!(action_for(&app, KeyCode::Char(' ')), Some(InputAction::Reveal));
    assert_eq!(action_for(&app, KeyCode::Enter), Some(InputAction::Reveal));
    assert_eq!(action_for(&app, KeyCode::Char('y')), Some(InputAction::PlayAgain));
    assert_eq!(action_for(&app, KeyCode::Char('n')), Some(InputAction::Quit));
    assert_eq!(action_for(&app, KeyCode::Char('x')), None);

    let _ = app.handle_input(InputAction::ToggleHelp);
    assert!(app.help_open());
    assert_eq!(action_for(&app, KeyCode::Char(' ')), None);
    assert_eq!(action_for(&app, KeyCode::Esc), Some(InputAction::ToggleHelp));
}

#[test]
fn quit_finishes() {
    let mut app = app();
    assert!(app.handle_input(InputAction::Quit));
    assert!(app.should_quit());
}

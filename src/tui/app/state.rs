use crate::evaluator::PlayerHandResult;
use crate::game::{Game, GameError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Scene {
    /// Hands are on the table, winners hidden.
    Dealt,
    /// Winners shown; waiting for play-again / quit.
    Revealed,
    Finished,
}

/// High-level input actions shared by the TUI controller and the plain console.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum InputAction {
    Reveal,
    PlayAgain,
    Quit,
    ToggleHelp,
}

#[derive(Debug)]
#[non_exhaustive]
pub struct AppState {
    pub scene: Scene,
    pub game: Game,
    // base seed; round n is dealt with seed + n
    seed: Option<u64>,
    winners: Vec<PlayerHandResult>,
    help_open: bool,
    error: Option<String>,
}

impl AppState {
    /// Wrap a game and deal its first round.
    pub fn new(game: Game, seed: Option<u64>) -> Result<Self, GameError> {
        let mut app = Self {
            scene: Scene::Dealt,
            game,
            seed,
            winners: Vec::new(),
            help_open: false,
            error: None,
        };
        app.deal_round()?;
        Ok(app)
    }

    fn deal_round(&mut self) -> Result<(), GameError> {
        match self.seed {
            Some(seed) => self.game.deal_seeded(seed.wrapping_add(self.game.rounds()))?,
            None => self.game.deal()?,
        }
        self.winners.clear();
        self.scene = Scene::Dealt;
        Ok(())
    }

    pub fn winners(&self) -> &[PlayerHandResult] {
        &self.winners
    }

    pub fn is_winner(&self, player: &str) -> bool {
        self.winners.iter().any(|w| w.player() == player)
    }

    pub fn is_draw(&self) -> bool {
        self.winners.len() > 1
    }

    pub fn help_open(&self) -> bool {
        self.help_open
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn should_quit(&self) -> bool {
        self.scene == Scene::Finished
    }

    /// Apply one action. Returns `true` when the action changed the scene.
    pub fn handle_input(&mut self, action: InputAction) -> bool {
        match action {
            InputAction::ToggleHelp => {
                self.help_open = !self.help_open;
                false
            }
            InputAction::Quit => {
                self.scene = Scene::Finished;
                true
            }
            InputAction::Reveal => {
                if self.scene != Scene::Dealt {
                    return false;
                }
                match self.game.winners() {
                    Ok(winners) => {
                        self.winners = winners;
                        self.error = None;
                        self.scene = Scene::Revealed;
                        true
                    }
                    Err(e) => {
                        self.error = Some(e.to_string());
                        false
                    }
                }
            }
            InputAction::PlayAgain => {
                if self.scene != Scene::Revealed {
                    return false;
                }
                match self.deal_round() {
                    Ok(()) => {
                        self.error = None;
                        true
                    }
                    Err(e) => {
                        self.error = Some(e.to_string());
                        false
                    }
                }
            }
        }
    }
}

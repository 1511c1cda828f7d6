use serde::Serialize;

use crate::board::Board;
use crate::error::GameError;
use crate::group::capture_adjacent_groups;
use crate::types::{Captures, Color, GameCommand, GameConfig, Phase, DEFAULT_GAME_TYPE};

/// Authoritative state of one game session.
///
/// `Default` is the not-started state: moves and passes are ignored until
/// [`GameState::start_new_game`] is called.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct GameState {
    pub size: usize,
    pub game_type: String,
    pub board: Board,
    pub captures: Captures,
    /// `None` before the first game and after the game is done.
    pub current_turn: Option<Color>,
    /// `true` when the previous action was a pass that did not end the game.
    pub pass_last_turn: bool,
    pub game_done: bool,
}

impl GameState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a fresh local game, discarding everything from the previous one.
    pub fn start_new_game(&mut self, size: usize) -> Result<(), GameError> {
        self.start_with_config(&GameConfig::local(size))
    }

    /// Starts a fresh game recording `config.game_type` verbatim.
    /// On error the state is left as it was.
    pub fn start_with_config(&mut self, config: &GameConfig) -> Result<(), GameError> {
        let board = Board::new(config.size)?;

        *self = Self {
            size: config.size,
            game_type: config.game_type.clone(),
            board,
            captures: Captures::default(),
            current_turn: Some(Color::Black),
            pass_last_turn: false,
            game_done: false,
        };
        log::debug!(
            "new {}x{} game ({})",
            self.size,
            self.size,
            self.game_type
        );

        Ok(())
    }

    pub fn phase(&self) -> Phase {
        if self.game_done {
            Phase::Done
        } else if self.current_turn.is_some() {
            Phase::Active
        } else {
            Phase::NotStarted
        }
    }

    pub fn is_active(&self) -> bool {
        self.phase() == Phase::Active
    }

    /// Config reproducing the size and mode of this game.
    pub fn config(&self) -> GameConfig {
        GameConfig {
            size: self.size,
            game_type: if self.game_type.is_empty() {
                DEFAULT_GAME_TYPE.to_string()
            } else {
                self.game_type.clone()
            },
        }
    }

    /// Places a stone for the side to move at column `x`, row `y`.
    ///
    /// Returns the number of opposing stones captured, or `None` when the move
    /// was ignored (no active game, occupied or off-board cell).
    pub fn player_turn(&mut self, x: usize, y: usize) -> Option<usize> {
        let Some(color) = self.current_turn.filter(|_| !self.game_done) else {
            log::trace!("move ({x}, {y}) ignored: no active game");
            return None;
        };
        if !self.board.in_bounds(x, y) {
            log::trace!("move ({x}, {y}) ignored: off the {0}x{0} board", self.size);
            return None;
        }
        if self.board.is_occupied(x, y) {
            log::trace!("move ({x}, {y}) ignored: occupied");
            return None;
        }

        self.board.set(x, y, color.into());
        let captured = capture_adjacent_groups(&mut self.board, x, y, color);
        self.captures.add(color, captured);
        self.pass_last_turn = false;
        self.current_turn = Some(color.opponent());

        Some(captured)
    }

    /// Passes for the side to move. A second consecutive pass ends the game.
    ///
    /// Returns `false` when there is no active game.
    pub fn pass_turn(&mut self) -> bool {
        let Some(color) = self.current_turn.filter(|_| !self.game_done) else {
            log::trace!("pass ignored: no active game");
            return false;
        };

        if self.pass_last_turn {
            self.game_done = true;
            self.current_turn = None;
            log::debug!(
                "game over after consecutive passes, captures black={} white={}",
                self.captures.black,
                self.captures.white
            );
        } else {
            self.pass_last_turn = true;
            self.current_turn = Some(color.opponent());
        }

        true
    }

    /// Runs one command. Returns whether the state changed.
    pub fn apply(&mut self, command: &GameCommand) -> Result<bool, GameError> {
        match command {
            GameCommand::NewGame(config) => self.start_with_config(config).map(|()| true),
            GameCommand::PlayerTurn { x, y } => Ok(self.player_turn(*x, *y).is_some()),
            GameCommand::PassTurn => Ok(self.pass_turn()),
        }
    }
}

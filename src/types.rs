use serde::{Deserialize, Serialize};

/// Mode label recorded when no other is supplied.
pub const DEFAULT_GAME_TYPE: &str = "local";

/// Stone color. Also used for `current_turn` and as the key of `Captures`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Black,
    White,
}

impl Color {
    pub fn opponent(self) -> Self {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }
}

/// Contents of one board intersection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Cell {
    #[default]
    Empty,
    Black,
    White,
}

impl Cell {
    pub fn color(self) -> Option<Color> {
        match self {
            Cell::Empty => None,
            Cell::Black => Some(Color::Black),
            Cell::White => Some(Color::White),
        }
    }
}

impl From<Color> for Cell {
    fn from(color: Color) -> Self {
        match color {
            Color::Black => Cell::Black,
            Color::White => Cell::White,
        }
    }
}

/// Opposing stones captured by each color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Captures {
    pub black: usize,
    pub white: usize,
}

impl Captures {
    pub fn get(&self, color: Color) -> usize {
        match color {
            Color::Black => self.black,
            Color::White => self.white,
        }
    }

    pub fn add(&mut self, color: Color, stones: usize) {
        match color {
            Color::Black => self.black += stones,
            Color::White => self.white += stones,
        }
    }
}

/// Settings supplied by the mode-selection layer when a game starts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub size: usize,
    #[serde(default = "default_game_type")]
    pub game_type: String,
}

impl GameConfig {
    pub fn local(size: usize) -> Self {
        Self {
            size,
            game_type: default_game_type(),
        }
    }
}

fn default_game_type() -> String {
    DEFAULT_GAME_TYPE.to_string()
}

/// Lifecycle of a `GameState`, derived from its fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    NotStarted,
    Active,
    Done,
}

/// One engine operation, for callers that want a single dispatch entry point.
///
/// Serialized form: `{"type": "player_turn", "x": 3, "y": 4}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GameCommand {
    NewGame(GameConfig),
    PlayerTurn { x: usize, y: usize },
    PassTurn,
}

use serde::Serialize;
use wasm_bindgen::prelude::*;

pub mod board;
pub mod error;
pub mod game;
pub mod group;
pub mod types;

pub use board::Board;
pub use error::GameError;
pub use game::GameState;
pub use types::{Captures, Cell, Color, GameCommand, GameConfig, Phase};

/// Engine handle exported to the JavaScript presentation layer.
#[wasm_bindgen]
#[derive(Debug, Default)]
pub struct GoGame {
    state: GameState,
}

#[wasm_bindgen]
impl GoGame {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a local game on a `size`x`size` board.
    #[wasm_bindgen(js_name = newGame)]
    pub fn new_game(&mut self, size: u32) -> Result<(), JsValue> {
        self.state.start_new_game(size as usize).map_err(to_js_error)
    }

    /// Starts a game from `{ size, game_type? }`.
    pub fn start(&mut self, config: JsValue) -> Result<(), JsValue> {
        let config: GameConfig = decode(config)?;
        self.state.start_with_config(&config).map_err(to_js_error)
    }

    /// Starts over with the current size and mode.
    pub fn restart(&mut self) -> Result<(), JsValue> {
        let config = self.state.config();
        self.state.start_with_config(&config).map_err(to_js_error)
    }

    /// Returns the number of stones captured, or `undefined` if the move was ignored.
    pub fn play(&mut self, x: u32, y: u32) -> Option<u32> {
        self.state
            .player_turn(x as usize, y as usize)
            .map(|captured| captured as u32)
    }

    pub fn pass(&mut self) -> bool {
        self.state.pass_turn()
    }

    /// Applies a tagged command such as `{ type: "player_turn", x: 3, y: 4 }`.
    /// Resolves to whether the state changed.
    pub fn dispatch(&mut self, command: JsValue) -> Result<bool, JsValue> {
        let command: GameCommand = decode(command)?;
        self.state.apply(&command).map_err(to_js_error)
    }

    #[wasm_bindgen(js_name = isActive)]
    pub fn is_active(&self) -> bool {
        self.state.is_active()
    }

    /// Full state snapshot as a plain JS object; `current_turn` is `null` when
    /// no game is running.
    pub fn state(&self) -> Result<JsValue, JsValue> {
        self.state
            .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
            .map_err(JsValue::from)
    }
}

impl GoGame {
    pub fn game_state(&self) -> &GameState {
        &self.state
    }
}

fn decode<T: serde::de::DeserializeOwned>(value: JsValue) -> Result<T, JsValue> {
    serde_wasm_bindgen::from_value(value)
        .map_err(|err| to_js_error(GameError::InvalidConfig(err.to_string())))
}

fn to_js_error(err: GameError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

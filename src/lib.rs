use serde::Serialize;
use serde_wasm_bindgen::Serializer;
use wasm_bindgen::prelude::*;

pub mod board;
pub mod error;
pub mod game;
pub mod types;

use crate::game::{GameEvent, GameState};

#[wasm_bindgen]
pub fn wasm_ready() -> bool {
    true
}

/// Browser handle owning one match. Every call returns the fresh `GameView`.
#[wasm_bindgen]
#[derive(Default)]
pub struct TicTacToe {
    state: GameState,
}

#[wasm_bindgen]
impl TicTacToe {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self::default()
    }

    #[wasm_bindgen(js_name = cellClicked)]
    pub fn cell_clicked(&mut self, index: usize) -> Result<JsValue, JsValue> {
        self.handle(GameEvent::CellClicked(index))
    }

    #[wasm_bindgen(js_name = historyEntryClicked)]
    pub fn history_entry_clicked(&mut self, step: usize) -> Result<JsValue, JsValue> {
        self.handle(GameEvent::HistoryEntryClicked(step))
    }

    /// Empty cells come through as `null`, not `undefined`.
    pub fn view(&self) -> Result<JsValue, JsValue> {
        let serializer = Serializer::new().serialize_missing_as_null(true);
        self.state
            .to_view()
            .serialize(&serializer)
            .map_err(JsValue::from)
    }
}

impl TicTacToe {
    fn handle(&mut self, event: GameEvent) -> Result<JsValue, JsValue> {
        self.state
            .dispatch(event)
            .map_err(|err| JsValue::from_str(&err.to_string()))?;
        self.view()
    }
}

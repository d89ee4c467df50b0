//! WASM bindings for a browser front-end
//!
//! The host owns the clock: after a resolving selection it schedules
//! `complete_round(ticket)` with `setTimeout(.., reset_delay_ms())`.

#![cfg(feature = "wasm")]

use std::sync::Arc;
use wasm_bindgen::prelude::*;
use crate::{MatchController, MoveCatalog, Player, ResetTicket, Selection, DEFAULT_MOVES, RESET_DELAY};

#[derive(serde::Serialize)]
struct SelectionResult {
    /// "recorded" | "resolved" | "ignored"
    kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    outcome: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    ticket: Option<u32>,
}

impl From<Selection> for SelectionResult {
    fn from(selection: Selection) -> Self {
        match selection {
            Selection::Recorded => Self { kind: "recorded", outcome: None, ticket: None },
            Selection::Resolved { outcome, ticket } => Self {
                kind: "resolved",
                outcome: Some(outcome.to_string()),
                ticket: Some(ticket.id()),
            },
            Selection::Ignored(_) => Self { kind: "ignored", outcome: None, ticket: None },
        }
    }
}

/// A match bound to one browser page
#[wasm_bindgen]
pub struct WasmMatch {
    controller: MatchController,
}

#[wasm_bindgen]
impl WasmMatch {
    /// Create a match from a JSON array of exactly three move names
    #[wasm_bindgen(constructor)]
    pub fn new(moves_json: &str) -> Result<WasmMatch, JsError> {
        let catalog: MoveCatalog = serde_json::from_str(moves_json)
            .map_err(|e| JsError::new(&format!("Invalid catalog: {}", e)))?;
        Ok(Self { controller: MatchController::new(Arc::new(catalog)) })
    }

    /// `player` is 1 or 2; returns `{kind, outcome?, ticket?}`
    #[wasm_bindgen(js_name = selectMove)]
    pub fn select_move(&mut self, player: u8, move_index: u32) -> Result<JsValue, JsError> {
        let player = Player::try_from(player).map_err(|e| JsError::new(&e.to_string()))?;
        let selection = self
            .controller
            .select_move(player, move_index as usize)
            .map_err(|e| JsError::new(&e.to_string()))?;

        serde_wasm_bindgen::to_value(&SelectionResult::from(selection))
            .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
    }

    /// Apply the scheduled reset; stale tickets return `false`
    #[wasm_bindgen(js_name = completeRound)]
    pub fn complete_round(&mut self, ticket: u32) -> bool {
        self.controller.complete_round(ResetTicket::from_id(ticket))
    }

    #[wasm_bindgen(js_name = restartMatch)]
    pub fn restart_match(&mut self) {
        self.controller.restart_match();
    }

    /// Current MatchView as a JS object
    pub fn view(&self) -> Result<JsValue, JsError> {
        serde_wasm_bindgen::to_value(&self.controller.view())
            .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
    }
}

/// The built-in move names, in beats order
#[wasm_bindgen(js_name = defaultMoves)]
pub fn default_moves() -> js_sys::Array {
    DEFAULT_MOVES.iter().map(|name| JsValue::from_str(name)).collect()
}

#[wasm_bindgen(js_name = resetDelayMs)]
pub fn reset_delay_ms() -> u32 {
    RESET_DELAY.as_millis() as u32
}

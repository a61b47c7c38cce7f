//! WASM exports for the card gesture engine
//!
//! This module provides wasm-bindgen exports for the Board, allowing the
//! React host to forward pointer events and drive animation frames.
//! The host owns the real DOM listeners and `requestAnimationFrame` loop;
//! it asks `is_capturing()` to decide whether window listeners stay attached
//! and applies `cursor()` to `document.body.style.cursor`.

use wasm_bindgen::prelude::*;

use crate::board::Board;
use crate::card::{CardCallbacks, CardConfig, CardId, CardKind};
use crate::config::BoardConfig;
use crate::input::{InputResult, PointerButton};
use crate::math::{Dimensions, Position};
use crate::persistence::BoardSnapshot;

/// Board controller for WASM - wraps Board with a JS-friendly API
#[wasm_bindgen]
pub struct BoardController {
    board: Board,
}

#[wasm_bindgen]
impl BoardController {
    /// Create a board from a JSON config (`"{}"` for defaults)
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: &str) -> Result<BoardController, JsError> {
        #[cfg(feature = "console_error_panic_hook")]
        console_error_panic_hook::set_once();

        let config = BoardConfig::from_json(config_json)?;
        Ok(Self {
            board: Board::new(config),
        })
    }

    // =========================================================================
    // Cards
    // =========================================================================

    /// Mount a card
    ///
    /// `on_position` is called as `(id, x, y)` on every drag move and
    /// `on_dimensions` as `(id, width, height)` once per committed frame.
    #[wasm_bindgen]
    #[allow(clippy::too_many_arguments)]
    pub fn create_card(
        &mut self,
        kind: &str,
        title: &str,
        x: f64,
        y: f64,
        w: f64,
        h: f64,
        on_position: js_sys::Function,
        on_dimensions: js_sys::Function,
    ) -> Result<u64, JsError> {
        let kind: CardKind = kind.parse()?;
        let config = CardConfig {
            title: title.to_string(),
            kind,
            position: Some(Position::new(x, y)),
            size: Some(Dimensions::new(w, h)),
            min_size: None,
        };
        Ok(self
            .board
            .create_card_with(config, |id| js_callbacks(id, on_position, on_dimensions)))
    }

    /// Unmount a card
    #[wasm_bindgen]
    pub fn remove_card(&mut self, id: u64) -> bool {
        self.board.remove_card(id)
    }

    /// Bring a card to the front
    #[wasm_bindgen]
    pub fn focus_card(&mut self, id: u64) {
        self.board.focus_card(id);
    }

    /// Apply a position reloaded from storage
    #[wasm_bindgen]
    pub fn sync_card_position(&mut self, id: u64, x: f64, y: f64) -> Result<(), JsError> {
        Ok(self.board.sync_card_position(id, Position::new(x, y))?)
    }

    /// Apply dimensions reloaded from storage
    #[wasm_bindgen]
    pub fn sync_card_dimensions(&mut self, id: u64, w: f64, h: f64) -> Result<(), JsError> {
        Ok(self.board.sync_card_dimensions(id, Dimensions::new(w, h))?)
    }

    /// Get all cards as JSON
    #[wasm_bindgen]
    pub fn get_cards_json(&self) -> String {
        let cards: Vec<serde_json::Value> = self
            .board
            .cards_by_z()
            .into_iter()
            .map(|card| {
                serde_json::json!({
                    "id": card.id,
                    "kind": card.kind,
                    "title": card.title,
                    "position": card.position(),
                    "dimensions": card.dimensions(),
                    "zOrder": card.z_order,
                    "dragging": card.is_dragging(),
                    "resizing": card.is_resizing()
                })
            })
            .collect();
        serde_json::to_string(&cards).unwrap_or_else(|_| "[]".to_string())
    }

    // =========================================================================
    // Pointer input
    // =========================================================================

    /// Handle pointer down on the board
    #[wasm_bindgen]
    pub fn pointer_down(&mut self, x: f64, y: f64, button: u8) -> String {
        result_json(self.board.handle_pointer_down(Position::new(x, y), PointerButton::from(button)))
    }

    /// Start a resize from a handle element's `data-direction`
    #[wasm_bindgen]
    pub fn begin_resize(&mut self, id: u64, direction: &str, x: f64, y: f64) -> Result<String, JsError> {
        let result = self.board.begin_resize(id, direction, Position::new(x, y))?;
        Ok(result_json(result))
    }

    /// Handle window pointer move
    #[wasm_bindgen]
    pub fn pointer_move(&mut self, x: f64, y: f64) -> String {
        result_json(self.board.handle_pointer_move(Position::new(x, y)))
    }

    /// Handle window pointer up
    #[wasm_bindgen]
    pub fn pointer_up(&mut self) -> String {
        result_json(self.board.handle_pointer_up())
    }

    /// Hover cursor for the card region under the pointer
    #[wasm_bindgen]
    pub fn cursor_at(&self, x: f64, y: f64) -> Option<String> {
        self.board
            .region_at(Position::new(x, y))
            .map(|(_, region)| region.cursor().to_string())
    }

    /// Whether window listeners must stay attached
    #[wasm_bindgen]
    pub fn is_capturing(&self) -> bool {
        self.board.is_capturing()
    }

    /// Body cursor override, if a resize is running
    #[wasm_bindgen]
    pub fn cursor(&self) -> Option<String> {
        self.board.cursor().map(str::to_string)
    }

    /// Run one animation frame; returns the number of committed resizes
    #[wasm_bindgen]
    pub fn tick_frame(&mut self) -> u32 {
        self.board.tick_frame() as u32
    }

    // =========================================================================
    // Persistence
    // =========================================================================

    /// Get the layout snapshot as JSON
    #[wasm_bindgen]
    pub fn get_snapshot_json(&self) -> Result<String, JsError> {
        Ok(self.board.snapshot().to_json()?)
    }

    /// Replace the layout from a JSON snapshot
    ///
    /// Restored cards share the given callbacks, called with the same
    /// `(id, ...)` arguments as the callbacks of `create_card`. A snapshot
    /// with duplicate card ids throws and leaves the board unchanged.
    #[wasm_bindgen]
    pub fn load_snapshot_json(
        &mut self,
        json: &str,
        on_position: js_sys::Function,
        on_dimensions: js_sys::Function,
    ) -> Result<(), JsError> {
        let snapshot = BoardSnapshot::from_json(json)?;
        self.board
            .restore(snapshot, |id| js_callbacks(id, on_position.clone(), on_dimensions.clone()))?;
        Ok(())
    }
}

/// Wrap JS functions as card callbacks
///
/// Exceptions thrown by the host callbacks are swallowed so they never
/// unwind through a gesture handler.
fn js_callbacks(id: CardId, on_position: js_sys::Function, on_dimensions: js_sys::Function) -> CardCallbacks {
    let card = JsValue::from_f64(id as f64);
    let card_for_dimensions = card.clone();
    CardCallbacks::default()
        .on_position_change(move |p| {
            let _ = on_position.call3(&JsValue::NULL, &card, &JsValue::from_f64(p.x), &JsValue::from_f64(p.y));
        })
        .on_dimensions_change(move |d| {
            let _ = on_dimensions.call3(
                &JsValue::NULL,
                &card_for_dimensions,
                &JsValue::from_f64(d.width),
                &JsValue::from_f64(d.height),
            );
        })
}

fn result_json(result: InputResult) -> String {
    serde_json::to_string(&result).unwrap_or_else(|_| r#"{"type":"unhandled"}"#.to_string())
}

//! WebAssembly bindings for the Uranium Fever rule engine.
//!
//! This module exposes a [`Match`] to JavaScript through wasm-bindgen. Everything
//! structured crosses the boundary as JSON.

use wasm_bindgen::prelude::*;

use crate::actions::GameAction;
use crate::config::MatchConfig;
use crate::game::Match;
use crate::grid::GridCoord;

/// Initialize panic hook for better error messages in browser console
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// WASM-exposed match wrapper
#[wasm_bindgen]
pub struct WasmMatch {
    inner: Match,
}

#[wasm_bindgen]
impl WasmMatch {
    /// Create a match from a JSON config; `"{}"` gives the default setup
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: &str) -> Result<WasmMatch, JsValue> {
        let config = MatchConfig::from_json(config_json)
            .map_err(|e| JsValue::from_str(&format!("Invalid config: {}", e)))?;
        let inner = Match::new(config).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(WasmMatch { inner })
    }

    /// Get the current match state as JSON
    #[wasm_bindgen(js_name = getState)]
    pub fn get_state(&self) -> String {
        self.inner.to_json().unwrap_or_else(|_| "{}".to_string())
    }

    /// Get the current player ID
    #[wasm_bindgen(js_name = getCurrentPlayer)]
    pub fn get_current_player(&self) -> u8 {
        self.inner.current_player()
    }

    /// Apply an action from JSON, returns events JSON or error
    #[wasm_bindgen(js_name = applyAction)]
    pub fn apply_action(&mut self, player: u8, action_json: &str) -> Result<String, JsValue> {
        let action: GameAction = serde_json::from_str(action_json)
            .map_err(|e| JsValue::from_str(&format!("Invalid action JSON: {}", e)))?;

        match self.inner.apply_action(player, action) {
            Ok(events) => {
                Ok(serde_json::to_string(&events).unwrap_or_else(|_| "[]".to_string()))
            }
            Err(e) => Err(JsValue::from_str(&format!("Action failed: {}", e))),
        }
    }

    /// Placement preview for a bridge between (ax, ay) and (bx, by)
    #[wasm_bindgen(js_name = canPlaceBridge)]
    pub fn can_place_bridge(&self, player: u8, ax: i32, ay: i32, bx: i32, by: i32) -> bool {
        self.inner
            .can_place_bridge(player, GridCoord::new(ax, ay), GridCoord::new(bx, by))
    }

    /// Placement preview for a building on (x, y)
    #[wasm_bindgen(js_name = canPlaceBuilding)]
    pub fn can_place_building(&self, x: i32, y: i32) -> bool {
        self.inner.can_place_building(GridCoord::new(x, y))
    }

    /// Get a player's network bonus summary
    #[wasm_bindgen(js_name = getBonusDescription)]
    pub fn get_bonus_description(&self, player: u8) -> Option<String> {
        self.inner.bonus_description(player)
    }
}

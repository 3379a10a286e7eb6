use pairs::{Game, GameOptions, Slot, Snapshot, TurnResult};
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct WasmGame {
    game: Game,
}

#[wasm_bindgen]
impl WasmGame {
    #[wasm_bindgen(constructor)]
    pub fn new(pairs: u32, seed: u32) -> Result<WasmGame, JsValue> {
        Ok(Self {
            game: new_game(pairs, seed)?,
        })
    }

    pub fn reset(&mut self, pairs: u32, seed: u32) -> Result<(), JsValue> {
        self.game = new_game(pairs, seed)?;
        Ok(())
    }

    /// Turns a card for whoever holds the turn.
    pub fn pick(&self, index: u32) -> Result<JsValue, JsValue> {
        let player = self.game.current_player();
        let result = self
            .game
            .turn_card(index as usize, player)
            .map_err(js_err)?;
        to_js_value(&JsTurnResult::from(result))
    }

    pub fn status(&self) -> Result<JsValue, JsValue> {
        to_js_value(&JsStatus::from(self.game.snapshot()))
    }

    pub fn card_count(&self) -> u32 {
        self.game.card_count() as u32
    }
}

fn new_game(pairs: u32, seed: u32) -> Result<Game, JsValue> {
    let options = GameOptions::default().with_pairs(pairs as usize);
    Game::new(options, seed as u64).map_err(js_err)
}

#[derive(Serialize)]
struct JsStatus {
    solved_cards: Vec<String>,
    turned: Option<u32>,
    turned_card: Option<String>,
    current_player: u8,
    game_over: bool,
    scores: [u32; 2],
}

impl From<Snapshot> for JsStatus {
    fn from(snapshot: Snapshot) -> Self {
        let (turned_card, turned) = match snapshot.turned {
            Some((face, index)) => (Some(face.to_string()), Some(index as u32)),
            None => (None, None),
        };

        Self {
            solved_cards: snapshot.solved_cards.iter().map(slot_to_js).collect(),
            turned,
            turned_card,
            current_player: snapshot.current_player,
            game_over: snapshot.game_over,
            scores: snapshot.scores.map(|score| score as u32),
        }
    }
}

#[derive(Serialize)]
struct JsTurnResult {
    player: u8,
    next_turn_player: u8,
    turn_complete: bool,
    match_found: bool,
    new_score: u32,
    card: String,
    game_over: bool,
    winner: Option<u8>,
}

impl From<TurnResult> for JsTurnResult {
    fn from(result: TurnResult) -> Self {
        Self {
            player: result.player,
            next_turn_player: result.next_turn_player,
            turn_complete: result.turn_complete,
            match_found: result.match_found,
            new_score: result.new_score as u32,
            card: result.card.to_string(),
            game_over: result.game_over,
            winner: result.winner,
        }
    }
}

// Unsolved positions render as empty strings so the board keeps its shape.
fn slot_to_js(slot: &Slot) -> String {
    slot.as_ref().map(ToString::to_string).unwrap_or_default()
}

fn js_err<E: core::fmt::Display>(err: E) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|err| JsValue::from_str(&err.to_string()))
}

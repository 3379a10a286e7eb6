//! Turn outcome types.

use crate::card::Face;

/// Outcome of a successful [`Game::turn_card`](crate::Game::turn_card).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnResult {
    /// The player who turned the card.
    pub player: u8,
    /// The player who moves next.
    pub next_turn_player: u8,
    /// Whether this pick was the second of the round.
    pub turn_complete: bool,
    /// Whether the two cards of this round matched.
    pub match_found: bool,
    /// The acting player's score after the pick.
    pub new_score: usize,
    /// The face of the card just turned.
    pub card: Face,
    /// Whether the last pair was found.
    pub game_over: bool,
    /// The winner, set only once the game is over.
    pub winner: Option<u8>,
}

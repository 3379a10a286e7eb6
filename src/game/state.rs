//! Game state types.

use alloc::vec::Vec;

use crate::card::{Face, Slot};

/// Number of seats at the table.
pub const PLAYERS: usize = 2;

/// Where a game stands between picks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// No card is face-up; the next pick flips one.
    AwaitingFirstPick,
    /// One card is face-up; the next pick completes the round.
    AwaitingSecondPick,
    /// Every pair has been found.
    GameOver,
}

/// A consistent view of the board for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    /// Matched faces by position; `None` where unsolved.
    pub solved_cards: Vec<Slot>,
    /// The face-up card of this round and its index.
    pub turned: Option<(Face, usize)>,
    /// The player whose turn it is.
    pub current_player: u8,
    /// Whether every pair has been found.
    pub game_over: bool,
    /// Both players' scores, indexed by player.
    pub scores: [usize; PLAYERS],
}

/// Returns the player seated after `player`.
pub(crate) const fn next_player(player: u8) -> u8 {
    (player + 1) % PLAYERS as u8
}

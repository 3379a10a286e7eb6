//! Game engine and state management.

use alloc::vec::Vec;
#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashMap;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
#[cfg(feature = "std")]
use std::collections::HashMap;

use crate::sync::Mutex;

use crate::card::{Face, Slot};
use crate::deck::create_deck;
use crate::error::{ConfigError, TurnError};
use crate::options::{GameOptions, MAX_PAIRS};

pub mod state;
mod turn;

pub use state::{GameState, PLAYERS, Snapshot};

/// Everything that changes during a game, guarded as one unit.
#[derive(Debug)]
struct Board {
    /// Cards on the table; `None` once matched.
    cards: Vec<Slot>,
    /// Faces of matched cards, by position.
    solved: Vec<Slot>,
    /// Index of the face-up card this round.
    turned: Option<usize>,
    current_player: u8,
    scores: [usize; PLAYERS],
    pairs_left: usize,
    winner: Option<u8>,
}

/// A two-player pairs game that enforces turn order, matching, and scoring.
///
/// All state lives behind a single lock, so every method takes `&self` and a
/// game can be shared between sessions through an `Arc`. Each call observes
/// and leaves the board in a consistent state.
pub struct Game {
    board: Mutex<Board>,
}

impl Game {
    /// Deals a new game with a shuffled deck derived from `seed`.
    ///
    /// # Errors
    ///
    /// Returns an error if the pair count in `options` is out of range.
    ///
    /// # Example
    ///
    /// ```
    /// use pairs::{Game, GameOptions};
    ///
    /// let game = Game::new(GameOptions::default().with_pairs(3), 42).unwrap();
    /// assert_eq!(game.card_count(), 6);
    /// assert_eq!(game.current_player(), 0);
    /// ```
    pub fn new(options: GameOptions, seed: u64) -> Result<Self, ConfigError> {
        options.validate()?;

        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let cards = create_deck(options.pairs, &mut rng);
        log::debug!("dealt {} pairs from seed {seed}", options.pairs);

        Ok(Self::with_cards(cards))
    }

    /// Starts a game on a fixed layout instead of a shuffled deck.
    ///
    /// # Errors
    ///
    /// Returns an error if the layout is empty, holds more than
    /// [`MAX_PAIRS`] pairs, or has a face that does not occur exactly twice.
    ///
    /// # Example
    ///
    /// ```
    /// use pairs::{Face, Game};
    ///
    /// let faces = ["a", "b", "a", "b"].map(Face::from).to_vec();
    /// let game = Game::from_faces(faces).unwrap();
    /// assert_eq!(game.pairs_left(), 2);
    /// ```
    pub fn from_faces(faces: Vec<Face>) -> Result<Self, ConfigError> {
        if faces.is_empty() {
            return Err(ConfigError::TooFewPairs);
        }
        if faces.len() > MAX_PAIRS * 2 {
            return Err(ConfigError::TooManyPairs { max: MAX_PAIRS });
        }

        let mut counts: HashMap<&Face, usize> = HashMap::new();
        for face in &faces {
            *counts.entry(face).or_insert(0) += 1;
        }
        if counts.values().any(|&count| count != 2) {
            return Err(ConfigError::UnmatchedFace);
        }

        Ok(Self::with_cards(faces))
    }

    fn with_cards(cards: Vec<Face>) -> Self {
        let len = cards.len();
        let board = Board {
            cards: cards.into_iter().map(Some).collect(),
            solved: alloc::vec![None; len],
            turned: None,
            current_player: 0,
            scores: [0; PLAYERS],
            pairs_left: len / 2,
            winner: None,
        };

        Self {
            board: Mutex::new(board),
        }
    }

    /// Returns the face-up card of this round and its index.
    ///
    /// Returns `None` if no card is face-up.
    pub fn turned_card(&self) -> Option<(Face, usize)> {
        self.board.with(|board| board.turned_card())
    }

    /// Returns both players' scores, indexed by player.
    pub fn scores(&self) -> [usize; PLAYERS] {
        self.board.with(|board| board.scores)
    }

    /// Returns the face of every matched card by position.
    ///
    /// Positions that have not been solved are `None`. A face-up card that
    /// is still unmatched is not included.
    pub fn solved_cards(&self) -> Vec<Slot> {
        self.board.with(|board| board.solved.clone())
    }

    /// Returns the player whose turn it is.
    pub fn current_player(&self) -> u8 {
        self.board.with(|board| board.current_player)
    }

    /// Returns the card at `index`, or `None` if it has been removed.
    ///
    /// # Errors
    ///
    /// Returns [`TurnError::InvalidIndex`] if `index` is outside the board.
    pub fn card(&self, index: usize) -> Result<Slot, TurnError> {
        self.board
            .with(|board| board.cards.get(index).cloned())
            .ok_or(TurnError::InvalidIndex)
    }

    /// Returns the number of positions on the board, removed cards included.
    pub fn card_count(&self) -> usize {
        self.board.with(|board| board.cards.len())
    }

    /// Returns the number of pairs still on the table.
    pub fn pairs_left(&self) -> usize {
        self.board.with(|board| board.pairs_left)
    }

    /// Returns the current game state.
    pub fn state(&self) -> GameState {
        self.board.with(|board| board.state())
    }

    /// Returns whether every pair has been found.
    pub fn is_over(&self) -> bool {
        self.board.with(|board| board.pairs_left == 0)
    }

    /// Returns the player who found the last pair, once the game is over.
    pub fn winner(&self) -> Option<u8> {
        self.board.with(|board| board.winner)
    }

    /// Captures everything a display needs in one consistent read.
    pub fn snapshot(&self) -> Snapshot {
        self.board.with(|board| Snapshot {
            solved_cards: board.solved.clone(),
            turned: board.turned_card(),
            current_player: board.current_player,
            game_over: board.pairs_left == 0,
            scores: board.scores,
        })
    }
}

impl Board {
    fn turned_card(&self) -> Option<(Face, usize)> {
        self.turned
            .and_then(|index| self.cards[index].clone().map(|face| (face, index)))
    }

    const fn state(&self) -> GameState {
        if self.pairs_left == 0 {
            GameState::GameOver
        } else if self.turned.is_some() {
            GameState::AwaitingSecondPick
        } else {
            GameState::AwaitingFirstPick
        }
    }
}

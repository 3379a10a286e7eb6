//! A two-player pairs (memory) game engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that lays out a shuffled deck of
//! paired cards and enforces the rules as players turn cards over: turn
//! order, match detection, scoring, and the end of the game.
//!
//! # Example
//!
//! ```
//! use pairs::{Face, Game};
//!
//! let faces = ["a", "b", "a", "b"].map(Face::from).to_vec();
//! let game = Game::from_faces(faces).unwrap();
//!
//! game.turn_card(0, 0).unwrap();
//! let result = game.turn_card(2, 0).unwrap();
//! assert!(result.match_found);
//! assert_eq!(game.scores(), [1, 0]);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod options;
pub mod result;
mod sync;

// Re-export main types
pub use card::{Face, Slot};
pub use deck::FACE_POOL_SIZE;
pub use error::{ConfigError, TurnError};
pub use game::{Game, GameState, PLAYERS, Snapshot};
pub use options::{GameOptions, MAX_PAIRS, MIN_PAIRS};
pub use result::TurnResult;

//! Error types for game operations.

use thiserror::Error;

/// Errors that can occur while configuring a new game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A game needs at least one pair.
    #[error("a game has to have at least one pair")]
    TooFewPairs,
    /// More pairs were requested than the face pool supports.
    #[error("a game may have at most {max} pairs")]
    TooManyPairs {
        /// The largest allowed pair count.
        max: usize,
    },
    /// A supplied layout has a face that does not occur exactly twice.
    #[error("every face must occur exactly twice")]
    UnmatchedFace,
}

/// Errors that can occur when turning a card.
///
/// A failed turn never changes the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TurnError {
    /// Not this player's turn.
    #[error("it's not your turn")]
    NotYourTurn,
    /// Index is outside the board.
    #[error("invalid card index")]
    InvalidIndex,
    /// The card was already matched and removed.
    #[error("this card has already been removed")]
    AlreadyRemoved,
    /// The card is the one already face-up this round.
    #[error("this card is already turned")]
    AlreadyTurned,
}

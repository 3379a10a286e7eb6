//! Game configuration options.

use crate::error::ConfigError;

/// Smallest number of pairs a game can be dealt with.
pub const MIN_PAIRS: usize = 1;

/// Largest number of pairs a game can be dealt with.
pub const MAX_PAIRS: usize = 10;

/// Configuration options for a pairs game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use pairs::GameOptions;
///
/// let options = GameOptions::default().with_pairs(4);
/// assert_eq!(options.pairs, 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameOptions {
    /// Number of pairs dealt onto the board.
    pub pairs: usize,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self { pairs: MAX_PAIRS }
    }
}

impl GameOptions {
    /// Sets the number of pairs.
    ///
    /// # Example
    ///
    /// ```
    /// use pairs::GameOptions;
    ///
    /// let options = GameOptions::default().with_pairs(2);
    /// assert_eq!(options.pairs, 2);
    /// ```
    #[must_use]
    pub const fn with_pairs(mut self, pairs: usize) -> Self {
        self.pairs = pairs;
        self
    }

    /// Checks that the options describe a playable game.
    ///
    /// # Errors
    ///
    /// Returns an error if the pair count is below [`MIN_PAIRS`] or above
    /// [`MAX_PAIRS`].
    pub const fn validate(&self) -> Result<(), ConfigError> {
        if self.pairs < MIN_PAIRS {
            return Err(ConfigError::TooFewPairs);
        }
        if self.pairs > MAX_PAIRS {
            return Err(ConfigError::TooManyPairs { max: MAX_PAIRS });
        }
        Ok(())
    }
}

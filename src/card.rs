//! Card faces and board slots.

use alloc::string::String;
use core::fmt;

/// The face identifier printed on a card.
///
/// Two cards with equal faces form a pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Face(String);

impl Face {
    /// Creates a face from its name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the face name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl AsRef<str> for Face {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Face {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Face {
    fn from(name: String) -> Self {
        Self(name)
    }
}

/// A position on the board.
///
/// `None` marks a slot whose card was matched and removed. Slots are never
/// shrunk away, so indices stay stable for the whole game.
pub type Slot = Option<Face>;

//! Error types for card, hand, deck and player operations.

use thiserror::Error;

/// Broad category of a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Invalid argument supplied at the call boundary.
    Validation,
    /// Operation not possible in the current state.
    State,
    /// Index or count outside the permitted range.
    Range,
}

/// Errors that can occur when accessing a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HandError {
    /// Index is not within `0..len`.
    #[error("index {index} is out of range for a hand of {len} cards")]
    IndexOutOfRange {
        /// The requested index.
        index: usize,
        /// Number of cards in the hand.
        len: usize,
    },
}

impl HandError {
    /// Returns the category of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::IndexOutOfRange { .. } => ErrorKind::Range,
        }
    }
}

/// Errors that can occur when dealing from a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// No cards left in the deck.
    #[error("cannot deal from an empty deck")]
    Empty,
    /// More cards requested than the deck holds.
    #[error("requested {requested} cards but only {remaining} remain")]
    NotEnoughCards {
        /// Number of cards requested.
        requested: usize,
        /// Number of cards left in the deck.
        remaining: usize,
    },
}

impl DeckError {
    /// Returns the category of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Empty => ErrorKind::State,
            Self::NotEnoughCards { .. } => ErrorKind::Range,
        }
    }
}

/// Errors that can occur when creating or acting as a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlayerError {
    /// Player name is empty or whitespace only.
    #[error("player name must not be blank")]
    InvalidName,
    /// Player has no cards in hand.
    #[error("player has no cards to play")]
    NoCardsToPlay,
    /// Hand access failed.
    #[error(transparent)]
    Hand(#[from] HandError),
}

impl PlayerError {
    /// Returns the category of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidName => ErrorKind::Validation,
            Self::NoCardsToPlay => ErrorKind::State,
            Self::Hand(err) => err.kind(),
        }
    }
}

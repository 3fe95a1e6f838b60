//! Game state types.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Lifecycle state of a game, as tracked by the host application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameState {
    /// Game has not started yet.
    #[default]
    NotStarted,
    /// Game is currently in progress.
    InProgress,
    /// Game is paused.
    Paused,
    /// Game has ended.
    Finished,
}


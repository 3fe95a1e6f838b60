//! Dealing configuration options.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for the opening deal of a round.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use pisti::DealOptions;
///
/// let options = DealOptions::default()
///     .with_hand_size(6)
///     .with_table_cards(2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DealOptions {
    /// Number of cards dealt to each player.
    pub hand_size: usize,
    /// Number of cards laid on the table at the start of a round.
    pub table_cards: usize,
}

impl Default for DealOptions {
    fn default() -> Self {
        Self {
            hand_size: 4,
            table_cards: 4,
        }
    }
}

impl DealOptions {
    /// Sets the number of cards dealt to each player.
    ///
    /// # Example
    ///
    /// ```
    /// use pisti::DealOptions;
    ///
    /// let options = DealOptions::default().with_hand_size(5);
    /// assert_eq!(options.hand_size, 5);
    /// ```
    #[must_use]
    pub const fn with_hand_size(mut self, hand_size: usize) -> Self {
        self.hand_size = hand_size;
        self
    }

    /// Sets the number of cards laid on the table.
    ///
    /// # Example
    ///
    /// ```
    /// use pisti::DealOptions;
    ///
    /// let options = DealOptions::default().with_table_cards(0);
    /// assert_eq!(options.table_cards, 0);
    /// ```
    #[must_use]
    pub const fn with_table_cards(mut self, table_cards: usize) -> Self {
        self.table_cards = table_cards;
        self
    }

    /// Returns the number of cards a deal to `players` players consumes,
    /// table cards included, or `None` if that count overflows `usize`.
    #[must_use]
    pub const fn cards_needed(&self, players: usize) -> Option<usize> {
        match self.hand_size.checked_mul(players) {
            Some(dealt) => dealt.checked_add(self.table_cards),
            None => None,
        }
    }
}

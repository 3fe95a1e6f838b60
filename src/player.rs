//! Players, their hands and their captured piles.

use alloc::string::{String, ToString};
use core::fmt;
use core::hash::{Hash, Hasher};
use core::sync::atomic::{AtomicUsize, Ordering};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::card::Card;
use crate::error::PlayerError;
use crate::hand::Hand;

// Pointer-sized so targets without 64-bit atomics can still build the crate.
static NEXT_ID: AtomicUsize = AtomicUsize::new(1);

/// Opaque player identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlayerId(u64);

impl PlayerId {
    /// Returns a fresh identifier, unique within this process.
    #[must_use]
    pub fn generate() -> Self {
        Self(NEXT_ID.fetch_add(1, Ordering::Relaxed) as u64)
    }

    /// Wraps a raw identifier, e.g. one loaded from storage.
    #[must_use]
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw identifier.
    #[must_use]
    pub const fn as_raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A participant in a game.
///
/// A player owns the cards currently held and the cards won this round. The
/// score is derived from the captured pile on every call, so it never goes
/// stale. Players compare equal when their ids match, whatever their cards.
///
/// With the `serde` feature, deserialization goes through
/// [`Player::with_id`], so stored names are trimmed and blank ones rejected.
#[derive(Debug, Clone)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "PlayerRecord")
)]
pub struct Player {
    id: PlayerId,
    name: String,
    hand: Hand,
    captured: Hand,
}

impl Player {
    /// Creates a player with a freshly generated id.
    ///
    /// The name is stored trimmed.
    ///
    /// # Errors
    ///
    /// Returns [`PlayerError::InvalidName`] if `name` is empty or whitespace.
    pub fn new(name: &str) -> Result<Self, PlayerError> {
        Self::with_id(PlayerId::generate(), name)
    }

    /// Creates a player with an explicit id, for reconstruction from storage.
    ///
    /// # Errors
    ///
    /// Returns [`PlayerError::InvalidName`] if `name` is empty or whitespace.
    pub fn with_id(id: PlayerId, name: &str) -> Result<Self, PlayerError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(PlayerError::InvalidName);
        }

        Ok(Self {
            id,
            name: name.to_string(),
            hand: Hand::new(),
            captured: Hand::new(),
        })
    }

    /// Returns the player's id.
    #[must_use]
    pub const fn id(&self) -> PlayerId {
        self.id
    }

    /// Returns the player's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the cards currently held.
    #[must_use]
    pub const fn hand(&self) -> &Hand {
        &self.hand
    }

    /// Returns the held cards for dealing into.
    pub const fn hand_mut(&mut self) -> &mut Hand {
        &mut self.hand
    }

    /// Returns the cards won this round.
    #[must_use]
    pub const fn captured_cards(&self) -> &Hand {
        &self.captured
    }

    /// Adds won cards to the captured pile.
    pub fn add_captured_cards(&mut self, cards: impl IntoIterator<Item = Card>) {
        let before = self.captured.len();
        self.captured.add_cards(cards);
        log::trace!(
            "player {} captured {} cards",
            self.id,
            self.captured.len() - before
        );
    }

    /// Removes and returns the card at `index` from the hand.
    ///
    /// # Errors
    ///
    /// Returns [`PlayerError::NoCardsToPlay`] if the hand is empty, whatever the
    /// index. Otherwise returns [`PlayerError::Hand`] if `index` is out of range.
    pub fn play_card(&mut self, index: usize) -> Result<Card, PlayerError> {
        if self.hand.is_empty() {
            return Err(PlayerError::NoCardsToPlay);
        }

        let card = self.hand.remove_at(index)?;
        log::trace!("player {} played {card}", self.id);
        Ok(card)
    }

    /// Returns whether the player holds any cards.
    #[must_use]
    pub fn can_play(&self) -> bool {
        !self.hand.is_empty()
    }

    /// Returns the sum of points over the captured pile.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.captured.points()
    }

    /// Returns the number of captured cards.
    #[must_use]
    pub fn cards_won(&self) -> usize {
        self.captured.len()
    }

    /// Empties both the hand and the captured pile for a new round.
    pub fn clear_round(&mut self) {
        self.hand.clear();
        self.captured.clear();
    }
}

/// Stored form of a [`Player`], validated on the way in.
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct PlayerRecord {
    id: PlayerId,
    name: String,
    #[serde(default)]
    hand: Hand,
    #[serde(default)]
    captured: Hand,
}

#[cfg(feature = "serde")]
impl TryFrom<PlayerRecord> for Player {
    type Error = PlayerError;

    fn try_from(record: PlayerRecord) -> Result<Self, Self::Error> {
        let mut player = Self::with_id(record.id, &record.name)?;
        player.hand = record.hand;
        player.captured = record.captured;
        Ok(player)
    }
}

impl PartialEq for Player {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Player {}

impl Hash for Player {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (Cards in hand: {}, Score: {}, Cards won: {})",
            self.name,
            self.hand.len(),
            self.score(),
            self.cards_won()
        )
    }
}

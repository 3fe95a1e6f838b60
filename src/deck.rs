//! The deck: shuffling and dealing.

use alloc::vec::Vec;

use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, standard_deck};
use crate::error::DeckError;
use crate::hand::Hand;
use crate::options::DealOptions;
use crate::player::Player;

/// A standard 52-card deck with its own random source.
///
/// The top of the deck is the end of the backing vector, so a deal is a pop.
/// The random source is owned by the deck and never shared; pass any
/// [`RngCore`] to [`Deck::with_rng`] to control shuffles.
#[derive(Debug, Clone)]
pub struct Deck<R = ChaCha8Rng> {
    /// Cards left in the deck, top last.
    cards: Vec<Card>,
    /// Random number generator.
    rng: R,
}

impl Deck {
    /// Creates a full, unshuffled deck with a seeded generator.
    ///
    /// The same seed always produces the same shuffles.
    ///
    /// # Example
    ///
    /// ```
    /// use pisti::Deck;
    ///
    /// let mut deck = Deck::new(42);
    /// deck.shuffle();
    /// assert_eq!(deck.cards_remaining(), 52);
    /// ```
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::with_rng(ChaCha8Rng::seed_from_u64(seed))
    }

    /// Creates a full, unshuffled deck seeded from the system clock.
    #[cfg(feature = "std")]
    #[cfg_attr(docsrs, doc(cfg(feature = "std")))]
    #[must_use]
    pub fn from_time() -> Self {
        use std::time::{SystemTime, UNIX_EPOCH};

        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_nanos() as u64)
            .unwrap_or_default();
        Self::new(seed)
    }
}

#[cfg(feature = "std")]
impl Default for Deck {
    fn default() -> Self {
        Self::from_time()
    }
}

impl<R: RngCore> Deck<R> {
    /// Creates a full, unshuffled deck using the given random source.
    #[must_use]
    pub fn with_rng(rng: R) -> Self {
        Self {
            cards: standard_deck(),
            rng,
        }
    }

    /// Shuffles the remaining cards in place.
    ///
    /// Fisher-Yates: walk from the last position down to 1, swapping each
    /// position with a uniformly chosen one at or below it.
    pub fn shuffle(&mut self) {
        for i in (1..self.cards.len()).rev() {
            let j = self.rng.random_range(0..=i);
            self.cards.swap(i, j);
        }
        log::debug!("shuffled deck of {} cards", self.cards.len());
    }

    /// Deals one card from the top of the deck.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Empty`] if no cards remain.
    pub fn deal(&mut self) -> Result<Card, DeckError> {
        let card = self.cards.pop().ok_or(DeckError::Empty)?;
        log::trace!("dealt {card}, {} remaining", self.cards.len());
        Ok(card)
    }

    /// Deals `count` cards from the top of the deck, top card first.
    ///
    /// The count is checked before anything is removed, so a failed call
    /// leaves the deck untouched.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::NotEnoughCards`] if `count` exceeds the cards remaining.
    pub fn deal_many(&mut self, count: usize) -> Result<Vec<Card>, DeckError> {
        self.ensure_remaining(count)?;

        let mut cards = Vec::with_capacity(count);
        for _ in 0..count {
            cards.push(self.deal()?);
        }

        log::debug!("dealt {count} cards, {} remaining", self.cards.len());
        Ok(cards)
    }

    /// Deals `count` cards straight into `hand`.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::NotEnoughCards`] if `count` exceeds the cards
    /// remaining. The hand is left untouched in that case.
    pub fn deal_into(&mut self, hand: &mut Hand, count: usize) -> Result<(), DeckError> {
        let cards = self.deal_many(count)?;
        hand.add_cards(cards);
        Ok(())
    }

    /// Deals `options.hand_size` cards to every player, one player at a time.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::NotEnoughCards`] if the deck cannot serve every
    /// player. No player receives cards in that case.
    pub fn deal_hands(
        &mut self,
        players: &mut [Player],
        options: &DealOptions,
    ) -> Result<(), DeckError> {
        let requested = options
            .hand_size
            .checked_mul(players.len())
            .unwrap_or(usize::MAX);
        self.ensure_remaining(requested)?;

        for player in players.iter_mut() {
            self.deal_into(player.hand_mut(), options.hand_size)?;
        }
        Ok(())
    }

    /// Lays `options.table_cards` cards onto the table pile.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::NotEnoughCards`] if too few cards remain.
    pub fn deal_table(&mut self, table: &mut Hand, options: &DealOptions) -> Result<(), DeckError> {
        self.deal_into(table, options.table_cards)
    }

    /// Refills the deck with all 52 cards and shuffles it.
    pub fn reset(&mut self) {
        self.cards.clear();
        self.cards.extend(standard_deck());
        log::debug!("deck reset to {DECK_SIZE} cards");
        self.shuffle();
    }

    /// Returns the cards left in the deck, top card last.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards left in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    fn ensure_remaining(&self, requested: usize) -> Result<(), DeckError> {
        let remaining = self.cards.len();
        if requested > remaining {
            return Err(DeckError::NotEnoughCards {
                requested,
                remaining,
            });
        }
        Ok(())
    }
}

//! Rules engine primitives for the Pisti card game, with optional `no_std` support.
//!
//! The crate provides [`Card`] values with their point table and capture rule,
//! a [`Hand`] for ordered card piles, a shuffling [`Deck`] and a [`Player`]
//! whose score is derived from the cards they have captured.
//!
//! # Example
//!
//! ```
//! use pisti::{Card, Deck, Player, Rank, Suit};
//!
//! let mut deck = Deck::new(42);
//! deck.shuffle();
//!
//! let mut player = Player::new("Ada").unwrap();
//! deck.deal_into(player.hand_mut(), 4).unwrap();
//!
//! let table = Card::new(Suit::Hearts, Rank::Seven);
//! let played = player.play_card(0).unwrap();
//! if played.can_capture(&table) {
//!     player.add_captured_cards([played, table]);
//! }
//! assert_eq!(deck.cards_remaining(), 48);
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
pub mod hand;
pub mod options;
pub mod player;
pub mod state;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit, standard_deck};
pub use deck::Deck;
pub use error::{DeckError, ErrorKind, HandError, PlayerError};
pub use hand::Hand;
pub use options::DealOptions;
pub use player::{Player, PlayerId};
pub use state::GameState;

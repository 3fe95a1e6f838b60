//! Player integration tests.

use std::collections::HashSet;

use pisti::{
    Card, DECK_SIZE, Deck, ErrorKind, GameState, HandError, Player, PlayerError, PlayerId, Rank,
    Suit,
};

const fn card(suit: Suit, rank: Rank) -> Card {
    Card::new(suit, rank)
}

#[test]
fn blank_names_are_rejected() {
    for name in ["", " ", "\t\n  "] {
        let err = Player::new(name).unwrap_err();
        assert_eq!(err, PlayerError::InvalidName);
        assert_eq!(err.kind(), ErrorKind::Validation);
    }
    assert_eq!(
        Player::with_id(PlayerId::from_raw(5), "   ").unwrap_err(),
        PlayerError::InvalidName
    );
}

#[test]
fn names_are_trimmed() {
    let player = Player::new("  Ada Lovelace ").unwrap();
    assert_eq!(player.name(), "Ada Lovelace");
    assert!(player.hand().is_empty());
    assert!(player.captured_cards().is_empty());
    assert!(!player.can_play());
}

#[test]
fn generated_ids_are_unique() {
    let ids: HashSet<PlayerId> = (0..100)
        .map(|i| Player::new(&format!("p{i}")).unwrap().id())
        .collect();
    assert_eq!(ids.len(), 100);

    let first = PlayerId::generate();
    let second = PlayerId::generate();
    assert!(second > first);
}

#[test]
fn equality_follows_the_id() {
    let id = PlayerId::from_raw(77);
    let mut stored = Player::with_id(id, "Grace").unwrap();
    stored.hand_mut().add_card(card(Suit::Hearts, Rank::Ace));
    stored.add_captured_cards([card(Suit::Clubs, Rank::Two)]);
    let restored = Player::with_id(id, "Someone Else").unwrap();

    assert_eq!(stored, restored);
    assert_eq!(restored.id().as_raw(), 77);
    assert_ne!(stored, Player::new("Grace").unwrap());

    let set: HashSet<Player> = [stored, restored].into_iter().collect();
    assert_eq!(set.len(), 1);
}

#[test]
fn score_tracks_captured_cards() {
    let mut player = Player::new("Linus").unwrap();
    assert_eq!(player.score(), 0);
    assert_eq!(player.cards_won(), 0);

    player.add_captured_cards([card(Suit::Diamonds, Rank::Ten), card(Suit::Hearts, Rank::Five)]);
    assert_eq!(player.score(), 3);
    assert_eq!(player.cards_won(), 2);

    player.add_captured_cards(vec![
        card(Suit::Spades, Rank::Jack),
        card(Suit::Clubs, Rank::Two),
        card(Suit::Clubs, Rank::Ace),
    ]);
    assert_eq!(player.score(), 7);
    assert_eq!(player.cards_won(), 5);

    player.add_captured_cards(Vec::new());
    assert_eq!(player.cards_won(), 5);
}

#[test]
fn play_card_errors() {
    let mut player = Player::new("Barbara").unwrap();

    let err = player.play_card(3).unwrap_err();
    assert_eq!(err, PlayerError::NoCardsToPlay);
    assert_eq!(err.kind(), ErrorKind::State);

    player
        .hand_mut()
        .add_cards([card(Suit::Hearts, Rank::Six), card(Suit::Spades, Rank::Nine)]);

    let err = player.play_card(2).unwrap_err();
    assert_eq!(
        err,
        PlayerError::Hand(HandError::IndexOutOfRange { index: 2, len: 2 })
    );
    assert_eq!(err.kind(), ErrorKind::Range);
    assert_eq!(player.hand().len(), 2);
}

#[test]
fn play_card_removes_from_hand() {
    let mut player = Player::new("Ken").unwrap();
    player
        .hand_mut()
        .add_cards([card(Suit::Hearts, Rank::Six), card(Suit::Spades, Rank::Nine)]);

    assert!(player.can_play());
    assert_eq!(player.play_card(1), Ok(card(Suit::Spades, Rank::Nine)));
    assert_eq!(player.play_card(0), Ok(card(Suit::Hearts, Rank::Six)));
    assert!(!player.can_play());
}

#[test]
fn clear_round_empties_both_piles() {
    let mut player = Player::new("Dennis").unwrap();
    player.hand_mut().add_card(card(Suit::Hearts, Rank::Four));
    player.add_captured_cards([card(Suit::Hearts, Rank::Ace)]);

    player.clear_round();
    assert!(player.hand().is_empty());
    assert_eq!(player.score(), 0);
    assert_eq!(player.cards_won(), 0);
}

#[test]
fn player_display() {
    let mut player = Player::new("Margaret").unwrap();
    assert_eq!(
        player.to_string(),
        "Margaret (Cards in hand: 0, Score: 0, Cards won: 0)"
    );

    player.hand_mut().add_card(card(Suit::Hearts, Rank::Four));
    player.add_captured_cards([card(Suit::Diamonds, Rank::Ten), card(Suit::Clubs, Rank::Jack)]);
    assert_eq!(
        player.to_string(),
        "Margaret (Cards in hand: 1, Score: 4, Cards won: 2)"
    );
}

#[test]
fn game_state_defaults_to_not_started() {
    assert_eq!(GameState::default(), GameState::NotStarted);
}

#[test]
fn two_player_deal_and_capture() {
    let mut deck = Deck::new(2024);
    deck.shuffle();

    let mut alice = Player::new("Alice").unwrap();
    let mut bob = Player::new("Bob").unwrap();
    alice.hand_mut().add_cards(deck.deal_many(4).unwrap());
    bob.hand_mut().add_cards(deck.deal_many(4).unwrap());
    assert_eq!(deck.cards_remaining(), DECK_SIZE - 8);
    assert_eq!(deck.cards_remaining(), 44);

    let expected = alice.hand().get(0).unwrap();
    let played = alice.play_card(0).unwrap();
    assert_eq!(played, expected);
    assert_eq!(alice.hand().len(), 3);
    assert!(!alice.hand().contains(&played));

    let table_card = deck.deal().unwrap();
    alice.add_captured_cards([played, table_card]);
    assert_eq!(alice.cards_won(), 2);
    assert_eq!(alice.score(), played.points() + table_card.points());
    assert_eq!(bob.score(), 0);
    assert_eq!(bob.hand().len(), 4);
}

//! Console walkthrough of the deck, players and capture rule.

use core::error::Error;
use std::process::ExitCode;

use pisti::{Card, DealOptions, Deck, Player, Rank, Suit};

fn main() -> ExitCode {
    println!("=== Pisti domain model demo ===");
    println!();

    demonstrate_deck();
    println!();

    if let Err(err) = demonstrate_players() {
        println!("Error: {err}");
        return ExitCode::FAILURE;
    }
    println!();

    demonstrate_capture();

    println!();
    println!("Demo finished.");
    ExitCode::SUCCESS
}

fn demonstrate_deck() {
    println!("--- Deck ---");

    let mut deck = Deck::default();
    println!("New deck created. Cards: {}", deck.cards_remaining());

    deck.shuffle();
    println!("Deck shuffled.");

    match deck.deal_many(5) {
        Ok(cards) => {
            println!("Dealt 5 cards:");
            for card in &cards {
                println!("  - {card} (points: {})", card.points());
            }
        }
        Err(err) => println!("Deal error: {err}"),
    }

    println!("Cards left in deck: {}", deck.cards_remaining());
}

fn demonstrate_players() -> Result<(), Box<dyn Error>> {
    println!("--- Players ---");

    let mut players = [Player::new("Ahmet")?, Player::new("Ayse")?];

    let mut deck = Deck::default();
    deck.shuffle();
    deck.deal_hands(&mut players, &DealOptions::default())?;

    for player in &players {
        println!("{player}");
        print_hand(player);
    }

    Ok(())
}

fn print_hand(player: &Player) {
    for (index, card) in player.hand().iter().enumerate() {
        println!("  {}. {card} (points: {})", index + 1, card.points());
    }
}

fn demonstrate_capture() {
    println!("--- Capture rule ---");

    let jack = Card::new(Suit::Hearts, Rank::Jack);
    let seven = Card::new(Suit::Spades, Rank::Seven);
    let table = Card::new(Suit::Clubs, Rank::Seven);

    println!("Table card: {table}");
    for played in [jack, seven, Card::new(Suit::Diamonds, Rank::Queen)] {
        let verdict = if played.can_capture(&table) {
            "captures"
        } else {
            "does not capture"
        };
        println!("  {played} {verdict} {table}");
    }
}

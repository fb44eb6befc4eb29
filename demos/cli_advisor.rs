//! CLI okey advisor example.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use okrs::{Card, CardSet, HAND_SIZE, MAX_RANK, MIN_RANK, Suit, Table, full_deck};
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

fn main() {
    println!("Okey advisor CLI example (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut table = Table::new();

    print_help();

    loop {
        let input = prompt_line("Command: ");
        let mut words = input.split_whitespace();
        let op = words.next().unwrap_or_default();

        match op {
            "" => {}
            "q" | "quit" => {
                println!("Goodbye.");
                break;
            }
            "help" => print_help(),
            "reset" => {
                table.reset();
                println!("Table cleared.");
            }
            "deal" => {
                deal(&mut table, &mut rng);
                print_table(&table);
            }
            "a" | "add" => {
                if let Some(card) = parse_card(words.next()) {
                    match table.add_to_hand(card) {
                        Ok(()) => print_table(&table),
                        Err(err) => println!("Add error: {err:?}"),
                    }
                }
            }
            "d" | "discard" => {
                if let Some(card) = parse_card(words.next()) {
                    match table.discard(card) {
                        Ok(()) => print_table(&table),
                        Err(err) => println!("Discard error: {err:?}"),
                    }
                }
            }
            "x" | "mark" => {
                if let Some(card) = parse_card(words.next()) {
                    table.mark_discarded(card);
                    print_table(&table);
                }
            }
            "p" | "played" => {
                if let Some(card) = parse_card(words.next()) {
                    table.mark_played(card);
                    print_table(&table);
                }
            }
            _ => println!("Unknown command. Type 'help' for the list."),
        }
    }
}

fn print_help() {
    println!("Commands:");
    println!("  a <card>   add a card to your hand");
    println!("  d <card>   discard a card from your hand");
    println!("  x <card>   mark a card discarded by another player");
    println!("  p <card>   mark a card played on the table");
    println!("  deal       reset and deal a random hand");
    println!("  reset      clear the table");
    println!("  help       show this message");
    println!("  q          quit");
    println!("Cards are rank then suit, e.g. 3r, 7y, 1b.");
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_lowercase()
}

fn parse_card(token: Option<&str>) -> Option<Card> {
    let Some(token) = token else {
        println!("Card token required, e.g. 3r.");
        return None;
    };

    match token.parse::<Card>() {
        Ok(card) => Some(card),
        Err(err) => {
            println!("Bad card: {err:?}");
            None
        }
    }
}

fn deal(table: &mut Table, rng: &mut ChaCha8Rng) {
    table.reset();

    let mut deck = full_deck();
    deck.shuffle(rng);
    for &card in deck.iter().take(HAND_SIZE) {
        if let Err(err) = table.add_to_hand(card) {
            println!("Deal error: {err:?}");
            return;
        }
    }
}

fn print_table(table: &Table) {
    let used = table.used();

    println!();
    for suit in Suit::ALL {
        let row: Vec<String> = (MIN_RANK..=MAX_RANK)
            .map(|rank| format_cell(Card::new(rank, suit), used))
            .collect();
        println!("{}", row.join(" "));
    }

    println!("\nHand: {}", format_cards(table.hand()));
    println!("Discarded: {}", format_cards(table.discarded()));
    println!("Played: {}", format_cards(table.played()));

    if table.has_full_hand() {
        print_advice(table);
    } else {
        println!(
            "Add {} more card(s) for a recommendation.",
            HAND_SIZE - table.hand().len()
        );
    }
}

fn print_advice(table: &Table) {
    let advice = table.advice();
    let ranked: Vec<String> = advice
        .ranked()
        .iter()
        .map(|&(card, score)| format!("{} {score:.1}", format_card(card)))
        .collect();
    println!("Keep order: {}", ranked.join("  "));

    match table.recommend_discard() {
        Ok(card) => println!("Suggested discard: {}", format_card(card)),
        Err(err) => println!("Advice error: {err:?}"),
    }
}

fn format_cards(cards: &[Card]) -> String {
    if cards.is_empty() {
        return "(none)".to_string();
    }
    cards
        .iter()
        .map(|&card| format_card(card))
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_cell(card: Card, used: CardSet) -> String {
    let token = card.to_string();
    if used.contains(card) {
        colorize(&token, "90")
    } else {
        colorize(&token, suit_color(card.suit))
    }
}

fn format_card(card: Card) -> String {
    colorize(&card.to_string(), suit_color(card.suit))
}

const fn suit_color(suit: Suit) -> &'static str {
    match suit {
        Suit::Red => "31",
        Suit::Yellow => "33",
        Suit::Blue => "34",
    }
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

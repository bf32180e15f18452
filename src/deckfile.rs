//! Deck file persistence.
//!
//! A deck file is a JSON array of 54 card code strings, for example
//! `["10C", "KH", ..., "JOKER_A", "JOKER_B"]`. Loading validates both the
//! card codes and the deck invariant before the engine ever sees the deck,
//! so integrity problems surface here as typed errors instead of surfacing
//! as misbehavior deep inside a cipher run.

use std::fs;
use std::path::Path;

use crate::cards::{Card, Deck};
use crate::error::PontifexError;

/// Load and validate a deck from a JSON deck file.
///
/// # Errors
///
/// [`PontifexError::Io`] if the file cannot be read,
/// [`PontifexError::Json`] if it is not a JSON array of card codes, and
/// [`PontifexError::WrongDeckSize`] / [`PontifexError::DuplicateCard`] if
/// the cards do not form a valid deck.
pub fn load<P: AsRef<Path>>(path: P) -> Result<Deck, PontifexError> {
    let data = fs::read_to_string(path)?;
    let cards: Vec<Card> = serde_json::from_str(&data)?;
    Deck::new(cards)
}

/// Write a deck to a JSON deck file, overwriting any existing file.
pub fn save<P: AsRef<Path>>(path: P, deck: &Deck) -> Result<(), PontifexError> {
    let json = serde_json::to_string(deck.cards())?;
    fs::write(path, json)?;
    Ok(())
}

/// Generate a freshly shuffled deck, write it to `path`, and return it.
///
/// Shuffling draws from the OS-seeded [`rand::thread_rng`].
pub fn generate<P: AsRef<Path>>(path: P) -> Result<Deck, PontifexError> {
    let deck = Deck::shuffled(&mut rand::thread_rng());
    save(path, &deck)?;
    Ok(deck)
}

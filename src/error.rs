//! Error types for the pontifex library.
//!
//! Integrity problems are caught once, at deck construction or load time,
//! so the deck engine itself never has to guard against a malformed deck.

use thiserror::Error;

use crate::cards::Card;

/// Errors produced by the pontifex library.
#[derive(Debug, Error)]
pub enum PontifexError {
    /// Deck does not hold exactly 54 cards.
    #[error("deck must contain exactly 54 cards, found {found}")]
    WrongDeckSize { found: usize },

    /// The same card appears more than once in a deck.
    #[error("duplicate card in deck: {0}")]
    DuplicateCard(Card),

    /// A card code in a deck file could not be parsed.
    #[error("unrecognized card code {0:?}")]
    InvalidCardCode(String),

    /// The message contains a character outside A-Z after normalization.
    #[error("message contains unsupported character {0:?}")]
    UnsupportedCharacter(char),

    /// Deck file could not be read or written.
    #[error("deck file I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// Deck file is not valid JSON.
    #[error("deck file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

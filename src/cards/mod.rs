//! Card and deck engine.
//!
//! ## Key Types
//!
//! - `Card`, `Rank`, `Suit`: immutable card values and their codes
//! - `Deck`: validated 54-card sequence with the four round manipulations
//! - `Keystream`: borrowing iterator over keystream values
//!
//! The deck engine knows nothing about text or ciphers; the cipher layer
//! in [`crate::cipher`] consumes keystream values one letter at a time.

pub mod card;
pub mod deck;

pub use card::{Card, Rank, Suit, JOKER_VALUE};
pub use deck::{Deck, Keystream, DECK_SIZE};

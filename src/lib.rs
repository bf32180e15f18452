//! # pontifex
//!
//! The Pontifex (Solitaire) cipher: a pseudorandom keystream generator
//! driven by a deck of 54 playing cards, combined with an additive stream
//! cipher over the 26-letter alphabet. The deck is the key; anyone holding
//! an identically ordered deck can reproduce the keystream.
//!
//! # Architecture
//!
//! ```text
//! Card / Deck   (cards — 54-card state machine: joker moves, triple cut,
//!     ↓          count cut, output extraction)
//! Keystream     (cards — values in 1..=26, one per message letter)
//!     ↓
//! Cipher        (cipher — normalization + modular letter arithmetic)
//! ```
//!
//! Deck files (`deckfile`) and the CLI wrap the core without adding any
//! algorithmic behavior.
//!
//! # Examples
//!
//! Encrypt and decrypt with two copies of the same deck:
//!
//! ```
//! use pontifex::{Cipher, Deck, Mode};
//!
//! let deck = Deck::shuffled_with_seed(42);
//!
//! let mut encrypter = Cipher::new(deck.clone());
//! let ciphertext = encrypter.encrypt("DO NOT USE PC").unwrap();
//!
//! let mut decrypter = Cipher::new(deck);
//! assert_eq!(decrypter.decrypt(&ciphertext).unwrap(), "DONOTUSEPC");
//! ```
//!
//! Pull raw keystream values straight from a deck:
//!
//! ```
//! use pontifex::Deck;
//!
//! let mut deck = Deck::standard();
//! assert_eq!(deck.keystream(5), vec![4, 12, 7, 3, 4]);
//! ```

pub mod cards;
pub mod cipher;
pub mod deckfile;
pub mod error;

pub use crate::cards::{Card, Deck, Keystream, Rank, Suit, DECK_SIZE};
pub use crate::cipher::{Cipher, Mode};
pub use crate::error::PontifexError;

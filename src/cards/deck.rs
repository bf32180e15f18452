//! The Pontifex deck engine.
//!
//! A [`Deck`] is an ordered sequence of all 54 cards. The engine exposes the
//! four deterministic manipulations of the Pontifex round — joker movement,
//! triple cut, count cut, output extraction — and drives them to produce a
//! keystream of values in 1..=26.
//!
//! ## Invariant
//!
//! [`Deck::new`] enforces that a deck holds exactly 54 unique cards. Since
//! only 54 distinct card values exist, a valid deck is always the complete
//! set, jokers included. The manipulation primitives rely on this and carry
//! no runtime guards.
//!
//! ## Determinism
//!
//! Every round mutates the deck, whether or not it yields an output value.
//! Two identical decks always produce identical keystreams:
//!
//! ```
//! use pontifex::cards::Deck;
//!
//! let mut a = Deck::shuffled_with_seed(42);
//! let mut b = a.clone();
//! assert_eq!(a.keystream(20), b.keystream(20));
//! ```

use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::card::{Card, Rank, Suit};
use crate::error::PontifexError;

/// Number of cards in a valid deck.
pub const DECK_SIZE: usize = 54;

/// An ordered, validated 54-card deck.
///
/// The deck is exclusively owned and destructively mutated by keystream
/// generation; reload or clone the original to restart the stream.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Build a deck from an explicit card order, validating the deck
    /// invariant: exactly 54 cards, no duplicates.
    ///
    /// # Errors
    ///
    /// [`PontifexError::WrongDeckSize`] or [`PontifexError::DuplicateCard`].
    pub fn new(cards: Vec<Card>) -> Result<Self, PontifexError> {
        if cards.len() != DECK_SIZE {
            return Err(PontifexError::WrongDeckSize { found: cards.len() });
        }
        let mut seen = HashSet::with_capacity(DECK_SIZE);
        for &card in &cards {
            if !seen.insert(card) {
                return Err(PontifexError::DuplicateCard(card));
            }
        }
        Ok(Self { cards })
    }

    /// The reference starting order: clubs, diamonds, hearts, spades, each
    /// ace through king, with both jokers at the bottom.
    #[must_use]
    pub fn standard() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(rank, suit));
            }
        }
        cards.push(Card::JokerA);
        cards.push(Card::JokerB);
        Self { cards }
    }

    /// A freshly shuffled deck, using the caller's randomness source.
    #[must_use]
    pub fn shuffled<R: Rng>(rng: &mut R) -> Self {
        let mut deck = Self::standard();
        deck.cards.shuffle(rng);
        deck
    }

    /// A reproducibly shuffled deck. Same seed, same order.
    #[must_use]
    pub fn shuffled_with_seed(seed: u64) -> Self {
        Self::shuffled(&mut ChaCha8Rng::seed_from_u64(seed))
    }

    /// Current card order, top of the deck first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    fn position_of(&self, card: Card) -> usize {
        self.cards
            .iter()
            .position(|&c| c == card)
            .expect("a validated deck contains every card exactly once")
    }

    /// Move a joker down the deck: remove it, then reinsert it `steps`
    /// positions later, wrapping modulo the deck length after removal.
    /// In a round, joker A moves one step and joker B moves two.
    pub fn move_joker(&mut self, joker: Card, steps: usize) {
        let index = self.position_of(joker);
        self.cards.remove(index);
        let new_index = (index + steps) % self.cards.len();
        self.cards.insert(new_index, joker);
    }

    /// Triple cut: swap the cards above the first joker with the cards below
    /// the second. The inclusive joker-to-joker span keeps its order.
    pub fn triple_cut(&mut self) {
        let a = self.position_of(Card::JokerA);
        let b = self.position_of(Card::JokerB);
        let (low, high) = (a.min(b), a.max(b));

        let mut next = Vec::with_capacity(DECK_SIZE);
        next.extend_from_slice(&self.cards[high + 1..]);
        next.extend_from_slice(&self.cards[low..=high]);
        next.extend_from_slice(&self.cards[..low]);
        self.cards = next;
    }

    /// Count cut: read the bottom card's value `v` and move the top `v`
    /// cards to just above the bottom card. The bottom card never moves.
    pub fn count_cut(&mut self) {
        let count = usize::from(self.bottom_card().value());
        let last = self.cards.len() - 1;
        // count is at most 53, so the rotation stays within the slice.
        self.cards[..last].rotate_left(count);
    }

    /// Read the round's output: the value of the card found by counting down
    /// from the top by the top card's value. Jokers yield no output.
    ///
    /// A returned value is always in 1..=26; anything above 26 is folded
    /// back by subtracting 26. With rank-only values that fold never fires,
    /// but extended value mappings rely on it.
    #[must_use]
    pub fn output_value(&self) -> Option<u8> {
        let top = usize::from(self.cards[0].value());
        let card = self.cards[top];
        if card.is_joker() {
            return None;
        }
        let mut value = card.value();
        if value > 26 {
            value -= 26;
        }
        Some(value)
    }

    /// Run one full round: both joker moves, triple cut, count cut, then
    /// output extraction. The deck advances even when the round yields
    /// `None`.
    pub fn advance(&mut self) -> Option<u8> {
        self.move_joker(Card::JokerA, 1);
        self.move_joker(Card::JokerB, 2);
        self.triple_cut();
        self.count_cut();
        self.output_value()
    }

    /// Iterator over keystream values, advancing the deck as it goes.
    pub fn keystream_iter(&mut self) -> Keystream<'_> {
        Keystream { deck: self }
    }

    /// Produce exactly `n` keystream values.
    pub fn keystream(&mut self, n: usize) -> Vec<u8> {
        self.keystream_iter().take(n).collect()
    }

    fn bottom_card(&self) -> Card {
        self.cards[self.cards.len() - 1]
    }
}

impl TryFrom<Vec<Card>> for Deck {
    type Error = PontifexError;

    fn try_from(cards: Vec<Card>) -> Result<Self, Self::Error> {
        Self::new(cards)
    }
}

impl From<Deck> for Vec<Card> {
    fn from(deck: Deck) -> Self {
        deck.cards
    }
}

/// Borrowing iterator over keystream values.
///
/// Rounds whose output card is a joker are skipped, so `next()` may run
/// several rounds per value; it never returns `None`.
pub struct Keystream<'a> {
    deck: &'a mut Deck,
}

impl Iterator for Keystream<'_> {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        loop {
            if let Some(value) = self.deck.advance() {
                return Some(value);
            }
        }
    }
}

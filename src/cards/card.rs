//! Playing cards and their keystream values.
//!
//! A [`Card`] is either one of the 52 ranked cards (rank x suit) or one of
//! the two jokers. Cards are immutable values compared by value equality.
//!
//! ## Card values
//!
//! The keystream value of a card depends only on its rank: A=1 through K=13,
//! suit ignored. Both jokers read as the sentinel 53.
//!
//! ## Text codes
//!
//! Cards round-trip through the deck-file string codes: rank code plus suit
//! code (`"10C"`, `"KH"`), or the literal `"JOKER_A"` / `"JOKER_B"`.
//!
//! ```
//! use pontifex::cards::Card;
//!
//! let card: Card = "10C".parse().unwrap();
//! assert_eq!(card.value(), 10);
//! assert_eq!(card.to_string(), "10C");
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PontifexError;

/// Keystream value assigned to either joker.
pub const JOKER_VALUE: u8 = 53;

/// Card suit. Suits distinguish cards but never contribute to card values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Suit {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
}

impl Suit {
    /// All suits, in the order used by the standard deck layout.
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    /// One-letter suit code used in deck files.
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Suit::Clubs => 'C',
            Suit::Diamonds => 'D',
            Suit::Hearts => 'H',
            Suit::Spades => 'S',
        }
    }
}

/// Card rank. The discriminant is the card value: A=1 through K=13.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Rank {
    Ace = 1,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}

impl Rank {
    /// All ranks, ace-low order.
    pub const ALL: [Rank; 13] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    /// Numeric value of this rank, 1 through 13.
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Rank code used in deck files.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
        }
    }
}

/// A playing card: ranked card or joker.
///
/// Serialized as its deck-file string code, so a JSON deck is a plain array
/// of strings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Card {
    /// One of the 52 rank x suit cards.
    Ranked { rank: Rank, suit: Suit },
    /// The first joker, moved one step per round.
    JokerA,
    /// The second joker, moved two steps per round.
    JokerB,
}

impl Card {
    /// Create a ranked card.
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self::Ranked { rank, suit }
    }

    /// Keystream value of this card: rank value 1-13, or 53 for a joker.
    #[must_use]
    pub const fn value(self) -> u8 {
        match self {
            Card::Ranked { rank, .. } => rank.value(),
            Card::JokerA | Card::JokerB => JOKER_VALUE,
        }
    }

    /// Is this card one of the two jokers?
    #[must_use]
    pub const fn is_joker(self) -> bool {
        matches!(self, Card::JokerA | Card::JokerB)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Card::JokerA => f.write_str("JOKER_A"),
            Card::JokerB => f.write_str("JOKER_B"),
            Card::Ranked { rank, suit } => write!(f, "{}{}", rank.code(), suit.code()),
        }
    }
}

impl FromStr for Card {
    type Err = PontifexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "JOKER_A" => return Ok(Card::JokerA),
            "JOKER_B" => return Ok(Card::JokerB),
            _ => {}
        }
        if !s.is_ascii() || s.len() < 2 {
            return Err(PontifexError::InvalidCardCode(s.to_string()));
        }
        let (rank_code, suit_code) = s.split_at(s.len() - 1);
        let suit = match suit_code {
            "C" => Suit::Clubs,
            "D" => Suit::Diamonds,
            "H" => Suit::Hearts,
            "S" => Suit::Spades,
            _ => return Err(PontifexError::InvalidCardCode(s.to_string())),
        };
        let rank = Rank::ALL
            .into_iter()
            .find(|r| r.code() == rank_code)
            .ok_or_else(|| PontifexError::InvalidCardCode(s.to_string()))?;
        Ok(Card::new(rank, suit))
    }
}

impl TryFrom<String> for Card {
    type Error = PontifexError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Card> for String {
    fn from(card: Card) -> Self {
        card.to_string()
    }
}

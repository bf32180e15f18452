//! The letter-substitution cipher layer.
//!
//! [`Cipher`] owns a deck for the length of one message, pulling one
//! keystream value per letter and folding it into the letter value with
//! modular arithmetic. Encryption and decryption are mirror images sharing
//! the same keystream-consumption protocol.
//!
//! ## Normalization
//!
//! Input is uppercased and stripped of whitespace before processing. Any
//! remaining character outside A-Z is rejected; letter arithmetic never
//! sees it.
//!
//! ```
//! use pontifex::{Cipher, Deck, Mode};
//!
//! let mut cipher = Cipher::new(Deck::standard());
//! let ciphertext = cipher.process("DO NOT USE PC", Mode::Encrypt).unwrap();
//! assert_eq!(ciphertext, "HAURXDVLSK");
//! ```

use crate::cards::Deck;
use crate::error::PontifexError;

/// Direction of a cipher run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Encrypt,
    Decrypt,
}

/// Cipher processor: a deck plus the letter arithmetic that consumes it.
///
/// The deck mutates as keystream values are drawn, so decryption must start
/// from a fresh copy of the deck used to encrypt.
#[derive(Debug)]
pub struct Cipher {
    deck: Deck,
}

impl Cipher {
    /// Take exclusive ownership of a deck for one cipher session.
    #[must_use]
    pub fn new(deck: Deck) -> Self {
        Self { deck }
    }

    /// Encrypt a message. Shorthand for [`Cipher::process`] with
    /// [`Mode::Encrypt`].
    pub fn encrypt(&mut self, message: &str) -> Result<String, PontifexError> {
        self.process(message, Mode::Encrypt)
    }

    /// Decrypt a message. Shorthand for [`Cipher::process`] with
    /// [`Mode::Decrypt`].
    pub fn decrypt(&mut self, message: &str) -> Result<String, PontifexError> {
        self.process(message, Mode::Decrypt)
    }

    /// Normalize the message, then combine each letter with one keystream
    /// value. Deterministic given the same starting deck and input.
    ///
    /// # Errors
    ///
    /// [`PontifexError::UnsupportedCharacter`] if the normalized message
    /// contains anything outside A-Z.
    pub fn process(&mut self, message: &str, mode: Mode) -> Result<String, PontifexError> {
        let letters = normalize(message)?;
        let mut output = String::with_capacity(letters.len());
        for (byte, key) in letters.bytes().zip(self.deck.keystream_iter()) {
            let letter = u16::from(byte - b'A') + 1;
            let key = u16::from(key);
            let combined = match mode {
                Mode::Encrypt => (letter + key) % 26,
                Mode::Decrypt => (letter + 26 - key) % 26,
            };
            // 0 wraps to 26 so the result maps back onto A-Z.
            let combined = if combined == 0 { 26 } else { combined };
            output.push(char::from(b'A' + combined as u8 - 1));
        }
        Ok(output)
    }
}

/// Uppercase the message and strip whitespace, rejecting anything that does
/// not normalize to A-Z.
fn normalize(message: &str) -> Result<String, PontifexError> {
    let mut letters = String::with_capacity(message.len());
    for ch in message.chars() {
        if ch.is_whitespace() {
            continue;
        }
        let upper = ch.to_ascii_uppercase();
        if !upper.is_ascii_uppercase() {
            return Err(PontifexError::UnsupportedCharacter(ch));
        }
        letters.push(upper);
    }
    Ok(letters)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_uppercases_and_strips_whitespace() {
        assert_eq!(normalize("do Not\tuse pc\n").unwrap(), "DONOTUSEPC");
        assert_eq!(normalize("").unwrap(), "");
    }

    #[test]
    fn test_normalize_rejects_non_letters() {
        for input in ["ATTACK AT 9", "A-B", "naïve", "über"] {
            assert!(
                matches!(
                    normalize(input),
                    Err(PontifexError::UnsupportedCharacter(_))
                ),
                "input {input:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_empty_message_is_empty_output() {
        let mut cipher = Cipher::new(Deck::standard());
        assert_eq!(cipher.process("  ", Mode::Encrypt).unwrap(), "");
    }

    #[test]
    fn test_zero_wraps_to_z() {
        // Keystream value 4 against the letter V: (22 + 4) % 26 == 0,
        // which must map to Z, not off the end of the alphabet.
        let mut cipher = Cipher::new(Deck::standard());
        let out = cipher.process("V", Mode::Encrypt).unwrap();
        assert_eq!(out, "Z");
    }
}

//! End-to-end cipher tests.
//!
//! Reference fixtures were produced by running the Pontifex round sequence
//! once from the standard starting order (clubs, diamonds, hearts, spades,
//! each ace through king, jokers at the bottom) and pinning the results.

use pontifex::{Cipher, Deck, Mode, PontifexError};
use proptest::prelude::*;

/// First 15 keystream values from the standard starting order.
const STANDARD_KEYSTREAM: [u8; 15] = [4, 12, 7, 3, 4, 9, 3, 7, 3, 8, 11, 12, 11, 10, 1];

// =============================================================================
// Pinned Reference Vectors
// =============================================================================

#[test]
fn test_standard_deck_keystream() {
    let mut deck = Deck::standard();
    assert_eq!(deck.keystream(15), STANDARD_KEYSTREAM);
}

#[test]
fn test_encrypt_reference_vector() {
    let mut cipher = Cipher::new(Deck::standard());
    let ciphertext = cipher.encrypt("DO NOT USE PC").unwrap();
    assert_eq!(ciphertext, "HAURXDVLSK");
}

#[test]
fn test_decrypt_reference_vector() {
    let mut cipher = Cipher::new(Deck::standard());
    let plaintext = cipher.decrypt("HAURXDVLSK").unwrap();
    assert_eq!(plaintext, "DONOTUSEPC");
}

#[test]
fn test_hello_world_vector() {
    let mut cipher = Cipher::new(Deck::standard());
    let ciphertext = cipher.encrypt("HELLO WORLD").unwrap();
    assert_eq!(ciphertext, "LQSOSFRYOL");
}

// =============================================================================
// Determinism and Round Trips
// =============================================================================

#[test]
fn test_keystream_deterministic_across_copies() {
    let deck = Deck::shuffled_with_seed(7);
    let mut a = deck.clone();
    let mut b = deck;
    assert_eq!(a.keystream(40), b.keystream(40));
}

#[test]
fn test_case_and_spacing_do_not_change_ciphertext() {
    let mut spaced = Cipher::new(Deck::standard());
    let mut compact = Cipher::new(Deck::standard());
    assert_eq!(
        spaced.encrypt("do not use pc").unwrap(),
        compact.encrypt("DONOTUSEPC").unwrap()
    );
}

#[test]
fn test_round_trip_long_message() {
    let deck = Deck::shuffled_with_seed(99);
    let message = "THEQUICKBROWNFOXJUMPSOVERTHELAZYDOG".repeat(4);

    let mut encrypter = Cipher::new(deck.clone());
    let ciphertext = encrypter.encrypt(&message).unwrap();
    assert_ne!(ciphertext, message);

    let mut decrypter = Cipher::new(deck);
    assert_eq!(decrypter.decrypt(&ciphertext).unwrap(), message);
}

// =============================================================================
// Malformed Input
// =============================================================================

#[test]
fn test_digits_are_rejected() {
    let mut cipher = Cipher::new(Deck::standard());
    assert!(matches!(
        cipher.encrypt("MEET AT 9AM"),
        Err(PontifexError::UnsupportedCharacter('9'))
    ));
}

#[test]
fn test_punctuation_is_rejected() {
    let mut cipher = Cipher::new(Deck::standard());
    assert!(matches!(
        cipher.decrypt("HAURX-DVLSK"),
        Err(PontifexError::UnsupportedCharacter('-'))
    ));
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn prop_encrypt_decrypt_round_trip(seed in any::<u64>(), message in "[A-Z]{1,80}") {
        let deck = Deck::shuffled_with_seed(seed);

        let mut encrypter = Cipher::new(deck.clone());
        let ciphertext = encrypter.encrypt(&message).unwrap();
        prop_assert_eq!(ciphertext.len(), message.len());

        let mut decrypter = Cipher::new(deck);
        prop_assert_eq!(decrypter.decrypt(&ciphertext).unwrap(), message);
    }

    #[test]
    fn prop_keystream_values_in_range(seed in any::<u64>(), n in 1..64usize) {
        let mut deck = Deck::shuffled_with_seed(seed);
        for value in deck.keystream(n) {
            prop_assert!((1..=26).contains(&value));
        }
    }

    #[test]
    fn prop_ciphertext_is_uppercase_letters(seed in any::<u64>(), message in "[A-Za-z ]{1,60}") {
        let mut cipher = Cipher::new(Deck::shuffled_with_seed(seed));
        let ciphertext = cipher.encrypt(&message).unwrap();
        prop_assert!(ciphertext.bytes().all(|b| b.is_ascii_uppercase()));
    }
}

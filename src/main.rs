//! Command-line interface for the Pontifex cipher.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgGroup, CommandFactory, Parser};

use pontifex::{deckfile, Cipher, Mode, PontifexError};

#[derive(Parser)]
#[command(
    name = "pontifex",
    version,
    about = "Pontifex (Solitaire) card-deck cipher",
    group(ArgGroup::new("action").required(true).args(["encrypt", "decrypt", "generate"]))
)]
struct Cli {
    /// Encrypt a message
    #[arg(short = 'e', long, value_name = "TEXT", requires = "deck")]
    encrypt: Option<String>,

    /// Decrypt a message
    #[arg(short = 'd', long, value_name = "TEXT", requires = "deck")]
    decrypt: Option<String>,

    /// JSON file containing the deck order
    #[arg(long, value_name = "FILE")]
    deck: Option<PathBuf>,

    /// Generate a random deck JSON file and exit
    #[arg(long, value_name = "FILE", conflicts_with = "deck")]
    generate: Option<PathBuf>,
}

fn main() -> ExitCode {
    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), PontifexError> {
    if let Some(path) = cli.generate {
        deckfile::generate(&path)?;
        println!("Generated random deck saved to {}", path.display());
        return Ok(());
    }

    let action = cli
        .encrypt
        .map(|text| (text, Mode::Encrypt))
        .or_else(|| cli.decrypt.map(|text| (text, Mode::Decrypt)));

    match (action, cli.deck) {
        (Some((text, mode)), Some(path)) => {
            let deck = deckfile::load(path)?;
            let mut cipher = Cipher::new(deck);
            let output = cipher.process(&text, mode)?;
            match mode {
                Mode::Encrypt => println!("Ciphertext: {output}"),
                Mode::Decrypt => println!("Plaintext: {output}"),
            }
            Ok(())
        }
        // The arg group and `requires` rules make this arm unreachable;
        // fall back to usage output rather than panicking.
        _ => {
            let _ = Cli::command().print_help();
            Ok(())
        }
    }
}

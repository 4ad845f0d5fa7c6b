//! Adversarial Wordle simulator
//!
//! Game state, the player interfaces, the baseline random players and the
//! single-game and batch runners.

mod player;
mod runner;
mod wordle;

pub use player::{Adversary, Guesser, RandomAdversary, RandomGuesser, random_answer, random_status};
pub use runner::{BatchConfig, BatchReport, GameRecord, run_game, run_games};
pub use wordle::{AdversarialWordle, Winner};

//! Playing single games and batches of games

use super::{Adversary, AdversarialWordle, Guesser, Winner};
use crate::core::Word;
use crate::error::Result;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Play one game to completion and return the finished game
///
/// # Errors
/// Returns any error raised by a player or by the game rejecting a move.
pub fn run_game<G, A, R>(
    guesser: &mut G,
    adversary: &mut A,
    words: &[Word],
    max_guesses: usize,
    rng: &mut R,
) -> Result<AdversarialWordle>
where
    G: Guesser,
    A: Adversary,
    R: Rng + ?Sized,
{
    let mut game = AdversarialWordle::new(words, max_guesses)?;

    while game.winner().is_none() {
        if game.is_guesser_turn() {
            let guess = guesser.make_guess(&game, rng)?;
            game.record_guesser_move(guess)?;
        } else {
            let status = adversary.make_status(&game, rng)?;
            game.record_adversary_move(status)?;
        }
    }

    log::trace!(
        "game finished after {} guesses: {:?}",
        game.guesses().len(),
        game.winner()
    );
    Ok(game)
}

/// Configuration for a batch of games
#[derive(Debug, Clone, Copy)]
pub struct BatchConfig {
    pub games: usize,
    pub max_guesses: usize,
    /// Game `i` draws from an RNG seeded with `seed + i`
    pub seed: u64,
}

impl BatchConfig {
    #[must_use]
    pub const fn new(games: usize, max_guesses: usize) -> Self {
        Self {
            games,
            max_guesses,
            seed: 0,
        }
    }

    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

/// Summary of one finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameRecord {
    pub winner: Winner,
    pub guesses: usize,
}

/// Result of a batch of games
#[derive(Debug, Clone)]
pub struct BatchReport {
    pub records: Vec<GameRecord>,
    pub guesser_wins: usize,
    pub adversary_wins: usize,
    /// Guesses used in games the guesser won
    pub win_distribution: BTreeMap<usize, usize>,
    pub duration: Duration,
}

impl BatchReport {
    fn from_records(records: Vec<GameRecord>, duration: Duration) -> Self {
        let mut win_distribution = BTreeMap::new();
        let mut guesser_wins = 0;
        for record in &records {
            if record.winner == Winner::Guesser {
                guesser_wins += 1;
                *win_distribution.entry(record.guesses).or_insert(0) += 1;
            }
        }

        Self {
            guesser_wins,
            adversary_wins: records.len() - guesser_wins,
            records,
            win_distribution,
            duration,
        }
    }

    #[must_use]
    pub fn games(&self) -> usize {
        self.records.len()
    }

    /// Fraction of games won by the guesser (0.0 for an empty batch)
    #[must_use]
    pub fn guesser_win_rate(&self) -> f64 {
        if self.records.is_empty() {
            0.0
        } else {
            self.guesser_wins as f64 / self.records.len() as f64
        }
    }
}

/// Play `config.games` independent games in parallel
///
/// Every game gets fresh players from the factories, so tree cursors never
/// leak from one game into the next, and its own seeded RNG, so the report is
/// identical however the games are scheduled.
///
/// # Errors
/// Returns the first error raised by any game.
pub fn run_games<G, A, FG, FA>(
    config: BatchConfig,
    words: &[Word],
    make_guesser: FG,
    make_adversary: FA,
) -> Result<BatchReport>
where
    G: Guesser,
    A: Adversary,
    FG: Fn() -> G + Sync,
    FA: Fn() -> A + Sync,
{
    let start = Instant::now();

    let records = (0..config.games)
        .into_par_iter()
        .map(|index| -> Result<GameRecord> {
            let mut rng = StdRng::seed_from_u64(config.seed.wrapping_add(index as u64));
            let game = run_game(
                &mut make_guesser(),
                &mut make_adversary(),
                words,
                config.max_guesses,
                &mut rng,
            )?;
            Ok(GameRecord {
                winner: game.winner().unwrap_or(Winner::Adversary),
                guesses: game.guesses().len(),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let report = BatchReport::from_records(records, start.elapsed());
    log::info!(
        "played {} games: guesser {} / adversary {}",
        report.games(),
        report.guesser_wins,
        report.adversary_wins
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{RandomAdversary, RandomGuesser};

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|t| Word::new(*t).unwrap()).collect()
    }

    #[test]
    fn run_game_reaches_a_winner() {
        let words = words(&["hello", "words", "world", "music", "tiger"]);
        let mut rng = StdRng::seed_from_u64(5);

        let game = run_game(&mut RandomGuesser, &mut RandomAdversary, &words, 3, &mut rng).unwrap();

        assert!(game.winner().is_some());
        assert!(game.guesses().len() <= 3);
        assert_eq!(game.guesses().len(), game.statuses().len());
    }

    #[test]
    fn single_word_game_is_won_immediately() {
        let words = words(&["music"]);
        let mut rng = StdRng::seed_from_u64(1);

        let game = run_game(&mut RandomGuesser, &mut RandomAdversary, &words, 3, &mut rng).unwrap();

        assert_eq!(game.winner(), Some(Winner::Guesser));
        assert_eq!(game.guesses().len(), 1);
    }

    #[test]
    fn batch_counts_add_up() {
        let words = words(&["hello", "words", "world", "music", "tiger", "sepal"]);
        let config = BatchConfig::new(25, 3).with_seed(9);

        let report = run_games(config, &words, || RandomGuesser, || RandomAdversary).unwrap();

        assert_eq!(report.games(), 25);
        assert_eq!(report.guesser_wins + report.adversary_wins, 25);
        assert_eq!(
            report.win_distribution.values().sum::<usize>(),
            report.guesser_wins
        );
        assert!(report.win_distribution.keys().all(|&g| (1..=3).contains(&g)));
    }

    #[test]
    fn batch_is_deterministic_for_a_seed() {
        let words = words(&["hello", "words", "world", "music", "tiger", "sepal"]);
        let config = BatchConfig::new(30, 2).with_seed(1234);

        let first = run_games(config, &words, || RandomGuesser, || RandomAdversary).unwrap();
        let second = run_games(config, &words, || RandomGuesser, || RandomAdversary).unwrap();

        assert_eq!(first.records, second.records);
    }

    #[test]
    fn empty_batch_has_zero_win_rate() {
        let words = words(&["hello"]);
        let report = run_games(BatchConfig::new(0, 3), &words, || RandomGuesser, || {
            RandomAdversary
        })
        .unwrap();
        assert_eq!(report.games(), 0);
        assert_eq!(report.guesser_win_rate(), 0.0);
    }
}

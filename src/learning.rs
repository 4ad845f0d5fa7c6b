//! Self-play learning
//!
//! An exploring guesser plays a random adversary over and over, and every
//! finished game is merged into one shared tree: the final node gets 1.0 if
//! the guesser won and 0.0 otherwise. Later guessers read what earlier games
//! wrote, so a falling exploration probability gradually turns exploration
//! into exploitation.

use crate::core::Word;
use crate::error::{Error, Result, check_probability};
use crate::game::{RandomAdversary, Winner, run_game};
use crate::policy::ExploringGuesser;
use crate::tree::GameTree;
use rand::Rng;

/// Configuration for a learning run
#[derive(Debug, Clone, PartialEq)]
pub struct LearningConfig {
    pub max_guesses: usize,
    /// One game is played per entry, in order
    pub exploration_probabilities: Vec<f64>,
}

impl LearningConfig {
    #[must_use]
    pub const fn new(max_guesses: usize, exploration_probabilities: Vec<f64>) -> Self {
        Self {
            max_guesses,
            exploration_probabilities,
        }
    }

    /// `rounds` games at a fixed exploration probability
    #[must_use]
    pub fn constant(max_guesses: usize, probability: f64, rounds: usize) -> Self {
        Self::new(max_guesses, vec![probability; rounds])
    }

    /// `rounds` games with exploration moving linearly from `start` to `end`
    ///
    /// Every entry lies between `start` and `end`, and the last is `end`.
    #[must_use]
    pub fn annealed(max_guesses: usize, start: f64, end: f64, rounds: usize) -> Self {
        let (low, high) = (start.min(end), start.max(end));
        let last = rounds.saturating_sub(1);
        let schedule = (0..rounds)
            .map(|i| {
                if last == 0 {
                    start
                } else if i == last {
                    end
                } else {
                    let t = i as f64 / last as f64;
                    (start + (end - start) * t).max(low).min(high)
                }
            })
            .collect();
        Self::new(max_guesses, schedule)
    }

    fn validate(&self) -> Result<()> {
        if self.exploration_probabilities.is_empty() {
            return Err(Error::NoExplorationProbabilities);
        }
        for &p in &self.exploration_probabilities {
            check_probability(p)?;
        }
        Ok(())
    }
}

impl Default for LearningConfig {
    fn default() -> Self {
        Self::constant(4, 0.5, 1000)
    }
}

/// What happened in one round, reported to the observer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoundOutcome {
    pub round: usize,
    pub exploration_probability: f64,
    pub winner: Winner,
    pub guesses: usize,
    pub guesser_wins: usize,
    pub adversary_wins: usize,
    pub tree_size: usize,
}

/// The learned tree and the record of every round
#[derive(Debug, Clone)]
pub struct LearningOutcome {
    pub tree: GameTree,
    pub winners: Vec<Winner>,
    pub guesser_wins: usize,
    pub adversary_wins: usize,
}

impl LearningOutcome {
    #[must_use]
    pub fn rounds(&self) -> usize {
        self.winners.len()
    }

    #[must_use]
    pub fn guesser_win_rate(&self) -> f64 {
        win_rate(&self.winners)
    }

    /// Guesser win rate over all rounds so far, after each round
    #[must_use]
    pub fn cumulative_win_rates(&self) -> Vec<f64> {
        let mut wins = 0usize;
        self.winners
            .iter()
            .enumerate()
            .map(|(i, &winner)| {
                if winner == Winner::Guesser {
                    wins += 1;
                }
                wins as f64 / (i + 1) as f64
            })
            .collect()
    }

    /// Guesser win rate over each consecutive block of `window` rounds
    ///
    /// The last block may be shorter. A zero window yields nothing.
    #[must_use]
    pub fn windowed_win_rates(&self, window: usize) -> Vec<f64> {
        if window == 0 {
            return Vec::new();
        }
        self.winners.chunks(window).map(win_rate).collect()
    }
}

fn win_rate(winners: &[Winner]) -> f64 {
    if winners.is_empty() {
        return 0.0;
    }
    let wins = winners.iter().filter(|&&w| w == Winner::Guesser).count();
    wins as f64 / winners.len() as f64
}

/// Play one game per exploration probability, learning into a shared tree
///
/// Each round gets a fresh `ExploringGuesser` over the tree built so far and
/// a fresh `RandomAdversary`. `on_round` sees every outcome as it happens.
///
/// # Errors
/// Returns `Error::NoExplorationProbabilities` or
/// `Error::ProbabilityOutOfRange` before any game is played, and otherwise
/// the first error raised while playing.
pub fn run_learning_algorithm<R, F>(
    config: &LearningConfig,
    words: &[Word],
    rng: &mut R,
    mut on_round: F,
) -> Result<LearningOutcome>
where
    R: Rng + ?Sized,
    F: FnMut(&RoundOutcome),
{
    config.validate()?;

    let mut tree = GameTree::new();
    let mut winners = Vec::with_capacity(config.exploration_probabilities.len());
    let mut guesser_wins = 0;

    for (round, &probability) in config.exploration_probabilities.iter().enumerate() {
        let game = {
            let mut guesser = ExploringGuesser::new(&tree, probability)?;
            run_game(
                &mut guesser,
                &mut RandomAdversary,
                words,
                config.max_guesses,
                rng,
            )?
        };

        let winner = game.winner().unwrap_or(Winner::Adversary);
        let terminal = if winner == Winner::Guesser {
            guesser_wins += 1;
            1.0
        } else {
            0.0
        };
        tree.insert_move_sequence(&game.move_sequence(), terminal)?;
        winners.push(winner);

        let outcome = RoundOutcome {
            round,
            exploration_probability: probability,
            winner,
            guesses: game.guesses().len(),
            guesser_wins,
            adversary_wins: winners.len() - guesser_wins,
            tree_size: tree.len(),
        };
        log::debug!(
            "round {round} (p = {probability:.2}): {winner} in {} guesses, tree has {} nodes",
            outcome.guesses,
            outcome.tree_size
        );
        on_round(&outcome);
    }

    let adversary_wins = winners.len() - guesser_wins;
    log::info!(
        "learning finished after {} games: guesser {guesser_wins} / adversary {adversary_wins}, {} nodes",
        winners.len(),
        tree.len()
    );

    Ok(LearningOutcome {
        tree,
        winners,
        guesser_wins,
        adversary_wins,
    })
}

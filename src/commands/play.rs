//! Playing batches of games over a game tree
//!
//! Shared by the seeded and complete tree commands: both produce a tree and
//! then pit tree-driven players against each other on it.

use crate::core::Word;
use crate::error::Result;
use crate::game::{AdversarialWordle, BatchConfig, BatchReport, run_game, run_games};
use crate::policy::{AdversaryKind, GuesserKind, PolicyName};
use crate::tree::GameTree;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::time::Duration;

/// Which players meet, and how many times
#[derive(Debug, Clone, Copy)]
pub struct PlayConfig {
    pub batch: BatchConfig,
    pub guesser: PolicyName,
    pub adversary: PolicyName,
}

impl PlayConfig {
    #[must_use]
    pub const fn new(batch: BatchConfig, guesser: PolicyName, adversary: PolicyName) -> Self {
        Self {
            batch,
            guesser,
            adversary,
        }
    }
}

/// A tree together with the games played on it
#[derive(Debug, Clone)]
pub struct TreeRun {
    pub tree: GameTree,
    /// Time spent loading or building the tree
    pub build_time: Duration,
    pub report: BatchReport,
}

/// Play `config.batch.games` games between the configured players on `tree`
///
/// # Errors
/// Returns the first error raised by any game.
pub fn play_on_tree(tree: &GameTree, words: &[Word], config: &PlayConfig) -> Result<BatchReport> {
    if !config.guesser.uses_tree() && !config.adversary.uses_tree() {
        log::warn!("neither player consults the game tree");
    }
    log::info!(
        "playing {} games: {} guesser vs {} adversary",
        config.batch.games,
        config.guesser,
        config.adversary
    );

    run_games(
        config.batch,
        words,
        || GuesserKind::new(config.guesser, tree),
        || AdversaryKind::new(config.adversary, tree),
    )
}

/// Play one game between the configured players, for display
///
/// Uses the same seed as the first game of the batch.
///
/// # Errors
/// Returns any error raised while playing.
pub fn sample_game(tree: &GameTree, words: &[Word], config: &PlayConfig) -> Result<AdversarialWordle> {
    let mut rng = StdRng::seed_from_u64(config.batch.seed);
    run_game(
        &mut GuesserKind::new(config.guesser, tree),
        &mut AdversaryKind::new(config.adversary, tree),
        words,
        config.batch.max_guesses,
        &mut rng,
    )
}

//! Self-play learning command
//!
//! Runs the learning loop with a progress bar and returns the learned tree.

use crate::core::Word;
use crate::error::Result;
use crate::learning::{LearningConfig, LearningOutcome, run_learning_algorithm};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Run the learning loop from `seed`, optionally drawing a progress bar
///
/// # Errors
/// See `run_learning_algorithm`.
pub fn run_learn(
    config: &LearningConfig,
    words: &[Word],
    seed: u64,
    show_progress: bool,
) -> Result<LearningOutcome> {
    let rounds = config.exploration_probabilities.len() as u64;
    let pb = if show_progress {
        println!("🎯 Learning from {rounds} self-play games...");
        ProgressBar::new(rounds)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::with_template(
            "{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}",
        )
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▓▒░"),
    );

    let mut rng = StdRng::seed_from_u64(seed);
    let result = run_learning_algorithm(config, words, &mut rng, |round| {
        pb.set_message(format!(
            "p = {:.2} | guesser {} / adversary {}",
            round.exploration_probability, round.guesser_wins, round.adversary_wins
        ));
        pb.inc(1);
    });

    match &result {
        Ok(outcome) => pb.finish_with_message(format!(
            "{} ({} nodes)",
            "Complete!".green(),
            outcome.tree.len()
        )),
        Err(_) => pb.abandon_with_message("Failed".red().to_string()),
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::{STANDARD, loader::words_from_slice};

    #[test]
    fn hidden_progress_run_learns_a_tree() {
        let words = words_from_slice(STANDARD);
        let config = LearningConfig::constant(4, 0.5, 25);

        let outcome = run_learn(&config, &words, 99, false).unwrap();

        assert_eq!(outcome.rounds(), 25);
        assert!(outcome.tree.len() > 1);
    }
}

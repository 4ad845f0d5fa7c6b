//! Adversarial Wordle game trees - CLI
//!
//! Seeds, builds and learns game trees, then plays tree-driven players on them.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use wordle_gametree::{
    commands::{PlayConfig, TreeRun, run_complete, run_learn, run_seeded, sample_game},
    core::{Move, Word},
    game::{AdversarialWordle, BatchConfig},
    learning::LearningConfig,
    output::{print_game, print_learning_outcome, print_tree_run, print_tree_summary},
    policy::PolicyName,
    tree::{build_complete_tree, load_game_tree},
    wordlists::{SMALL, STANDARD, loader::load_from_file, loader::words_from_slice},
};

#[derive(Parser)]
#[command(
    name = "wordle_gametree",
    about = "Adversarial Wordle game trees: seeded, complete and learned through self-play",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Word set: 'standard' (100 words), 'small' (25 words), or path to file
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<String>,

    /// Seed for every random choice
    #[arg(long, global = true, default_value_t = 0)]
    seed: u64,
}

#[derive(Subcommand)]
enum Commands {
    /// Play games on a tree seeded from recorded games
    Seeded {
        /// CSV file of recorded move sequences
        #[arg(default_value = "data/games/small_sample.csv")]
        games_file: PathBuf,

        #[command(flatten)]
        play: PlayArgs,
    },

    /// Play games on a complete game tree (default word set: small)
    Complete {
        /// Plies to expand below the start of the game
        #[arg(short, long, default_value_t = 6)]
        depth: usize,

        #[command(flatten)]
        play: PlayArgs,
    },

    /// Learn a game tree through self-play
    Learn {
        /// Number of games to play
        #[arg(short = 'n', long, default_value_t = 1000)]
        games: usize,

        /// Maximum guesses per game
        #[arg(short, long, default_value_t = 4)]
        max_guesses: usize,

        /// Exploration probability of the first game
        #[arg(short, long, default_value_t = 0.5)]
        exploration: f64,

        /// Anneal exploration linearly down to this probability
        #[arg(long)]
        anneal_to: Option<f64>,

        /// Games per point of the win rate summary
        #[arg(long, default_value_t = 50)]
        window: usize,
    },

    /// Inspect a seeded or complete game tree
    Tree {
        /// Load the tree from this CSV file instead of building it
        #[arg(short, long)]
        games_file: Option<PathBuf>,

        /// Plies to expand when building a complete tree
        #[arg(short, long, default_value_t = 2)]
        depth: usize,

        /// Maximum guesses when building a complete tree
        #[arg(short, long, default_value_t = 3)]
        max_guesses: usize,

        /// Print the whole tree as an indented outline
        #[arg(short, long)]
        outline: bool,
    },
}

#[derive(clap::Args)]
struct PlayArgs {
    /// Number of games to play
    #[arg(short = 'n', long, default_value_t = 100)]
    games: usize,

    /// Maximum guesses per game
    #[arg(short, long)]
    max_guesses: Option<usize>,

    /// Guesser policy: random, random-tree or greedy-tree
    #[arg(short, long)]
    guesser: Option<PolicyName>,

    /// Adversary policy: random, random-tree or greedy-tree
    #[arg(short, long)]
    adversary: Option<PolicyName>,

    /// Show one sample game
    #[arg(short, long)]
    verbose: bool,
}

impl PlayArgs {
    fn config(&self, seed: u64, defaults: (usize, PolicyName, PolicyName)) -> PlayConfig {
        let (max_guesses, guesser, adversary) = defaults;
        PlayConfig::new(
            BatchConfig::new(self.games, self.max_guesses.unwrap_or(max_guesses)).with_seed(seed),
            self.guesser.unwrap_or(guesser),
            self.adversary.unwrap_or(adversary),
        )
    }
}

/// Resolve the -w flag, falling back to `default` when it is absent
fn load_wordlist(choice: Option<&str>, default: &[&str]) -> Result<Vec<Word>> {
    match choice {
        None => Ok(words_from_slice(default)),
        Some("standard") => Ok(words_from_slice(STANDARD)),
        Some("small") => Ok(words_from_slice(SMALL)),
        Some(path) => load_from_file(path).with_context(|| format!("loading word set '{path}'")),
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let wordlist = cli.wordlist.as_deref();

    match cli.command {
        Commands::Seeded { games_file, play } => {
            let words = load_wordlist(wordlist, STANDARD)?;
            let config = play.config(
                cli.seed,
                (4, PolicyName::RandomTree, PolicyName::Random),
            );
            run_seeded_command(&games_file, &words, &config, play.verbose)
        }
        Commands::Complete { depth, play } => {
            let words = load_wordlist(wordlist, SMALL)?;
            let config = play.config(
                cli.seed,
                (3, PolicyName::GreedyTree, PolicyName::Random),
            );
            run_complete_command(depth, &words, &config, play.verbose)
        }
        Commands::Learn {
            games,
            max_guesses,
            exploration,
            anneal_to,
            window,
        } => {
            let words = load_wordlist(wordlist, STANDARD)?;
            let config = match anneal_to {
                Some(end) => LearningConfig::annealed(max_guesses, exploration, end, games),
                None => LearningConfig::constant(max_guesses, exploration, games),
            };
            let outcome = run_learn(&config, &words, cli.seed, true)?;
            print_learning_outcome(&outcome, window);
            Ok(())
        }
        Commands::Tree {
            games_file,
            depth,
            max_guesses,
            outline,
        } => {
            let tree = if let Some(path) = games_file {
                load_game_tree(&path)
                    .with_context(|| format!("loading games file '{}'", path.display()))?
            } else {
                let words = load_wordlist(wordlist, SMALL)?;
                let game = AdversarialWordle::new(&words, max_guesses)?;
                build_complete_tree(Move::Start, &game, depth)?
            };
            print_tree_summary(&tree, outline);
            Ok(())
        }
    }
}

fn run_seeded_command(
    games_file: &Path,
    words: &[Word],
    config: &PlayConfig,
    verbose: bool,
) -> Result<()> {
    let run = run_seeded(games_file, words, config)
        .with_context(|| format!("playing on games file '{}'", games_file.display()))?;
    report(&format!("SEEDED TREE: {}", games_file.display()), &run, words, config, verbose)
}

fn run_complete_command(
    depth: usize,
    words: &[Word],
    config: &PlayConfig,
    verbose: bool,
) -> Result<()> {
    let run = run_complete(words, depth, config)?;
    report(&format!("COMPLETE TREE: depth {depth}"), &run, words, config, verbose)
}

fn report(title: &str, run: &TreeRun, words: &[Word], config: &PlayConfig, verbose: bool) -> Result<()> {
    print_tree_run(title, run, config);
    if verbose {
        let game = sample_game(&run.tree, words, config)?;
        print_game(&game);
    }
    Ok(())
}

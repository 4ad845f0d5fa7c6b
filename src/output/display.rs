//! Display functions for command results

use super::formatters::{create_progress_bar, percent, rate_bar, sparkline};
use crate::commands::{PlayConfig, TreeRun};
use crate::game::{AdversarialWordle, BatchReport, Winner};
use crate::learning::LearningOutcome;
use crate::tree::GameTree;
use colored::Colorize;

fn print_header(title: &str) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", title.bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());
}

/// Print a tree and the batch played on it
pub fn print_tree_run(title: &str, run: &TreeRun, config: &PlayConfig) {
    print_header(title);

    println!("\n🌳 {}", "Game tree:".bright_cyan().bold());
    println!("   Nodes:            {}", run.tree.len());
    println!("   Depth:            {}", run.tree.depth());
    println!(
        "   Openings:         {}",
        run.tree.get_subtrees(run.tree.root()).len()
    );
    println!("   Built in:         {:.2}s", run.build_time.as_secs_f64());

    println!("\n🎮 {}", "Players:".bright_cyan().bold());
    println!("   Guesser:          {}", config.guesser.to_string().bright_yellow());
    println!("   Adversary:        {}", config.adversary.to_string().bright_yellow());
    println!("   Max guesses:      {}", config.batch.max_guesses);

    print_batch_report(&run.report, config.batch.max_guesses);
}

/// Print win counts and the distribution of winning guess counts
pub fn print_batch_report(report: &BatchReport, max_guesses: usize) {
    let games = report.games();

    println!("\n📊 {}", "Results:".bright_cyan().bold());
    println!("   Games played:     {games}");
    println!(
        "   Guesser wins:     {} {}",
        report.guesser_wins,
        format!("({:.1}%)", percent(report.guesser_wins, games)).green()
    );
    println!(
        "   Adversary wins:   {} {}",
        report.adversary_wins,
        format!("({:.1}%)", percent(report.adversary_wins, games)).red()
    );
    println!("   Time taken:       {:.2}s", report.duration.as_secs_f64());

    if report.guesser_wins == 0 {
        return;
    }

    println!("\n📈 {}", "Winning guess counts:".bright_cyan().bold());
    let max_count = report.win_distribution.values().copied().max().unwrap_or(1);
    for guesses in 1..=max_guesses {
        let count = report.win_distribution.get(&guesses).copied().unwrap_or(0);
        let bar = create_progress_bar(count as f64, max_count as f64, 40);
        println!(
            "   {guesses}: {} {count:4} ({:5.1}%)",
            bar.green(),
            percent(count, report.guesser_wins)
        );
    }
}

/// Print one finished game, move by move
pub fn print_game(game: &AdversarialWordle) {
    println!("\n🔎 {}", "Sample game:".bright_cyan().bold());
    for (turn, guess) in game.guesses().iter().enumerate() {
        let status = game
            .statuses()
            .get(turn)
            .map_or_else(String::new, |s| format!("{} {s}", s.to_emoji()));
        println!("   {}. {} {status}", turn + 1, guess.text().to_uppercase());
    }

    match game.winner() {
        Some(Winner::Guesser) => println!("   {}", "Guesser wins".green().bold()),
        Some(Winner::Adversary) => println!("   {}", "Adversary wins".red().bold()),
        None => println!("   {}", "Undecided".yellow()),
    }
}

/// Print how the guesser fared while learning
pub fn print_learning_outcome(outcome: &LearningOutcome, window: usize) {
    print_header("SELF-PLAY LEARNING");

    let rounds = outcome.rounds();
    println!("\n📊 {}", "Results:".bright_cyan().bold());
    println!("   Games played:     {rounds}");
    println!(
        "   Guesser wins:     {} {}",
        outcome.guesser_wins,
        format!("({:.1}%)", percent(outcome.guesser_wins, rounds)).green()
    );
    println!(
        "   Adversary wins:   {} {}",
        outcome.adversary_wins,
        format!("({:.1}%)", percent(outcome.adversary_wins, rounds)).red()
    );
    println!("   Tree nodes:       {}", outcome.tree.len());
    println!("   Tree depth:       {}", outcome.tree.depth());

    let windows = outcome.windowed_win_rates(window);
    if windows.is_empty() {
        return;
    }

    println!(
        "\n📈 {}",
        format!("Guesser win rate per {window} games:")
            .bright_cyan()
            .bold()
    );
    println!("   {}", sparkline(&windows).green());
    if let (Some(first), Some(last)) = (windows.first(), windows.last()) {
        println!(
            "   First: [{}] {:5.1}%",
            rate_bar(*first, 30),
            first * 100.0
        );
        println!(
            "   Last:  [{}] {:5.1}%",
            rate_bar(*last, 30).green(),
            last * 100.0
        );
    }
    if let Some(overall) = outcome.cumulative_win_rates().last() {
        println!(
            "   Overall:          {}",
            format!("{:.1}%", overall * 100.0).bright_yellow().bold()
        );
    }
}

/// Print the size of a tree and its opening moves
///
/// With `outline`, the whole tree is printed as an indented outline.
pub fn print_tree_summary(tree: &GameTree, outline: bool) {
    print_header("GAME TREE");

    println!("\n   Nodes:            {}", tree.len());
    println!("   Depth:            {}", tree.depth());

    let openings = tree.get_subtrees(tree.root());
    if !openings.is_empty() {
        println!("\n🌳 {}", "Openings:".bright_cyan().bold());
        for &child in openings {
            let node = tree.node(child);
            println!(
                "   {:<8} [{}] {:.2}",
                node.mv().to_string(),
                rate_bar(node.win_probability(), 20),
                node.win_probability()
            );
        }
    }

    if outline {
        println!();
        print!("{tree}");
    }
}

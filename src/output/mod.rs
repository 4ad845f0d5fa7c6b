//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_batch_report, print_game, print_learning_outcome, print_tree_run, print_tree_summary,
};

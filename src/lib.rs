//! Adversarial Wordle game trees
//!
//! Decision trees over an alternating two-player word game: the guesser
//! proposes words and an adversary, never committed to an answer, replies
//! with any status consistent with at least one remaining candidate.
//!
//! Trees can be seeded from recorded games, built completely from a live
//! game, or learned through self-play, and drive tree-following players.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_gametree::core::{Move, Word};
//! use wordle_gametree::game::AdversarialWordle;
//! use wordle_gametree::tree::build_complete_tree;
//!
//! let words: Vec<Word> = ["hello", "words", "world"]
//!     .iter()
//!     .map(|w| Word::new(*w).unwrap())
//!     .collect();
//! let game = AdversarialWordle::new(&words, 3).unwrap();
//!
//! let tree = build_complete_tree(Move::Start, &game, 3).unwrap();
//! assert_eq!(tree.len(), 16);
//! ```

// Core domain types
pub mod core;

// Errors shared by every module
pub mod error;

// Game simulator and baseline players
pub mod game;

// Game trees: insertion, complete construction, seeding
pub mod tree;

// Tree-driven move selection
pub mod policy;

// Self-play learning loop
pub mod learning;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

pub use error::{Error, Result};

//! Game trees over Adversarial Wordle move sequences
//!
//! - `game_tree`: arena tree and merge-insertion
//! - `builder`: complete tree construction from a live game
//! - `seed`: loading trees from recorded games

mod builder;
mod game_tree;
pub mod seed;

pub use builder::build_complete_tree;
pub use game_tree::{GameTree, Node, NodeId};
pub use seed::{load_game_tree, parse_game_tree};

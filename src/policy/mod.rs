//! Move-selection policies driven by a game tree
//!
//! Each policy borrows a shared `GameTree` and keeps a private cursor into
//! it. On every turn the cursor first follows the opponent's move; if the
//! game has left the tree, or the node has no children, the policy falls
//! back to random play for the rest of the game.

mod cursor;
mod exploring;
mod greedy;
mod kind;
mod random;

pub use cursor::{TreeCursor, last_max, last_min};
pub use exploring::ExploringGuesser;
pub use greedy::{GreedyTreeAdversary, GreedyTreeGuesser};
pub use kind::{AdversaryKind, GuesserKind, PolicyName};
pub use random::{RandomTreeAdversary, RandomTreeGuesser};

//! Command implementations

pub mod complete;
pub mod learn;
pub mod play;
pub mod seeded;

pub use complete::run_complete;
pub use learn::run_learn;
pub use play::{PlayConfig, TreeRun, play_on_tree, sample_game};
pub use seeded::run_seeded;

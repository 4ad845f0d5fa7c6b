//! Word sets for Adversarial Wordle
//!
//! Two official answer samples are embedded at build time: a small one that
//! keeps complete trees tractable, and the standard one used for self-play.

mod embedded;
pub mod loader;

pub use embedded::{SMALL, SMALL_COUNT, STANDARD, STANDARD_COUNT};

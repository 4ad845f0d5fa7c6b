//! Runtime selection of players
//!
//! The player traits have generic methods, so players are chosen through
//! enums that keep static dispatch rather than trait objects.

use super::{
    ExploringGuesser, GreedyTreeAdversary, GreedyTreeGuesser, RandomTreeAdversary,
    RandomTreeGuesser,
};
use crate::core::{Status, Word};
use crate::error::Result;
use crate::game::{AdversarialWordle, Adversary, Guesser, RandomAdversary, RandomGuesser};
use crate::tree::GameTree;
use rand::Rng;
use std::fmt;
use std::str::FromStr;

/// How a player chooses its moves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PolicyName {
    /// Ignore the tree entirely
    #[default]
    Random,
    /// Uniform choice among recorded moves
    RandomTree,
    /// Best recorded move by win probability
    GreedyTree,
}

impl PolicyName {
    /// Whether the policy consults a game tree
    #[must_use]
    pub const fn uses_tree(self) -> bool {
        !matches!(self, Self::Random)
    }
}

impl FromStr for PolicyName {
    type Err = String;

    fn from_str(name: &str) -> std::result::Result<Self, Self::Err> {
        match name {
            "random" => Ok(Self::Random),
            "random-tree" | "tree" => Ok(Self::RandomTree),
            "greedy-tree" | "greedy" => Ok(Self::GreedyTree),
            other => Err(format!(
                "unknown policy '{other}' (expected random, random-tree or greedy-tree)"
            )),
        }
    }
}

impl fmt::Display for PolicyName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Random => write!(f, "random"),
            Self::RandomTree => write!(f, "random-tree"),
            Self::GreedyTree => write!(f, "greedy-tree"),
        }
    }
}

/// Any guesser, chosen at runtime
#[derive(Debug, Clone)]
pub enum GuesserKind<'t> {
    Random(RandomGuesser),
    RandomTree(RandomTreeGuesser<'t>),
    GreedyTree(GreedyTreeGuesser<'t>),
    Exploring(ExploringGuesser<'t>),
}

impl<'t> GuesserKind<'t> {
    #[must_use]
    pub const fn new(name: PolicyName, tree: &'t GameTree) -> Self {
        match name {
            PolicyName::Random => Self::Random(RandomGuesser),
            PolicyName::RandomTree => Self::RandomTree(RandomTreeGuesser::new(tree)),
            PolicyName::GreedyTree => Self::GreedyTree(GreedyTreeGuesser::new(tree)),
        }
    }
}

impl Guesser for GuesserKind<'_> {
    fn make_guess<R: Rng + ?Sized>(
        &mut self,
        game: &AdversarialWordle,
        rng: &mut R,
    ) -> Result<Word> {
        match self {
            Self::Random(g) => g.make_guess(game, rng),
            Self::RandomTree(g) => g.make_guess(game, rng),
            Self::GreedyTree(g) => g.make_guess(game, rng),
            Self::Exploring(g) => g.make_guess(game, rng),
        }
    }
}

impl<'t> From<ExploringGuesser<'t>> for GuesserKind<'t> {
    fn from(guesser: ExploringGuesser<'t>) -> Self {
        Self::Exploring(guesser)
    }
}

/// Any adversary, chosen at runtime
#[derive(Debug, Clone)]
pub enum AdversaryKind<'t> {
    Random(RandomAdversary),
    RandomTree(RandomTreeAdversary<'t>),
    GreedyTree(GreedyTreeAdversary<'t>),
}

impl<'t> AdversaryKind<'t> {
    #[must_use]
    pub const fn new(name: PolicyName, tree: &'t GameTree) -> Self {
        match name {
            PolicyName::Random => Self::Random(RandomAdversary),
            PolicyName::RandomTree => Self::RandomTree(RandomTreeAdversary::new(tree)),
            PolicyName::GreedyTree => Self::GreedyTree(GreedyTreeAdversary::new(tree)),
        }
    }
}

impl Adversary for AdversaryKind<'_> {
    fn make_status<R: Rng + ?Sized>(
        &mut self,
        game: &AdversarialWordle,
        rng: &mut R,
    ) -> Result<Status> {
        match self {
            Self::Random(a) => a.make_status(game, rng),
            Self::RandomTree(a) => a.make_status(game, rng),
            Self::GreedyTree(a) => a.make_status(game, rng),
        }
    }
}

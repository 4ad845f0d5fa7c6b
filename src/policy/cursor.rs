//! Cursor into a shared game tree
//!
//! Every tree policy keeps its own position in the tree, following the
//! moves actually played. Once the game leaves the tree the cursor is lost
//! for the rest of that game and the policy falls back to random play.

use crate::core::{Move, MoveKind, Status, Word};
use crate::error::{Error, Result};
use crate::game::AdversarialWordle;
use crate::tree::{GameTree, NodeId};

/// A policy's position in a borrowed game tree
#[derive(Debug, Clone, Copy)]
pub struct TreeCursor<'t> {
    tree: &'t GameTree,
    node: Option<NodeId>,
}

impl<'t> TreeCursor<'t> {
    /// Start at the root of `tree`
    #[must_use]
    pub const fn new(tree: &'t GameTree) -> Self {
        Self {
            tree,
            node: Some(tree.root()),
        }
    }

    #[inline]
    #[must_use]
    pub const fn tree(&self) -> &'t GameTree {
        self.tree
    }

    /// Current node, `None` once the game has left the tree
    #[inline]
    #[must_use]
    pub const fn position(&self) -> Option<NodeId> {
        self.node
    }

    /// Descend along the opponent's most recent move
    ///
    /// A guesser still sitting on the start sentinel has nothing to follow.
    pub fn follow_opponent(&mut self, game: &AdversarialWordle) {
        let Some(node) = self.node else {
            return;
        };
        if self.tree.move_of(node).is_start() && game.is_guesser_turn() {
            return;
        }
        self.node = game
            .last_move()
            .and_then(|mv| self.tree.find_subtree_by_move(node, &mv));
    }

    /// Children available for selection; empty once lost
    #[must_use]
    pub fn children(&self) -> &'t [NodeId] {
        match self.node {
            Some(node) => self.tree.get_subtrees(node),
            None => &[],
        }
    }

    /// Give up on the tree for the rest of the game
    pub fn abandon(&mut self) {
        self.node = None;
    }

    /// Move to the child labelled `mv`, or get lost if there is none
    pub fn step(&mut self, mv: &Move) {
        self.node = self
            .node
            .and_then(|node| self.tree.find_subtree_by_move(node, mv));
    }

    /// Advance to `child` and return its guess
    ///
    /// # Errors
    /// Returns `Error::ParityViolation` if the child is not a guess.
    pub fn advance_to_guess(&mut self, child: NodeId) -> Result<Word> {
        match self.tree.move_of(child) {
            Move::Guess(word) => {
                self.node = Some(child);
                Ok(word.clone())
            }
            other => Err(self.wrong_kind(other, MoveKind::Guess)),
        }
    }

    /// Advance to `child` and return its status
    ///
    /// # Errors
    /// Returns `Error::ParityViolation` if the child is not a status.
    pub fn advance_to_status(&mut self, child: NodeId) -> Result<Status> {
        match self.tree.move_of(child) {
            Move::Status(status) => {
                self.node = Some(child);
                Ok(*status)
            }
            other => Err(self.wrong_kind(other, MoveKind::Status)),
        }
    }

    fn wrong_kind(&self, found: &Move, expected: MoveKind) -> Error {
        Error::ParityViolation {
            parent: self
                .node
                .map(|node| self.tree.move_of(node).to_string())
                .unwrap_or_default(),
            found: found.to_string(),
            expected: expected.describe(),
        }
    }
}

/// Last child holding the highest win probability
#[must_use]
pub fn last_max(tree: &GameTree, children: &[NodeId]) -> Option<NodeId> {
    let probability = |id: NodeId| tree.node(id).win_probability();
    children
        .iter()
        .copied()
        .reduce(|best, child| if probability(child) >= probability(best) { child } else { best })
}

/// Last child holding the lowest win probability
#[must_use]
pub fn last_min(tree: &GameTree, children: &[NodeId]) -> Option<NodeId> {
    let probability = |id: NodeId| tree.node(id).win_probability();
    children
        .iter()
        .copied()
        .reduce(|best, child| if probability(child) <= probability(best) { child } else { best })
}

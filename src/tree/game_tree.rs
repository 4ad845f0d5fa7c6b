//! Game tree with arena allocation.
//!
//! Nodes live in a contiguous Vec and are referenced by `NodeId` indices, so
//! any number of policy cursors can point into one tree without borrowing
//! individual nodes. Nodes are only ever appended; ids stay valid for the
//! lifetime of the tree.

use crate::core::Move;
use crate::error::{Error, Result, check_probability};
use std::fmt;

/// Index of a node in a `GameTree`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

/// A single node: the move that led here, its children and win probability
#[derive(Debug, Clone)]
pub struct Node {
    mv: Move,
    children: Vec<NodeId>,
    win_probability: f64,
}

impl Node {
    fn new(mv: Move) -> Self {
        Self {
            mv,
            children: Vec::new(),
            win_probability: 0.0,
        }
    }

    /// The move labelling this node
    #[inline]
    #[must_use]
    pub const fn mv(&self) -> &Move {
        &self.mv
    }

    /// Children in insertion order
    #[inline]
    #[must_use]
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// Estimated probability that the guesser wins from this node
    #[inline]
    #[must_use]
    pub const fn win_probability(&self) -> f64 {
        self.win_probability
    }

    #[inline]
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

/// Decision tree over Adversarial Wordle move sequences
#[derive(Debug, Clone)]
pub struct GameTree {
    nodes: Vec<Node>,
}

impl GameTree {
    /// Create a tree holding only the start sentinel
    #[must_use]
    pub fn new() -> Self {
        Self::with_root(Move::Start)
    }

    /// Create a tree whose root is labelled with `mv`
    ///
    /// Used for subtrees produced by the complete tree builder.
    #[must_use]
    pub fn with_root(mv: Move) -> Self {
        Self {
            nodes: vec![Node::new(mv)],
        }
    }

    /// Root node ID (always the first node allocated)
    #[inline]
    #[must_use]
    pub const fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Get a node by ID
    ///
    /// # Panics
    /// Panics if `id` was not produced by this tree.
    #[inline]
    #[must_use]
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    /// The move labelling a node
    #[inline]
    #[must_use]
    pub fn move_of(&self, id: NodeId) -> &Move {
        &self.node(id).mv
    }

    /// Total number of nodes, root included
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false: a tree has at least its root
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Children of `id` in insertion order
    #[inline]
    #[must_use]
    pub fn get_subtrees(&self, id: NodeId) -> &[NodeId] {
        &self.node(id).children
    }

    /// Find the child of `id` labelled with `mv`
    ///
    /// A miss is an ordinary outcome and returns `None`.
    #[must_use]
    pub fn find_subtree_by_move(&self, id: NodeId, mv: &Move) -> Option<NodeId> {
        self.get_subtrees(id)
            .iter()
            .copied()
            .find(|&child| self.move_of(child) == mv)
    }

    /// Follow `sequence` from the root, returning the node reached if every move exists
    #[must_use]
    pub fn walk(&self, sequence: &[Move]) -> Option<NodeId> {
        sequence
            .iter()
            .try_fold(self.root(), |node, mv| self.find_subtree_by_move(node, mv))
    }

    /// Whether the player to move at `id` is the guesser
    #[must_use]
    pub fn is_guesser_turn(&self, id: NodeId) -> bool {
        !matches!(self.move_of(id), Move::Guess(_))
    }

    /// Number of plies on the longest root-to-leaf path
    #[must_use]
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack = vec![(self.root(), 0)];
        while let Some((id, depth)) = stack.pop() {
            deepest = deepest.max(depth);
            stack.extend(self.get_subtrees(id).iter().map(|&child| (child, depth + 1)));
        }
        deepest
    }

    /// Merge a move sequence into the tree
    ///
    /// Missing nodes are created along the path with probability 0.0, and the
    /// node reached by the final move gets `terminal_probability`, replacing
    /// whatever it held. An empty sequence changes nothing.
    ///
    /// Returns the node reached.
    ///
    /// # Errors
    /// Returns `Error::ProbabilityOutOfRange`, `Error::MisplacedStart` or
    /// `Error::ParityViolation` without modifying the tree.
    ///
    /// # Examples
    /// ```
    /// use wordle_gametree::core::{Move, Word};
    /// use wordle_gametree::tree::GameTree;
    ///
    /// let mut tree = GameTree::new();
    /// let reach = Move::from(Word::new("reach").unwrap());
    /// tree.insert_move_sequence(&[reach.clone()], 1.0).unwrap();
    ///
    /// let node = tree.find_subtree_by_move(tree.root(), &reach).unwrap();
    /// assert_eq!(tree.node(node).win_probability(), 1.0);
    /// assert_eq!(tree.len(), 2);
    /// ```
    pub fn insert_move_sequence(
        &mut self,
        sequence: &[Move],
        terminal_probability: f64,
    ) -> Result<NodeId> {
        let terminal_probability = check_probability(terminal_probability)?;
        self.check_alternation(self.move_of(self.root()), sequence)?;

        if sequence.is_empty() {
            return Ok(self.root());
        }

        let mut current = self.root();
        for mv in sequence {
            current = match self.find_subtree_by_move(current, mv) {
                Some(child) => child,
                None => self.attach(current, mv.clone()),
            };
        }

        self.nodes[current.0].win_probability = terminal_probability;
        Ok(current)
    }

    fn check_alternation(&self, parent: &Move, sequence: &[Move]) -> Result<()> {
        let mut previous = parent;
        for mv in sequence {
            let expected = previous.next_kind();
            match mv.kind() {
                None => return Err(Error::MisplacedStart),
                Some(kind) if kind != expected => {
                    return Err(Error::ParityViolation {
                        parent: previous.to_string(),
                        found: mv.to_string(),
                        expected: expected.describe(),
                    });
                }
                Some(_) => previous = mv,
            }
        }
        Ok(())
    }

    /// Append a new child without checking for an existing one
    pub(crate) fn attach(&mut self, parent: NodeId, mv: Move) -> NodeId {
        debug_assert!(self.find_subtree_by_move(parent, &mv).is_none());
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::new(mv));
        self.nodes[parent.0].children.push(id);
        id
    }

    pub(crate) fn set_win_probability(&mut self, id: NodeId, probability: f64) {
        self.nodes[id.0].win_probability = probability;
    }

    fn fmt_indented(&self, f: &mut fmt::Formatter<'_>, id: NodeId, depth: usize) -> fmt::Result {
        let turn = if self.is_guesser_turn(id) {
            "Guesser's move"
        } else {
            "Adversary's move"
        };
        writeln!(f, "{}{} -> {turn}", "  ".repeat(depth), self.move_of(id))?;
        self.get_subtrees(id)
            .iter()
            .try_for_each(|&child| self.fmt_indented(f, child, depth + 1))
    }
}

impl Default for GameTree {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for GameTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_indented(f, self.root(), 0)
    }
}

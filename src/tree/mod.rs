//! Arena-backed binary tree
//!
//! Nodes are stored in insertion order and linked by [`NodeIndex`]. The
//! display id of each node is a separate field written by
//! [`Tree::relabel_breadth_first`], so ids track the final shape of the tree
//! rather than the order in which the layout generator placed nodes.

mod node;
mod traversal;

pub use node::{DisplayState, Node, NodeIndex, Point, Side};
pub use traversal::{
    breadth_first, in_order, post_order, pre_order, traverse, Step, StepState, Traversal,
    TraversalOrder,
};

use std::collections::VecDeque;
use std::ops::Index;

use thiserror::Error;

/// Errors raised while editing a tree
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    /// The referenced node does not exist in this tree
    #[error("unknown node index {0}")]
    UnknownNode(usize),

    /// The parent already has a child on that side
    #[error("node index {parent} already has a {side:?} child")]
    SlotOccupied {
        /// Arena slot of the parent
        parent: usize,
        /// Side that was requested
        side: Side,
    },
}

/// Binary tree with a single root at arena slot 0
///
/// `Tree::default()` is the empty tree; every traversal over it yields no
/// steps and state updates are no-ops.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize))]
pub struct Tree {
    nodes: Vec<Node>,
}

impl Tree {
    /// Create a tree holding only a root (id 1, depth 0) at `position`
    pub fn with_root(position: Point) -> Self {
        Self {
            nodes: vec![Node::new(1, position, 0)],
        }
    }

    /// Number of nodes
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True for the empty tree
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Root slot, `None` for the empty tree
    #[inline]
    pub fn root(&self) -> Option<NodeIndex> {
        (!self.nodes.is_empty()).then_some(NodeIndex(0))
    }

    /// Look up a node by arena index
    pub fn node(&self, index: NodeIndex) -> Option<&Node> {
        self.nodes.get(index.0)
    }

    /// All nodes in arena (insertion) order
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Add a child under `parent` on `side`
    ///
    /// The new node gets the next insertion-order id and a depth one below
    /// its parent. Ids are provisional until [`Tree::relabel_breadth_first`].
    pub fn attach(
        &mut self,
        parent: NodeIndex,
        side: Side,
        position: Point,
    ) -> Result<NodeIndex, TreeError> {
        let parent_depth = match self.nodes.get(parent.0) {
            None => return Err(TreeError::UnknownNode(parent.0)),
            Some(node) if node.child(side).is_some() => {
                return Err(TreeError::SlotOccupied {
                    parent: parent.0,
                    side,
                });
            }
            Some(node) => node.depth,
        };

        let index = NodeIndex(self.nodes.len());
        let id = self.nodes.len() as u32 + 1;
        self.nodes.push(Node::new(id, position, parent_depth + 1));

        let parent_node = &mut self.nodes[parent.0];
        match side {
            Side::Left => parent_node.left = Some(index),
            Side::Right => parent_node.right = Some(index),
        }

        Ok(index)
    }

    /// Renumber ids in level order: root keeps 1, the rest get 2, 3, ...
    pub fn relabel_breadth_first(&mut self) {
        let order: Vec<NodeIndex> = self.breadth_first().map(|(index, _)| index).collect();
        for (position, index) in order.into_iter().enumerate() {
            self.nodes[index.0].id = position as u32 + 1;
        }
    }

    /// Level-order walk from the root, left child before right
    pub fn breadth_first(&self) -> BreadthFirst<'_> {
        BreadthFirst {
            tree: self,
            queue: self.root().into_iter().collect(),
        }
    }

    /// Breadth-first search for the first node whose id is `id`
    pub fn find(&self, id: u32) -> Option<NodeIndex> {
        self.breadth_first()
            .find(|(_, node)| node.id == id)
            .map(|(index, _)| index)
    }

    /// Stamp `state` onto the node with display id `id`
    ///
    /// At most one node changes. Returns `false` when no node carries that
    /// id (including on the empty tree), which is not an error.
    pub fn apply_state(&mut self, id: u32, state: DisplayState) -> bool {
        match self.find(id) {
            Some(index) => {
                self.nodes[index.0].state = state;
                true
            }
            None => false,
        }
    }

    /// Put every node back to [`DisplayState::Clean`]
    pub fn reset_states(&mut self) {
        for node in &mut self.nodes {
            node.state = DisplayState::Clean;
        }
    }

    /// Number of levels (0 for the empty tree)
    pub fn depth(&self) -> usize {
        self.nodes
            .iter()
            .map(|node| node.depth as usize + 1)
            .max()
            .unwrap_or(0)
    }
}

impl Index<NodeIndex> for Tree {
    type Output = Node;

    fn index(&self, index: NodeIndex) -> &Node {
        &self.nodes[index.0]
    }
}

/// Iterator returned by [`Tree::breadth_first`]
#[derive(Debug)]
pub struct BreadthFirst<'a> {
    tree: &'a Tree,
    queue: VecDeque<NodeIndex>,
}

impl<'a> Iterator for BreadthFirst<'a> {
    type Item = (NodeIndex, &'a Node);

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.queue.pop_front()?;
        let node = &self.tree.nodes[index.0];
        self.queue.extend(node.left);
        self.queue.extend(node.right);
        Some((index, node))
    }
}

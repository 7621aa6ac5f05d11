//! Traversal event sequences
//!
//! Each order walks the tree once and materializes every event up front.
//! Replay is driven by index into the returned [`Traversal`], so the same
//! sequence can be played from the start any number of times.
//!
//! The depth-first orders use an explicit frame stack instead of recursion,
//! so stack usage does not grow with tree height.

use std::fmt;

use super::{DisplayState, Node, NodeIndex, Tree};

/// State carried by a traversal event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize))]
pub enum StepState {
    /// Node reached
    Visited,

    /// Node's work complete
    Processed,
}

impl From<StepState> for DisplayState {
    fn from(state: StepState) -> Self {
        match state {
            StepState::Visited => DisplayState::Visited,
            StepState::Processed => DisplayState::Processed,
        }
    }
}

impl fmt::Display for StepState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        DisplayState::from(*self).fmt(f)
    }
}

/// One immutable traversal event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize))]
pub struct Step {
    /// Display id of the node
    pub node: u32,

    /// State to stamp onto that node
    pub state: StepState,
}

impl Step {
    /// `(node, Visited)`
    pub const fn visited(node: u32) -> Self {
        Self {
            node,
            state: StepState::Visited,
        }
    }

    /// `(node, Processed)`
    pub const fn processed(node: u32) -> Self {
        Self {
            node,
            state: StepState::Processed,
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}", self.state, self.node)
    }
}

/// Supported traversal orders
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize))]
pub enum TraversalOrder {
    /// Left subtree, node, right subtree
    #[default]
    InOrder,

    /// Node, left subtree, right subtree
    PreOrder,

    /// Left subtree, right subtree, node
    PostOrder,

    /// Level by level, left to right
    Bfs,
}

impl TraversalOrder {
    /// Every order, in menu order
    pub const ALL: [TraversalOrder; 4] = [
        TraversalOrder::InOrder,
        TraversalOrder::PreOrder,
        TraversalOrder::PostOrder,
        TraversalOrder::Bfs,
    ];
}

/// Fully materialized event sequence for one order over one tree
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize))]
pub struct Traversal {
    order: TraversalOrder,
    steps: Vec<Step>,
}

impl Traversal {
    /// Walk `tree` in `order`
    pub fn new(tree: &Tree, order: TraversalOrder) -> Self {
        Self {
            order,
            steps: traverse(tree, order),
        }
    }

    /// Order this sequence was computed for
    pub fn order(&self) -> TraversalOrder {
        self.order
    }

    /// All events
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Event at `index`
    pub fn get(&self, index: usize) -> Option<Step> {
        self.steps.get(index).copied()
    }

    /// Number of events
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// True when there are no events
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Iterate events from the start
    pub fn iter(&self) -> std::slice::Iter<'_, Step> {
        self.steps.iter()
    }
}

impl<'a> IntoIterator for &'a Traversal {
    type Item = &'a Step;
    type IntoIter = std::slice::Iter<'a, Step>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

/// Dispatch on `order`
pub fn traverse(tree: &Tree, order: TraversalOrder) -> Vec<Step> {
    match order {
        TraversalOrder::InOrder => in_order(tree),
        TraversalOrder::PreOrder => pre_order(tree),
        TraversalOrder::PostOrder => post_order(tree),
        TraversalOrder::Bfs => breadth_first(tree),
    }
}

/// Pending work on the explicit stack
#[derive(Debug, Clone, Copy)]
enum Frame {
    /// First arrival at a node
    Enter(NodeIndex),

    /// Emit the node's processed event
    Finish(NodeIndex),
}

/// Visited on arrival, processed between the left and right subtrees
pub fn in_order(tree: &Tree) -> Vec<Step> {
    depth_first(tree, |stack, index, node| {
        // LIFO: left subtree runs first, then Finish, then right subtree
        stack.extend(node.right.map(Frame::Enter));
        stack.push(Frame::Finish(index));
        stack.extend(node.left.map(Frame::Enter));
    })
}

/// Visited then processed on arrival, before either subtree
pub fn pre_order(tree: &Tree) -> Vec<Step> {
    depth_first(tree, |stack, index, node| {
        stack.extend(node.right.map(Frame::Enter));
        stack.extend(node.left.map(Frame::Enter));
        stack.push(Frame::Finish(index));
    })
}

/// Visited on arrival, processed after both subtrees
pub fn post_order(tree: &Tree) -> Vec<Step> {
    depth_first(tree, |stack, index, node| {
        stack.push(Frame::Finish(index));
        stack.extend(node.right.map(Frame::Enter));
        stack.extend(node.left.map(Frame::Enter));
    })
}

/// Shared driver: `schedule` decides where the Finish frame sits relative
/// to the children
fn depth_first<F>(tree: &Tree, mut schedule: F) -> Vec<Step>
where
    F: FnMut(&mut Vec<Frame>, NodeIndex, &Node),
{
    let mut steps = Vec::with_capacity(tree.len() * 2);
    let mut stack: Vec<Frame> = tree.root().map(Frame::Enter).into_iter().collect();

    while let Some(frame) = stack.pop() {
        match frame {
            Frame::Enter(index) => {
                let node = &tree[index];
                steps.push(Step::visited(node.id));
                schedule(&mut stack, index, node);
            }
            Frame::Finish(index) => steps.push(Step::processed(tree[index].id)),
        }
    }

    steps
}

/// Level order
///
/// The root is visited first. Each level is then drained front to back,
/// emitting processed for every node; once the whole level is drained its
/// children are queued as the next level and each emits visited.
pub fn breadth_first(tree: &Tree) -> Vec<Step> {
    let mut steps = Vec::with_capacity(tree.len() * 2);
    let Some(root) = tree.root() else {
        return steps;
    };

    steps.push(Step::visited(tree[root].id));
    let mut level = vec![root];

    while !level.is_empty() {
        let mut next_level = Vec::new();
        for index in level {
            let node = &tree[index];
            steps.push(Step::processed(node.id));
            next_level.extend(node.left);
            next_level.extend(node.right);
        }
        for &index in &next_level {
            steps.push(Step::visited(tree[index].id));
        }
        level = next_level;
    }

    steps
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::{Point, Side};

    /// 1 with children 2 and 3, both leaves
    fn three_nodes() -> Tree {
        let mut tree = Tree::with_root(Point::new(50.0, 25.0));
        let root = tree.root().unwrap();
        tree.attach(root, Side::Left, Point::new(15.0, 55.0)).unwrap();
        tree.attach(root, Side::Right, Point::new(85.0, 55.0)).unwrap();
        tree.relabel_breadth_first();
        tree
    }

    #[test]
    fn test_bfs_three_nodes() {
        let steps = breadth_first(&three_nodes());
        assert_eq!(
            steps,
            vec![
                Step::visited(1),
                Step::processed(1),
                Step::visited(2),
                Step::visited(3),
                Step::processed(2),
                Step::processed(3),
            ]
        );
    }

    #[test]
    fn test_in_order_three_nodes() {
        let steps = in_order(&three_nodes());
        assert_eq!(
            steps,
            vec![
                Step::visited(1),
                Step::visited(2),
                Step::processed(2),
                Step::processed(1),
                Step::visited(3),
                Step::processed(3),
            ]
        );
    }

    #[test]
    fn test_pre_order_double_emission() {
        let steps = pre_order(&three_nodes());
        assert_eq!(
            steps,
            vec![
                Step::visited(1),
                Step::processed(1),
                Step::visited(2),
                Step::processed(2),
                Step::visited(3),
                Step::processed(3),
            ]
        );
    }

    #[test]
    fn test_post_order_three_nodes() {
        let steps = post_order(&three_nodes());
        assert_eq!(
            steps,
            vec![
                Step::visited(1),
                Step::visited(2),
                Step::processed(2),
                Step::visited(3),
                Step::processed(3),
                Step::processed(1),
            ]
        );
    }

    #[test]
    fn test_empty_tree_yields_nothing() {
        let tree = Tree::default();
        for order in TraversalOrder::ALL {
            assert!(traverse(&tree, order).is_empty());
        }
    }

    #[test]
    fn test_traversal_replays_by_index() {
        let traversal = Traversal::new(&three_nodes(), TraversalOrder::Bfs);
        let first: Vec<Step> = traversal.iter().copied().collect();
        let second: Vec<Step> = (0..traversal.len())
            .filter_map(|i| traversal.get(i))
            .collect();
        assert_eq!(first, second);
        assert_eq!(traversal.get(traversal.len()), None);
    }

    #[test]
    fn test_deep_chain_does_not_recurse() {
        // A left spine far deeper than a recursive walk would tolerate
        let mut tree = Tree::with_root(Point::default());
        let mut tip = tree.root().unwrap();
        for _ in 0..200_000 {
            tip = tree.attach(tip, Side::Left, Point::default()).unwrap();
        }
        let steps = post_order(&tree);
        assert_eq!(steps.len(), tree.len() * 2);
        assert_eq!(steps.last(), Some(&Step::processed(1)));
    }
}

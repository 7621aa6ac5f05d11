//! Arena node representation
//!
//! Nodes live in a flat `Vec` owned by [`Tree`](super::Tree); links are
//! arena indices, so a node is owned by exactly one parent slot and cycles
//! cannot be expressed.

use std::fmt;

/// Index of a node inside its tree's arena
///
/// Stable for the lifetime of the tree. Unrelated to the display id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize))]
pub struct NodeIndex(pub(crate) usize);

impl NodeIndex {
    /// Raw arena slot
    #[inline]
    pub fn get(self) -> usize {
        self.0
    }
}

/// Which child slot of a parent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize))]
pub enum Side {
    /// Left child
    Left,

    /// Right child
    Right,
}

impl Side {
    /// The other slot
    #[inline]
    pub fn opposite(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// Display annotation driven by traversal playback
///
/// Moves forward only within one playback: clean, visited, processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize))]
pub enum DisplayState {
    /// Untouched by the current playback
    #[default]
    Clean,

    /// Reached but not yet processed
    Visited,

    /// Work for this node is complete
    Processed,
}

impl fmt::Display for DisplayState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            DisplayState::Clean => "clean",
            DisplayState::Visited => "visited",
            DisplayState::Processed => "processed",
        };
        f.write_str(label)
    }
}

/// Canvas coordinate
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize))]
pub struct Point {
    /// Horizontal offset from the left canvas edge
    pub x: f64,

    /// Vertical offset from the top canvas edge
    pub y: f64,
}

impl Point {
    /// Construct a point
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`
    #[inline]
    pub fn distance(&self, other: &Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Binary tree vertex
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize))]
pub struct Node {
    /// Display identifier (breadth-first order after relabeling, root = 1)
    pub id: u32,

    /// Current display annotation
    pub state: DisplayState,

    /// Layout coordinate, fixed once placed
    pub position: Point,

    /// Number of edges from the root
    pub depth: u32,

    pub(crate) left: Option<NodeIndex>,
    pub(crate) right: Option<NodeIndex>,
}

impl Node {
    pub(crate) fn new(id: u32, position: Point, depth: u32) -> Self {
        Self {
            id,
            state: DisplayState::Clean,
            position,
            depth,
            left: None,
            right: None,
        }
    }

    /// Left child, if any
    #[inline]
    pub fn left(&self) -> Option<NodeIndex> {
        self.left
    }

    /// Right child, if any
    #[inline]
    pub fn right(&self) -> Option<NodeIndex> {
        self.right
    }

    /// Child in the given slot
    #[inline]
    pub fn child(&self, side: Side) -> Option<NodeIndex> {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    /// True when both slots are taken
    #[inline]
    pub fn is_full(&self) -> bool {
        self.left.is_some() && self.right.is_some()
    }

    /// True when neither slot is taken
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{} ({:.1}, {:.1}) {}",
            self.id, self.position.x, self.position.y, self.state
        )
    }
}

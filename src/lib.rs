//! # Binary Tree Traversal Playback
//!
//! Grows a randomly shaped binary tree with collision-free canvas
//! coordinates, then turns any of four traversal orders into a flat list of
//! events that a front end replays one at a time.
//!
//! ## Pieces
//!
//! 1. **Layout**: randomized placement inside a bounded canvas, with a
//!    minimum separation between node centres and level-order ids
//! 2. **Traversal**: in-order, pre-order, post-order and breadth-first
//!    event sequences, materialized up front and replayed by index
//! 3. **Playback**: cursor, bounded step log and start/pause/reset over
//!    one tree
//!
//! ## Usage Example
//!
//! ```
//! use traverser::{LayoutConfig, Traversal, TraversalOrder, TreeGenerator};
//!
//! let generator = TreeGenerator::new(LayoutConfig::default())?;
//! let (mut tree, report) = generator.generate(40)?;
//! assert!(report.placed <= 40);
//!
//! let traversal = Traversal::new(&tree, TraversalOrder::InOrder);
//! for step in &traversal {
//!     tree.apply_state(step.node, step.state.into());
//! }
//! # Ok::<(), traverser::TraverserError>(())
//! ```

#![warn(missing_docs, missing_debug_implementations)]

pub mod layout;    // Randomized tree layout
pub mod playback;  // Replay session state
pub mod settings;  // Node count, order and speed
pub mod tree;      // Arena tree and traversal orders

// Re-exports for convenience
pub use layout::{generate, LayoutConfig, LayoutError, LayoutReport, TreeGenerator};
pub use playback::{Playback, PlaybackStatus, MAX_LISTED_STEPS};
pub use settings::{PlaybackSpeed, Settings, SettingsError, DEFAULT_NODE_COUNT};
pub use tree::{
    breadth_first, in_order, post_order, pre_order, traverse, DisplayState, Node, NodeIndex,
    Point, Side, Step, StepState, Traversal, TraversalOrder, Tree, TreeError,
};

use thiserror::Error;

/// Errors surfaced by this crate
#[derive(Error, Debug)]
pub enum TraverserError {
    /// Rejected layout request or geometry
    #[error("layout error: {0}")]
    Layout(#[from] LayoutError),

    /// Rejected settings
    #[error("settings error: {0}")]
    Settings(#[from] SettingsError),

    /// Invalid tree edit
    #[error("tree error: {0}")]
    Tree(#[from] TreeError),
}

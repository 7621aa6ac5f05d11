//! Randomized tree layout
//!
//! Grows a binary tree one node at a time inside a fixed canvas:
//!
//! 1. Draw a parent uniformly from the candidate pool
//! 2. Flip a coin for which side to try first
//! 3. Accept the first side whose slot is free, whose position stays on the
//!    canvas and which keeps the minimum separation from every placed node
//! 4. Drop the pool entry when the parent is full or both sides fail
//!
//! Growth stops at the requested size or when the pool runs dry; the latter
//! yields a smaller but still valid tree. Ids are then reassigned in level
//! order.

mod grid;

use rand::Rng;
use thiserror::Error;
use tracing::{debug, warn};

use crate::tree::{NodeIndex, Point, Side, Tree, TreeError};
use grid::OccupancyGrid;

/// Canvas geometry and spacing used by the generator
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutConfig {
    /// Canvas width
    pub canvas_width: f64,

    /// Canvas height
    pub canvas_height: f64,

    /// Visual radius of a node
    pub node_radius: f64,

    /// Stroke width around a node
    pub node_border: f64,

    /// Vertical distance between consecutive levels
    pub level_spacing: f64,

    /// Vertical position of the root
    pub top_offset: f64,

    /// Horizontal child offset at depth 1; depth `d` gets `budget / d`
    pub horizontal_budget: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            canvas_width: 768.0,
            canvas_height: 864.0,
            node_radius: 10.0,
            node_border: 1.0,
            level_spacing: 30.0,
            top_offset: 25.0,
            horizontal_budget: 70.0,
        }
    }
}

impl LayoutConfig {
    /// Default spacing on a `width` x `height` canvas
    pub fn with_canvas(width: f64, height: f64) -> Self {
        Self {
            canvas_width: width,
            canvas_height: height,
            ..Self::default()
        }
    }

    /// Smallest allowed distance between two node centres
    #[inline]
    pub fn min_separation(&self) -> f64 {
        2.0 * self.node_radius + 2.0 * self.node_border
    }

    /// Floor for the horizontal child offset
    #[inline]
    pub fn min_horizontal_offset(&self) -> f64 {
        2.0 * self.node_radius + 1.0
    }

    /// Horizontal offset between a parent and a child placed at `depth`
    ///
    /// Shrinks with depth but never below [`Self::min_horizontal_offset`].
    pub fn horizontal_offset(&self, depth: u32) -> f64 {
        let shrunk = self.horizontal_budget / f64::from(depth.max(1));
        shrunk.max(self.min_horizontal_offset())
    }

    /// Where the root goes
    pub fn root_position(&self) -> Point {
        Point::new(self.canvas_width / 2.0, self.top_offset)
    }

    /// True if a node centred at `point` is drawn fully inside the canvas
    pub fn contains(&self, point: &Point) -> bool {
        point.y + self.node_radius < self.canvas_height
            && point.x - self.node_radius > 0.0
            && point.x + self.node_radius < self.canvas_width
    }

    /// Reject geometry that cannot hold even the root
    pub fn validate(&self) -> Result<(), LayoutError> {
        let fields = [
            ("canvas_width", self.canvas_width),
            ("canvas_height", self.canvas_height),
            ("node_radius", self.node_radius),
            ("level_spacing", self.level_spacing),
            ("horizontal_budget", self.horizontal_budget),
        ];
        for (name, value) in fields {
            if !value.is_finite() || value <= 0.0 {
                return Err(LayoutError::InvalidParameter { name, value });
            }
        }
        for (name, value) in [
            ("node_border", self.node_border),
            ("top_offset", self.top_offset),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(LayoutError::InvalidParameter { name, value });
            }
        }

        if !self.contains(&self.root_position()) {
            return Err(LayoutError::CanvasTooSmall {
                width: self.canvas_width,
                height: self.canvas_height,
            });
        }

        Ok(())
    }
}

/// Errors raised by the layout generator
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    /// Asked for zero nodes
    #[error("requested node count must be at least 1")]
    EmptyRequest,

    /// A geometry parameter is non-finite or out of range
    #[error("invalid layout parameter {name}: {value}")]
    InvalidParameter {
        /// Field name
        name: &'static str,
        /// Offending value
        value: f64,
    },

    /// The root itself does not fit
    #[error("canvas {width}x{height} cannot hold the root node")]
    CanvasTooSmall {
        /// Canvas width
        width: f64,
        /// Canvas height
        height: f64,
    },

    /// Internal tree edit failed
    #[error("tree error: {0}")]
    Tree(#[from] TreeError),
}

/// Outcome of one generation pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutReport {
    /// Nodes asked for
    pub requested: usize,

    /// Nodes actually placed (root included)
    pub placed: usize,
}

impl LayoutReport {
    /// True when the canvas filled up before the request was met
    pub fn is_partial(&self) -> bool {
        self.placed < self.requested
    }
}

/// Randomized layout generator bound to one canvas
#[derive(Debug, Clone)]
pub struct TreeGenerator {
    config: LayoutConfig,
}

impl TreeGenerator {
    /// Create a generator after validating `config`
    pub fn new(config: LayoutConfig) -> Result<Self, LayoutError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Geometry in use
    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Generate with the thread-local RNG
    pub fn generate(&self, count: usize) -> Result<(Tree, LayoutReport), LayoutError> {
        self.generate_with_rng(count, &mut rand::thread_rng())
    }

    /// Generate up to `count` nodes drawing randomness from `rng`
    pub fn generate_with_rng<R: Rng>(
        &self,
        count: usize,
        rng: &mut R,
    ) -> Result<(Tree, LayoutReport), LayoutError> {
        if count == 0 {
            return Err(LayoutError::EmptyRequest);
        }

        let config = &self.config;
        let root_position = config.root_position();
        let mut tree = Tree::with_root(root_position);
        let mut occupied = OccupancyGrid::new(config.min_separation());
        occupied.insert(root_position);

        // May hold the same parent more than once
        let mut candidates: Vec<NodeIndex> = tree.root().into_iter().collect();

        while tree.len() < count && !candidates.is_empty() {
            let slot = rng.gen_range(0..candidates.len());
            let parent = candidates[slot];
            let node = &tree[parent];
            if node.is_full() {
                candidates.swap_remove(slot);
                continue;
            }

            let origin = node.position;
            let offset = config.horizontal_offset(node.depth + 1);
            let first = if rng.gen_bool(0.5) {
                Side::Right
            } else {
                Side::Left
            };

            let spot = [first, first.opposite()].into_iter().find_map(|side| {
                if tree[parent].child(side).is_some() {
                    return None;
                }
                let dx = match side {
                    Side::Left => -offset,
                    Side::Right => offset,
                };
                let position = Point::new(origin.x + dx, origin.y + config.level_spacing);
                (config.contains(&position) && !occupied.collides(&position))
                    .then_some((side, position))
            });

            match spot {
                Some((side, position)) => {
                    let child = tree.attach(parent, side, position)?;
                    occupied.insert(position);
                    candidates.push(child);
                    if tree[parent].child(side.opposite()).is_none() {
                        candidates.push(parent);
                    }
                }
                None => {
                    candidates.swap_remove(slot);
                }
            }
        }

        tree.relabel_breadth_first();

        let report = LayoutReport {
            requested: count,
            placed: tree.len(),
        };
        if report.is_partial() {
            warn!(
                requested = report.requested,
                placed = report.placed,
                "only fit {} of {} nodes on the canvas",
                report.placed,
                report.requested
            );
        }
        debug!(
            placed = report.placed,
            levels = tree.depth(),
            occupied = occupied.len(),
            "generated tree layout"
        );

        Ok((tree, report))
    }
}

/// Generate up to `count` nodes on the default canvas
pub fn generate(count: usize) -> Result<Tree, LayoutError> {
    let generator = TreeGenerator::new(LayoutConfig::default())?;
    generator.generate(count).map(|(tree, _)| tree)
}

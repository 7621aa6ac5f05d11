//! Step-by-step traversal replay
//!
//! A [`Playback`] owns the tree being displayed, a pristine copy of it and
//! the materialized [`Traversal`]. Each [`Playback::step`] stamps one event
//! onto the displayed tree and appends it to a bounded log. Pacing is left
//! to the caller: a timer loop calls `step` while [`Playback::status`] is
//! [`PlaybackStatus::Playing`].

use std::collections::VecDeque;

use rand::Rng;
use tracing::{debug, trace};

use crate::layout::{LayoutConfig, TreeGenerator};
use crate::settings::Settings;
use crate::tree::{Step, Traversal, TraversalOrder, Tree};
use crate::TraverserError;

/// Most recent steps kept in the visible log
pub const MAX_LISTED_STEPS: usize = 30;

/// Where a session stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackStatus {
    /// Nothing replayed since the last reset
    #[default]
    Idle,

    /// Caller should keep stepping
    Playing,

    /// Stopped part way
    Paused,

    /// Every step has been applied
    Finished,
}

/// Replay session over one tree
#[derive(Debug, Clone)]
pub struct Playback {
    pristine: Tree,
    tree: Tree,
    traversal: Traversal,
    cursor: usize,
    status: PlaybackStatus,
    log: VecDeque<Step>,
}

impl Playback {
    /// Start a session over `tree` replaying `order`
    ///
    /// Node states are cleared first so the pristine copy is all clean.
    pub fn new(mut tree: Tree, order: TraversalOrder) -> Self {
        tree.reset_states();
        let traversal = Traversal::new(&tree, order);
        Self {
            pristine: tree.clone(),
            tree,
            traversal,
            cursor: 0,
            status: PlaybackStatus::Idle,
            log: VecDeque::with_capacity(MAX_LISTED_STEPS),
        }
    }

    /// Grow a tree per `settings` on `layout` and start a session over it
    pub fn from_settings<R: Rng>(
        settings: &Settings,
        layout: LayoutConfig,
        rng: &mut R,
    ) -> Result<Self, TraverserError> {
        settings.validate()?;
        let generator = TreeGenerator::new(layout)?;
        let (tree, report) = generator.generate_with_rng(settings.node_count, rng)?;
        debug!(
            requested = report.requested,
            placed = report.placed,
            order = %settings.order,
            "starting playback session"
        );
        Ok(Self::new(tree, settings.order))
    }

    /// Tree as currently displayed
    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    /// Sequence being replayed
    pub fn traversal(&self) -> &Traversal {
        &self.traversal
    }

    /// Selected order
    pub fn order(&self) -> TraversalOrder {
        self.traversal.order()
    }

    /// Index of the next step to apply
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Steps left to apply
    pub fn remaining(&self) -> usize {
        self.traversal.len() - self.cursor
    }

    /// Current status
    pub fn status(&self) -> PlaybackStatus {
        self.status
    }

    /// True once every step has been applied
    pub fn is_finished(&self) -> bool {
        self.status == PlaybackStatus::Finished
    }

    /// Visible log, oldest first, at most [`MAX_LISTED_STEPS`] entries
    pub fn log(&self) -> impl Iterator<Item = &Step> + '_ {
        self.log.iter()
    }

    /// Start, pause or resume; finished sessions stay finished
    pub fn toggle(&mut self) -> PlaybackStatus {
        self.status = match self.status {
            PlaybackStatus::Idle | PlaybackStatus::Paused => PlaybackStatus::Playing,
            PlaybackStatus::Playing => PlaybackStatus::Paused,
            PlaybackStatus::Finished => PlaybackStatus::Finished,
        };
        self.status
    }

    /// Apply the next step
    ///
    /// Returns `None` once the session is finished. The step that exhausts
    /// the sequence flips the status to [`PlaybackStatus::Finished`].
    pub fn step(&mut self) -> Option<Step> {
        if self.is_finished() {
            return None;
        }

        let Some(step) = self.traversal.get(self.cursor) else {
            self.status = PlaybackStatus::Finished;
            return None;
        };

        let stamped = self.tree.apply_state(step.node, step.state.into());
        trace!(cursor = self.cursor, node = step.node, state = %step.state, stamped, "step");

        if self.log.len() == MAX_LISTED_STEPS {
            self.log.pop_front();
        }
        self.log.push_back(step);
        self.cursor += 1;

        if self.cursor == self.traversal.len() {
            self.status = PlaybackStatus::Finished;
        }

        Some(step)
    }

    /// Back to a clean tree, empty log and cursor 0
    pub fn reset(&mut self) {
        self.tree = self.pristine.clone();
        self.log.clear();
        self.cursor = 0;
        self.status = PlaybackStatus::Idle;
    }

    /// Reset and recompute the sequence for `order`
    pub fn select_order(&mut self, order: TraversalOrder) {
        self.reset();
        self.traversal = Traversal::new(&self.pristine, order);
    }

    /// Reset onto a new tree, keeping the selected order
    pub fn replace_tree(&mut self, tree: Tree) {
        *self = Self::new(tree, self.order());
    }
}

//! User-facing playback settings
//!
//! The knobs a front end exposes: how many nodes to grow, which order to
//! walk and how fast to replay it.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;

use crate::tree::TraversalOrder;

/// Node count used when none is given
pub const DEFAULT_NODE_COUNT: usize = 120;

/// Per-step replay delay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PlaybackSpeed {
    /// 50 ms per step
    #[default]
    Fast,

    /// 100 ms per step
    Medium,

    /// 1 s per step
    Slow,
}

impl PlaybackSpeed {
    /// Delay between two replayed steps
    pub fn delay(self) -> Duration {
        match self {
            PlaybackSpeed::Fast => Duration::from_millis(50),
            PlaybackSpeed::Medium => Duration::from_millis(100),
            PlaybackSpeed::Slow => Duration::from_millis(1000),
        }
    }
}

/// Errors from parsing or validating settings
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SettingsError {
    /// Node count below one
    #[error("node count must be at least 1")]
    ZeroNodes,

    /// Unrecognised traversal order name
    #[error("unknown traversal order '{0}' (expected in-order, pre-order, post-order or bfs)")]
    UnknownOrder(String),

    /// Unrecognised speed name
    #[error("unknown playback speed '{0}' (expected fast, medium or slow)")]
    UnknownSpeed(String),
}

/// Lowercase and drop separators so `Pre-Order`, `pre_order` and `PreOrder`
/// all compare equal
fn normalize(input: &str) -> String {
    input
        .chars()
        .filter(|c| !matches!(c, '-' | '_' | ' '))
        .flat_map(char::to_lowercase)
        .collect()
}

impl FromStr for TraversalOrder {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "inorder" => Ok(TraversalOrder::InOrder),
            "preorder" => Ok(TraversalOrder::PreOrder),
            "postorder" => Ok(TraversalOrder::PostOrder),
            "bfs" | "breadthfirst" | "levelorder" => Ok(TraversalOrder::Bfs),
            _ => Err(SettingsError::UnknownOrder(s.to_string())),
        }
    }
}

impl fmt::Display for TraversalOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TraversalOrder::InOrder => "in-order",
            TraversalOrder::PreOrder => "pre-order",
            TraversalOrder::PostOrder => "post-order",
            TraversalOrder::Bfs => "bfs",
        };
        f.write_str(label)
    }
}

impl FromStr for PlaybackSpeed {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "fast" => Ok(PlaybackSpeed::Fast),
            "medium" => Ok(PlaybackSpeed::Medium),
            "slow" => Ok(PlaybackSpeed::Slow),
            _ => Err(SettingsError::UnknownSpeed(s.to_string())),
        }
    }
}

impl fmt::Display for PlaybackSpeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PlaybackSpeed::Fast => "fast",
            PlaybackSpeed::Medium => "medium",
            PlaybackSpeed::Slow => "slow",
        };
        f.write_str(label)
    }
}

/// Settings consumed by a playback session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Nodes to request from the generator
    pub node_count: usize,

    /// Order to replay
    pub order: TraversalOrder,

    /// Replay pacing
    pub speed: PlaybackSpeed,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            node_count: DEFAULT_NODE_COUNT,
            order: TraversalOrder::default(),
            speed: PlaybackSpeed::default(),
        }
    }
}

impl Settings {
    /// Check the node count
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.node_count == 0 {
            return Err(SettingsError::ZeroNodes);
        }
        Ok(())
    }
}

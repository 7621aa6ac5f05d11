//! Uniform occupancy grid for separation checks
//!
//! Placed centres are bucketed into square cells whose side equals the
//! minimum separation. Any centre closer than that distance to a query
//! point must then live in the query's cell or one of its eight neighbours,
//! so a check touches at most nine buckets instead of every placed node.

use std::collections::HashMap;

use crate::tree::Point;

/// Grid of placed node centres
#[derive(Debug, Clone)]
pub(crate) struct OccupancyGrid {
    separation: f64,
    cells: HashMap<(i64, i64), Vec<Point>>,
    len: usize,
}

impl OccupancyGrid {
    /// Create an empty grid; `separation` must be strictly positive
    pub(crate) fn new(separation: f64) -> Self {
        debug_assert!(separation > 0.0, "grid separation must be positive");
        Self {
            separation,
            cells: HashMap::new(),
            len: 0,
        }
    }

    /// Cell holding `point` (floor division on both axes)
    fn cell_of(&self, point: &Point) -> (i64, i64) {
        (
            (point.x / self.separation).floor() as i64,
            (point.y / self.separation).floor() as i64,
        )
    }

    /// Record a placed centre
    pub(crate) fn insert(&mut self, point: Point) {
        let cell = self.cell_of(&point);
        self.cells.entry(cell).or_default().push(point);
        self.len += 1;
    }

    /// True if some placed centre is closer than the separation to `point`
    pub(crate) fn collides(&self, point: &Point) -> bool {
        let (cx, cy) = self.cell_of(point);
        (cx - 1..=cx + 1)
            .flat_map(|x| (cy - 1..=cy + 1).map(move |y| (x, y)))
            .filter_map(|cell| self.cells.get(&cell))
            .flatten()
            .any(|placed| placed.distance(point) < self.separation)
    }

    /// Number of recorded centres
    pub(crate) fn len(&self) -> usize {
        self.len
    }
}

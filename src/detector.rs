//! Wall collection and validity filtering.

use crate::angle::{axis_deviation_deg, is_horizontal, is_vertical};
use crate::segment::Wall;
use log::debug;
use serde::{Deserialize, Serialize};

/// Thresholds of the validity filter.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct WallParams {
    /// Minimum accepted wall length, in input units (mm). Strict: a wall of
    /// exactly this length is rejected.
    pub min_length: f64,
    /// Angular tolerance around the horizontal/vertical axes in degrees.
    /// Above 45° the horizontal and vertical bands overlap; a wall near 45°
    /// then satisfies both and still passes.
    pub angle_tolerance_deg: f64,
}

impl Default for WallParams {
    fn default() -> Self {
        Self {
            min_length: 100.0,
            angle_tolerance_deg: 10.0,
        }
    }
}

/// Ordered collection of accepted wall candidates plus the validity filter.
///
/// Candidates are stored in insertion order and never reordered;
/// [`WallDetector::valid_walls`] re-derives the valid subset on every call.
#[derive(Clone, Debug, Default)]
pub struct WallDetector {
    params: WallParams,
    walls: Vec<Wall>,
}

impl WallDetector {
    pub fn new(params: WallParams) -> Self {
        Self {
            params,
            walls: Vec::new(),
        }
    }

    /// Validates and appends a wall candidate. Degenerate endpoints are
    /// rejected and nothing is stored; otherwise returns the stored record
    /// with its computed length and angle.
    pub fn add_wall(&mut self, x1: i32, y1: i32, x2: i32, y2: i32) -> Result<&Wall, String> {
        let wall = Wall::new(x1, y1, x2, y2)?;
        debug!(
            "accepted ({},{}) -> ({},{}) len={:.3} angle={:.3} axis_dev={:.3}",
            x1,
            y1,
            x2,
            y2,
            wall.length,
            wall.angle,
            axis_deviation_deg(wall.angle)
        );
        self.walls.push(wall);
        Ok(self.walls.last().expect("just pushed"))
    }

    /// Filter predicate: longer than `min_length` (strictly) and within
    /// tolerance of horizontal or vertical.
    pub fn is_valid(&self, wall: &Wall) -> bool {
        let tol = self.params.angle_tolerance_deg;
        wall.length > self.params.min_length
            && (is_horizontal(wall.angle, tol) || is_vertical(wall.angle, tol))
    }

    /// Valid subset in insertion order. Pure query: re-derived from the full
    /// collection on every call, no caching, no deduplication.
    pub fn valid_walls(&self) -> Vec<Wall> {
        self.walls
            .iter()
            .filter(|w| self.is_valid(w))
            .cloned()
            .collect()
    }

    /// All accepted candidates, valid or not, in insertion order.
    pub fn walls(&self) -> &[Wall] {
        &self.walls
    }

    pub fn params(&self) -> &WallParams {
        &self.params
    }

    pub fn len(&self) -> usize {
        self.walls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.walls.is_empty()
    }
}

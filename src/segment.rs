//! Wall segment record with derived geometric attributes.

use serde::{Deserialize, Serialize};

/// A wall candidate: two distinct integer endpoints plus derived length and
/// orientation. Field order fixes the JSON key order of exported records.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Wall {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
    /// Euclidean endpoint distance, in input units (mm).
    pub length: f64,
    /// Signed angle of (x2-x1, y2-y1) against the +x axis, degrees, (-180, 180].
    pub angle: f64,
}

impl Wall {
    /// Builds a wall from raw endpoints, rejecting degenerate (zero-length)
    /// segments. Length and angle are computed once here; derivation cannot
    /// fail for distinct endpoints.
    pub fn new(x1: i32, y1: i32, x2: i32, y2: i32) -> Result<Self, String> {
        if x1 == x2 && y1 == y2 {
            return Err(format!("same points ({x1},{y1})"));
        }
        let dx = f64::from(x2) - f64::from(x1);
        let dy = f64::from(y2) - f64::from(y1);
        Ok(Self {
            x1,
            y1,
            x2,
            y2,
            length: (dx * dx + dy * dy).sqrt(),
            angle: dy.atan2(dx).to_degrees(),
        })
    }
}

//! JSON export of the valid wall set.

use crate::segment::Wall;
use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Writes `walls` to `path` as a JSON array with one minified record per
/// line, comma-separated, no trailing comma. An empty slice still produces
/// the `[]` framing. Returns the number of records written.
///
/// Floats use serde_json's shortest round-trip representation; byte-level
/// compatibility with any particular decimal precision is not guaranteed.
pub fn save_walls_json(path: &Path, walls: &[Wall]) -> Result<usize, String> {
    let file =
        fs::File::create(path).map_err(|e| format!("Cannot open {}: {e}", path.display()))?;
    let mut out = BufWriter::new(file);

    let write_err = |e: std::io::Error| format!("Failed to write {}: {e}", path.display());
    writeln!(out, "[").map_err(write_err)?;
    for (i, wall) in walls.iter().enumerate() {
        let record = serde_json::to_string(wall)
            .map_err(|e| format!("Failed to serialize wall record: {e}"))?;
        let sep = if i + 1 < walls.len() { "," } else { "" };
        writeln!(out, "  {record}{sep}").map_err(write_err)?;
    }
    writeln!(out, "]").map_err(write_err)?;
    out.flush().map_err(write_err)?;

    Ok(walls.len())
}

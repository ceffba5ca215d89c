//! Angle utilities in the degree domain used by the wall filter.

/// Normalizes an angle in degrees into the range (-180, 180].
#[inline]
pub fn normalize_deg(angle: f64) -> f64 {
    let mut norm = angle.rem_euclid(360.0);
    if norm > 180.0 {
        norm -= 360.0;
    }
    norm
}

/// Smallest unsigned deviation, in degrees, from the nearest axis direction
/// (0°, ±90° or ±180°). Wrap-safe at the ±180 seam: 179.5° and -179.5° both
/// map to 0.5.
#[inline]
pub fn axis_deviation_deg(angle: f64) -> f64 {
    let folded = normalize_deg(angle).abs().rem_euclid(90.0);
    folded.min(90.0 - folded)
}

/// True when `angle` lies strictly within `tol` degrees of 0° or ±180°.
#[inline]
pub fn is_horizontal(angle: f64, tol: f64) -> bool {
    angle.abs() < tol || (angle - 180.0).abs() < tol || (angle + 180.0).abs() < tol
}

/// True when `angle` lies strictly within `tol` degrees of ±90°.
#[inline]
pub fn is_vertical(angle: f64, tol: f64) -> bool {
    (angle - 90.0).abs() < tol || (angle + 90.0).abs() < tol
}

//! Ring markers drawn around positive intersections.

use std::f64::consts::TAU;

/// Angular increment between ring samples, in radians.
///
/// The step is fixed, so large rings come out as dotted circles rather than
/// closed outlines.
pub const MARKER_ANGLE_STEP: f64 = 0.1;

/// Pixels of a marker centred at `(cx, cy)`: the centre itself, then one
/// sample per angle step from 0 up to (not including) 2π.
///
/// Offsets are floored, so coordinates may fall outside the image; callers
/// clip. Consecutive samples can repeat a pixel at small radii. Huge radii
/// saturate at the `i64` range instead of overflowing.
pub fn marker_pixels(cx: usize, cy: usize, radius: f64) -> Vec<(i64, i64)> {
    let (cx, cy) = (cx as i64, cy as i64);
    let mut pixels = vec![(cx, cy)];

    let mut angle = 0.0_f64;
    while angle < TAU {
        let dx = (radius * angle.cos()).floor() as i64;
        let dy = (radius * angle.sin()).floor() as i64;
        pixels.push((cx.saturating_add(dx), cy.saturating_add(dy)));
        angle += MARKER_ANGLE_STEP;
    }

    pixels
}

//! Ring arithmetic for 1-based lottery number fields.
//!
//! A ring of size `r` holds the values `1..=r`. Every helper here maps a
//! zero remainder onto `r` so `0` never appears as a ring value.

use crate::constants::GOLDEN_ANGLE_DEG;

/// Fractional part of `x`, defined as `x - floor(x)`.
///
/// The floor-based definition keeps the result in `[0, 1)` for negative
/// inputs as well (`frac(-0.25) == 0.75`).
pub fn frac(x: f64) -> f64 {
    x - x.floor()
}

/// Maps any integer onto the ring `[1, ring]` via `v mod (ring + 1)`.
///
/// A zero remainder maps to `ring`. Negative values use the Euclidean
/// remainder, so the result is always inside the ring.
///
/// # Parameters
/// - `v`: The value to map.
/// - `ring`: Ring size (must be positive).
///
/// # Examples
///
/// ```
/// use ringseed::utils::ring::map_to_ring;
///
/// assert_eq!(map_to_ring(50, 50), 50);
/// assert_eq!(map_to_ring(51, 50), 50);
/// assert_eq!(map_to_ring(52, 50), 1);
/// ```
pub fn map_to_ring(v: i64, ring: u32) -> u32 {
    let r = v.rem_euclid(i64::from(ring) + 1);
    if r == 0 {
        ring
    } else {
        r as u32
    }
}

/// Wraps a value onto the ring `[1, ring]` via `v mod ring`, mapping a zero
/// remainder to `ring`.
///
/// This is the rule the bonus derivation applies twice.
///
/// # Parameters
/// - `v`: The value to wrap.
/// - `ring`: Ring size (must be positive).
pub fn wrap_to_ring(v: u64, ring: u32) -> u32 {
    let r = v % u64::from(ring);
    if r == 0 {
        ring
    } else {
        r as u32
    }
}

/// Shortest distance between two positions on a ring of `ring` slots.
pub fn circ_dist(a: i64, b: i64, ring: u32) -> u32 {
    let ring = i64::from(ring);
    let d = (a - b).abs() % ring;
    d.min(ring - d) as u32
}

/// Number of ring slots spanned by one golden angle on a ring of `ring`
/// slots.
pub fn golden_angle_steps(ring: u32) -> f64 {
    GOLDEN_ANGLE_DEG / (360.0 / f64::from(ring))
}

/// Golden-angle step rounded half-to-even, never less than one slot.
pub fn golden_step(ring: u32) -> u32 {
    match golden_angle_steps(ring).round_ties_even() as u32 {
        0 => 1,
        step => step,
    }
}

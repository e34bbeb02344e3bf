//! Numeric helpers shared by the seed engine and the PRNG.

pub mod bits;
pub mod ring;

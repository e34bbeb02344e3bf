//! Random number generation subsystem for ringseed.
//!
//! Provides the deterministic PRNG that expands an entropy seed into a
//! selection of draw numbers.

pub mod draw_rng;
pub mod mersenne_twister;

pub use draw_rng::DrawRng;
pub use mersenne_twister::MersenneTwister;

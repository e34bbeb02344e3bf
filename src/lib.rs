//! ringseed: deterministic seed-to-numbers generator for ring lotteries.
//!
//! Given a history of past draws, ringseed derives a single entropy seed in
//! `[0, 1)` from the most recent draw and expands it into a sorted selection
//! of primary numbers plus one bonus number. The same history always yields
//! the same numbers. No statistical validity is claimed.
//!
//! The crate also carries a small symmetric obfuscation scheme (XOR stream
//! over base64 text) with a compute-once, process-wide loader for an
//! embedded payload. Decoded payloads are opaque data.
//!
//! # Architecture
//!
//! ```text
//! SeedEngine     (seed derivation + expansion)
//!     ↓ seeds
//! MersenneTwister (MT19937, DrawRng sampling without replacement)
//!
//! PayloadLoader  (XOR stream + base64, OnceLock cache)   ← independent
//! ```
//!
//! # Examples
//!
//! ```
//! use chrono::NaiveDate;
//! use ringseed::{generate_numbers, DrawRecord, GameConfig};
//!
//! let history = vec![DrawRecord::new(
//!     NaiveDate::from_ymd_opt(2025, 8, 16).unwrap(),
//!     Some(70.0),
//!     vec![3, 9, 16, 26, 34, 41, 46],
//!     7,
//! )];
//! let target = NaiveDate::from_ymd_opt(2025, 8, 21).unwrap();
//!
//! let prediction = generate_numbers(&history, &GameConfig::lotto_max(), target).unwrap();
//! assert_eq!(prediction.primaries, vec![3, 17, 25, 27, 32, 33, 49]);
//! assert_eq!(prediction.bonus, 18);
//! ```

#![deny(clippy::all)]

pub mod config;
pub mod constants;
pub mod error;
pub mod game;
pub mod payload;
pub mod random;
pub mod utils;

mod seed_engine;

pub use config::EngineConfig;
pub use error::RingSeedError;
pub use game::{DrawRecord, GameConfig};
pub use payload::{engine_room, ObfuscatedArtifact, PayloadLoader};
pub use seed_engine::{
    bonus_offset, derive_seed, effective_jackpot_millions, expand_seed, generate_numbers,
    prng_seed, Prediction, SeedEngine, SeedStatistics,
};

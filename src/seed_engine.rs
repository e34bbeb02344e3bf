//! SeedEngine: entropy seed derivation and number expansion.
//!
//! The engine turns the most recent draw of a history into a single seed in
//! `[0, 1)` and expands that seed into a ring selection:
//!
//! ```text
//! DrawRecord ──► SeedStatistics (sum, mean, parity word)
//!      │                │
//!      └─ jackpot ──────┴──► x = J · M☉ · (S + 3M + P)
//!                                   │
//!                      seed = frac((x / (scale · (10^11 + 89))) mod 1)
//!                                   │
//!            ┌──────────────────────┴───────────────────────┐
//!   MT19937(trunc(seed · 1e9))                 trunc(seed · 1000)
//!   sample mains_count of [1, ring]            + golden-angle step
//!            │                                              │
//!        primaries ─────────────── max ────────────────► bonus
//! ```
//!
//! For realistic jackpots `x / denom` is far above 2^53, so the seed is
//! exactly `0.0`. That is the reference behavior and it is kept.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::EngineConfig;
use crate::constants::{
    BONUS_OFFSET_SCALE, DEFAULT_JACKPOT_MILLIONS, DEFAULT_SCALE, JACKPOT_UNIT, PRNG_SEED_SCALE,
    REDUCTION_MODULUS, SOLAR_MASS_KG,
};
use crate::error::RingSeedError;
use crate::game::{DrawRecord, GameConfig};
use crate::random::{DrawRng, MersenneTwister};
use crate::utils::bits;
use crate::utils::ring::{frac, golden_step, wrap_to_ring};

/// Statistics of a draw's primary numbers that feed the seed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeedStatistics {
    /// Sum of the primaries.
    pub sum: u64,
    /// Arithmetic mean of the primaries.
    pub mean: f64,
    /// Parity word: one bit per primary, `1` for odd, first primary as MSB.
    pub parity_word: u128,
}

impl SeedStatistics {
    /// Computes the statistics of a list of primaries.
    ///
    /// # Errors
    /// Returns [`RingSeedError::InvalidInput`] if `mains` is empty (the mean
    /// is undefined) or longer than the widest supported parity word.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringseed::SeedStatistics;
    ///
    /// let stats = SeedStatistics::from_mains(&[3, 9, 16, 26, 34, 41, 46]).unwrap();
    /// assert_eq!(stats.sum, 175);
    /// assert_eq!(stats.mean, 25.0);
    /// assert_eq!(stats.parity_word, 98);
    /// assert_eq!(stats.multiplier(), 348.0);
    /// ```
    pub fn from_mains(mains: &[u32]) -> Result<Self, RingSeedError> {
        if mains.is_empty() {
            return Err(RingSeedError::InvalidInput(
                "draw has no primary numbers".into(),
            ));
        }
        let parity_word = bits::parity_word(mains)?;
        let sum: u64 = mains.iter().map(|&n| u64::from(n)).sum();
        let mean = sum as f64 / mains.len() as f64;
        Ok(SeedStatistics {
            sum,
            mean,
            parity_word,
        })
    }

    /// The factor `S + 3M + P`, evaluated left to right in `f64`.
    pub fn multiplier(&self) -> f64 {
        self.sum as f64 + 3.0 * self.mean + self.parity_word as f64
    }
}

/// Numbers selected for one target draw.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prediction {
    /// Primaries, strictly increasing, each in `[1, ring]`.
    pub primaries: Vec<u32>,
    /// Bonus number in `[1, bonus_ring]`.
    pub bonus: u32,
}

/// Jackpot substitution rule.
///
/// A draw with no reported jackpot, or a reported jackpot of zero, is
/// treated as having `default_millions`.
pub fn effective_jackpot_millions(reported: Option<f64>, default_millions: f64) -> f64 {
    match reported {
        Some(j) if j != 0.0 => j,
        _ => default_millions,
    }
}

/// Deterministic seed-to-numbers generator.
///
/// Holds the reduction scale and the jackpot substituted for unreported
/// draws. [`SeedEngine::default`] uses the reference values (97.0 and 50.0).
#[derive(Debug, Clone, PartialEq)]
pub struct SeedEngine {
    scale: f64,
    default_jackpot_millions: f64,
}

impl Default for SeedEngine {
    fn default() -> Self {
        SeedEngine {
            scale: DEFAULT_SCALE,
            default_jackpot_millions: DEFAULT_JACKPOT_MILLIONS,
        }
    }
}

impl SeedEngine {
    /// Creates an engine from a configuration.
    ///
    /// # Errors
    /// Returns [`RingSeedError::Configuration`] if the configuration is not
    /// valid.
    pub fn from_config(config: &EngineConfig) -> Result<Self, RingSeedError> {
        config.validate()?;
        Ok(SeedEngine {
            scale: config.scale,
            default_jackpot_millions: config.default_jackpot_millions,
        })
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn default_jackpot_millions(&self) -> f64 {
        self.default_jackpot_millions
    }

    /// Derives the entropy seed of a draw with this engine's scale.
    ///
    /// # Errors
    /// See [`derive_seed`].
    pub fn derive_seed(
        &self,
        jackpot_millions: Option<f64>,
        last_draw: &DrawRecord,
    ) -> Result<f64, RingSeedError> {
        reduce(
            effective_jackpot_millions(jackpot_millions, self.default_jackpot_millions),
            last_draw,
            self.scale,
        )
    }

    /// Generates primaries and bonus for `target` from the last draw of
    /// `history`.
    ///
    /// Earlier draws and the target date do not influence the result.
    ///
    /// # Errors
    /// Returns [`RingSeedError::InvalidInput`] if `history` is empty or its
    /// last draw has no primaries.
    pub fn generate_numbers(
        &self,
        history: &[DrawRecord],
        game: &GameConfig,
        target: NaiveDate,
    ) -> Result<Prediction, RingSeedError> {
        let last = history
            .last()
            .ok_or_else(|| RingSeedError::InvalidInput("history is empty".into()))?;
        let seed = self.derive_seed(last.jackpot_millions(), last)?;

        let mut rng = MersenneTwister::with_seed(prng_seed(seed));
        let prediction = expand_seed(seed, game, &mut rng)?;
        info!(
            game = game.name(),
            %target,
            last_draw = %last.date(),
            seed,
            primaries = ?prediction.primaries,
            bonus = prediction.bonus,
            "Generated numbers"
        );
        Ok(prediction)
    }
}

/// Derives the entropy seed of a draw.
///
/// A missing or zero jackpot is replaced by 50.0 million.
///
/// # Parameters
/// - `jackpot_millions`: Reported jackpot in millions.
/// - `last_draw`: The draw whose primaries feed the statistics.
/// - `scale`: Scale of the reduction denominator (97.0 in the reference).
///
/// # Returns
/// A value in `[0, 1)`, identical bit-for-bit for identical inputs.
///
/// # Errors
/// Returns [`RingSeedError::InvalidInput`] if the draw has no primaries, if
/// `scale` is not a finite positive number, or if the jackpot is so large
/// (or non-finite) that the working value overflows.
pub fn derive_seed(
    jackpot_millions: Option<f64>,
    last_draw: &DrawRecord,
    scale: f64,
) -> Result<f64, RingSeedError> {
    reduce(
        effective_jackpot_millions(jackpot_millions, DEFAULT_JACKPOT_MILLIONS),
        last_draw,
        scale,
    )
}

/// Generates numbers with the reference engine settings.
///
/// # Errors
/// See [`SeedEngine::generate_numbers`].
pub fn generate_numbers(
    history: &[DrawRecord],
    game: &GameConfig,
    target: NaiveDate,
) -> Result<Prediction, RingSeedError> {
    SeedEngine::default().generate_numbers(history, game, target)
}

/// Expands a seed into primaries and bonus using `rng` for the sampling.
///
/// `rng` is expected to be seeded from `seed` already; this function only
/// consumes it.
///
/// # Errors
/// Returns [`RingSeedError::InvalidInput`] if the game asks for more
/// primaries than its ring holds.
pub fn expand_seed<R: DrawRng>(
    seed: f64,
    game: &GameConfig,
    rng: &mut R,
) -> Result<Prediction, RingSeedError> {
    let mut primaries = rng.sample_range(1..=game.ring(), game.mains_count() as usize)?;
    primaries.sort_unstable();
    let highest = primaries.last().copied().ok_or_else(|| {
        RingSeedError::InvalidInput(format!("game '{}' selects no primaries", game.name()))
    })?;

    let step = golden_step(game.bonus_ring());
    let base = wrap_to_ring(u64::from(highest) + u64::from(step), game.bonus_ring());
    let bonus = wrap_to_ring(u64::from(base) + bonus_offset(seed), game.bonus_ring());

    Ok(Prediction { primaries, bonus })
}

/// PRNG seed integer for an entropy seed.
pub fn prng_seed(seed: f64) -> u64 {
    (seed * PRNG_SEED_SCALE) as u64
}

/// Bonus offset for an entropy seed.
pub fn bonus_offset(seed: f64) -> u64 {
    (seed * BONUS_OFFSET_SCALE) as u64
}

/// Core reduction shared by the engine and the free function.
fn reduce(jackpot_millions: f64, last_draw: &DrawRecord, scale: f64) -> Result<f64, RingSeedError> {
    if !scale.is_finite() || scale <= 0.0 {
        return Err(RingSeedError::InvalidInput(format!(
            "scale must be a finite positive number, got {}",
            scale
        )));
    }
    let stats = SeedStatistics::from_mains(last_draw.mains())?;

    let mut x = jackpot_millions * JACKPOT_UNIT * SOLAR_MASS_KG;
    x *= stats.multiplier();
    let denom = scale * REDUCTION_MODULUS;
    let quotient = x / denom;
    if !quotient.is_finite() {
        return Err(RingSeedError::InvalidInput(format!(
            "jackpot {} millions overflows the seed derivation",
            jackpot_millions
        )));
    }

    let seed = frac(quotient.rem_euclid(1.0));
    debug!(
        draw = %last_draw.date(),
        jackpot_millions,
        sum = stats.sum,
        mean = stats.mean,
        parity_word = %stats.parity_word,
        seed,
        "Derived entropy seed"
    );
    Ok(seed)
}

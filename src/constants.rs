//! Fixed numeric constants of the seed derivation.
//!
//! The "physical" constants carry no physical meaning here. Only their
//! magnitude and exact `f64` value matter, because every derived seed must be
//! reproducible bit-for-bit.

/// Golden ratio, `(1 + √5) / 2`.
pub const PHI: f64 = 1.618_033_988_749_895;

/// Golden angle in degrees, `360 * (1 - 1/PHI)`.
pub const GOLDEN_ANGLE_DEG: f64 = 137.507_764_050_037_88;

/// Solar mass in kilograms. Used only to push the working value into a
/// large, distinctive range before reduction.
pub const SOLAR_MASS_KG: f64 = 1.98847e30;

/// Speed of light in m/s. Part of the original constant table, unused by the
/// derivation.
pub const SPEED_OF_LIGHT_MPS: f64 = 299_792_458.0;

/// Scale applied to the reduction denominator when none is configured.
pub const DEFAULT_SCALE: f64 = 97.0;

/// Prime offset of the reduction modulus, `10^11 + 89`.
pub const REDUCTION_MODULUS: f64 = 100_000_000_089.0;

/// Jackpot (millions) substituted when a draw has none reported.
pub const DEFAULT_JACKPOT_MILLIONS: f64 = 50.0;

/// Monetary units per jackpot "million".
pub const JACKPOT_UNIT: f64 = 1e6;

/// Multiplier turning the seed into the PRNG seed integer.
pub const PRNG_SEED_SCALE: f64 = 1e9;

/// Multiplier turning the seed into the bonus offset.
pub const BONUS_OFFSET_SCALE: f64 = 1000.0;

//! Game variants and historical draw records.
//!
//! A [`GameConfig`] describes the rings of one lottery variant and is
//! validated when it is built, so every config that exists satisfies
//! `0 < mains_count <= ring` and `bonus_ring > 0`. A [`DrawRecord`] is one
//! immutable historical result.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::RingSeedError;

/// Name of the built-in game variant.
pub const LOTTO_MAX: &str = "LOTTO_MAX";

/// Static description of a lottery variant.
///
/// # Examples
///
/// ```
/// use ringseed::GameConfig;
///
/// let game = GameConfig::new("PICK_3", 10, 3, 5).unwrap();
/// assert_eq!(game.ring(), 10);
///
/// assert!(GameConfig::new("BROKEN", 5, 6, 5).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGameConfig")]
pub struct GameConfig {
    name: String,
    ring: u32,
    mains_count: u32,
    bonus_ring: u32,
}

/// Unvalidated wire form of [`GameConfig`].
#[derive(Deserialize)]
struct RawGameConfig {
    name: String,
    ring: u32,
    mains_count: u32,
    bonus_ring: u32,
}

impl TryFrom<RawGameConfig> for GameConfig {
    type Error = RingSeedError;

    fn try_from(raw: RawGameConfig) -> Result<Self, Self::Error> {
        GameConfig::new(raw.name, raw.ring, raw.mains_count, raw.bonus_ring)
    }
}

impl GameConfig {
    /// Creates a validated game configuration.
    ///
    /// # Parameters
    /// - `name`: Identifier of the variant.
    /// - `ring`: Size of the primary-number ring.
    /// - `mains_count`: Number of primaries drawn.
    /// - `bonus_ring`: Size of the bonus-number ring.
    ///
    /// # Errors
    /// Returns [`RingSeedError::Configuration`] if a ring size or the count
    /// is zero, or if `mains_count > ring` (sampling without replacement
    /// could not be satisfied).
    pub fn new(
        name: impl Into<String>,
        ring: u32,
        mains_count: u32,
        bonus_ring: u32,
    ) -> Result<Self, RingSeedError> {
        let name = name.into();
        if ring == 0 || bonus_ring == 0 {
            return Err(RingSeedError::Configuration(format!(
                "game '{}': ring sizes must be positive (ring={}, bonus_ring={})",
                name, ring, bonus_ring
            )));
        }
        if mains_count == 0 {
            return Err(RingSeedError::Configuration(format!(
                "game '{}': mains_count must be positive",
                name
            )));
        }
        if mains_count > ring {
            return Err(RingSeedError::Configuration(format!(
                "game '{}': mains_count {} exceeds ring {}",
                name, mains_count, ring
            )));
        }
        Ok(GameConfig {
            name,
            ring,
            mains_count,
            bonus_ring,
        })
    }

    /// The built-in `LOTTO_MAX` variant: 7 of 50, bonus ring 50.
    pub fn lotto_max() -> Self {
        GameConfig {
            name: LOTTO_MAX.to_string(),
            ring: 50,
            mains_count: 7,
            bonus_ring: 50,
        }
    }

    /// Looks up a built-in variant by name.
    pub fn builtin(name: &str) -> Option<Self> {
        builtin_games().into_iter().find(|g| g.name == name)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ring(&self) -> u32 {
        self.ring
    }

    pub fn mains_count(&self) -> u32 {
        self.mains_count
    }

    pub fn bonus_ring(&self) -> u32 {
        self.bonus_ring
    }
}

/// All built-in game variants.
pub fn builtin_games() -> Vec<GameConfig> {
    vec![GameConfig::lotto_max()]
}

/// One historical lottery result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawRecord {
    date: NaiveDate,
    #[serde(default)]
    jackpot_millions: Option<f64>,
    mains: Vec<u32>,
    bonus: u32,
}

impl DrawRecord {
    /// Creates a draw record.
    ///
    /// No validation happens here; operations that need a non-empty list
    /// of primaries check it themselves.
    pub fn new(date: NaiveDate, jackpot_millions: Option<f64>, mains: Vec<u32>, bonus: u32) -> Self {
        DrawRecord {
            date,
            jackpot_millions,
            mains,
            bonus,
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Reported jackpot in millions, if any.
    pub fn jackpot_millions(&self) -> Option<f64> {
        self.jackpot_millions
    }

    /// Primary numbers in draw order.
    pub fn mains(&self) -> &[u32] {
        &self.mains
    }

    pub fn bonus(&self) -> u32 {
        self.bonus
    }
}

/// The reference draw of 2025-08-16 used by the demo.
pub fn demo_history() -> Vec<DrawRecord> {
    let date = NaiveDate::from_ymd_opt(2025, 8, 16).unwrap_or_default();
    vec![DrawRecord::new(
        date,
        Some(70.0),
        vec![3, 9, 16, 26, 34, 41, 46],
        7,
    )]
}

/// Parses a JSON array of draw records.
///
/// # Errors
/// Returns [`RingSeedError::ConfigParse`] if the document does not match the
/// draw record schema.
pub fn history_from_json(json: &str) -> Result<Vec<DrawRecord>, RingSeedError> {
    Ok(serde_json::from_str(json)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lotto_max_values() {
        let game = GameConfig::lotto_max();
        assert_eq!(game.name(), "LOTTO_MAX");
        assert_eq!(game.ring(), 50);
        assert_eq!(game.mains_count(), 7);
        assert_eq!(game.bonus_ring(), 50);
    }

    #[test]
    fn test_builtin_lookup() {
        assert_eq!(GameConfig::builtin("LOTTO_MAX"), Some(GameConfig::lotto_max()));
        assert_eq!(GameConfig::builtin("POWERBALL"), None);
    }

    #[test]
    fn test_mains_count_equal_to_ring_is_valid() {
        assert!(GameConfig::new("FULL", 6, 6, 1).is_ok());
    }

    #[test]
    fn test_mains_count_exceeds_ring() {
        let err = GameConfig::new("BAD", 5, 6, 5).unwrap_err();
        assert_eq!(
            err,
            RingSeedError::Configuration("game 'BAD': mains_count 6 exceeds ring 5".into())
        );
    }

    #[test]
    fn test_zero_rings_rejected() {
        assert!(matches!(
            GameConfig::new("Z", 0, 0, 5),
            Err(RingSeedError::Configuration(_))
        ));
        assert!(matches!(
            GameConfig::new("Z", 5, 1, 0),
            Err(RingSeedError::Configuration(_))
        ));
        assert!(matches!(
            GameConfig::new("Z", 5, 0, 5),
            Err(RingSeedError::Configuration(_))
        ));
    }

    #[test]
    fn test_deserialize_validates() {
        let ok: GameConfig =
            serde_json::from_str(r#"{"name":"G","ring":10,"mains_count":3,"bonus_ring":4}"#)
                .unwrap();
        assert_eq!(ok.mains_count(), 3);

        let bad = serde_json::from_str::<GameConfig>(
            r#"{"name":"G","ring":3,"mains_count":4,"bonus_ring":4}"#,
        );
        let msg = bad.unwrap_err().to_string();
        assert!(msg.contains("mains_count 4 exceeds ring 3"), "{}", msg);
    }

    #[test]
    fn test_history_from_json() {
        let json = r#"[
            {"date":"2025-08-09","jackpot_millions":null,"mains":[1,2,3],"bonus":4},
            {"date":"2025-08-16","mains":[3,9,16,26,34,41,46],"bonus":7}
        ]"#;
        let history = history_from_json(json).unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].jackpot_millions(), None);
        assert_eq!(history[1].jackpot_millions(), None);
        assert_eq!(history[1].mains(), &[3, 9, 16, 26, 34, 41, 46]);
        assert_eq!(
            history[1].date(),
            NaiveDate::from_ymd_opt(2025, 8, 16).unwrap()
        );
    }

    #[test]
    fn test_example_history_ends_with_demo_draw() {
        let history = history_from_json(include_str!("../config/history.example.json")).unwrap();
        assert_eq!(history.last(), demo_history().last());
    }

    #[test]
    fn test_history_from_json_rejects_bad_date() {
        let json = r#"[{"date":"2025-13-40","mains":[1],"bonus":1}]"#;
        assert!(matches!(
            history_from_json(json),
            Err(RingSeedError::ConfigParse(_))
        ));
    }

    #[test]
    fn test_demo_history() {
        let history = demo_history();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].jackpot_millions(), Some(70.0));
        assert_eq!(history[0].bonus(), 7);
    }
}

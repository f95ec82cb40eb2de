//! Data-driven game balance
//!
//! Every number that changes how the game plays lives in [`Tuning`]. The
//! defaults reproduce the classic arcade feel; hosts may load overrides from
//! JSON (missing fields keep their defaults).

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::BlockColor;

/// Reasons a tuning table is rejected
#[derive(Debug, thiserror::Error)]
pub enum TuningError {
    #[error("failed to parse tuning JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("{field} must be a finite positive number, got {value}")]
    NotPositive { field: &'static str, value: f32 },

    #[error("{field} must be a probability in [0, 1], got {value}")]
    NotProbability { field: &'static str, value: f32 },

    #[error("points_per_level must be at least 1")]
    ZeroPointsPerLevel,

    #[error("palette must contain at least one color")]
    EmptyPalette,
}

/// Game balance table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub block_size: f32,
    pub platform_width: f32,
    pub platform_height: f32,
    pub platform_step: f32,
    pub initial_speed: f32,
    pub speed_per_level: f32,
    pub points_per_level: u32,
    pub base_spawn_chance: f32,
    pub spawn_chance_per_level: f32,
    /// Colors blocks and the platform are drawn from
    pub palette: Vec<BlockColor>,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            block_size: BLOCK_SIZE,
            platform_width: PLATFORM_WIDTH,
            platform_height: PLATFORM_HEIGHT,
            platform_step: PLATFORM_STEP,
            initial_speed: INITIAL_SPEED,
            speed_per_level: SPEED_PER_LEVEL,
            points_per_level: POINTS_PER_LEVEL,
            base_spawn_chance: BASE_SPAWN_CHANCE,
            spawn_chance_per_level: SPAWN_CHANCE_PER_LEVEL,
            palette: BlockColor::ALL.to_vec(),
        }
    }
}

impl Tuning {
    /// Parse a tuning table from JSON and validate it
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Check that every value keeps the simulation well-formed
    pub fn validate(&self) -> Result<(), TuningError> {
        let positive = [
            ("block_size", self.block_size),
            ("platform_width", self.platform_width),
            ("platform_height", self.platform_height),
            ("platform_step", self.platform_step),
            ("initial_speed", self.initial_speed),
        ];
        for (field, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(TuningError::NotPositive { field, value });
            }
        }

        // Speed bump may be zero (flat difficulty) but not negative
        if !self.speed_per_level.is_finite() || self.speed_per_level < 0.0 {
            return Err(TuningError::NotPositive {
                field: "speed_per_level",
                value: self.speed_per_level,
            });
        }

        let chances = [
            ("base_spawn_chance", self.base_spawn_chance),
            ("spawn_chance_per_level", self.spawn_chance_per_level),
        ];
        for (field, value) in chances {
            if !(0.0..=1.0).contains(&value) {
                return Err(TuningError::NotProbability { field, value });
            }
        }

        if self.points_per_level == 0 {
            return Err(TuningError::ZeroPointsPerLevel);
        }
        if self.palette.is_empty() {
            return Err(TuningError::EmptyPalette);
        }
        Ok(())
    }

    /// Level reached at the given score (1-based)
    #[inline]
    pub fn level_for_score(&self, score: u32) -> u32 {
        score / self.points_per_level + 1
    }

    /// Fall speed for a level
    #[inline]
    pub fn speed_for_level(&self, level: u32) -> f32 {
        self.initial_speed + level.saturating_sub(1) as f32 * self.speed_per_level
    }

    /// Per-frame spawn probability for a level, capped at certainty
    #[inline]
    pub fn spawn_chance(&self, level: u32) -> f32 {
        (self.base_spawn_chance + level as f32 * self.spawn_chance_per_level).min(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let tuning = Tuning::default();
        assert!(tuning.validate().is_ok());
        assert_eq!(tuning.palette.len(), 6);
    }

    #[test]
    fn test_level_and_speed_curve() {
        let tuning = Tuning::default();
        assert_eq!(tuning.level_for_score(0), 1);
        assert_eq!(tuning.level_for_score(9), 1);
        assert_eq!(tuning.level_for_score(10), 2);
        assert_eq!(tuning.level_for_score(25), 3);

        assert_eq!(tuning.speed_for_level(1), 2.0);
        assert_eq!(tuning.speed_for_level(3), 3.0);
    }

    #[test]
    fn test_spawn_chance() {
        let tuning = Tuning::default();
        assert!((tuning.spawn_chance(1) - 0.022).abs() < 1e-6);
        assert!((tuning.spawn_chance(10) - 0.04).abs() < 1e-6);
        assert_eq!(tuning.spawn_chance(10_000), 1.0);
    }

    #[test]
    fn test_from_json_partial_override() {
        let tuning = Tuning::from_json(r#"{ "platform_width": 200.0, "palette": ["Red", "Blue"] }"#)
            .unwrap();
        assert_eq!(tuning.platform_width, 200.0);
        assert_eq!(tuning.block_size, BLOCK_SIZE);
        assert_eq!(tuning.palette, vec![BlockColor::Red, BlockColor::Blue]);
    }

    #[test]
    fn test_from_json_rejects_bad_values() {
        assert!(matches!(
            Tuning::from_json(r#"{ "block_size": -5.0 }"#),
            Err(TuningError::NotPositive { field: "block_size", .. })
        ));
        assert!(matches!(
            Tuning::from_json(r#"{ "base_spawn_chance": 1.5 }"#),
            Err(TuningError::NotProbability { .. })
        ));
        assert!(matches!(
            Tuning::from_json(r#"{ "points_per_level": 0 }"#),
            Err(TuningError::ZeroPointsPerLevel)
        ));
        assert!(matches!(
            Tuning::from_json(r#"{ "palette": [] }"#),
            Err(TuningError::EmptyPalette)
        ));
        assert!(matches!(Tuning::from_json("not json"), Err(TuningError::Parse(_))));
    }
}

use serde::{Deserialize, Serialize};
use yew::AttrValue;

pub const MULTIPLIER_MIN: f64 = 0.25;
pub const MULTIPLIER_MAX: f64 = 10.0;
pub const MULTIPLIER_STEP: f64 = 0.25;
pub const REPS_MIN: u32 = 1;
pub const REPS_MAX: u32 = 100;

pub fn clamp_multiplier(value: f64) -> f64 {
    value.clamp(MULTIPLIER_MIN, MULTIPLIER_MAX)
}

pub fn clamp_reps(value: u32) -> u32 {
    value.clamp(REPS_MIN, REPS_MAX)
}

/// per-game override of the exercise multiplier
#[derive(Debug, Default, Clone, Serialize, Deserialize, PartialEq)]
pub struct GameMultiplier {
    pub game: AttrValue,
    pub multiplier: f64,
}

/// Exercise settings form state. No invariants beyond clamping; the server
/// stores whatever clamped values it receives.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExerciseSettings {
    pub exercise: AttrValue,
    pub reps_per_death: u32,
    #[serde(default)]
    pub overrides: Vec<GameMultiplier>,
}

impl Default for ExerciseSettings {
    fn default() -> Self {
        Self {
            exercise: "push-ups".into(),
            reps_per_death: 10,
            overrides: Vec::new(),
        }
    }
}

impl ExerciseSettings {
    /// reps owed for one death in the given game
    pub fn reps_for(&self, game: &str) -> u32 {
        let multiplier = self
            .overrides
            .iter()
            .find(|o| o.game.as_str() == game)
            .map(|o| o.multiplier)
            .unwrap_or(1.0);
        (self.reps_per_death as f64 * clamp_multiplier(multiplier)).round() as u32
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn clamping_bounds() {
        assert_eq!(clamp_multiplier(0.0), MULTIPLIER_MIN);
        assert_eq!(clamp_multiplier(3.5), 3.5);
        assert_eq!(clamp_multiplier(99.0), MULTIPLIER_MAX);
        assert_eq!(clamp_reps(0), REPS_MIN);
        assert_eq!(clamp_reps(1000), REPS_MAX);
    }

    #[test]
    fn override_applies_to_named_game_only() {
        let settings = ExerciseSettings {
            reps_per_death: 10,
            overrides: vec![GameMultiplier {
                game: "elden ring".into(),
                multiplier: 0.5,
            }],
            ..Default::default()
        };
        assert_eq!(settings.reps_for("elden ring"), 5);
        assert_eq!(settings.reps_for("celeste"), 10);
    }
}

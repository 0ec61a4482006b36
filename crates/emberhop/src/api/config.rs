use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Simulation configuration, provided by the host.
/// Loaded from a JSON file at runtime; every field falls back to its default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Fixed timestep in seconds (default: 1/60).
    pub fixed_dt: f32,
    /// Cap on fixed ticks run for one rendered frame (default: 10).
    pub max_steps_per_frame: u32,
    /// Player character physics and timing.
    pub character: CharacterTuning,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            fixed_dt: 1.0 / 60.0,
            max_steps_per_frame: 10,
            character: CharacterTuning::default(),
        }
    }
}

impl SimConfig {
    /// Parse a configuration from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let config: Self = serde_json::from_str(json)?;
        log::info!(
            "sim config loaded: fixed_dt={} powerup_duration={}",
            config.fixed_dt,
            config.character.powerup_duration
        );
        Ok(config)
    }
}

/// Player physics values and jump timing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CharacterTuning {
    /// Size in world units.
    pub dimension: [f32; 2],
    /// Per-axis speed clamp. `terminal_velocity[1]` is also the forced rise speed.
    pub terminal_velocity: [f32; 2],
    pub friction: [f32; 2],
    /// Constant acceleration; the y component is gravity.
    pub acceleration: [f32; 2],
    /// Longest sustained rise while the jump is held (seconds).
    pub jump_time_max: f32,
    /// Shortest rise after a tap (seconds).
    pub jump_time_min: f32,
    /// Subtracted from `jump_time_max` to get the head start of an in-air boost.
    pub powered_jump_margin: f32,
    /// Power-up lifetime after pickup (seconds).
    pub powerup_duration: f32,
}

impl Default for CharacterTuning {
    fn default() -> Self {
        Self {
            dimension: [1.0, 1.0],
            terminal_velocity: [3.0, 4.0],
            friction: [12.0, 0.0],
            acceleration: [0.0, -25.0],
            jump_time_max: 0.3,
            jump_time_min: 0.1,
            powered_jump_margin: 0.018,
            powerup_duration: 9.0,
        }
    }
}

impl CharacterTuning {
    /// `time_jumping` preset used by the powered in-air jump.
    pub fn powered_jump_offset(&self) -> f32 {
        self.jump_time_max - self.powered_jump_margin
    }

    pub fn dimension(&self) -> Vec2 {
        Vec2::from(self.dimension)
    }

    pub fn terminal_velocity(&self) -> Vec2 {
        Vec2::from(self.terminal_velocity)
    }

    pub fn friction(&self) -> Vec2 {
        Vec2::from(self.friction)
    }

    pub fn acceleration(&self) -> Vec2 {
        Vec2::from(self.acceleration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_json_uses_defaults() {
        let config = SimConfig::from_json("{}").unwrap();
        assert_eq!(config, SimConfig::default());
        assert_eq!(config.character.jump_time_max, 0.3);
        assert_eq!(config.character.terminal_velocity, [3.0, 4.0]);
    }

    #[test]
    fn partial_character_override() {
        let json = r#"{
            "fixed_dt": 0.02,
            "character": { "powerup_duration": 4.5, "acceleration": [0.0, -30.0] }
        }"#;
        let config = SimConfig::from_json(json).unwrap();
        assert_eq!(config.fixed_dt, 0.02);
        assert_eq!(config.character.powerup_duration, 4.5);
        assert_eq!(config.character.acceleration(), Vec2::new(0.0, -30.0));
        // Untouched fields keep defaults
        assert_eq!(config.character.jump_time_min, 0.1);
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(SimConfig::from_json("{ \"fixed_dt\": \"fast\" }").is_err());
    }

    #[test]
    fn powered_offset_is_near_max() {
        let tuning = CharacterTuning::default();
        assert!((tuning.powered_jump_offset() - 0.282).abs() < 1e-6);
    }
}

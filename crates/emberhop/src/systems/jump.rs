//! Jump state machine as pure functions.
//!
//! `transition` handles the jump input, `rise_step` is the per-frame y-axis
//! overlay that decides whether the rise is still being forced.

use crate::api::config::CharacterTuning;
use crate::api::effects::CharacterEvent;
use crate::components::character::JumpState;

/// Inputs the jump machine reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct JumpInput {
    /// Jump button held this frame.
    pub requested: bool,
    /// Power-up currently active.
    pub powered: bool,
}

/// Result of feeding one input into the machine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JumpTransition {
    pub state: JumpState,
    /// New `time_jumping`, when the transition resets it.
    pub time_jumping: Option<f32>,
    pub event: Option<CharacterEvent>,
}

impl JumpTransition {
    fn stay(state: JumpState) -> Self {
        Self {
            state,
            time_jumping: None,
            event: None,
        }
    }
}

pub fn transition(state: JumpState, input: JumpInput, tuning: &CharacterTuning) -> JumpTransition {
    match state {
        JumpState::Grounded if input.requested => JumpTransition {
            state: JumpState::JumpRising,
            time_jumping: Some(0.0),
            event: Some(CharacterEvent::JumpStarted),
        },
        JumpState::JumpRising if !input.requested => JumpTransition::stay(JumpState::JumpFalling),
        JumpState::Falling | JumpState::JumpFalling if input.requested && input.powered => {
            JumpTransition {
                state: JumpState::JumpRising,
                time_jumping: Some(tuning.powered_jump_offset()),
                event: Some(CharacterEvent::PoweredJumpStarted),
            }
        }
        _ => JumpTransition::stay(state),
    }
}

/// Outcome of the y-axis overlay for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiseStep {
    pub state: JumpState,
    pub time_jumping: f32,
    /// Velocity.y must be pinned to the terminal speed before integrating.
    pub force_rise: bool,
    /// The character was grounded at the start of the frame.
    pub left_ground: bool,
}

pub fn rise_step(state: JumpState, time_jumping: f32, dt: f32, tuning: &CharacterTuning) -> RiseStep {
    match state {
        // Grounded only lasts until the next frame; collision re-lands the character.
        JumpState::Grounded => RiseStep {
            state: JumpState::Falling,
            time_jumping,
            force_rise: false,
            left_ground: true,
        },
        JumpState::JumpRising => {
            let t = time_jumping + dt;
            RiseStep {
                state,
                time_jumping: t,
                force_rise: t <= tuning.jump_time_max,
                left_ground: false,
            }
        }
        JumpState::Falling => RiseStep {
            state,
            time_jumping,
            force_rise: false,
            left_ground: false,
        },
        JumpState::JumpFalling => {
            // Minimum hop: a tap still rises until jump_time_min.
            let t = time_jumping + dt;
            RiseStep {
                state,
                time_jumping: t,
                force_rise: t > 0.0 && t <= tuning.jump_time_min,
                left_ground: false,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(requested: bool, powered: bool) -> JumpInput {
        JumpInput { requested, powered }
    }

    #[test]
    fn grounded_jump_starts_rise() {
        let tuning = CharacterTuning::default();
        let t = transition(JumpState::Grounded, input(true, false), &tuning);
        assert_eq!(t.state, JumpState::JumpRising);
        assert_eq!(t.time_jumping, Some(0.0));
        assert_eq!(t.event, Some(CharacterEvent::JumpStarted));

        let t = transition(JumpState::Grounded, input(false, true), &tuning);
        assert_eq!(t, JumpTransition::stay(JumpState::Grounded));
    }

    #[test]
    fn release_while_rising_starts_fall() {
        let tuning = CharacterTuning::default();
        let t = transition(JumpState::JumpRising, input(false, false), &tuning);
        assert_eq!(t.state, JumpState::JumpFalling);
        assert_eq!(t.time_jumping, None);
        assert_eq!(t.event, None);

        let held = transition(JumpState::JumpRising, input(true, true), &tuning);
        assert_eq!(held.state, JumpState::JumpRising);
    }

    #[test]
    fn airborne_jump_needs_powerup() {
        let tuning = CharacterTuning::default();
        for state in [JumpState::Falling, JumpState::JumpFalling] {
            let plain = transition(state, input(true, false), &tuning);
            assert_eq!(plain.state, state);

            let boosted = transition(state, input(true, true), &tuning);
            assert_eq!(boosted.state, JumpState::JumpRising);
            assert_eq!(boosted.time_jumping, Some(tuning.jump_time_max - 0.018));
            assert_eq!(boosted.event, Some(CharacterEvent::PoweredJumpStarted));
        }
    }

    #[test]
    fn rise_is_forced_until_max() {
        let tuning = CharacterTuning::default();
        let step = rise_step(JumpState::JumpRising, 0.2, 0.06, &tuning);
        assert!(step.force_rise);
        let step = rise_step(JumpState::JumpRising, step.time_jumping, 0.06, &tuning);
        assert!(!step.force_rise);
        assert_eq!(step.state, JumpState::JumpRising);
    }

    #[test]
    fn short_tap_is_forced_until_min() {
        let tuning = CharacterTuning::default();
        let step = rise_step(JumpState::JumpFalling, 0.02, 0.05, &tuning);
        assert!(step.force_rise);
        let step = rise_step(JumpState::JumpFalling, step.time_jumping, 0.05, &tuning);
        assert!(!step.force_rise);
    }

    #[test]
    fn grounded_becomes_falling() {
        let tuning = CharacterTuning::default();
        let step = rise_step(JumpState::Grounded, 0.4, 0.016, &tuning);
        assert_eq!(step.state, JumpState::Falling);
        assert!(step.left_ground);
        assert!(!step.force_rise);
        assert_eq!(step.time_jumping, 0.4);

        let step = rise_step(JumpState::Falling, 0.0, 0.016, &tuning);
        assert_eq!(step.state, JumpState::Falling);
        assert!(!step.left_ground && !step.force_rise);
    }
}

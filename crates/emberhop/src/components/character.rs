//! The player character entity.

use glam::Vec2;
use crate::api::config::CharacterTuning;
use crate::api::effects::{CharacterEvent, EffectsSink};
use crate::components::animation::AnimationState;
use crate::components::entity::{Body, GameObject};
use crate::systems::jump;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewDirection {
    Left,
    #[default]
    Right,
}

/// Vertical phase of the character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JumpState {
    /// Standing on terrain (set by the collision collaborator through `land`).
    Grounded,
    /// Airborne without an active jump, e.g. walked off a ledge.
    #[default]
    Falling,
    /// Jump held, sustained rise.
    JumpRising,
    /// Jump released, coming down.
    JumpFalling,
}

/// Player entity. Owned by the game session; systems borrow it per frame.
#[derive(Debug, Clone)]
pub struct Character {
    body: Body,
    pub view_direction: ViewDirection,
    pub(crate) jump_state: JumpState,
    pub(crate) time_jumping: f32,
    pub(crate) has_powerup: bool,
    pub(crate) time_left_powerup: f32,
    pub(crate) animation: AnimationState,
    /// Seconds spent in the current animation.
    pub(crate) state_time: f32,
    tuning: CharacterTuning,
}

impl Character {
    pub fn new(tuning: CharacterTuning) -> Self {
        let dimension = tuning.dimension();
        let mut body = Body::with_dimension(dimension).with_origin(dimension / 2.0);
        body.terminal_velocity = tuning.terminal_velocity();
        body.friction = tuning.friction();
        body.acceleration = tuning.acceleration();
        Self {
            body,
            view_direction: ViewDirection::Right,
            jump_state: JumpState::Falling,
            time_jumping: 0.0,
            has_powerup: false,
            time_left_powerup: 0.0,
            animation: AnimationState::Normal,
            state_time: 0.0,
            tuning,
        }
    }

    pub fn with_position(mut self, position: Vec2) -> Self {
        self.body.position = position;
        self
    }

    pub fn jump_state(&self) -> JumpState {
        self.jump_state
    }

    pub fn time_jumping(&self) -> f32 {
        self.time_jumping
    }

    pub fn animation(&self) -> AnimationState {
        self.animation
    }

    pub fn state_time(&self) -> f32 {
        self.state_time
    }

    pub fn time_left_powerup(&self) -> f32 {
        self.time_left_powerup
    }

    pub fn tuning(&self) -> &CharacterTuning {
        &self.tuning
    }

    /// Whether the power-up is active and still has time on it.
    pub fn has_powerup(&self) -> bool {
        self.has_powerup && self.time_left_powerup > 0.0
    }

    /// Grant (`true`) or revoke the power-up. Granting restarts the full timer.
    pub fn set_powerup(&mut self, picked_up: bool) {
        self.has_powerup = picked_up;
        if picked_up {
            self.time_left_powerup = self.tuning.powerup_duration;
        }
    }

    /// Switch animation and restart its clock.
    pub(crate) fn set_animation(&mut self, animation: AnimationState) {
        self.animation = animation;
        self.state_time = 0.0;
    }

    /// Ground contact point used for dust effects.
    fn feet(&self) -> Vec2 {
        Vec2::new(self.body.position.x + self.body.dimension.x / 2.0, self.body.position.y)
    }
}

impl Default for Character {
    fn default() -> Self {
        Self::new(CharacterTuning::default())
    }
}

impl GameObject for Character {
    fn body(&self) -> &Body {
        &self.body
    }

    fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }

    /// Jump phases layered over the standard y step.
    fn update_motion_y(&mut self, dt: f32, sink: &mut dyn EffectsSink) {
        let step = jump::rise_step(self.jump_state, self.time_jumping, dt, &self.tuning);
        self.jump_state = step.state;
        self.time_jumping = step.time_jumping;

        if step.left_ground && self.body.velocity.x != 0.0 {
            let feet = self.feet();
            sink.emit(CharacterEvent::DustStarted { x: feet.x, y: feet.y });
        }
        if step.force_rise {
            self.body.velocity.y = self.body.terminal_velocity.y;
        }
        if self.jump_state != JumpState::Grounded {
            self.body.update_motion_y(dt);
        }
    }
}

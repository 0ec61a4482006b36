//! Per-frame character step: input, physics, facing, power-up timer, animation.

use crate::api::effects::{CharacterEvent, EffectsSink};
use crate::components::animation::{AnimationClock, AnimationState};
use crate::components::character::{Character, JumpState, ViewDirection};
use crate::components::entity::GameObject;
use crate::core::motion::check_dt;
use crate::systems::animation::update_character_animation;
use crate::systems::jump::{self, JumpInput};

/// Per-frame input from the input-polling collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameInput {
    pub jump_requested: bool,
}

/// Feed the jump button into the jump machine.
pub fn set_jumping(character: &mut Character, jump_requested: bool, sink: &mut dyn EffectsSink) {
    let input = JumpInput {
        requested: jump_requested,
        powered: character.has_powerup,
    };
    let t = jump::transition(character.jump_state, input, character.tuning());
    character.jump_state = t.state;
    if let Some(time) = t.time_jumping {
        character.time_jumping = time;
    }
    if let Some(event) = t.event {
        sink.emit(event);
    }
}

/// Report ground contact at height `surface_y` (collision collaborator entry point).
///
/// Falling characters settle; a rising one is only pushed back on top.
pub fn land(character: &mut Character, surface_y: f32) {
    match character.jump_state {
        JumpState::Grounded => {}
        JumpState::Falling | JumpState::JumpFalling => {
            let body = character.body_mut();
            body.position.y = surface_y;
            body.velocity.y = 0.0;
            character.jump_state = JumpState::Grounded;
        }
        JumpState::JumpRising => {
            character.body_mut().position.y = surface_y;
        }
    }
}

/// Advance the character by one frame.
///
/// # Panics
/// Panics if `dt` is negative. A zero `dt` does nothing.
pub fn step_character(
    character: &mut Character,
    dt: f32,
    input: FrameInput,
    clock: &impl AnimationClock,
    sink: &mut dyn EffectsSink,
) {
    check_dt(dt);
    if dt == 0.0 {
        return;
    }

    set_jumping(character, input.jump_requested, sink);

    character.state_time += dt;
    character.update(dt, sink);

    let vx = character.body().velocity.x;
    if vx != 0.0 {
        character.view_direction = if vx < 0.0 {
            ViewDirection::Left
        } else {
            ViewDirection::Right
        };
    }

    tick_powerup(character, dt, sink);
    update_character_animation(character, clock);
}

fn tick_powerup(character: &mut Character, dt: f32, sink: &mut dyn EffectsSink) {
    if character.time_left_powerup <= 0.0 {
        return;
    }
    if character.animation == AnimationState::TransformOut {
        character.set_animation(AnimationState::TransformIn);
    }
    character.time_left_powerup -= dt;
    if character.time_left_powerup <= 0.0 {
        character.time_left_powerup = 0.0;
        character.set_powerup(false);
        character.set_animation(AnimationState::TransformOut);
        sink.emit(CharacterEvent::PowerupEnded);
        log::info!("power-up expired");
    }
}

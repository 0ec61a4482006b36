//! Animation selection for the character's power-up cycle.

use crate::components::animation::{AnimationClock, AnimationState};
use crate::components::character::Character;

/// Next animation for the power-up cycle
/// Normal → TransformIn → Active → TransformOut → Normal.
///
/// `finished` is whether `current` has played through.
pub fn select(current: AnimationState, powered: bool, finished: bool) -> AnimationState {
    use AnimationState::*;
    match (current, powered) {
        (Normal, true) => TransformIn,
        (TransformIn, true) if finished => Active,
        // Re-acquired mid transform-out: restart the cycle.
        (TransformOut, true) => TransformIn,
        (Active, false) if finished => TransformOut,
        (TransformOut, false) if finished => Normal,
        (state, _) => state,
    }
}

/// Apply `select` to the character, restarting the clip clock on change.
pub fn update_character_animation(character: &mut Character, clock: &impl AnimationClock) {
    let current = character.animation();
    let finished = clock.is_finished(current, character.state_time());
    let next = select(current, character.has_powerup, finished);
    if next != current {
        character.set_animation(next);
    }
}

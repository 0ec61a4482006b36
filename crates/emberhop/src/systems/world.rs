//! Per-frame update of the level's own entities.

use crate::api::effects::EffectsSink;
use crate::level::Level;

/// Run every level entity's motion update.
/// The level's collections are only iterated; nothing is added or removed.
pub fn update_level(level: &mut Level, dt: f32, sink: &mut dyn EffectsSink) {
    for object in level.objects_mut() {
        object.update(dt, sink);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::effects::EventLog;
    use crate::components::entity::GameObject;
    use image::{Rgba, RgbaImage};

    fn level() -> Level {
        Level::from_image(RgbaImage::from_fn(4, 2, |x, y| {
            if (x + y) % 2 == 0 {
                Rgba([0, 255, 0, 255])
            } else {
                Rgba([0, 0, 0, 255])
            }
        }))
    }

    #[test]
    fn static_level_stays_put() {
        let mut level = level();
        let before: Vec<_> = level.strips().iter().map(|s| s.body().position).collect();
        let mut log = EventLog::new();
        for _ in 0..10 {
            update_level(&mut level, 1.0 / 60.0, &mut log);
        }
        let after: Vec<_> = level.strips().iter().map(|s| s.body().position).collect();
        assert_eq!(before, after);
        assert_eq!(level.strips().len(), 4);
        assert!(log.is_empty());
    }

    #[test]
    fn moving_decoration_is_integrated() {
        let mut level = level();
        level.decorations_mut()[0].body_mut().velocity.x = 1.0;
        level.decorations_mut()[0].body_mut().terminal_velocity.x = 2.0;
        update_level(&mut level, 0.5, &mut EventLog::new());
        assert_eq!(level.decorations()[0].body().position.x, 0.5);
    }

    #[test]
    fn character_lands_on_decoded_ground_and_jumps() {
        use crate::api::config::SimConfig;
        use crate::api::effects::CharacterEvent;
        use crate::components::animation::AnimationLibrary;
        use crate::components::character::{Character, JumpState};
        use crate::core::time::FixedTimestep;
        use crate::systems::character::{land, step_character, FrameInput};
        use glam::Vec2;

        let mut level = Level::from_image(RgbaImage::from_fn(6, 3, |x, y| match (x, y) {
            (2, 0) => Rgba([255, 255, 255, 255]),
            (_, 2) => Rgba([0, 255, 0, 255]),
            _ => Rgba([0, 0, 0, 255]),
        }));
        assert_eq!(level.strips().len(), 1);
        let ground = level.strips()[0].span_bounds();
        let spawn = level.spawn_point().unwrap().position;

        let config = SimConfig::default();
        let clips = AnimationLibrary::character_default();
        let mut clock = FixedTimestep::from_config(&config);
        let mut character = Character::new(config.character.clone())
            .with_position(Vec2::new(spawn.x, ground.max().y + 1.0));
        let mut log = EventLog::new();

        // Fall for half a second of frames, resolving contact against the strip top.
        let mut grounded_frames = 0;
        for _ in 0..30 {
            for _ in 0..clock.accumulate(1.0 / 60.0) {
                update_level(&mut level, clock.dt(), &mut log);
                step_character(&mut character, clock.dt(), FrameInput::default(), &clips, &mut log);
                if character.body().position.y <= ground.max().y {
                    land(&mut character, ground.max().y);
                    grounded_frames += 1;
                }
            }
        }
        assert!(grounded_frames > 0);
        assert_eq!(character.jump_state(), JumpState::Grounded);

        let jump = FrameInput { jump_requested: true };
        step_character(&mut character, clock.dt(), jump, &clips, &mut log);
        assert_eq!(character.jump_state(), JumpState::JumpRising);
        assert!(character.body().position.y > ground.max().y);
        assert!(log.iter().any(|e| *e == CharacterEvent::JumpStarted));
    }
}

//! Character animation clips and the "has this clip finished" query.

use std::collections::HashMap;

/// Visual state of the player character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AnimationState {
    /// Plain running/standing look.
    #[default]
    Normal,
    /// Morphing into the powered-up look.
    TransformIn,
    /// Looping powered-up look.
    Active,
    /// Morphing back to normal.
    TransformOut,
}

/// Definition of a single animation sequence.
#[derive(Debug, Clone)]
pub struct AnimationDef {
    /// Frame indices as (col, row) pairs in the atlas.
    pub frames: Vec<(f32, f32)>,
    /// Seconds per frame.
    pub frame_duration: f32,
    /// Whether to loop when reaching the end.
    pub looping: bool,
}

impl AnimationDef {
    /// Create a horizontal strip animation (consecutive columns, same row).
    pub fn horizontal_strip(row: f32, start_col: f32, frame_count: u32, fps: f32) -> Self {
        let frames: Vec<(f32, f32)> = (0..frame_count)
            .map(|i| (start_col + i as f32, row))
            .collect();
        Self {
            frames,
            frame_duration: 1.0 / fps,
            looping: true,
        }
    }

    /// Same frames played back to front.
    pub fn reversed(&self) -> Self {
        Self {
            frames: self.frames.iter().rev().copied().collect(),
            ..self.clone()
        }
    }

    pub fn once(mut self) -> Self {
        self.looping = false;
        self
    }

    /// True once `state_time` has run past the last frame.
    /// Looping clips report this after their first full cycle too.
    pub fn is_finished(&self, state_time: f32) -> bool {
        let frame_number = (state_time / self.frame_duration) as usize;
        frame_number >= self.frames.len()
    }

    /// Frame (col, row) to draw at `state_time`.
    pub fn key_frame(&self, state_time: f32) -> Option<(f32, f32)> {
        if self.frames.is_empty() {
            return None;
        }
        let frame_number = (state_time / self.frame_duration) as usize;
        let index = if self.looping {
            frame_number % self.frames.len()
        } else {
            frame_number.min(self.frames.len() - 1)
        };
        self.frames.get(index).copied()
    }
}

/// Answers whether an animation has played through, given the time spent in it.
/// Implemented by whatever owns the clip data; the controller only reads the answer.
pub trait AnimationClock {
    fn is_finished(&self, state: AnimationState, state_time: f32) -> bool;
}

/// Clip set for the character, keyed by animation state.
#[derive(Debug, Clone, Default)]
pub struct AnimationLibrary {
    clips: HashMap<AnimationState, AnimationDef>,
}

impl AnimationLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clips laid out as one atlas row per state.
    pub fn character_default() -> Self {
        let transform = AnimationDef::horizontal_strip(1.0, 0.0, 10, 10.0).once();
        let mut lib = Self::new();
        lib.add(AnimationState::Normal, AnimationDef::horizontal_strip(0.0, 0.0, 10, 10.0));
        lib.add(AnimationState::TransformOut, transform.reversed());
        lib.add(AnimationState::TransformIn, transform);
        lib.add(AnimationState::Active, AnimationDef::horizontal_strip(2.0, 0.0, 2, 20.0));
        lib
    }

    pub fn add(&mut self, state: AnimationState, def: AnimationDef) {
        self.clips.insert(state, def);
    }

    pub fn get(&self, state: AnimationState) -> Option<&AnimationDef> {
        self.clips.get(&state)
    }

    /// Frame to draw for `state` at `state_time`.
    pub fn key_frame(&self, state: AnimationState, state_time: f32) -> Option<(f32, f32)> {
        self.get(state).and_then(|def| def.key_frame(state_time))
    }
}

impl AnimationClock for AnimationLibrary {
    /// A state without a clip counts as finished so the cycle never stalls.
    fn is_finished(&self, state: AnimationState, state_time: f32) -> bool {
        self.get(state).map_or(true, |def| def.is_finished(state_time))
    }
}

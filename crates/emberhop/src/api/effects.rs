//! Effects sink: the character controller's only way to reach audio and
//! particle collaborators.

use crate::api::types::GameEvent;

/// A discrete event emitted by the simulation for presentation collaborators.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CharacterEvent {
    /// A jump started from the ground.
    JumpStarted,
    /// An in-air boost jump started while the power-up was active.
    PoweredJumpStarted,
    /// The power-up timer ran out.
    PowerupEnded,
    /// Dust kicked up at the ground contact point (world coordinates).
    DustStarted { x: f32, y: f32 },
}

impl CharacterEvent {
    /// Numeric kind used when packing into a [`GameEvent`].
    pub fn kind(&self) -> u32 {
        match self {
            CharacterEvent::JumpStarted => 1,
            CharacterEvent::PoweredJumpStarted => 2,
            CharacterEvent::PowerupEnded => 3,
            CharacterEvent::DustStarted { .. } => 4,
        }
    }

    pub fn to_game_event(&self) -> GameEvent {
        let (a, b) = match *self {
            CharacterEvent::DustStarted { x, y } => (x, y),
            _ => (0.0, 0.0),
        };
        GameEvent {
            kind: self.kind() as f32,
            a,
            b,
            c: 0.0,
        }
    }
}

/// Receiver for simulation events.
pub trait EffectsSink {
    fn emit(&mut self, event: CharacterEvent);
}

impl EffectsSink for Vec<CharacterEvent> {
    fn emit(&mut self, event: CharacterEvent) {
        self.push(event);
    }
}

/// Discards every event. Useful for entities that never emit.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl EffectsSink for NullSink {
    fn emit(&mut self, _event: CharacterEvent) {}
}

/// Per-frame event buffer.
/// The simulation pushes events; the host drains them once per frame.
#[derive(Debug, Default)]
pub struct EventLog {
    events: Vec<CharacterEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(8),
        }
    }

    /// Drain all pending events. Returns a Vec and clears the log.
    pub fn drain(&mut self) -> Vec<CharacterEvent> {
        std::mem::take(&mut self.events)
    }

    /// Iterate over pending events without consuming them.
    pub fn iter(&self) -> impl Iterator<Item = &CharacterEvent> {
        self.events.iter()
    }

    /// Pack pending events for a flat float bridge buffer.
    pub fn packed(&self) -> Vec<GameEvent> {
        self.events.iter().map(CharacterEvent::to_game_event).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl EffectsSink for EventLog {
    fn emit(&mut self, event: CharacterEvent) {
        self.events.push(event);
    }
}

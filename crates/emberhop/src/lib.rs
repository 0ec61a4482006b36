pub mod api;
pub mod core;
pub mod components;
pub mod level;
pub mod systems;

// Re-export key types at crate root for convenience
pub use api::config::{SimConfig, CharacterTuning};
pub use api::effects::{CharacterEvent, EffectsSink, EventLog, NullSink};
pub use api::types::{EntityId, GameEvent};
pub use components::animation::{AnimationClock, AnimationDef, AnimationLibrary, AnimationState};
pub use components::character::{Character, JumpState, ViewDirection};
pub use components::decoration::{Decoration, DecorationKind};
pub use components::entity::{Body, GameObject, Rect};
pub use components::ground::GroundStrip;
pub use components::hazard::{Hazard, HazardKind};
pub use components::layer::RenderLayer;
pub use crate::core::time::FixedTimestep;
pub use level::{BlockType, DecodeWarning, Level, LevelError, LevelMarker};
pub use systems::character::{land, set_jumping, step_character, FrameInput};
pub use systems::world::update_level;

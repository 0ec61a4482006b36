use bytemuck::{Pod, Zeroable};

/// Unique identifier for an entity produced by a level decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntityId(pub u32);

/// An event packed for a flat float bridge buffer.
/// Generic container: `kind` identifies the event, `a/b/c` carry payload.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct GameEvent {
    pub kind: f32,
    pub a: f32,
    pub b: f32,
    pub c: f32,
}

impl GameEvent {
    pub const FLOATS: usize = 4;

    /// View a slice of events as the raw float buffer handed to the presentation side.
    pub fn as_floats(events: &[GameEvent]) -> &[f32] {
        bytemuck::cast_slice(events)
    }
}

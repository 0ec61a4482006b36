use glam::Vec2;
use crate::api::effects::EffectsSink;
use crate::core::motion::{check_dt, integrate_velocity};

/// Axis-aligned rectangle. `pos` is the bottom-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    pub fn min(&self) -> Vec2 {
        self.pos
    }

    pub fn max(&self) -> Vec2 {
        self.pos + self.size
    }

    pub fn translated(&self, offset: Vec2) -> Self {
        Self {
            pos: self.pos + offset,
            size: self.size,
        }
    }

    pub fn overlaps(&self, other: &Rect) -> bool {
        let (a_min, a_max) = (self.min(), self.max());
        let (b_min, b_max) = (other.min(), other.max());
        a_min.x < b_max.x && b_min.x < a_max.x && a_min.y < b_max.y && b_min.y < a_max.y
    }
}

/// Kinematic and placement state shared by every simulated object.
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    /// Position in world space.
    pub position: Vec2,
    /// World units per second.
    pub velocity: Vec2,
    /// World units per second squared.
    pub acceleration: Vec2,
    /// Per-axis deceleration magnitude, applied against the velocity sign.
    pub friction: Vec2,
    /// Per-axis speed clamp.
    pub terminal_velocity: Vec2,
    /// Size in world units.
    pub dimension: Vec2,
    /// Pivot for rotation and scale, relative to position.
    pub origin: Vec2,
    /// Collision box relative to position.
    pub bounds: Rect,
    pub scale: Vec2,
    /// Rotation in degrees.
    pub rotation: f32,
}

impl Default for Body {
    fn default() -> Self {
        Self {
            position: Vec2::ZERO,
            velocity: Vec2::ZERO,
            acceleration: Vec2::ZERO,
            friction: Vec2::ZERO,
            terminal_velocity: Vec2::ONE,
            dimension: Vec2::ONE,
            origin: Vec2::ZERO,
            bounds: Rect::default(),
            scale: Vec2::ONE,
            rotation: 0.0,
        }
    }
}

impl Body {
    /// A body of the given size with its collision box covering it.
    pub fn with_dimension(dimension: Vec2) -> Self {
        Self {
            dimension,
            bounds: Rect::new(0.0, 0.0, dimension.x, dimension.y),
            ..Default::default()
        }
    }

    // -- Builder pattern --

    pub fn with_position(mut self, position: Vec2) -> Self {
        self.position = position;
        self
    }

    pub fn with_origin(mut self, origin: Vec2) -> Self {
        self.origin = origin;
        self
    }

    /// Collision box in world space.
    pub fn world_bounds(&self) -> Rect {
        self.bounds.translated(self.position)
    }

    /// Standard x-axis velocity step.
    pub fn update_motion_x(&mut self, dt: f32) {
        self.velocity.x = integrate_velocity(
            self.velocity.x,
            self.acceleration.x,
            self.friction.x,
            self.terminal_velocity.x,
            dt,
        );
    }

    /// Standard y-axis velocity step.
    pub fn update_motion_y(&mut self, dt: f32) {
        self.velocity.y = integrate_velocity(
            self.velocity.y,
            self.acceleration.y,
            self.friction.y,
            self.terminal_velocity.y,
            dt,
        );
    }

    pub fn advance_position(&mut self, dt: f32) {
        self.position += self.velocity * dt;
    }
}

/// Contract for every simulated object.
///
/// `update` runs the x-axis step, then the variant's y-axis policy, then moves
/// the body. Variants that need jump logic override `update_motion_y`; the
/// x-axis step is never overridden.
pub trait GameObject {
    fn body(&self) -> &Body;

    fn body_mut(&mut self) -> &mut Body;

    /// Y-axis integration policy. Default: standard integration.
    fn update_motion_y(&mut self, dt: f32, _sink: &mut dyn EffectsSink) {
        self.body_mut().update_motion_y(dt);
    }

    /// Advance one frame.
    ///
    /// # Panics
    /// Panics if `dt` is negative. A zero `dt` leaves the object untouched.
    fn update(&mut self, dt: f32, sink: &mut dyn EffectsSink) {
        check_dt(dt);
        if dt == 0.0 {
            return;
        }
        self.body_mut().update_motion_x(dt);
        self.update_motion_y(dt, sink);
        self.body_mut().advance_position(dt);
    }
}

//! Per-axis motion integration shared by every physical entity.
//!
//! One axis step is: accelerate, apply friction toward zero, clamp to the
//! terminal speed. Position is advanced separately so entities can replace
//! the y-axis velocity step with their own policy.

/// Panic on a negative time step. Zero is allowed and means "no time passed".
#[inline]
pub fn check_dt(dt: f32) {
    assert!(dt >= 0.0, "delta time must be non-negative, got {dt}");
}

/// Reduce `|velocity|` by `friction * dt` without crossing zero.
/// A velocity already at rest is returned untouched.
#[inline]
pub fn apply_friction(velocity: f32, friction: f32, dt: f32) -> f32 {
    if velocity > 0.0 {
        (velocity - friction * dt).max(0.0)
    } else if velocity < 0.0 {
        (velocity + friction * dt).min(0.0)
    } else {
        velocity
    }
}

/// Advance one velocity component by `dt`.
#[inline]
pub fn integrate_velocity(
    velocity: f32,
    acceleration: f32,
    friction: f32,
    terminal: f32,
    dt: f32,
) -> f32 {
    let v = velocity + acceleration * dt;
    let v = apply_friction(v, friction, dt);
    v.clamp(-terminal, terminal)
}

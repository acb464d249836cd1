//! Locomotion domain: critically damped smoothing over (value, velocity) pairs.

use bevy::math::Vec2;

/// Smooth times below this collapse to a near-instant snap
pub const MIN_SMOOTH_TIME: f32 = 1e-4;

/// Move `current` toward `target` like a critically damped spring with the
/// given time constant. Returns the new value and the new velocity; the
/// velocity is the filter's own state and must be fed back next tick.
///
/// The result never passes the target. A zero `dt` leaves both unchanged.
pub fn smooth_damp(
    current: f32,
    target: f32,
    velocity: f32,
    smooth_time: f32,
    dt: f32,
) -> (f32, f32) {
    if dt <= 0.0 {
        return (current, velocity);
    }

    let smooth_time = smooth_time.max(MIN_SMOOTH_TIME);
    let omega = 2.0 / smooth_time;
    let x = omega * dt;
    // Polynomial fit of exp(-x), stays in (0, 1] for any x >= 0
    let decay = 1.0 / (1.0 + x + 0.48 * x * x + 0.235 * x * x * x);

    let change = current - target;
    let temp = (velocity + omega * change) * dt;
    let next_velocity = (velocity - omega * temp) * decay;
    let next = target + (change + temp) * decay;

    if (target - current) * (next - target) > 0.0 {
        return (target, 0.0);
    }

    (next, next_velocity)
}

/// Per-axis [`smooth_damp`] for 2D input vectors.
pub fn smooth_damp_vec2(
    current: Vec2,
    target: Vec2,
    velocity: Vec2,
    smooth_time: f32,
    dt: f32,
) -> (Vec2, Vec2) {
    let (x, vx) = smooth_damp(current.x, target.x, velocity.x, smooth_time, dt);
    let (y, vy) = smooth_damp(current.y, target.y, velocity.y, smooth_time, dt);
    (Vec2::new(x, y), Vec2::new(vx, vy))
}

use bevy::ecs::world::World;
use bevy::prelude::*;

use super::mover::{GROUND_PROBE, SKIN, probe_ground};
use super::*;
use crate::locomotion::{Grounded, LocomotionConfig, LocomotionState, init};

const HALF: Vec3 = Vec3::new(0.35, 0.9, 0.35);

/// Static boxes swept against a box-shaped body, slab style
struct BoxWorld {
    boxes: Vec<(Vec3, Vec3)>,
}

impl ShapeCaster for BoxWorld {
    fn cast(&self, origin: Vec3, direction: Dir3, max_distance: f32) -> Option<SweepHit> {
        let dir = *direction;
        let mut best: Option<SweepHit> = None;

        for (center, half) in &self.boxes {
            let min = *center - *half - HALF;
            let max = *center + *half + HALF;
            let mut enter = f32::NEG_INFINITY;
            let mut exit = f32::INFINITY;
            let mut normal = Vec3::ZERO;
            let mut missed = false;

            for axis in 0..3 {
                if dir[axis].abs() < 1e-8 {
                    if origin[axis] <= min[axis] || origin[axis] >= max[axis] {
                        missed = true;
                    }
                    continue;
                }
                let t1 = (min[axis] - origin[axis]) / dir[axis];
                let t2 = (max[axis] - origin[axis]) / dir[axis];
                let (near, far) = if t1 < t2 { (t1, t2) } else { (t2, t1) };
                if near > enter {
                    enter = near;
                    normal = Vec3::ZERO;
                    normal[axis] = -dir[axis].signum();
                }
                exit = exit.min(far);
            }

            if missed || enter > exit || enter < 0.0 || enter > max_distance {
                continue;
            }
            if best.is_none_or(|hit| enter < hit.distance) {
                best = Some(SweepHit {
                    distance: enter,
                    normal,
                });
            }
        }
        best
    }
}

fn floor() -> (Vec3, Vec3) {
    (Vec3::new(0.0, -0.5, 0.0), Vec3::new(20.0, 0.5, 20.0))
}

/// Wall whose face toward the origin is at x = 2
fn wall() -> (Vec3, Vec3) {
    (Vec3::new(2.5, 3.0, 0.0), Vec3::new(0.5, 3.0, 5.0))
}

fn world(boxes: &[(Vec3, Vec3)]) -> BoxWorld {
    BoxWorld {
        boxes: boxes.to_vec(),
    }
}

/// Body resting on the floor at the given horizontal position
fn standing(x: f32, z: f32) -> Vec3 {
    Vec3::new(x, HALF.y + SKIN, z)
}

fn close(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-4
}

// ============================================================================
// Free movement
// ============================================================================

#[test]
fn test_unobstructed_move_applies_full_displacement() {
    let start = standing(0.0, 0.0);
    let result = move_and_slide(&world(&[floor()]), start, Vec3::new(0.5, 0.0, -0.25));

    assert_eq!(result.position, start + Vec3::new(0.5, 0.0, -0.25));
    assert!(result.contacts.is_empty());
    assert!(result.grounded);
}

#[test]
fn test_body_in_mid_air_is_not_grounded() {
    let result = move_and_slide(&world(&[floor()]), Vec3::new(0.0, 5.0, 0.0), Vec3::ZERO);
    assert!(!result.grounded);
    assert!(result.contacts.is_empty());
}

#[test]
fn test_non_finite_displacement_does_not_move() {
    let start = standing(0.0, 0.0);
    let result = move_and_slide(&world(&[floor()]), start, Vec3::new(f32::NAN, 0.0, 0.1));
    assert_eq!(result.position, start);
}

// ============================================================================
// Blocking and sliding
// ============================================================================

#[test]
fn test_falling_body_lands_skin_above_floor() {
    let start = Vec3::new(0.0, HALF.y + 0.2, 0.0);
    let result = move_and_slide(&world(&[floor()]), start, Vec3::new(0.0, -0.5, 0.0));

    assert!(close(result.position.y, HALF.y + SKIN));
    assert_eq!(result.contacts, vec![Vec3::Y]);
    assert!(result.grounded);
}

#[test]
fn test_walking_into_wall_stops_at_face_and_reports_wall_normal() {
    let start = standing(1.5, 0.0);
    let result = move_and_slide(
        &world(&[floor(), wall()]),
        start,
        Vec3::new(0.3, 0.0, 0.0),
    );

    assert!(close(result.position.x, 2.0 - HALF.x - SKIN));
    assert_eq!(result.contacts, vec![Vec3::NEG_X]);
    assert!(result.grounded);
}

#[test]
fn test_long_step_cannot_pass_through_thin_slab() {
    // 0.5 thick slab, crossed by a single 2.5 unit step
    let slab = (Vec3::new(-4.0, 4.0, -6.0), Vec3::new(0.25, 4.0, 5.0));
    let start = Vec3::new(-5.0, HALF.y + SKIN, -6.0);
    let result = move_and_slide(&world(&[floor(), slab]), start, Vec3::new(2.5, 0.0, 0.0));

    assert!(close(result.position.x, -4.25 - HALF.x - SKIN));
    assert_eq!(result.contacts, vec![Vec3::NEG_X]);
}

#[test]
fn test_diagonal_move_slides_along_wall() {
    let start = standing(1.5, 0.0);
    let result = move_and_slide(
        &world(&[floor(), wall()]),
        start,
        Vec3::new(0.3, 0.0, 0.4),
    );

    assert!(close(result.position.z, 0.4));
    assert!(result.position.x < 2.0 - HALF.x);
    assert_eq!(result.contacts, vec![Vec3::NEG_X]);
}

#[test]
fn test_ceiling_blocks_upward_move() {
    let ceiling = (Vec3::new(0.0, 3.5, 0.0), Vec3::new(5.0, 0.5, 5.0));
    let start = Vec3::new(0.0, 1.5, 0.0);
    let result = move_and_slide(&world(&[ceiling]), start, Vec3::new(0.0, 1.0, 0.0));

    assert!(close(result.position.y, 3.0 - HALF.y - SKIN));
    assert_eq!(result.contacts, vec![Vec3::NEG_Y]);
    assert!(!result.grounded);
}

#[test]
fn test_contacts_follow_hit_order() {
    // Reaches the wall first, then slides down onto the floor
    let start = Vec3::new(1.5, 1.05, 0.0);
    let result = move_and_slide(
        &world(&[floor(), wall()]),
        start,
        Vec3::new(0.3, -0.2, 0.0),
    );

    assert_eq!(result.contacts, vec![Vec3::NEG_X, Vec3::Y]);
    assert!(close(result.position.y, HALF.y + SKIN));
    assert!(result.grounded);
}

#[test]
fn test_settled_body_stays_put_under_small_gravity_steps() {
    let solids = world(&[floor()]);
    let mut position = standing(0.0, 0.0);

    for _ in 0..120 {
        let result = move_and_slide(&solids, position, Vec3::new(0.0, -0.0025, 0.0));
        assert!(result.grounded);
        position = result.position;
    }

    assert!(close(position.y, HALF.y + SKIN));
}

// ============================================================================
// Ground probe
// ============================================================================

#[test]
fn test_probe_ignores_wall_beside_the_body() {
    let beside_wall = Vec3::new(2.0 - HALF.x - SKIN, 4.0, 0.0);
    assert!(!probe_ground(&world(&[wall()]), beside_wall));
}

#[test]
fn test_probe_reaches_just_below_the_feet() {
    let hovering = Vec3::new(0.0, HALF.y + GROUND_PROBE * 0.5, 0.0);
    let too_high = Vec3::new(0.0, HALF.y + GROUND_PROBE * 4.0, 0.0);

    assert!(probe_ground(&world(&[floor()]), hovering));
    assert!(!probe_ground(&world(&[floor()]), too_high));
}

/// Reports every hit with a fixed normal
struct SlopeWorld {
    normal: Vec3,
}

impl ShapeCaster for SlopeWorld {
    fn cast(&self, _origin: Vec3, _direction: Dir3, _max_distance: f32) -> Option<SweepHit> {
        Some(SweepHit {
            distance: 0.02,
            normal: self.normal,
        })
    }
}

#[test]
fn test_probe_rejects_steep_surfaces() {
    let steep = SlopeWorld {
        normal: Vec3::new(0.8, 0.6, 0.0),
    };
    let gentle = SlopeWorld {
        normal: Vec3::new(0.6, 0.8, 0.0),
    };

    assert!(!probe_ground(&steep, Vec3::ZERO));
    assert!(probe_ground(&gentle, Vec3::ZERO));
}

// ============================================================================
// Host wiring
// ============================================================================

#[test]
fn test_contact_messages_carry_entity_in_hit_order() {
    let mut ecs = World::new();
    let body = ecs.spawn_empty().id();
    let result = move_and_slide(
        &world(&[floor(), wall()]),
        Vec3::new(1.5, 1.05, 0.0),
        Vec3::new(0.3, -0.2, 0.0),
    );

    let messages: Vec<_> = result.contact_messages(body).collect();

    assert_eq!(messages.len(), 2);
    assert!(messages.iter().all(|message| message.entity == body));
    assert_eq!(messages[0].normal, Vec3::NEG_X);
    assert_eq!(messages[1].normal, Vec3::Y);
}

#[test]
fn test_kill_plane_threshold() {
    assert!(below_kill_plane(Vec3::new(0.0, KILL_PLANE_Y - 0.1, 0.0)));
    assert!(!below_kill_plane(Vec3::new(0.0, KILL_PLANE_Y + 0.1, 0.0)));
}

#[test]
fn test_respawn_restores_spawn_and_fresh_state() {
    let config = LocomotionConfig::default();
    let mut transform =
        Transform::from_xyz(3.0, -25.0, 1.0).with_rotation(Quat::from_rotation_y(1.0));
    let mut grounded = Grounded(true);
    let mut state: LocomotionState = init(&config);
    state.vertical_velocity = -40.0;
    state.current_speed = config.max_speed;
    state.has_wall_jumped = true;

    let spawn = Vec3::new(0.0, 1.0, 6.0);
    respawn(&mut transform, &mut grounded, &mut state, &config, spawn);

    assert_eq!(transform.translation, spawn);
    assert_eq!(transform.rotation, Quat::IDENTITY);
    assert!(!grounded.0);
    assert_eq!(state, init(&config));
}

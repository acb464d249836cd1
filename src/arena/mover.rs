//! Arena domain: swept move-and-slide for kinematic bodies.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::locomotion::ContactNormal;

/// Gap kept between the body and any surface it stops against
pub const SKIN: f32 = 0.01;
/// How far below the body the ground cast reaches
pub const GROUND_PROBE: f32 = 0.05;
/// Surfaces whose normal points at least this far up count as ground
pub const GROUND_NORMAL_MIN_Y: f32 = 0.7;

const MAX_SLIDES: usize = 4;
const MIN_MOVE: f32 = 1e-5;

/// First surface a swept shape runs into.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepHit {
    /// Travel along the cast direction before touching
    pub distance: f32,
    /// Outward normal of the surface that was hit
    pub normal: Vec3,
}

/// Sweeps the body's shape through the world.
pub trait ShapeCaster {
    fn cast(&self, origin: Vec3, direction: Dir3, max_distance: f32) -> Option<SweepHit>;
}

/// [`ShapeCaster`] backed by the physics world's spatial query.
pub struct SpatialCaster<'a, 'w, 's> {
    query: &'a SpatialQuery<'w, 's>,
    shape: &'a Collider,
    filter: SpatialQueryFilter,
}

impl<'a, 'w, 's> SpatialCaster<'a, 'w, 's> {
    /// Cast `shape` for `body`, never hitting the body itself.
    pub fn new(query: &'a SpatialQuery<'w, 's>, shape: &'a Collider, body: Entity) -> Self {
        Self {
            query,
            shape,
            filter: SpatialQueryFilter::default().with_excluded_entities([body]),
        }
    }
}

impl ShapeCaster for SpatialCaster<'_, '_, '_> {
    fn cast(&self, origin: Vec3, direction: Dir3, max_distance: f32) -> Option<SweepHit> {
        self.query
            .cast_shape(
                self.shape,
                origin,
                Quat::IDENTITY,
                direction,
                &ShapeCastConfig::from_max_distance(max_distance),
                &self.filter,
            )
            .map(|hit| SweepHit {
                distance: hit.distance,
                normal: hit.normal1,
            })
    }
}

/// Outcome of one [`move_and_slide`] call.
#[derive(Debug, Clone, PartialEq)]
pub struct MoveResult {
    pub position: Vec3,
    /// Normal of every surface hit, in the order they were hit
    pub contacts: Vec<Vec3>,
    pub grounded: bool,
}

impl MoveResult {
    /// One message per contact, in hit order
    pub fn contact_messages(&self, entity: Entity) -> impl Iterator<Item = ContactNormal> + '_ {
        self.contacts
            .iter()
            .map(move |normal| ContactNormal {
                entity,
                normal: *normal,
            })
    }
}

/// Sweep the body along `displacement`, stopping `SKIN` short of each surface
/// and sliding the rest of the move along it. Grounded is probed afterwards.
pub fn move_and_slide(
    caster: &impl ShapeCaster,
    position: Vec3,
    displacement: Vec3,
) -> MoveResult {
    let mut position = position;
    let mut remaining = if displacement.is_finite() {
        displacement
    } else {
        Vec3::ZERO
    };
    let mut contacts = Vec::new();

    for _ in 0..MAX_SLIDES {
        let distance = remaining.length();
        if distance < MIN_MOVE {
            break;
        }
        let Ok(direction) = Dir3::new(remaining) else {
            break;
        };

        let Some(hit) = caster.cast(position, direction, distance + SKIN) else {
            position += remaining;
            break;
        };

        let travel = (hit.distance - SKIN).clamp(0.0, distance);
        position += direction * travel;
        contacts.push(hit.normal);

        // Drop the part of the leftover move that points into the surface
        let leftover = direction * (distance - travel);
        let into = leftover.dot(hit.normal);
        remaining = if into < 0.0 {
            leftover - hit.normal * into
        } else {
            leftover
        };
    }

    let grounded = probe_ground(caster, position);
    MoveResult {
        position,
        contacts,
        grounded,
    }
}

/// Whether a short downward cast finds walkable ground.
pub fn probe_ground(caster: &impl ShapeCaster, position: Vec3) -> bool {
    caster
        .cast(position, Dir3::NEG_Y, GROUND_PROBE + SKIN)
        .is_some_and(|hit| hit.normal.y >= GROUND_NORMAL_MIN_Y)
}

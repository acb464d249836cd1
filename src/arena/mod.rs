//! Arena domain: a walled test level and the kinematic mover that carries the player through it.

pub mod mover;
#[cfg(test)]
mod tests;

pub use mover::{MoveResult, ShapeCaster, SpatialCaster, SweepHit, move_and_slide};

use avian3d::prelude::*;
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::locomotion::{
    ContactNormal, Grounded, LocomotionConfig, LocomotionState, LocomotionSystems, MoveRequest,
    Player, SpawnPoint, init,
};

/// Bodies that fall below this height are respawned
pub const KILL_PLANE_Y: f32 = -20.0;

/// Radius of the player's capsule
pub const PLAYER_RADIUS: f32 = 0.35;
/// Total height of the player's capsule, centred on the body
pub const PLAYER_HEIGHT: f32 = 1.8;

/// Static level geometry
#[derive(Component, Debug, Clone, Copy)]
pub struct Solid;

/// Body moved by [`resolve_moves`] from its [`MoveRequest`]
#[derive(Component, Debug, Clone, Copy)]
pub struct KinematicBody;

pub struct ArenaPlugin;

impl Plugin for ArenaPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_arena)
            .add_systems(Update, attach_body.before(LocomotionSystems::Advance))
            .add_systems(
                Update,
                resolve_moves
                    .after(LocomotionSystems::Advance)
                    .before(LocomotionSystems::Camera),
            );
    }
}

/// Box layout of the arena: (center, size). The floor's top face sits at y = 0.
const LAYOUT: &[(Vec3, Vec3)] = &[
    // Floor
    (Vec3::new(0.0, -0.5, 0.0), Vec3::new(40.0, 1.0, 40.0)),
    // Outer walls
    (Vec3::new(0.0, 3.0, -20.5), Vec3::new(42.0, 6.0, 1.0)),
    (Vec3::new(0.0, 3.0, 20.5), Vec3::new(42.0, 6.0, 1.0)),
    (Vec3::new(-20.5, 3.0, 0.0), Vec3::new(1.0, 6.0, 40.0)),
    (Vec3::new(20.5, 3.0, 0.0), Vec3::new(1.0, 6.0, 40.0)),
    // Wall-jump corridor: two tall slabs with a gap to bounce between
    (Vec3::new(-8.0, 4.0, -6.0), Vec3::new(0.5, 8.0, 10.0)),
    (Vec3::new(-4.0, 4.0, -6.0), Vec3::new(0.5, 8.0, 10.0)),
    // Pillars
    (Vec3::new(6.0, 2.5, -4.0), Vec3::new(2.0, 5.0, 2.0)),
    (Vec3::new(10.0, 1.5, -10.0), Vec3::new(2.0, 3.0, 2.0)),
    // Ledge reachable from a wall jump off the near pillar
    (Vec3::new(8.0, 4.5, 4.0), Vec3::new(6.0, 0.5, 4.0)),
];

pub(crate) fn spawn_arena(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let floor_material = materials.add(Color::srgb(0.35, 0.4, 0.35));
    let wall_material = materials.add(Color::srgb(0.25, 0.25, 0.35));

    for (index, (center, size)) in LAYOUT.iter().enumerate() {
        let material = if index == 0 {
            floor_material.clone()
        } else {
            wall_material.clone()
        };
        commands.spawn((
            Solid,
            RigidBody::Static,
            Collider::cuboid(size.x, size.y, size.z),
            Mesh3d(meshes.add(Cuboid::new(size.x, size.y, size.z))),
            MeshMaterial3d(material),
            Transform::from_translation(*center),
        ));
    }

    commands.spawn((
        DirectionalLight {
            illuminance: 8000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(10.0, 20.0, 8.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    info!("Spawned arena with {} solids", LAYOUT.len());
}

pub(crate) fn attach_body(mut commands: Commands, added: Query<Entity, Added<Player>>) {
    for entity in &added {
        commands.entity(entity).insert((
            KinematicBody,
            RigidBody::Kinematic,
            Collider::capsule(PLAYER_RADIUS, PLAYER_HEIGHT - 2.0 * PLAYER_RADIUS),
        ));
    }
}

pub(crate) fn resolve_moves(
    config: Res<LocomotionConfig>,
    spawn_point: Res<SpawnPoint>,
    spatial_query: SpatialQuery,
    mut bodies: Query<
        (
            Entity,
            &Collider,
            &MoveRequest,
            &mut Transform,
            &mut Grounded,
            &mut LocomotionState,
        ),
        With<KinematicBody>,
    >,
    mut contacts: MessageWriter<ContactNormal>,
) {
    for (entity, collider, request, mut transform, mut grounded, mut state) in &mut bodies {
        let caster = SpatialCaster::new(&spatial_query, collider, entity);
        let result = move_and_slide(&caster, transform.translation, request.0);

        for contact in result.contact_messages(entity) {
            contacts.write(contact);
        }

        if grounded.0 != result.grounded {
            debug!(
                "{}: vertical_velocity={}",
                if result.grounded { "Landed" } else { "Left ground" },
                state.vertical_velocity
            );
        }

        transform.translation = result.position;
        grounded.0 = result.grounded;

        if below_kill_plane(transform.translation) {
            info!(
                "Body fell below {}, respawning at {:?}",
                KILL_PLANE_Y, spawn_point.0
            );
            respawn(
                &mut transform,
                &mut grounded,
                &mut state,
                &config,
                spawn_point.0,
            );
        }
    }
}

pub(crate) fn below_kill_plane(position: Vec3) -> bool {
    position.y < KILL_PLANE_Y
}

/// Put a body back at `spawn` facing forward with fresh controller state.
pub(crate) fn respawn(
    transform: &mut Transform,
    grounded: &mut Grounded,
    state: &mut LocomotionState,
    config: &LocomotionConfig,
    spawn: Vec3,
) {
    transform.translation = spawn;
    transform.rotation = Quat::IDENTITY;
    grounded.0 = false;
    *state = init(config);
}

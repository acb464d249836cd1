//! Locomotion domain: camera pitch and field of view.

use bevy::prelude::*;

use crate::locomotion::{LocomotionState, PlayerCamera};

pub(crate) fn apply_camera(
    bodies: Query<&LocomotionState>,
    mut cameras: Query<(&PlayerCamera, &mut Transform, &mut Projection)>,
) {
    for (camera, mut transform, mut projection) in &mut cameras {
        let Ok(state) = bodies.get(camera.body) else {
            continue;
        };

        // Positive pitch looks down, which is a negative turn about +X
        transform.rotation = Quat::from_rotation_x(-state.camera_pitch.to_radians());

        if let Projection::Perspective(perspective) = &mut *projection {
            perspective.fov = state.field_of_view.to_radians();
        }
    }
}

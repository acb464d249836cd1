//! Locomotion domain: messages exchanged with the host mover.

use bevy::ecs::message::Message;
use bevy::prelude::*;

/// Contact reported by the host mover when the body touches geometry
#[derive(Debug, Clone, Copy)]
pub struct ContactNormal {
    pub entity: Entity,
    /// Unit surface normal pointing away from the geometry
    pub normal: Vec3,
}

impl Message for ContactNormal {}

/// Newest contact reported for `entity`. Later contacts overwrite earlier ones.
pub fn latest_contact(contacts: &[ContactNormal], entity: Entity) -> Option<Vec3> {
    contacts
        .iter()
        .rev()
        .find(|contact| contact.entity == entity)
        .map(|contact| contact.normal)
}

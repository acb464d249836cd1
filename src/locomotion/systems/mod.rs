//! Locomotion domain: system modules for the per-frame update.

pub(crate) mod advance;
pub(crate) mod camera;
pub(crate) mod input;

pub(crate) use advance::advance_locomotion;
pub(crate) use camera::apply_camera;
pub(crate) use input::read_input;

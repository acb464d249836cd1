//! First-person locomotion: smoothed mouse look, a forward speed ramp with a
//! matching FOV effect, gravity, ground jumps and one wall jump per airborne
//! interval.
//!
//! The controller core ([`locomotion::init`] and [`locomotion::tick`]) is
//! plain data in, plain data out. The plugins wire it into a Bevy app with a
//! small demo arena as the host mover.

pub mod arena;
pub mod config;
pub mod core;
#[cfg(feature = "dev-tools")]
pub mod debug;
pub mod locomotion;
pub mod ui;

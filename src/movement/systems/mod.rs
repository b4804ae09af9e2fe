//! Movement domain: system modules for the locomotion update.

pub(crate) mod animation;
pub(crate) mod input;
pub(crate) mod locomotion;
pub(crate) mod orientation;
pub(crate) mod posture;

pub(crate) use animation::emit_animation_params;
pub(crate) use input::sample_input;
pub(crate) use locomotion::{apply_velocity, update_locomotion};
pub(crate) use orientation::resolve_orientation;
pub(crate) use posture::apply_posture;

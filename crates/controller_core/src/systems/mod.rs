//! Controller systems: small pure functions plus config structs with tuned
//! defaults, driven in a fixed order by `crate::frame`.

pub mod anim_params;
pub mod follow_cam;
pub mod locomotion;
pub mod orbit_look;

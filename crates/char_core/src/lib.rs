//! char_core: shared character/camera component types.
//!
//! These types are consumed by the controller systems and by host
//! integrations (renderer, demo shell). They carry no system logic beyond
//! small invariant-preserving methods; the systems live in
//! `controller_core`.

#![deny(warnings, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions, clippy::missing_panics_doc)]

pub mod components;
pub mod input;

pub use components::{wrap_angle, BodyPose, CameraPivot, Gait, MOVE_EPS};
pub use input::{InputEvent, InputQueue, InputSample};

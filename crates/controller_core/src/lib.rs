//! controller_core: locomotion, orbit look, animation mapping, follow camera.
//!
//! Lightweight, testable systems over `char_core` types. Hosts implement
//! the collaborator traits in `boundary` and drive the per-frame order via
//! `frame::CharacterFrame`.

#![deny(warnings, clippy::all, clippy::pedantic)]
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

pub mod boundary;
pub mod frame;
pub mod session;
/// Per-frame systems (locomotion, look, animation params, follow camera).
pub mod systems;
pub mod telemetry;

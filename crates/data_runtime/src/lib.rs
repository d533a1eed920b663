//! data_runtime: controller tuning schemas and loaders.
//!
//! Each config loads from `data/config/*.toml` with optional env overrides
//! for quick tuning, falling back to built-in defaults when no file exists.
//! Conversion into validated runtime configs happens in the host shell.

#![deny(warnings, clippy::all, clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod configs {
    pub mod anim;
    pub mod follow_cam;
    pub mod input_camera;
    pub mod movement;
}

use std::path::PathBuf;

/// Workspace `data/` directory, probed relative to the crate.
pub(crate) fn data_root() -> PathBuf {
    let here = std::path::Path::new(env!("CARGO_MANIFEST_DIR"));
    let ws = here.join("../../data");
    if ws.is_dir() {
        ws
    } else {
        here.join("data")
    }
}

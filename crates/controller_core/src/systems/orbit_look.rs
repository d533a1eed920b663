//! Orbit look: body yaw (unbounded) and camera pivot pitch (clamped).
//!
//! The split is deliberate: yaw accumulates on the body and wraps
//! naturally, while pitch is an absolute clamped accumulator on a separate
//! pivot whose local frame carries no roll or yaw. Look input drives
//! rotation 1:1 per frame with no smoothing.

use anyhow::{ensure, Result};
use char_core::{BodyPose, CameraPivot};
use glam::Vec2;

#[derive(Clone, Copy, Debug)]
pub struct OrbitLookCfg {
    /// Degrees of rotation per look count.
    pub sensitivity: f32,
    pub invert_y: bool,
    pub min_pitch_deg: f32,
    pub max_pitch_deg: f32,
}

impl Default for OrbitLookCfg {
    fn default() -> Self {
        Self {
            sensitivity: 0.15,
            invert_y: false,
            min_pitch_deg: -80.0,
            max_pitch_deg: 80.0,
        }
    }
}

impl OrbitLookCfg {
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.min_pitch_deg <= self.max_pitch_deg,
            "pitch bounds inverted ({} > {})",
            self.min_pitch_deg,
            self.max_pitch_deg
        );
        Ok(())
    }
}

/// Apply one frame of look delta: additive yaw on the body, clamped pitch
/// on the pivot. A sensitivity of zero freezes look entirely (valid for
/// cutscenes and locked states).
pub fn apply_look(cfg: &OrbitLookCfg, pose: &mut BodyPose, pivot: &mut CameraPivot, look: Vec2) {
    let to_rad = cfg.sensitivity.to_radians();
    let dx = look.x * to_rad;
    let dy = (if cfg.invert_y { -look.y } else { look.y }) * to_rad;
    pivot.pitch = (pivot.pitch - dy).clamp(
        cfg.min_pitch_deg.to_radians(),
        cfg.max_pitch_deg.to_radians(),
    );
    pose.apply_yaw(dx);
}

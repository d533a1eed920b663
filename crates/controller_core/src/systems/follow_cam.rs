//! Trailing follow camera: smoothed position toward a fixed world-space
//! offset from the target, aimed above the target's base.
//!
//! Runs on a late phase, after the body pose for the frame is finalized.
//! Pure per-frame interpolation — no discrete states.

use anyhow::{ensure, Result};
use char_core::BodyPose;
use glam::{Quat, Vec3};

#[derive(Clone, Copy, Debug)]
pub struct FollowCamCfg {
    /// World-space offset from the target position (not rotated with the
    /// target).
    pub offset: Vec3,
    /// Interpolation rate in 1/s.
    pub smooth_speed: f32,
    /// Aim point lift above the target's base.
    pub aim_height: f32,
}

impl Default for FollowCamCfg {
    fn default() -> Self {
        Self {
            offset: Vec3::new(0.0, 3.0, -5.0),
            smooth_speed: 5.0,
            aim_height: 1.5,
        }
    }
}

impl FollowCamCfg {
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.smooth_speed >= 0.0,
            "smooth_speed must be non-negative (got {})",
            self.smooth_speed
        );
        Ok(())
    }
}

/// Camera transform driven by the rig.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FollowCameraRig {
    pub pos: Vec3,
    pub rotation: Quat,
}

impl FollowCameraRig {
    #[must_use]
    pub fn new(initial_pos: Vec3) -> Self {
        Self {
            pos: initial_pos,
            rotation: Quat::IDENTITY,
        }
    }

    /// One late-phase tick. Skips silently when no target is set — the rig
    /// holds a relation to the target, not ownership of its lifecycle.
    ///
    /// The lerp factor is capped at 1 so an oversized `smooth_speed * dt`
    /// step lands exactly on the goal instead of overshooting.
    pub fn late_tick(&mut self, cfg: &FollowCamCfg, target: Option<&BodyPose>, dt: f32) {
        let Some(target) = target else { return };
        let desired = target.pos + cfg.offset;
        let t = (cfg.smooth_speed * dt).clamp(0.0, 1.0);
        self.pos = self.pos.lerp(desired, t);
        let aim = target.pos + Vec3::Y * cfg.aim_height;
        if let Some(rot) = look_rotation(aim - self.pos) {
            self.rotation = rot;
        }
    }

    /// Camera forward vector (+Z at identity).
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        self.rotation * Vec3::Z
    }
}

/// Roll-free rotation looking along `dir` (+Z forward, +Y up convention).
/// Returns `None` for a degenerate direction.
fn look_rotation(dir: Vec3) -> Option<Quat> {
    let d = dir.normalize_or_zero();
    if d == Vec3::ZERO {
        return None;
    }
    let yaw = d.x.atan2(d.z);
    let pitch = d.y.clamp(-1.0, 1.0).asin();
    Some(Quat::from_rotation_y(yaw) * Quat::from_rotation_x(-pitch))
}

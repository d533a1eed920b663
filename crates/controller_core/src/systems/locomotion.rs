//! Ground locomotion: frame displacement from move axis, yaw basis and gait.

use crate::boundary::KinematicMover;
use anyhow::{ensure, Result};
use char_core::{BodyPose, InputSample, MOVE_EPS};
use glam::{Vec2, Vec3};
use tracing::trace;

#[derive(Clone, Copy, Debug)]
pub struct LocomotionCfg {
    /// Ground speed in units/s. Must be positive.
    pub walk_speed: f32,
    /// Sprint speed in units/s; `None` means the character has no sprint
    /// capability and sprint input is ignored.
    pub run_speed: Option<f32>,
}

impl Default for LocomotionCfg {
    fn default() -> Self {
        Self {
            walk_speed: 3.0,
            run_speed: None,
        }
    }
}

impl LocomotionCfg {
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.walk_speed > 0.0,
            "walk_speed must be positive (got {})",
            self.walk_speed
        );
        if let Some(run) = self.run_speed {
            ensure!(
                run >= self.walk_speed,
                "run_speed {} below walk_speed {}",
                run,
                self.walk_speed
            );
        }
        Ok(())
    }
}

/// Speed bucket for this frame. Run requires sprint held AND a stick
/// meaningfully off center; a nominally-zero stick never promotes to run.
#[must_use]
pub fn frame_speed(cfg: &LocomotionCfg, move_axis: Vec2, sprint_held: bool) -> f32 {
    match cfg.run_speed {
        Some(run) if sprint_held && move_axis.length_squared() > MOVE_EPS => run,
        _ => cfg.walk_speed,
    }
}

/// World-space displacement for the elapsed frame time.
///
/// The direction is NOT normalized: partial-stick magnitude carries through
/// to displacement. A zero-length basis vector yields zero displacement for
/// the frame rather than an error.
#[must_use]
pub fn displacement(
    cfg: &LocomotionCfg,
    right: Vec3,
    forward: Vec3,
    move_axis: Vec2,
    sprint_held: bool,
    dt: f32,
) -> Vec3 {
    if right.length_squared() < f32::EPSILON || forward.length_squared() < f32::EPSILON {
        trace!(target: "locomotion", "degenerate basis, holding position");
        return Vec3::ZERO;
    }
    let dir = right * move_axis.x + forward * move_axis.y;
    dir * frame_speed(cfg, move_axis, sprint_held) * dt
}

/// Compute this frame's displacement from the pose basis and hand it to the
/// mover, which resolves collisions and commits the new position.
pub fn update(
    cfg: &LocomotionCfg,
    pose: &mut BodyPose,
    sample: &InputSample,
    dt: f32,
    mover: &mut dyn KinematicMover,
) {
    let (right, forward) = pose.basis();
    let d = displacement(cfg, right, forward, sample.move_axis, sample.sprint_held, dt);
    mover.move_by(&mut pose.pos, d);
}

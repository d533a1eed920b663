//! Blend-tree parameter mapping from input/velocity state.
//!
//! Two mapping profiles exist as configuration, not subclasses: a raw
//! passthrough of the move axis, and a smoothed body-local velocity with an
//! idle threshold. The threshold and smoothing are a correctness
//! requirement, not cosmetics — tiny nonzero residuals reaching the
//! evaluator flicker the character between idle and walk poses.

use crate::boundary::{params, AnimationSink};
use anyhow::{ensure, Result};
use char_core::{BodyPose, Gait, InputSample};
use glam::{Vec2, Vec3};
use tracing::debug;

/// Fixed smoothing time constant for the damped profile, in seconds.
pub const DAMP_TIME_S: f32 = 0.1;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum AnimProfile {
    /// `Horizontal`/`Vertical` mirror the raw axis, `Speed` its magnitude.
    RawAxis,
    /// Body-local velocity, thresholded then exponentially smoothed.
    #[default]
    SmoothedLocal,
}

#[derive(Clone, Copy, Debug)]
pub struct AnimCfg {
    pub profile: AnimProfile,
    /// Also derive the `IsWalking`/`IsRunning` booleans.
    pub gait_flags: bool,
    /// Axis components below this magnitude snap to exactly zero before
    /// reaching the evaluator.
    pub movement_threshold: f32,
    /// Emit the `H:`/`V:` trace line each frame.
    pub debug_parameters: bool,
}

impl Default for AnimCfg {
    fn default() -> Self {
        Self {
            profile: AnimProfile::SmoothedLocal,
            gait_flags: false,
            movement_threshold: 0.01,
            debug_parameters: false,
        }
    }
}

impl AnimCfg {
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.movement_threshold >= 0.0,
            "movement_threshold must be non-negative (got {})",
            self.movement_threshold
        );
        Ok(())
    }
}

/// Stateful mapper: owns the exponential smoothing accumulators so the
/// evaluator receives finished values.
#[derive(Clone, Copy, Debug, Default)]
pub struct AnimParamMapper {
    cfg: AnimCfg,
    smoothed: Vec2,
}

impl AnimParamMapper {
    #[must_use]
    pub fn new(cfg: AnimCfg) -> Self {
        Self {
            cfg,
            smoothed: Vec2::ZERO,
        }
    }

    #[must_use]
    pub fn cfg(&self) -> &AnimCfg {
        &self.cfg
    }

    /// Derive and write this frame's parameter set.
    pub fn update(
        &mut self,
        pose: &BodyPose,
        sample: &InputSample,
        walk_speed: f32,
        dt: f32,
        sink: &mut dyn AnimationSink,
    ) {
        let (h, v) = match self.cfg.profile {
            AnimProfile::RawAxis => {
                sink.set_float(params::HORIZONTAL, sample.move_axis.x);
                sink.set_float(params::VERTICAL, sample.move_axis.y);
                sink.set_float(params::SPEED, sample.move_axis.length());
                (sample.move_axis.x, sample.move_axis.y)
            }
            AnimProfile::SmoothedLocal => {
                let local = self.local_velocity(pose, sample.move_axis, walk_speed);
                let target = Vec2::new(self.snap(local.x), self.snap(local.y));
                self.advance(target, dt);
                sink.set_float(params::HORIZONTAL, self.smoothed.x);
                sink.set_float(params::VERTICAL, self.smoothed.y);
                (self.smoothed.x, self.smoothed.y)
            }
        };

        if self.cfg.gait_flags {
            let gait = Gait::resolve(sample.move_axis, sample.sprint_held);
            sink.set_bool(params::IS_WALKING, gait == Gait::Walk);
            sink.set_bool(params::IS_RUNNING, gait == Gait::Run);
        }

        if self.cfg.debug_parameters {
            debug!(target: "anim", "H: {h:.2}, V: {v:.2}");
        }
    }

    /// Walk-scaled axis vector expressed in the body's local frame.
    fn local_velocity(&self, pose: &BodyPose, move_axis: Vec2, walk_speed: f32) -> Vec2 {
        let world = Vec3::new(move_axis.x * walk_speed, 0.0, move_axis.y * walk_speed);
        let (right, forward) = pose.basis();
        Vec2::new(world.dot(right), world.dot(forward))
    }

    fn snap(&self, v: f32) -> f32 {
        if v.abs() < self.cfg.movement_threshold {
            0.0
        } else {
            v
        }
    }

    /// Exponential step toward the target. A zero target pulls the
    /// accumulator all the way to exactly zero once it drops below the
    /// threshold, so idle frames settle instead of flickering.
    fn advance(&mut self, target: Vec2, dt: f32) {
        let alpha = if dt > 0.0 {
            1.0 - (-dt / DAMP_TIME_S).exp()
        } else {
            0.0
        };
        self.smoothed += (target - self.smoothed) * alpha;
        self.smoothed.x = self.settle(target.x, self.smoothed.x);
        self.smoothed.y = self.settle(target.y, self.smoothed.y);
    }

    fn settle(&self, target: f32, smoothed: f32) -> f32 {
        if target == 0.0 && smoothed.abs() < self.cfg.movement_threshold {
            0.0
        } else {
            smoothed
        }
    }
}

//! Pose and gait component definitions.
//!
//! `BodyPose` is owned by the character entity: locomotion mutates its
//! position through the external mover, the orbit-look system mutates its
//! yaw directly. `CameraPivot` is owned by the orbit-look system alone.

use glam::{Quat, Vec2, Vec3};

/// Squared move-axis magnitude below which a stick is considered idle.
///
/// Guards against float noise on a nominally-zero stick promoting the
/// character into a moving gait.
pub const MOVE_EPS: f32 = 0.01;

/// Wrap an angle to (-PI, PI].
#[must_use]
pub fn wrap_angle(a: f32) -> f32 {
    let mut x = a;
    while x > std::f32::consts::PI {
        x -= std::f32::consts::TAU;
    }
    while x < -std::f32::consts::PI {
        x += std::f32::consts::TAU;
    }
    x
}

/// Body pose: world position plus facing yaw about +Y (CCW-positive,
/// +Z forward at yaw 0). Yaw is unbounded input-wise but stored wrapped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyPose {
    pub pos: Vec3,
    pub yaw: f32,
}

impl BodyPose {
    #[must_use]
    pub fn new(spawn: Vec3) -> Self {
        Self {
            pos: spawn,
            yaw: 0.0,
        }
    }

    /// Right/forward basis vectors on the XZ plane for the current yaw.
    #[must_use]
    pub fn basis(&self) -> (Vec3, Vec3) {
        let (s, c) = self.yaw.sin_cos();
        let right = Vec3::new(c, 0.0, -s);
        let forward = Vec3::new(s, 0.0, c);
        (right, forward)
    }

    /// Apply an additive yaw rotation, keeping the stored angle wrapped.
    pub fn apply_yaw(&mut self, delta: f32) {
        self.yaw = wrap_angle(self.yaw + delta);
    }
}

impl Default for BodyPose {
    fn default() -> Self {
        Self::new(Vec3::ZERO)
    }
}

/// Camera pivot pitch accumulator (radians, positive looks up).
///
/// The accumulator persists across frames and is only ever incremented and
/// clamped by the orbit-look system; it is never reset by input.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CameraPivot {
    pub pitch: f32,
}

impl CameraPivot {
    /// Pitch-only local rotation about the lateral axis; roll and yaw are
    /// zero so the camera never rolls regardless of body yaw.
    #[must_use]
    pub fn local_rotation(&self) -> Quat {
        Quat::from_rotation_x(-self.pitch)
    }
}

/// Gait for the current frame. Pure function of this frame's input — never
/// sticky across frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Gait {
    #[default]
    Idle,
    Walk,
    Run,
}

impl Gait {
    #[must_use]
    pub fn resolve(move_axis: Vec2, sprint_held: bool) -> Self {
        if move_axis.length_squared() <= MOVE_EPS {
            Self::Idle
        } else if sprint_held {
            Self::Run
        } else {
            Self::Walk
        }
    }
}

//! Host-implemented collaborator boundaries.
//!
//! The host engine implements these traits; keeping them here avoids a
//! tight coupling between the controller systems and engine internals.

use glam::Vec3;

/// Animation parameter names written by the mapper. The downstream blend
/// tree is keyed on these exact strings.
pub mod params {
    pub const HORIZONTAL: &str = "Horizontal";
    pub const VERTICAL: &str = "Vertical";
    pub const SPEED: &str = "Speed";
    pub const IS_WALKING: &str = "IsWalking";
    pub const IS_RUNNING: &str = "IsRunning";
}

/// Collision-aware kinematic position update service.
///
/// The implementor sweeps the body by `displacement`, resolves collisions,
/// and commits the resolved position into `pos`. The controller never
/// inspects the outcome or corrects for partial moves; that is the mover's
/// contract.
pub trait KinematicMover {
    fn move_by(&mut self, pos: &mut Vec3, displacement: Vec3);
}

/// Named-parameter sink for the downstream blend-tree evaluator.
pub trait AnimationSink {
    fn set_float(&mut self, name: &str, value: f32);
    fn set_bool(&mut self, name: &str, value: bool);
}

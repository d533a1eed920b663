//! Per-frame orchestration with the fixed system order.
//!
//! Within a frame: drain input, then locomotion, then look/yaw, then
//! animation parameters. Yaw mutation lands after locomotion has read the
//! basis, so a look delta steers the displacement of the *next* frame.
//! The follow rig runs on a separate late phase, after the body pose for
//! the frame is finalized.

use crate::boundary::{AnimationSink, KinematicMover};
use crate::systems::anim_params::{AnimCfg, AnimParamMapper};
use crate::systems::follow_cam::{FollowCamCfg, FollowCameraRig};
use crate::systems::locomotion::{self, LocomotionCfg};
use crate::systems::orbit_look::{self, OrbitLookCfg};
use anyhow::Result;
use char_core::{BodyPose, CameraPivot, InputEvent, InputQueue, InputSample};
use glam::Vec3;

/// Combined controller configuration, validated as a whole at init.
#[derive(Clone, Copy, Debug, Default)]
pub struct CharacterCfg {
    pub locomotion: LocomotionCfg,
    pub look: OrbitLookCfg,
    pub anim: AnimCfg,
    pub follow: FollowCamCfg,
}

impl CharacterCfg {
    pub fn validate(&self) -> Result<()> {
        self.locomotion.validate()?;
        self.look.validate()?;
        self.anim.validate()?;
        self.follow.validate()?;
        Ok(())
    }
}

/// Owns the character-side state and drives the systems in order. The
/// mover and animation evaluator are host collaborators passed per tick;
/// configuration misuse fails here at construction, not silently later.
#[derive(Debug)]
pub struct CharacterFrame {
    cfg: CharacterCfg,
    pub pose: BodyPose,
    pub pivot: CameraPivot,
    pub rig: FollowCameraRig,
    sample: InputSample,
    queue: InputQueue,
    mapper: AnimParamMapper,
}

impl CharacterFrame {
    pub fn new(cfg: CharacterCfg, spawn: Vec3) -> Result<Self> {
        cfg.validate()?;
        Ok(Self {
            cfg,
            pose: BodyPose::new(spawn),
            pivot: CameraPivot::default(),
            rig: FollowCameraRig::new(spawn + cfg.follow.offset),
            sample: InputSample::default(),
            queue: InputQueue::default(),
            mapper: AnimParamMapper::new(cfg.anim),
        })
    }

    /// Queue an input edge; applied at the next frame boundary.
    pub fn push_input(&mut self, ev: InputEvent) {
        self.queue.push(ev);
    }

    /// The sample the most recent frame ran against.
    #[must_use]
    pub fn sample(&self) -> &InputSample {
        &self.sample
    }

    #[must_use]
    pub fn cfg(&self) -> &CharacterCfg {
        &self.cfg
    }

    /// One simulation frame: input drain, locomotion, look, animation.
    pub fn tick(&mut self, dt: f32, mover: &mut dyn KinematicMover, anim: &mut dyn AnimationSink) {
        self.queue.drain_into(&mut self.sample);
        locomotion::update(&self.cfg.locomotion, &mut self.pose, &self.sample, dt, mover);
        orbit_look::apply_look(
            &self.cfg.look,
            &mut self.pose,
            &mut self.pivot,
            self.sample.look_axis,
        );
        self.mapper.update(
            &self.pose,
            &self.sample,
            self.cfg.locomotion.walk_speed,
            dt,
            anim,
        );
    }

    /// Late phase: follow camera trailing this character's finalized pose.
    /// Standalone rigs with a detachable target use
    /// `FollowCameraRig::late_tick` directly.
    pub fn late_tick(&mut self, dt: f32) {
        self.rig.late_tick(&self.cfg.follow, Some(&self.pose), dt);
    }
}

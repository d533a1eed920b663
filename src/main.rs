//! Headless demo shell: loads tuning configs, wires in-memory collaborators
//! and steps a scripted walk so the controller can be exercised end to end
//! without a renderer.

use anyhow::{Context, Result, bail};
use char_core::InputEvent;
use controller_core::boundary::{AnimationSink, KinematicMover};
use controller_core::frame::{CharacterCfg, CharacterFrame};
use controller_core::session::LookSession;
use controller_core::systems::anim_params::{AnimCfg, AnimProfile};
use controller_core::systems::follow_cam::FollowCamCfg;
use controller_core::systems::locomotion::LocomotionCfg;
use controller_core::systems::orbit_look::OrbitLookCfg;
use glam::{Vec2, Vec3};
use tracing::info;

/// Collision-free mover: commits the requested displacement verbatim.
struct FreeMover;

impl KinematicMover for FreeMover {
    fn move_by(&mut self, pos: &mut Vec3, displacement: Vec3) {
        *pos += displacement;
    }
}

/// Sink that remembers the latest written parameters for the end-of-run log.
#[derive(Default)]
struct LatestParams {
    floats: Vec<(String, f32)>,
    bools: Vec<(String, bool)>,
}

impl LatestParams {
    fn upsert<T>(list: &mut Vec<(String, T)>, name: &str, value: T) {
        if let Some(slot) = list.iter_mut().find(|(n, _)| n == name) {
            slot.1 = value;
        } else {
            list.push((name.to_string(), value));
        }
    }
}

impl AnimationSink for LatestParams {
    fn set_float(&mut self, name: &str, value: f32) {
        Self::upsert(&mut self.floats, name, value);
    }
    fn set_bool(&mut self, name: &str, value: bool) {
        Self::upsert(&mut self.bools, name, value);
    }
}

fn load_cfg() -> Result<CharacterCfg> {
    let movement = data_runtime::configs::movement::load_default().context("movement config")?;
    let look = data_runtime::configs::input_camera::load_default().context("look config")?;
    let anim = data_runtime::configs::anim::load_default().context("anim config")?;
    let follow = data_runtime::configs::follow_cam::load_default().context("follow config")?;

    let loco_defaults = LocomotionCfg::default();
    let look_defaults = OrbitLookCfg::default();
    let anim_defaults = AnimCfg::default();
    let follow_defaults = FollowCamCfg::default();

    let profile = match anim.profile.as_deref() {
        None | Some("smoothed_local") => AnimProfile::SmoothedLocal,
        Some("raw_axis") => AnimProfile::RawAxis,
        Some(other) => bail!("unknown anim profile '{other}'"),
    };

    Ok(CharacterCfg {
        locomotion: LocomotionCfg {
            walk_speed: movement.walk_speed.unwrap_or(loco_defaults.walk_speed),
            run_speed: movement.run_speed,
        },
        look: OrbitLookCfg {
            sensitivity: look
                .sensitivity_deg_per_count
                .unwrap_or(look_defaults.sensitivity),
            invert_y: look.invert_y.unwrap_or(look_defaults.invert_y),
            min_pitch_deg: look.min_pitch_deg.unwrap_or(look_defaults.min_pitch_deg),
            max_pitch_deg: look.max_pitch_deg.unwrap_or(look_defaults.max_pitch_deg),
        },
        anim: AnimCfg {
            profile,
            gait_flags: anim.gait_flags.unwrap_or(anim_defaults.gait_flags),
            movement_threshold: anim
                .movement_threshold
                .unwrap_or(anim_defaults.movement_threshold),
            debug_parameters: anim
                .debug_parameters
                .unwrap_or(anim_defaults.debug_parameters),
        },
        follow: FollowCamCfg {
            offset: follow
                .offset
                .map_or(follow_defaults.offset, Vec3::from_array),
            smooth_speed: follow.smooth_speed.unwrap_or(follow_defaults.smooth_speed),
            aim_height: follow.aim_height.unwrap_or(follow_defaults.aim_height),
        },
    })
}

fn run() -> Result<()> {
    let cfg = load_cfg()?;
    let mut frame = CharacterFrame::new(cfg, Vec3::ZERO)?;

    // Pointer capture happens once at the session boundary; a windowed host
    // would apply these events to its engine globals.
    let mut session = LookSession::default();
    let mut host_events = Vec::new();
    session.begin(&mut host_events);
    info!(target: "demo", events = host_events.len(), "look session started");

    let mut mover = FreeMover;
    let mut params = LatestParams::default();

    let dt = 1.0 / 60.0;
    for step in 0..600u32 {
        match step {
            0 => frame.push_input(InputEvent::MovePerformed(Vec2::new(0.0, 1.0))),
            120 => frame.push_input(InputEvent::SprintStarted),
            300 => frame.push_input(InputEvent::SprintStopped),
            480 => frame.push_input(InputEvent::MoveCanceled),
            _ => {}
        }
        // A slow half-second camera swing early in the run.
        if (60..90).contains(&step) {
            frame.push_input(InputEvent::LookPerformed(Vec2::new(4.0, -1.0)));
        }

        frame.tick(dt, &mut mover, &mut params);
        frame.late_tick(dt);

        if step % 120 == 0 {
            #[allow(clippy::cast_precision_loss)]
            let t = step as f32 * dt;
            info!(
                target: "demo",
                t,
                pos = ?frame.pose.pos,
                yaw = frame.pose.yaw,
                pitch = frame.pivot.pitch,
                cam = ?frame.rig.pos,
                "frame"
            );
        }
    }

    session.end(&mut host_events);
    info!(target: "demo", pos = ?frame.pose.pos, "run complete");
    for (name, v) in &params.floats {
        info!(target: "demo", "{name} = {v:.3}");
    }
    for (name, v) in &params.bools {
        info!(target: "demo", "{name} = {v}");
    }
    Ok(())
}

fn main() {
    controller_core::telemetry::init(false);
    if let Err(e) = run() {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

//! Frame-boundary and ordering guarantees of `CharacterFrame`.

use char_core::InputEvent;
use controller_core::boundary::{AnimationSink, KinematicMover};
use controller_core::frame::{CharacterCfg, CharacterFrame};
use controller_core::systems::locomotion::LocomotionCfg;
use controller_core::systems::orbit_look::OrbitLookCfg;
use glam::{Vec2, Vec3};

struct FreeMover;

impl KinematicMover for FreeMover {
    fn move_by(&mut self, pos: &mut Vec3, displacement: Vec3) {
        *pos += displacement;
    }
}

struct NullSink;

impl AnimationSink for NullSink {
    fn set_float(&mut self, _name: &str, _value: f32) {}
    fn set_bool(&mut self, _name: &str, _value: bool) {}
}

fn test_cfg() -> CharacterCfg {
    CharacterCfg {
        locomotion: LocomotionCfg {
            walk_speed: 3.0,
            run_speed: None,
        },
        look: OrbitLookCfg {
            sensitivity: 1.0,
            ..Default::default()
        },
        ..Default::default()
    }
}

#[test]
fn yaw_steers_the_next_frame_not_this_one() {
    let mut frame = CharacterFrame::new(test_cfg(), Vec3::ZERO).expect("cfg");
    frame.push_input(InputEvent::MovePerformed(Vec2::new(0.0, 1.0)));
    // 90 degrees of yaw in the same frame as the move input.
    frame.push_input(InputEvent::LookPerformed(Vec2::new(90.0, 0.0)));
    let mut mover = FreeMover;
    let mut sink = NullSink;

    frame.tick(1.0, &mut mover, &mut sink);
    // Locomotion ran against the pre-look basis (+Z forward).
    assert!((frame.pose.pos - Vec3::new(0.0, 0.0, 3.0)).length() < 1e-5);
    assert!((frame.pose.yaw - 90f32.to_radians()).abs() < 1e-5);

    frame.tick(1.0, &mut mover, &mut sink);
    // The yaw applied last frame steers this frame's displacement (+X).
    assert!(
        (frame.pose.pos - Vec3::new(3.0, 0.0, 3.0)).length() < 1e-4,
        "pos={:?}",
        frame.pose.pos
    );
}

#[test]
fn queued_edges_apply_only_at_the_frame_boundary() {
    let mut frame = CharacterFrame::new(test_cfg(), Vec3::ZERO).expect("cfg");
    let mut mover = FreeMover;
    let mut sink = NullSink;

    frame.tick(1.0, &mut mover, &mut sink);
    assert_eq!(frame.pose.pos, Vec3::ZERO, "no input, no motion");

    // Pushed after the tick: invisible until the next drain.
    frame.push_input(InputEvent::MovePerformed(Vec2::new(0.0, 1.0)));
    assert_eq!(frame.sample().move_axis, Vec2::ZERO);

    frame.tick(1.0, &mut mover, &mut sink);
    assert_eq!(frame.sample().move_axis, Vec2::new(0.0, 1.0));
    assert!((frame.pose.pos - Vec3::new(0.0, 0.0, 3.0)).length() < 1e-5);
}

#[test]
fn cancel_edge_resets_the_held_axis() {
    let mut frame = CharacterFrame::new(test_cfg(), Vec3::ZERO).expect("cfg");
    let mut mover = FreeMover;
    let mut sink = NullSink;
    frame.push_input(InputEvent::MovePerformed(Vec2::new(0.0, 1.0)));
    frame.tick(1.0, &mut mover, &mut sink);
    frame.push_input(InputEvent::MoveCanceled);
    frame.tick(1.0, &mut mover, &mut sink);
    let after_cancel = frame.pose.pos;
    frame.tick(1.0, &mut mover, &mut sink);
    assert_eq!(frame.pose.pos, after_cancel, "canceled axis must stay zero");
}

#[test]
fn follow_rig_trails_on_the_late_phase() {
    let mut frame = CharacterFrame::new(test_cfg(), Vec3::ZERO).expect("cfg");
    let mut mover = FreeMover;
    let mut sink = NullSink;
    frame.push_input(InputEvent::MovePerformed(Vec2::new(0.0, 1.0)));
    for _ in 0..240 {
        frame.tick(1.0 / 60.0, &mut mover, &mut sink);
        frame.late_tick(1.0 / 60.0);
    }
    let desired = frame.pose.pos + frame.cfg().follow.offset;
    // Trails the moving target: close to, but behind, the ideal point.
    assert!(frame.rig.pos.distance(desired) < 1.0);
    assert!(frame.rig.pos.z < desired.z);
}

#[test]
fn invalid_configuration_fails_at_init() {
    let mut cfg = test_cfg();
    cfg.locomotion.walk_speed = 0.0;
    assert!(CharacterFrame::new(cfg, Vec3::ZERO).is_err());

    let mut cfg = test_cfg();
    cfg.locomotion.run_speed = Some(1.0);
    assert!(CharacterFrame::new(cfg, Vec3::ZERO).is_err());

    let mut cfg = test_cfg();
    cfg.look.min_pitch_deg = 45.0;
    cfg.look.max_pitch_deg = -45.0;
    assert!(CharacterFrame::new(cfg, Vec3::ZERO).is_err());
}

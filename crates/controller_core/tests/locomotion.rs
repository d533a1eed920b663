use char_core::{BodyPose, InputSample};
use controller_core::boundary::KinematicMover;
use controller_core::systems::locomotion::{LocomotionCfg, displacement, update};
use glam::{Vec2, Vec3};

struct FreeMover {
    last: Vec3,
}

impl KinematicMover for FreeMover {
    fn move_by(&mut self, pos: &mut Vec3, displacement: Vec3) {
        *pos += displacement;
        self.last = displacement;
    }
}

#[test]
fn full_forward_walk_matches_speed() {
    // moveAxis=(0,1), walk 3, dt 1, world-axis basis => displacement (0,0,3).
    let cfg = LocomotionCfg {
        walk_speed: 3.0,
        run_speed: None,
    };
    let d = displacement(&cfg, Vec3::X, Vec3::Z, Vec2::new(0.0, 1.0), false, 1.0);
    assert!((d - Vec3::new(0.0, 0.0, 3.0)).length() < 1e-6, "d={d:?}");
}

#[test]
fn sprint_half_step_covers_run_distance() {
    // sprint held, walk 3 / run 6, dt 0.5 => (0,0,3).
    let cfg = LocomotionCfg {
        walk_speed: 3.0,
        run_speed: Some(6.0),
    };
    let d = displacement(&cfg, Vec3::X, Vec3::Z, Vec2::new(0.0, 1.0), true, 0.5);
    assert!((d - Vec3::new(0.0, 0.0, 3.0)).length() < 1e-6, "d={d:?}");
}

#[test]
fn displacement_scales_linearly_with_walk_speed() {
    let slow = LocomotionCfg {
        walk_speed: 2.0,
        run_speed: None,
    };
    let fast = LocomotionCfg {
        walk_speed: 4.0,
        run_speed: None,
    };
    let axis = Vec2::new(0.3, 0.7);
    let dt = 1.0 / 60.0;
    let a = displacement(&slow, Vec3::X, Vec3::Z, axis, false, dt);
    let b = displacement(&fast, Vec3::X, Vec3::Z, axis, false, dt);
    assert!((b - a * 2.0).length() < 1e-6);
}

#[test]
fn partial_stick_is_not_normalized() {
    let cfg = LocomotionCfg {
        walk_speed: 3.0,
        run_speed: None,
    };
    let full = displacement(&cfg, Vec3::X, Vec3::Z, Vec2::new(0.0, 1.0), false, 1.0);
    let half = displacement(&cfg, Vec3::X, Vec3::Z, Vec2::new(0.0, 0.5), false, 1.0);
    assert!((half * 2.0 - full).length() < 1e-6, "magnitude must carry");
}

#[test]
fn update_moves_through_the_mover() {
    let cfg = LocomotionCfg {
        walk_speed: 3.0,
        run_speed: None,
    };
    let mut pose = BodyPose::default();
    let sample = InputSample {
        move_axis: Vec2::new(0.0, 1.0),
        ..Default::default()
    };
    let mut mover = FreeMover { last: Vec3::ZERO };
    update(&cfg, &mut pose, &sample, 1.0, &mut mover);
    assert!((pose.pos - Vec3::new(0.0, 0.0, 3.0)).length() < 1e-6);
    assert!((mover.last - Vec3::new(0.0, 0.0, 3.0)).length() < 1e-6);
}

#[test]
fn yawed_body_walks_along_its_own_forward() {
    let cfg = LocomotionCfg {
        walk_speed: 3.0,
        run_speed: None,
    };
    let mut pose = BodyPose::default();
    pose.apply_yaw(std::f32::consts::FRAC_PI_2);
    let sample = InputSample {
        move_axis: Vec2::new(0.0, 1.0),
        ..Default::default()
    };
    let mut mover = FreeMover { last: Vec3::ZERO };
    update(&cfg, &mut pose, &sample, 1.0, &mut mover);
    // Forward at yaw 90deg is +X.
    assert!((pose.pos - Vec3::new(3.0, 0.0, 0.0)).length() < 1e-5, "pos={:?}", pose.pos);
}

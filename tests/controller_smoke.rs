//! Workspace smoke test: drive the controller through the root re-exports
//! the way the demo shell does.

use glam::{Vec2, Vec3};
use strider::char_core::InputEvent;
use strider::controller::boundary::{AnimationSink, KinematicMover};
use strider::controller::frame::{CharacterCfg, CharacterFrame};

struct FreeMover;

impl KinematicMover for FreeMover {
    fn move_by(&mut self, pos: &mut Vec3, displacement: Vec3) {
        *pos += displacement;
    }
}

#[derive(Default)]
struct CountingSink {
    writes: usize,
}

impl AnimationSink for CountingSink {
    fn set_float(&mut self, _name: &str, _value: f32) {
        self.writes += 1;
    }
    fn set_bool(&mut self, _name: &str, _value: bool) {
        self.writes += 1;
    }
}

#[test]
fn default_config_walks_forward() {
    let mut frame = CharacterFrame::new(CharacterCfg::default(), Vec3::ZERO).expect("cfg");
    let mut mover = FreeMover;
    let mut sink = CountingSink::default();
    frame.push_input(InputEvent::MovePerformed(Vec2::new(0.0, 1.0)));
    for _ in 0..60 {
        frame.tick(1.0 / 60.0, &mut mover, &mut sink);
        frame.late_tick(1.0 / 60.0);
    }
    // One second at the default walk speed of 3.
    assert!((frame.pose.pos.z - 3.0).abs() < 1e-3, "z={}", frame.pose.pos.z);
    assert!(sink.writes > 0, "animation parameters must be written");
}

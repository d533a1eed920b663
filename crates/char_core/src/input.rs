//! Input sample and event queue.
//!
//! The host input layer pushes performed/canceled-style edges into an
//! `InputQueue` at any time; the frame tick drains the queue into an
//! `InputSample` exactly once at the frame boundary, so a frame always
//! reads either the fully-prior or fully-updated fields, never a torn mix.

use glam::Vec2;

/// Per-frame snapshot of local player intent.
///
/// - `move_axis` is a held axis (components in [-1, 1]); it persists across
///   frames until a cancel edge resets it to zero.
/// - `look_axis` is a per-frame delta: it is rebuilt from this frame's look
///   events on drain and is zero on frames with no look event.
/// - `sprint_held` follows start/stop edges.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InputSample {
    pub move_axis: Vec2,
    pub look_axis: Vec2,
    pub sprint_held: bool,
}

impl InputSample {
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Performed/canceled edges delivered by the host input layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    MovePerformed(Vec2),
    MoveCanceled,
    LookPerformed(Vec2),
    LookCanceled,
    SprintStarted,
    SprintStopped,
}

/// Single-writer event queue drained once per frame.
#[derive(Debug, Clone, Default)]
pub struct InputQueue {
    events: Vec<InputEvent>,
}

impl InputQueue {
    pub fn push(&mut self, ev: InputEvent) {
        self.events.push(ev);
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Apply all queued edges to the sample in arrival order.
    ///
    /// Look deltas accumulate within the frame and are consumed: the axis
    /// starts from zero on every drain.
    pub fn drain_into(&mut self, sample: &mut InputSample) {
        sample.look_axis = Vec2::ZERO;
        for ev in self.events.drain(..) {
            match ev {
                InputEvent::MovePerformed(v) => sample.move_axis = v,
                InputEvent::MoveCanceled => sample.move_axis = Vec2::ZERO,
                InputEvent::LookPerformed(d) => sample.look_axis += d,
                InputEvent::LookCanceled => sample.look_axis = Vec2::ZERO,
                InputEvent::SprintStarted => sample.sprint_held = true,
                InputEvent::SprintStopped => sample.sprint_held = false,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn move_axis_persists_until_cancel() {
        let mut q = InputQueue::default();
        let mut s = InputSample::default();
        q.push(InputEvent::MovePerformed(Vec2::new(0.0, 1.0)));
        q.drain_into(&mut s);
        assert_eq!(s.move_axis, Vec2::new(0.0, 1.0));
        // No new events: the held axis survives the next drain.
        q.drain_into(&mut s);
        assert_eq!(s.move_axis, Vec2::new(0.0, 1.0));
        q.push(InputEvent::MoveCanceled);
        q.drain_into(&mut s);
        assert_eq!(s.move_axis, Vec2::ZERO);
    }

    #[test]
    fn look_deltas_accumulate_then_reset_each_frame() {
        let mut q = InputQueue::default();
        let mut s = InputSample::default();
        q.push(InputEvent::LookPerformed(Vec2::new(2.0, 0.0)));
        q.push(InputEvent::LookPerformed(Vec2::new(3.0, -1.0)));
        q.drain_into(&mut s);
        assert_eq!(s.look_axis, Vec2::new(5.0, -1.0));
        q.drain_into(&mut s);
        assert_eq!(s.look_axis, Vec2::ZERO);
    }

    #[test]
    fn sprint_follows_edges() {
        let mut q = InputQueue::default();
        let mut s = InputSample::default();
        q.push(InputEvent::SprintStarted);
        q.drain_into(&mut s);
        assert!(s.sprint_held);
        q.push(InputEvent::SprintStopped);
        q.drain_into(&mut s);
        assert!(!s.sprint_held);
    }
}

//! Look-session lifecycle: pointer lock and cursor visibility.
//!
//! Engine-global cursor state is never mutated from inside the frame
//! systems; the host calls `begin`/`end` at its initialization boundary and
//! applies the emitted events itself.

use tracing::info;

/// Requests for the host to apply to its window/engine globals.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HostEvent {
    PointerLockRequest(bool),
    CursorVisibleRequest(bool),
}

/// Tracks whether the look session is active; transitions are idempotent.
#[derive(Clone, Copy, Debug, Default)]
pub struct LookSession {
    active: bool,
}

impl LookSession {
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Capture the pointer for look control: lock + hide.
    pub fn begin(&mut self, out: &mut Vec<HostEvent>) {
        if self.active {
            return;
        }
        self.active = true;
        info!(target: "controls", reason = "session_begin", "pointer capture requested");
        out.push(HostEvent::PointerLockRequest(true));
        out.push(HostEvent::CursorVisibleRequest(false));
    }

    /// Release the pointer: unlock + show.
    pub fn end(&mut self, out: &mut Vec<HostEvent>) {
        if !self.active {
            return;
        }
        self.active = false;
        info!(target: "controls", reason = "session_end", "pointer release requested");
        out.push(HostEvent::PointerLockRequest(false));
        out.push(HostEvent::CursorVisibleRequest(true));
    }
}

/// Single-slot coalescer for animation-frame work.
///
/// High-frequency events call [`FrameGate::request`]; only the first call since the last
/// [`FrameGate::complete`] asks the adapter to schedule a frame. Further calls are no-ops until
/// the scheduled frame runs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameGate {
    pending: bool,
}

impl FrameGate {
    pub const fn new() -> Self {
        Self { pending: false }
    }

    /// Returns `true` when the caller must schedule a frame.
    pub fn request(&mut self) -> bool {
        if self.pending {
            return false;
        }
        self.pending = true;
        true
    }

    /// Clears the slot. Returns whether work was pending.
    pub fn complete(&mut self) -> bool {
        core::mem::replace(&mut self.pending, false)
    }

    /// Drops a pending request, e.g. when the frame could not be scheduled.
    pub fn cancel(&mut self) {
        self.pending = false;
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }
}

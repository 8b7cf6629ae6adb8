use crate::{FrameGate, HandleTransform, ScrollMetrics};

/// Default rotation of the handle across its full travel.
pub const DEFAULT_FULL_TURN_DEG: f64 = 360.0;

/// Scroll fraction used to place the handle.
///
/// Degenerates to `0` when the content does not overflow or the handle has no room to travel.
pub fn scroll_progress(metrics: ScrollMetrics, max_offset: f64) -> f64 {
    if metrics.max_scroll() <= 0.0 || max_offset <= 0.0 {
        return 0.0;
    }
    metrics.progress()
}

/// Which side currently owns the handle position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrubberMode {
    /// The handle follows the viewport scroll.
    ScrollDriven,
    /// The handle follows the pointer and the viewport scroll follows the handle.
    DragDriven,
}

/// Result of moving the handle during a drag.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrubUpdate {
    /// Scroll offset to apply to the viewport.
    pub scroll_offset: f64,
    pub transform: HandleTransform,
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct HandleDrag {
    start_x: f64,
    initial_offset: f64,
}

/// Keeps the scrubber handle and the viewport scroll in sync without feedback loops.
///
/// The handle offset lives here as a number rather than being read back from the rendered
/// transform. While a drag is active the handle is the source of truth and scroll events are
/// ignored; otherwise the handle is derived from the scroll fraction.
///
/// `max_offset` is the handle's free travel (`track width - handle width`); adapters pass it on
/// every call because the layout may change at any time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Scrubber {
    handle_offset: f64,
    full_turn_deg: f64,
    drag: Option<HandleDrag>,
    frame: FrameGate,
}

impl Default for Scrubber {
    fn default() -> Self {
        Self::new(DEFAULT_FULL_TURN_DEG)
    }
}

impl Scrubber {
    pub fn new(full_turn_deg: f64) -> Self {
        Self {
            handle_offset: 0.0,
            full_turn_deg,
            drag: None,
            frame: FrameGate::new(),
        }
    }

    pub fn mode(&self) -> ScrubberMode {
        if self.drag.is_some() {
            ScrubberMode::DragDriven
        } else {
            ScrubberMode::ScrollDriven
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    pub fn handle_offset(&self) -> f64 {
        self.handle_offset
    }

    pub fn transform(&self, max_offset: f64) -> HandleTransform {
        let max_offset = max_offset.max(0.0);
        let progress = if max_offset > 0.0 {
            self.handle_offset / max_offset
        } else {
            0.0
        };
        HandleTransform {
            offset: self.handle_offset,
            rotation_deg: progress * self.full_turn_deg,
        }
    }

    /// Places the handle from the current scroll fraction, unconditionally.
    pub fn sync_to_scroll(&mut self, metrics: ScrollMetrics, max_offset: f64) -> HandleTransform {
        let max_offset = max_offset.max(0.0);
        if metrics.max_scroll() <= 0.0 || max_offset <= 0.0 {
            self.handle_offset = 0.0;
            return HandleTransform::ZERO;
        }
        let progress = scroll_progress(metrics, max_offset);
        let transform = HandleTransform::from_progress(progress, max_offset, self.full_turn_deg);
        self.handle_offset = transform.offset;
        transform
    }

    /// Called for every viewport scroll event. Returns `true` when a frame must be scheduled.
    pub fn on_scroll(&mut self) -> bool {
        if self.is_dragging() {
            return false;
        }
        self.frame.request()
    }

    /// Runs a scheduled scroll sync. Returns `None` when a drag took over in the meantime.
    pub fn on_frame(&mut self, metrics: ScrollMetrics, max_offset: f64) -> Option<HandleTransform> {
        self.frame.complete();
        if self.is_dragging() {
            return None;
        }
        Some(self.sync_to_scroll(metrics, max_offset))
    }

    /// Re-derives the handle after a layout change, unless a drag owns it.
    pub fn on_resize(&mut self, metrics: ScrollMetrics, max_offset: f64) -> Option<HandleTransform> {
        if self.is_dragging() {
            return None;
        }
        Some(self.sync_to_scroll(metrics, max_offset))
    }

    /// Starts a handle drag at pointer `x`, anchored on the current handle offset.
    pub fn begin_drag(&mut self, x: f64) {
        sdebug!(x, offset = self.handle_offset, "Scrubber: drag-driven");
        self.frame.cancel();
        self.drag = Some(HandleDrag {
            start_x: x,
            initial_offset: self.handle_offset,
        });
    }

    /// Moves the handle to follow pointer `x` and derives the viewport scroll from it.
    ///
    /// Returns `None` when no drag is active.
    pub fn drag_to(
        &mut self,
        x: f64,
        metrics: ScrollMetrics,
        max_offset: f64,
    ) -> Option<ScrubUpdate> {
        let drag = self.drag?;
        let max_offset = max_offset.max(0.0);
        let offset = (drag.initial_offset + (x - drag.start_x))
            .min(max_offset)
            .max(0.0);
        self.handle_offset = offset;

        let progress = if max_offset == 0.0 {
            0.0
        } else {
            offset / max_offset
        };
        Some(ScrubUpdate {
            scroll_offset: metrics.max_scroll() * progress,
            transform: HandleTransform::from_progress(progress, max_offset, self.full_turn_deg),
        })
    }

    /// Returns control to the scroll side. The handle stays where the drag left it until the
    /// next scroll sync. Returns whether a drag was active.
    pub fn end_drag(&mut self) -> bool {
        let was_dragging = self.drag.take().is_some();
        if was_dragging {
            sdebug!(offset = self.handle_offset, "Scrubber: scroll-driven");
        }
        was_dragging
    }
}

/// Default multiplier applied to pointer travel while drag-scrolling.
pub const DEFAULT_DRAG_SENSITIVITY: f64 = 1.1;

#[derive(Clone, Copy, Debug, PartialEq)]
struct DragOrigin {
    start_x: f64,
    start_scroll: f64,
}

/// Converts pointer/touch drags into horizontal scroll offsets.
///
/// The adapter reports gesture events; `DragScroll` answers with the scroll offset to apply.
/// Any end condition (release, leave, blur, touch end) calls [`DragScroll::end`], which clears the
/// dragging state unconditionally so a missed release cannot leave the slider stuck.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragScroll {
    sensitivity: f64,
    origin: Option<DragOrigin>,
}

impl Default for DragScroll {
    fn default() -> Self {
        Self::new(DEFAULT_DRAG_SENSITIVITY)
    }
}

impl DragScroll {
    pub fn new(sensitivity: f64) -> Self {
        Self {
            sensitivity,
            origin: None,
        }
    }

    pub fn sensitivity(&self) -> f64 {
        self.sensitivity
    }

    pub fn is_dragging(&self) -> bool {
        self.origin.is_some()
    }

    /// Starts a drag at pointer `x` with the viewport currently at `scroll_offset`.
    ///
    /// A second `begin` without an `end` restarts the gesture from the new origin.
    pub fn begin(&mut self, x: f64, scroll_offset: f64) {
        strace!(x, scroll_offset, "DragScroll::begin");
        self.origin = Some(DragOrigin {
            start_x: x,
            start_scroll: scroll_offset,
        });
    }

    /// Returns the scroll offset for pointer `x`, or `None` when no drag is active.
    pub fn drag_to(&self, x: f64) -> Option<f64> {
        let origin = self.origin?;
        let delta = (x - origin.start_x) * self.sensitivity;
        Some(origin.start_scroll - delta)
    }

    /// Mouse-move variant of [`DragScroll::drag_to`].
    ///
    /// A move with no button held means the release happened somewhere we never heard about
    /// (e.g. outside the window), so the drag ends instead of scrolling.
    pub fn pointer_moved(&mut self, x: f64, buttons_held: bool) -> Option<f64> {
        if !self.is_dragging() {
            return None;
        }
        if !buttons_held {
            self.end();
            return None;
        }
        self.drag_to(x)
    }

    /// Leaves the dragging state. Returns whether a drag was active.
    pub fn end(&mut self) -> bool {
        let was_dragging = self.origin.take().is_some();
        if was_dragging {
            strace!("DragScroll::end");
        }
        was_dragging
    }
}

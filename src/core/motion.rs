// Frame-gating state machine.
//
// The visibility signal and the reduced-motion preference are folded into
// three explicit modes instead of being re-checked ad hoc every frame.
// Reduced motion wins over visibility-driven animation: the field is painted
// once at its baseline and the loop then idles until a signal changes.

/// What the animator is allowed to do right now.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MotionMode {
    /// Visible, motion allowed: tick physics and repaint every frame.
    Running,
    /// Visible but reduced motion requested: one static paint, then idle.
    StaticFrame,
    /// Off screen: do nothing, do not reschedule.
    Suspended,
}

/// What a single frame callback should do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FramePlan {
    Animate,
    PaintStatic,
    Idle,
}

/// Tracks the two external signals and whether the static frame for the
/// current layout has been painted yet.
#[derive(Clone, Debug)]
pub struct MotionGate {
    visible: bool,
    reduced_motion: bool,
    static_painted: bool,
}

impl MotionGate {
    pub fn new(reduced_motion: bool) -> Self {
        Self {
            visible: true,
            reduced_motion,
            static_painted: false,
        }
    }

    pub fn mode(&self) -> MotionMode {
        if !self.visible {
            MotionMode::Suspended
        } else if self.reduced_motion {
            MotionMode::StaticFrame
        } else {
            MotionMode::Running
        }
    }

    /// Update the visibility signal. Returns true when there is now work
    /// pending, i.e. the caller should make sure a frame is scheduled.
    pub fn set_visible(&mut self, visible: bool) -> bool {
        self.visible = visible;
        self.has_pending_work()
    }

    /// Update the reduced-motion signal. A change re-arms the static frame
    /// so toggling the preference repaints. Returns true when there is now
    /// work pending.
    pub fn set_reduced_motion(&mut self, reduced: bool) -> bool {
        if reduced != self.reduced_motion {
            self.static_painted = false;
        }
        self.reduced_motion = reduced;
        self.has_pending_work()
    }

    /// Re-arm the static frame; called after a resize replaces the layout.
    pub fn invalidate(&mut self) {
        self.static_painted = false;
    }

    pub fn has_pending_work(&self) -> bool {
        match self.mode() {
            MotionMode::Running => true,
            MotionMode::StaticFrame => !self.static_painted,
            MotionMode::Suspended => false,
        }
    }

    /// Decide what this frame does, recording the static paint when one is
    /// handed out so it happens exactly once per layout.
    pub fn plan_frame(&mut self) -> FramePlan {
        match self.mode() {
            MotionMode::Running => FramePlan::Animate,
            MotionMode::StaticFrame if !self.static_painted => {
                self.static_painted = true;
                FramePlan::PaintStatic
            }
            _ => FramePlan::Idle,
        }
    }
}

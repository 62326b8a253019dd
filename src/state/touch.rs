// Touch gesture recognizer: one session per touch interaction.

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TouchPoint {
    pub x: f64,
    pub y: f64,
}

impl TouchPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(self, other: TouchPoint) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GesturePhase {
    #[default]
    Idle,
    Dragging,
    Pinching,
}

/// What a touch-move means for the image under the finger(s).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TouchIntent {
    None,
    /// 1:1 finger delta since the previous move.
    Pan { dx: f64, dy: f64 },
    /// Horizontal displacement from the touch start.
    SwipePreview { dx: f64 },
    /// Ratio of the current finger spread to the previous one.
    Pinch { factor: f64 },
}

/// How a touch session ended.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Release {
    /// End without a matching start.
    Cancelled,
    Tap,
    DoubleTap,
    PanEnd,
    PinchEnd,
    Swipe { dx: f64 },
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TouchState {
    pub phase: GesturePhase,
    pub start: TouchPoint,
    pub last: TouchPoint,
    pub moved: bool,
    pub pinch_distance: f64,
    /// Timestamp of the last tap release, for double-tap detection.
    pub last_tap_ms: Option<f64>,
}

impl TouchState {
    pub fn begin(&mut self, points: &[TouchPoint]) {
        match points {
            [] => {}
            [p] => {
                self.phase = GesturePhase::Dragging;
                self.start = *p;
                self.last = *p;
                self.moved = false;
            }
            [a, b, ..] => {
                self.phase = GesturePhase::Pinching;
                self.pinch_distance = a.distance(*b);
                self.moved = true;
            }
        }
    }

    pub fn track(&mut self, points: &[TouchPoint], zoomed: bool, jitter_px: f64) -> TouchIntent {
        match (self.phase, points) {
            (GesturePhase::Pinching, [a, b, ..]) => {
                let distance = a.distance(*b);
                let previous = self.pinch_distance;
                self.pinch_distance = distance;
                if previous > 0.0 && distance > 0.0 {
                    TouchIntent::Pinch {
                        factor: distance / previous,
                    }
                } else {
                    TouchIntent::None
                }
            }
            (GesturePhase::Dragging, [p, ..]) => {
                let prev = self.last;
                self.note_position(*p, jitter_px);
                if zoomed {
                    TouchIntent::Pan {
                        dx: p.x - prev.x,
                        dy: p.y - prev.y,
                    }
                } else if self.moved {
                    TouchIntent::SwipePreview {
                        dx: p.x - self.start.x,
                    }
                } else {
                    TouchIntent::None
                }
            }
            _ => TouchIntent::None,
        }
    }

    /// Resolve the session. Always leaves the recognizer idle.
    pub fn finish(
        &mut self,
        end: Option<TouchPoint>,
        at_ms: f64,
        zoomed: bool,
        jitter_px: f64,
        double_tap_ms: f64,
    ) -> Release {
        let release = match self.phase {
            GesturePhase::Idle => Release::Cancelled,
            GesturePhase::Pinching => {
                self.last_tap_ms = None;
                Release::PinchEnd
            }
            GesturePhase::Dragging => {
                if let Some(p) = end {
                    self.note_position(p, jitter_px);
                }
                if !self.moved {
                    match self.last_tap_ms {
                        Some(prev) if at_ms - prev <= double_tap_ms => {
                            self.last_tap_ms = None;
                            Release::DoubleTap
                        }
                        _ => {
                            self.last_tap_ms = Some(at_ms);
                            Release::Tap
                        }
                    }
                } else {
                    self.last_tap_ms = None;
                    if zoomed {
                        Release::PanEnd
                    } else {
                        Release::Swipe {
                            dx: self.last.x - self.start.x,
                        }
                    }
                }
            }
        };
        self.phase = GesturePhase::Idle;
        self.moved = false;
        self.pinch_distance = 0.0;
        release
    }

    /// Drop the current session but keep the tap history.
    pub fn cancel(&mut self) {
        self.phase = GesturePhase::Idle;
        self.moved = false;
        self.pinch_distance = 0.0;
    }

    fn note_position(&mut self, p: TouchPoint, jitter_px: f64) {
        if self.start.distance(p) > jitter_px {
            self.moved = true;
        }
        self.last = p;
    }
}

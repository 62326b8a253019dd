//! Swipe-driven "film roll": the neighbouring slide slides in from the edge
//! while the finger drags, then either settles into place or rolls back.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RollPhase {
    Dragging,
    Committing,
    Reverting,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilmRoll {
    /// +1 rolls towards the next slide (finger moving left), -1 towards the previous.
    pub direction: i8,
    pub ghost_index: usize,
    /// Finger displacement while dragging.
    pub offset: f64,
    pub phase: RollPhase,
}

/// Resolved position of one image during a roll.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RollFrame {
    pub translate_x: f64,
    pub opacity: f64,
    pub animated: bool,
}

impl FilmRoll {
    pub fn direction_for(dx: f64) -> i8 {
        if dx < 0.0 { 1 } else { -1 }
    }

    pub fn new(dx: f64, ghost_index: usize) -> Self {
        Self {
            direction: Self::direction_for(dx),
            ghost_index,
            offset: dx,
            phase: RollPhase::Dragging,
        }
    }

    fn edge(&self, width: f64) -> f64 {
        f64::from(self.direction) * width
    }

    pub fn primary_frame(&self, width: f64) -> RollFrame {
        match self.phase {
            RollPhase::Dragging => RollFrame {
                translate_x: self.offset,
                opacity: 1.0,
                animated: false,
            },
            RollPhase::Committing => RollFrame {
                translate_x: -self.edge(width),
                opacity: 1.0,
                animated: true,
            },
            RollPhase::Reverting => RollFrame {
                translate_x: 0.0,
                opacity: 1.0,
                animated: true,
            },
        }
    }

    pub fn ghost_frame(&self, width: f64) -> RollFrame {
        match self.phase {
            RollPhase::Dragging => RollFrame {
                translate_x: self.edge(width) + self.offset,
                opacity: 1.0,
                animated: false,
            },
            // already in place underneath the outgoing image
            RollPhase::Committing => RollFrame {
                translate_x: 0.0,
                opacity: 1.0,
                animated: false,
            },
            RollPhase::Reverting => RollFrame {
                translate_x: self.edge(width),
                opacity: 0.0,
                animated: true,
            },
        }
    }
}

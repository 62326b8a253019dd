// Single-slot scheduler for deferred visual steps.
//
// Scheduling replaces whatever was pending; the old token goes stale and is
// ignored if its timer still fires.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Deferred {
    /// Modal image has faded out; swap in the current slide.
    FadeSwap,
    /// Fade-in finished.
    FadeSettle,
    /// Film-roll settle animation finished.
    SwipeSettle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scheduled {
    pub token: u64,
    pub delay_ms: u32,
    pub task: Deferred,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Timeline {
    next_token: u64,
    pending: Option<Scheduled>,
}

impl Timeline {
    pub fn schedule(&mut self, delay_ms: u32, task: Deferred) -> u64 {
        self.next_token += 1;
        let token = self.next_token;
        self.pending = Some(Scheduled {
            token,
            delay_ms,
            task,
        });
        token
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn pending(&self) -> Option<Scheduled> {
        self.pending
    }

    pub fn is_pending(&self, task: Deferred) -> bool {
        matches!(self.pending, Some(s) if s.task == task)
    }

    /// Claim the pending task if `token` is still current.
    pub fn take(&mut self, token: u64) -> Option<Deferred> {
        match self.pending {
            Some(s) if s.token == token => {
                self.pending = None;
                Some(s.task)
            }
            _ => None,
        }
    }
}

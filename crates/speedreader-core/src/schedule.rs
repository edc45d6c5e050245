//! Single-shot, cancellable deadline that drives word advancement.

/// One armed deadline. `ticket` is unique per arm call on the owning timer.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Deadline {
    pub ticket: u64,
    pub due_ms: u64,
}

/// Holds at most one pending [`Deadline`]. Arming replaces whatever was
/// pending, so a superseded deadline can never fire.
#[derive(Clone, Debug, Default)]
pub struct AdvanceTimer {
    pending: Option<Deadline>,
    next_ticket: u64,
}

impl AdvanceTimer {
    pub const fn new() -> Self {
        Self {
            pending: None,
            next_ticket: 0,
        }
    }

    pub fn arm(&mut self, now_ms: u64, delay_ms: u64) -> Deadline {
        let deadline = Deadline {
            ticket: self.next_ticket,
            due_ms: now_ms.saturating_add(delay_ms),
        };
        self.next_ticket = self.next_ticket.wrapping_add(1);
        self.pending = Some(deadline);
        deadline
    }

    /// Drop the pending deadline. Returns whether one was pending.
    pub fn cancel(&mut self) -> bool {
        self.pending.take().is_some()
    }

    pub fn pending(&self) -> Option<Deadline> {
        self.pending
    }

    pub fn is_armed(&self) -> bool {
        self.pending.is_some()
    }

    /// Fire the pending deadline if it is due at `now_ms`. A fired deadline is
    /// consumed.
    pub fn take_due(&mut self, now_ms: u64) -> Option<Deadline> {
        match self.pending {
            Some(deadline) if now_ms >= deadline.due_ms => self.pending.take(),
            _ => None,
        }
    }

    /// Number of deadlines armed over the timer's lifetime.
    pub fn armed_count(&self) -> u64 {
        self.next_ticket
    }
}

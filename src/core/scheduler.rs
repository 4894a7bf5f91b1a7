//! A single cancellable repeating frame task.
//!
//! The host's per-frame callback pulls the pending [`TickToken`] with
//! [`FrameScheduler::take_due`] and hands it back to the playback tick. Every
//! cancellation bumps the generation, so a token captured before a reset or a
//! re-launch no longer validates and the tick it drives becomes a no-op.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TickToken {
    generation: u64,
}

impl TickToken {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[derive(Clone, Debug, Default)]
pub struct FrameScheduler {
    generation: u64,
    pending: Option<TickToken>,
}

impl FrameScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Schedules the next tick of the current chain, replacing any pending one.
    pub fn schedule(&mut self) -> TickToken {
        let token = TickToken {
            generation: self.generation,
        };
        self.pending = Some(token);
        token
    }

    /// Drops the pending tick and invalidates every token handed out so far.
    pub fn cancel(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.pending = None;
    }

    pub fn take_due(&mut self) -> Option<TickToken> {
        self.pending.take()
    }

    pub fn is_scheduled(&self) -> bool {
        self.pending.is_some()
    }

    pub fn is_current(&self, token: TickToken) -> bool {
        token.generation == self.generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_one_tick_is_pending() {
        let mut scheduler = FrameScheduler::new();
        scheduler.schedule();
        scheduler.schedule();

        assert!(scheduler.take_due().is_some());
        assert!(scheduler.take_due().is_none());
    }

    #[test]
    fn cancel_invalidates_outstanding_tokens() {
        let mut scheduler = FrameScheduler::new();
        let stale = scheduler.schedule();
        scheduler.cancel();

        assert!(!scheduler.is_scheduled());
        assert!(!scheduler.is_current(stale));

        let fresh = scheduler.schedule();
        assert!(scheduler.is_current(fresh));
        assert_eq!(fresh.generation(), stale.generation() + 1);
    }
}

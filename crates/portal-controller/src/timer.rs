//! Single-shot operation timer bookkeeping.
//!
//! The timer record lives inside the controller's state lock. The actual
//! countdown is a spawned task sleeping on `tokio::time`; this record decides
//! whether an expiring task is still current. Every rearm bumps the epoch, so
//! a completion task that went to sleep before a later command can never
//! apply its result: its epoch no longer matches.

use tokio::task::JoinHandle;

/// Epoch-guarded single-shot timer record.
///
/// Guarantees exactly one completion per arm: a completion task must present
/// the epoch it was armed with, and only the task from the most recent arm
/// passes the check.
#[derive(Debug, Default)]
pub(crate) struct OperationTimer {
    epoch: u64,
    pending: bool,
    task: Option<JoinHandle<()>>,
}

impl OperationTimer {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Cancel any pending firing.
    ///
    /// Bumps the epoch so an already-sleeping completion task cannot apply,
    /// and aborts its task as best-effort cleanup. Returns whether a firing
    /// was pending.
    pub(crate) fn cancel(&mut self) -> bool {
        self.epoch += 1;
        if let Some(task) = self.task.take() {
            task.abort();
        }
        std::mem::take(&mut self.pending)
    }

    /// (Re)start the timer, cancelling any pending prior firing.
    ///
    /// Returns the epoch the new completion task must present to
    /// [`try_complete`](Self::try_complete).
    pub(crate) fn rearm(&mut self) -> u64 {
        self.cancel();
        self.pending = true;
        self.epoch
    }

    /// Attach the spawned completion task for the current arm.
    pub(crate) fn attach(&mut self, task: JoinHandle<()>) {
        self.task = Some(task);
    }

    /// Attempt to complete the arm identified by `epoch`.
    ///
    /// Returns `true` exactly once per arm: for the task holding the current
    /// epoch while a firing is pending. Stale tasks (superseded by a later
    /// rearm or cancel) get `false` and must not touch controller state.
    pub(crate) fn try_complete(&mut self, epoch: u64) -> bool {
        if self.pending && self.epoch == epoch {
            self.pending = false;
            self.task = None;
            true
        } else {
            false
        }
    }

    /// Whether a firing is pending.
    pub(crate) fn is_pending(&self) -> bool {
        self.pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_timer_not_pending() {
        let timer = OperationTimer::new();
        assert!(!timer.is_pending());
    }

    #[test]
    fn test_rearm_marks_pending() {
        let mut timer = OperationTimer::new();
        let epoch = timer.rearm();
        assert!(timer.is_pending());
        assert!(epoch > 0);
    }

    #[test]
    fn test_complete_exactly_once_per_arm() {
        let mut timer = OperationTimer::new();
        let epoch = timer.rearm();

        assert!(timer.try_complete(epoch));
        assert!(!timer.is_pending());

        // Second attempt with the same epoch must not pass
        assert!(!timer.try_complete(epoch));
    }

    #[test]
    fn test_rearm_invalidates_previous_epoch() {
        let mut timer = OperationTimer::new();
        let first = timer.rearm();
        let second = timer.rearm();

        assert_ne!(first, second);
        assert!(!timer.try_complete(first));
        assert!(timer.is_pending());
        assert!(timer.try_complete(second));
    }

    #[test]
    fn test_cancel_clears_pending() {
        let mut timer = OperationTimer::new();
        let epoch = timer.rearm();

        assert!(timer.cancel());
        assert!(!timer.is_pending());
        assert!(!timer.try_complete(epoch));

        // Cancelling an idle timer reports nothing pending
        assert!(!timer.cancel());
    }

    #[tokio::test]
    async fn test_cancel_aborts_attached_task() {
        let mut timer = OperationTimer::new();
        let _epoch = timer.rearm();

        let task = tokio::spawn(async {
            tokio::time::sleep(std::time::Duration::from_secs(3600)).await;
        });
        timer.attach(task);

        timer.cancel();
        // The task was taken and aborted; a subsequent rearm starts clean
        let epoch = timer.rearm();
        assert!(timer.try_complete(epoch));
    }
}

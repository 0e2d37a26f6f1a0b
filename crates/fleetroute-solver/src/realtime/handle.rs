//! Handoff queue between external callers and the optimizer loop.

use std::fmt::Debug;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender, TryRecvError};
use std::sync::Arc;
use std::time::Duration;

use super::fact_change::BoxedFactChange;
use super::FactChange;

/// Result of a fact-change submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitResult {
    /// Change was queued and will be applied in submission order.
    Queued,
    /// The optimizer loop is not running; nothing was queued.
    OptimizerNotRunning,
    /// The receiving side of the queue is gone.
    Disconnected,
}

/// Handle for submitting fact changes to a running optimizer.
///
/// Submission never blocks. Changes queue FIFO and are applied exactly once
/// at the loop's next serialization point; no guarantee is made about *when*
/// relative to the ongoing search, only that earlier submissions apply
/// before later ones.
pub struct SolverHandle {
    change_tx: Sender<BoxedFactChange>,
    solving: Arc<AtomicBool>,
    terminate_early: Arc<AtomicBool>,
}

impl SolverHandle {
    /// Creates a handle and its corresponding receiver.
    ///
    /// The receiver belongs to the optimizer loop; the handle may be cloned
    /// freely to any number of submitters.
    pub fn new() -> (Self, FactChangeReceiver) {
        let (tx, rx) = mpsc::channel();
        let solving = Arc::new(AtomicBool::new(false));
        let terminate_early = Arc::new(AtomicBool::new(false));

        let handle = Self {
            change_tx: tx,
            solving: Arc::clone(&solving),
            terminate_early: Arc::clone(&terminate_early),
        };

        let receiver = FactChangeReceiver {
            change_rx: rx,
            solving,
            terminate_early,
        };

        (handle, receiver)
    }

    /// Submits a fact change to the optimizer.
    pub fn submit<C: FactChange + 'static>(&self, change: C) -> SubmitResult {
        self.submit_boxed(Box::new(change))
    }

    /// Submits an already boxed fact change to the optimizer.
    pub fn submit_boxed(&self, change: BoxedFactChange) -> SubmitResult {
        if !self.solving.load(Ordering::SeqCst) {
            return SubmitResult::OptimizerNotRunning;
        }

        match self.change_tx.send(change) {
            Ok(()) => SubmitResult::Queued,
            Err(_) => SubmitResult::Disconnected,
        }
    }

    /// Returns true if the optimizer loop is currently running.
    pub fn is_solving(&self) -> bool {
        self.solving.load(Ordering::SeqCst)
    }

    /// Requests the loop to stop at its next serialization point.
    pub fn terminate_early(&self) {
        self.terminate_early.store(true, Ordering::SeqCst);
    }

    /// Sets the solving flag (used by the loop itself).
    pub fn set_solving(&self, solving: bool) {
        self.solving.store(solving, Ordering::SeqCst);
    }
}

impl Clone for SolverHandle {
    fn clone(&self) -> Self {
        Self {
            change_tx: self.change_tx.clone(),
            solving: Arc::clone(&self.solving),
            terminate_early: Arc::clone(&self.terminate_early),
        }
    }
}

impl Debug for SolverHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SolverHandle")
            .field("solving", &self.solving.load(Ordering::SeqCst))
            .field(
                "terminate_early",
                &self.terminate_early.load(Ordering::SeqCst),
            )
            .finish()
    }
}

/// Receiver side of the queue, owned by the optimizer loop.
pub struct FactChangeReceiver {
    change_rx: Receiver<BoxedFactChange>,
    solving: Arc<AtomicBool>,
    terminate_early: Arc<AtomicBool>,
}

impl FactChangeReceiver {
    /// Receives a pending fact change without blocking.
    pub fn try_recv(&self) -> Option<BoxedFactChange> {
        match self.change_rx.try_recv() {
            Ok(change) => Some(change),
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => None,
        }
    }

    /// Waits up to `timeout` for the next fact change.
    pub fn recv_timeout(&self, timeout: Duration) -> Option<BoxedFactChange> {
        match self.change_rx.recv_timeout(timeout) {
            Ok(change) => Some(change),
            Err(RecvTimeoutError::Timeout) | Err(RecvTimeoutError::Disconnected) => None,
        }
    }

    /// Drains every queued fact change without blocking.
    pub fn drain_pending(&self) -> Vec<BoxedFactChange> {
        let mut changes = Vec::new();
        while let Some(change) = self.try_recv() {
            changes.push(change);
        }
        changes
    }

    /// Returns true if early termination has been requested.
    pub fn is_terminate_early_requested(&self) -> bool {
        self.terminate_early.load(Ordering::SeqCst)
    }

    /// Sets the solving flag.
    pub fn set_solving(&self, solving: bool) {
        self.solving.store(solving, Ordering::SeqCst);
    }
}

impl Debug for FactChangeReceiver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FactChangeReceiver")
            .field("solving", &self.solving.load(Ordering::SeqCst))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use fleetroute_core::Result;
    use fleetroute_director::PlanDirector;

    use super::*;

    #[derive(Debug)]
    struct NoopChange;

    impl FactChange for NoopChange {
        fn apply(&self, _director: &mut dyn PlanDirector) -> Result<()> {
            Ok(())
        }
    }

    #[test]
    fn submit_while_solving_queues_the_change() {
        let (handle, rx) = SolverHandle::new();
        handle.set_solving(true);

        assert_eq!(handle.submit(NoopChange), SubmitResult::Queued);
        assert_eq!(rx.drain_pending().len(), 1);
    }

    #[test]
    fn submit_while_stopped_is_rejected() {
        let (handle, _rx) = SolverHandle::new();

        assert_eq!(handle.submit(NoopChange), SubmitResult::OptimizerNotRunning);
    }

    #[test]
    fn changes_drain_in_submission_order() {
        let (handle, rx) = SolverHandle::new();
        handle.set_solving(true);

        handle.submit(NoopChange);
        handle.submit(NoopChange);
        handle.submit(NoopChange);

        assert_eq!(rx.drain_pending().len(), 3);
        assert!(rx.try_recv().is_none());
    }

    #[test]
    fn terminate_early_is_visible_to_the_receiver() {
        let (handle, rx) = SolverHandle::new();

        assert!(!rx.is_terminate_early_requested());
        handle.terminate_early();
        assert!(rx.is_terminate_early_requested());
    }

    #[test]
    fn cloned_handles_share_the_queue_and_flags() {
        let (handle, rx) = SolverHandle::new();
        let clone = handle.clone();

        handle.set_solving(true);
        assert!(clone.is_solving());

        clone.submit(NoopChange);
        assert_eq!(rx.drain_pending().len(), 1);
    }
}

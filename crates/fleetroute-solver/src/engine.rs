//! Optimizer adapter and the background reference loop.

use std::sync::Arc;
use std::thread::{self, JoinHandle};

use parking_lot::Mutex;
use tracing::{debug, error, info};

use fleetroute_core::{FleetRouteError, Result, RoutingPlan};
use fleetroute_director::{PlanDirector, ShadowDirector};

use crate::config::EngineConfig;
use crate::publish::{plan_to_snapshot, PublisherSupport, RouteSnapshot};
use crate::realtime::{BoxedFactChange, FactChangeReceiver, SolverHandle, SubmitResult};

/// Narrow capability interface the core requires from an optimization
/// engine.
///
/// The engine's search behavior (move selection, acceptance, termination) is
/// opaque; all the core needs is a way to mutate the working plan inside the
/// engine's own execution context and a way to read it at a quiesced moment.
pub trait Optimizer {
    /// Queues a mutation for exactly-once application inside the engine's
    /// serialized execution context.
    fn submit_fact_change(&self, change: BoxedFactChange) -> SubmitResult;

    /// An immutable copy of the working plan taken at a serialization point.
    fn read_working_plan(&self) -> RoutingPlan;
}

/// Reference engine: a worker thread that owns the working plan and applies
/// queued fact changes at its serialization points.
///
/// The worker serializes every plan access behind one lock: fact changes
/// apply under it and [`snapshot`](Self::snapshot) /
/// [`read_working_plan`](Optimizer::read_working_plan) read under it, so
/// nobody ever observes the plan mid-mutation. Search phases are out of
/// scope here; the loop's job is keeping the plan consistent while changes
/// stream in and snapshots stream out.
pub struct BackgroundOptimizer {
    handle: SolverHandle,
    director: Arc<Mutex<ShadowDirector>>,
    worker: Option<JoinHandle<()>>,
}

impl BackgroundOptimizer {
    /// Starts the worker loop over `plan` with no publishers attached.
    pub fn start(plan: RoutingPlan, config: EngineConfig) -> Self {
        Self::start_with_publishers(plan, config, PublisherSupport::new())
    }

    /// Starts the worker loop over `plan`, publishing snapshots to
    /// `publishers` after each applied change batch (when configured).
    pub fn start_with_publishers(
        plan: RoutingPlan,
        config: EngineConfig,
        publishers: PublisherSupport,
    ) -> Self {
        let (handle, receiver) = SolverHandle::new();
        let director = Arc::new(Mutex::new(ShadowDirector::new(plan)));
        handle.set_solving(true);

        let worker_director = Arc::clone(&director);
        let worker = thread::spawn(move || run_loop(receiver, worker_director, config, publishers));

        Self {
            handle,
            director,
            worker: Some(worker),
        }
    }

    /// A clonable handle for submitting fact changes.
    pub fn handle(&self) -> SolverHandle {
        self.handle.clone()
    }

    /// Extracts a snapshot of the current plan at a serialization point.
    pub fn snapshot(&self) -> Result<RouteSnapshot> {
        let director = self.director.lock();
        plan_to_snapshot(director.working_plan())
    }

    /// Stops the loop at its next serialization point and joins the worker.
    pub fn stop(mut self) {
        self.shutdown();
    }

    fn shutdown(&mut self) {
        self.handle.terminate_early();
        self.handle.set_solving(false);
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }
}

impl Drop for BackgroundOptimizer {
    fn drop(&mut self) {
        self.shutdown();
    }
}

impl Optimizer for BackgroundOptimizer {
    fn submit_fact_change(&self, change: BoxedFactChange) -> SubmitResult {
        self.handle.submit_boxed(change)
    }

    fn read_working_plan(&self) -> RoutingPlan {
        self.director.lock().working_plan().clone()
    }
}

fn run_loop(
    receiver: FactChangeReceiver,
    director: Arc<Mutex<ShadowDirector>>,
    config: EngineConfig,
    publishers: PublisherSupport,
) {
    info!(event = "optimizer_start", ?config);
    let step_delay = config.step_delay();

    loop {
        if receiver.is_terminate_early_requested() {
            break;
        }
        let Some(first) = receiver.recv_timeout(step_delay) else {
            continue;
        };
        let mut batch = vec![first];
        batch.extend(receiver.drain_pending());

        let applied = {
            let mut director = director.lock();
            apply_batch(&mut *director, batch)
        };

        if applied > 0 {
            debug!(applied, "applied fact change batch");
            if config.publish_after_change {
                let snapshot = {
                    let director = director.lock();
                    plan_to_snapshot(director.working_plan())
                };
                match snapshot {
                    Ok(snapshot) => publishers.publish(&snapshot),
                    Err(err) => error!(error = %err, "snapshot extraction failed"),
                }
            }
        }
    }

    receiver.set_solving(false);
    info!(event = "optimizer_stop");
}

fn apply_batch(director: &mut dyn PlanDirector, batch: Vec<BoxedFactChange>) -> usize {
    let mut applied = 0;
    for change in batch {
        match change.apply(director) {
            Ok(()) => applied += 1,
            Err(err @ FleetRouteError::UnknownFact { .. }) => {
                // Failed during resolution: the plan is untouched.
                error!(error = %err, ?change, "fact change aborted");
            }
            Err(err) => {
                // Failed mid-apply: there is no rollback for structural
                // edits, so the plan must be treated as corrupted.
                error!(error = %err, ?change, "fact change failed; working plan may be corrupted");
            }
        }
    }
    applied
}

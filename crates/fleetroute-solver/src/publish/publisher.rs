//! Publishing extracted snapshots to external consumers.

use std::fmt::Debug;
use std::sync::Arc;

use tracing::info;

use super::RouteSnapshot;

/// External collaborator that receives route snapshots.
///
/// Implementations forward the snapshot untouched to whatever transport the
/// application uses; the engine never looks at it again after handoff.
pub trait SnapshotPublisher: Send + Sync + Debug {
    fn publish(&self, snapshot: &RouteSnapshot);
}

/// Broadcasts snapshots to registered publishers in registration order.
#[derive(Default)]
pub struct PublisherSupport {
    publishers: Vec<Arc<dyn SnapshotPublisher>>,
}

impl PublisherSupport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_publisher(&mut self, publisher: Arc<dyn SnapshotPublisher>) {
        self.publishers.push(publisher);
    }

    pub fn publish(&self, snapshot: &RouteSnapshot) {
        for publisher in &self.publishers {
            publisher.publish(snapshot);
        }
    }

    pub fn publisher_count(&self) -> usize {
        self.publishers.len()
    }
}

impl Debug for PublisherSupport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PublisherSupport")
            .field("publishers", &self.publishers.len())
            .finish()
    }
}

/// Publisher that logs snapshot summaries via `tracing`.
#[derive(Debug, Clone, Default)]
pub struct LoggingPublisher;

impl SnapshotPublisher for LoggingPublisher {
    fn publish(&self, snapshot: &RouteSnapshot) {
        info!(
            event = "route_snapshot",
            vehicles = snapshot.vehicle_ids.len(),
            visits = snapshot.visit_ids.len(),
            routes = snapshot.routes.len(),
            distance = %snapshot.distance,
        );
    }
}

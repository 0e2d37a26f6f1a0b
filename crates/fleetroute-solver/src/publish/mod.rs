//! Snapshot extraction and publishing.
//!
//! Extraction turns the pointer-chain representation into an explicit,
//! validated description of routes; publishing hands that description to
//! external consumers untouched.

mod extract;
mod publisher;
mod snapshot;

pub use extract::plan_to_snapshot;
pub use publisher::{LoggingPublisher, PublisherSupport, SnapshotPublisher};
pub use snapshot::{RouteSnapshot, ShallowRoute};

//! FleetRoute Solver - live mutation and result extraction
//!
//! This crate ties the domain model to a continuously running optimizer:
//! - [`realtime`] - the fact-change protocol and its handoff queue
//! - [`engine`] - the optimizer adapter and its background reference loop
//! - [`publish`] - snapshot extraction and publishing
//! - [`config`] - engine configuration

pub mod config;
pub mod engine;
pub mod publish;
pub mod realtime;

pub use config::EngineConfig;
pub use engine::{BackgroundOptimizer, Optimizer};
pub use publish::{plan_to_snapshot, RouteSnapshot, ShallowRoute, SnapshotPublisher};
pub use realtime::{BoxedFactChange, FactChange, FactChangeRequest, SolverHandle, SubmitResult};

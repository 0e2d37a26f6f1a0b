//! Real-time plan mutation.
//!
//! Fact changes are submitted from any thread through a [`SolverHandle`] and
//! applied by the optimizer loop at its next serialization point, in
//! submission order, exactly once each. A change that fails to resolve its
//! target aborts alone and the loop keeps running for later changes; a
//! change that fails after resolving has no rollback, so the working plan
//! must be treated as corrupted from that point on.

pub mod changes;
mod fact_change;
mod handle;

pub use fact_change::{BoxedFactChange, FactChange, FactChangeRequest};
pub use handle::{FactChangeReceiver, SolverHandle, SubmitResult};

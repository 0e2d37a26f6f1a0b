//! Mutation-context layer for the working plan.
//!
//! The director owns the working plan during solving and is the single
//! gateway for structural edits: every genuine-variable write and every
//! fact-list edit is surrounded by before/after notifications, so shadow
//! pointers and the cached score learn about the mutation instead of
//! silently drifting out of sync with it.

mod director;
mod listener;
mod shadow;

pub use director::{FactKind, PlanDirector};
pub use listener::VariableListener;
pub use shadow::{NextVisitListener, ShadowDirector};

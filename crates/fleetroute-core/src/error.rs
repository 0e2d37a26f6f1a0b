//! Error types for FleetRoute

use thiserror::Error;

/// Main error type for FleetRoute operations.
///
/// Every variant indicates a structural-consistency violation, not a user
/// input error. All of them are fail-fast: none is retried automatically and
/// none is silently repaired, since repairing a corrupt chain would mask the
/// bug that corrupted it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FleetRouteError {
    /// A fact change referenced an entity with no live working copy.
    #[error("no working copy of {kind} {id} in the working plan")]
    UnknownFact {
        /// Entity kind, e.g. `"vehicle"` or `"visit"`.
        kind: &'static str,
        /// Id carried by the fact-change request.
        id: i64,
    },

    /// A chain walk exceeded the total visit count without terminating.
    #[error(
        "broken chain: walk from vehicle {vehicle_id} exceeded {limit} visits without reaching the chain end"
    )]
    BrokenChain {
        /// Vehicle anchoring the walked chain.
        vehicle_id: i64,
        /// The visit-count bound the walk ran past.
        limit: usize,
    },

    /// A chain referenced a visit that is absent from the working plan.
    #[error("inconsistent chain: visit {visit_id} is not part of the working plan")]
    InconsistentChain {
        /// The offending visit id.
        visit_id: i64,
    },

    /// The depot/vehicle pairing invariant is violated.
    ///
    /// Raised in both directions: a depot exists but the vehicle references
    /// none, or the vehicle references a depot the plan does not have.
    #[error(
        "vehicle {vehicle_id} depot assignment ({vehicle_depot:?}) does not match the plan depot ({plan_depot:?})"
    )]
    MissingDepotAssignment {
        /// The offending vehicle id.
        vehicle_id: i64,
        /// Depot id the vehicle references, if any.
        vehicle_depot: Option<i64>,
        /// Depot id the plan holds, if any.
        plan_depot: Option<i64>,
    },
}

/// Result type alias for FleetRoute operations
pub type Result<T> = std::result::Result<T, FleetRouteError>;

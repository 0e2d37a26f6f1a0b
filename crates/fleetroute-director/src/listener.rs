//! Variable listener infrastructure for shadow updates.

use fleetroute_core::RoutingPlan;

/// A listener notified when a visit's genuine variable changes.
///
/// The before call sees the plan prior to the edit and may capture old
/// state; the after call applies the resulting shadow updates. Listeners
/// never modify genuine variables, only shadows.
pub trait VariableListener: Send {
    /// Called before the genuine variable changes on `visit_id`.
    fn before_variable_changed(&mut self, plan: &RoutingPlan, visit_id: i64);

    /// Called after the genuine variable changed on `visit_id`.
    fn after_variable_changed(&mut self, plan: &mut RoutingPlan, visit_id: i64);

    /// Rebuilds this listener's shadow state from scratch.
    ///
    /// Called by the director's re-trigger; the rebuild must be
    /// deterministic so a missed incremental notification cannot leave
    /// permanent drift behind.
    fn reset_working_plan(&mut self, plan: &mut RoutingPlan);
}

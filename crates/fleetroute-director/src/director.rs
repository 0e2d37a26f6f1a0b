// Plan director trait definition.

use fleetroute_core::RoutingPlan;

/// Kinds of problem facts a director can be notified about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FactKind {
    Vehicle,
    Visit,
    Depot,
}

// The director manages the working plan and its derived state.
//
// It is responsible for:
// - Holding the working plan the optimizer loop mutates
// - Receiving before/after notifications around every structural edit
// - Keeping shadow variables consistent with the genuine variables
// - Keeping the incremental score bookkeeping consistent
pub trait PlanDirector: Send {
    /// Returns a reference to the working plan.
    fn working_plan(&self) -> &RoutingPlan;

    /// Returns a mutable reference to the working plan.
    ///
    /// Callers must surround every edit made through this reference with the
    /// matching notification pair below.
    fn working_plan_mut(&mut self) -> &mut RoutingPlan;

    /// Called before the genuine variable `variable` changes on a visit.
    fn before_variable_changed(&mut self, visit_id: i64, variable: &str);

    /// Called after the genuine variable `variable` changed on a visit.
    fn after_variable_changed(&mut self, visit_id: i64, variable: &str);

    /// Called before a problem fact is added to the plan.
    fn before_fact_added(&mut self, kind: FactKind, id: i64);

    /// Called after a problem fact was added to the plan.
    fn after_fact_added(&mut self, kind: FactKind, id: i64);

    /// Called before a problem fact is removed from the plan.
    fn before_fact_removed(&mut self, kind: FactKind, id: i64);

    /// Called after a problem fact was removed from the plan.
    fn after_fact_removed(&mut self, kind: FactKind, id: i64);

    /// Called before a property of an existing fact changes.
    fn before_fact_changed(&mut self, kind: FactKind, id: i64);

    /// Called after a property of an existing fact changed.
    fn after_fact_changed(&mut self, kind: FactKind, id: i64);

    /// Recomputes all shadow variables and derived caches.
    ///
    /// Every fact change ends with this call, after its structural edits
    /// have been applied and before the change counts as complete.
    fn trigger_variable_listeners(&mut self);
}

//! Shadow-pointer maintenance and the concrete director.

use std::collections::HashMap;

use fleetroute_core::domain::{rebuild_next_visit_shadows, route_travel_time_millis};
use fleetroute_core::{Result, RoutingPlan, Standstill};

use crate::director::{FactKind, PlanDirector};
use crate::listener::VariableListener;

/// Keeps every `next_visit` shadow the inverse of `previous_standstill`.
///
/// On each notified edit the old predecessor's pointer is cleared (if it
/// still points at the edited visit) and the new predecessor's pointer is
/// set. The full-rebuild path delegates to
/// [`rebuild_next_visit_shadows`].
#[derive(Debug, Default)]
pub struct NextVisitListener {
    // Old predecessors captured by before notifications, keyed by visit.
    pending: HashMap<i64, Option<Standstill>>,
}

impl NextVisitListener {
    pub fn new() -> Self {
        Self::default()
    }
}

fn next_visit_of(plan: &RoutingPlan, standstill: Standstill) -> Option<i64> {
    match standstill {
        Standstill::Vehicle(id) => plan.vehicle(id).and_then(|v| v.next_visit()),
        Standstill::Visit(id) => plan.visit(id).and_then(|v| v.next_visit()),
    }
}

fn set_next_visit(plan: &mut RoutingPlan, standstill: Standstill, next: Option<i64>) {
    match standstill {
        Standstill::Vehicle(id) => {
            if let Some(vehicle) = plan.vehicle_mut(id) {
                vehicle.set_next_visit(next);
            }
        }
        Standstill::Visit(id) => {
            if let Some(visit) = plan.visit_mut(id) {
                visit.set_next_visit(next);
            }
        }
    }
}

impl VariableListener for NextVisitListener {
    fn before_variable_changed(&mut self, plan: &RoutingPlan, visit_id: i64) {
        let old = plan.visit(visit_id).and_then(|v| v.previous_standstill());
        self.pending.insert(visit_id, old);
    }

    fn after_variable_changed(&mut self, plan: &mut RoutingPlan, visit_id: i64) {
        let old = self.pending.remove(&visit_id).flatten();
        let new = plan.visit(visit_id).and_then(|v| v.previous_standstill());
        if old == new {
            return;
        }
        if let Some(standstill) = old {
            // Another edit may already have re-pointed the old predecessor.
            if next_visit_of(plan, standstill) == Some(visit_id) {
                set_next_visit(plan, standstill, None);
            }
        }
        if let Some(standstill) = new {
            set_next_visit(plan, standstill, Some(visit_id));
        }
    }

    fn reset_working_plan(&mut self, plan: &mut RoutingPlan) {
        self.pending.clear();
        rebuild_next_visit_shadows(plan);
    }
}

/// Concrete director owning the working plan.
///
/// Maintains the `next_visit` shadows through its listeners and caches the
/// plan score: the negated total travel time across all routes, so longer
/// routes score worse. Any before notification invalidates the cache;
/// [`trigger_variable_listeners`](PlanDirector::trigger_variable_listeners)
/// rebuilds the shadows and the cache deterministically.
pub struct ShadowDirector {
    plan: RoutingPlan,
    listeners: Vec<Box<dyn VariableListener>>,
    cached_score_millis: Option<i64>,
}

impl ShadowDirector {
    /// Creates a director over `plan` with the chain listener installed and
    /// all shadow state freshly computed.
    pub fn new(plan: RoutingPlan) -> Self {
        let mut director = Self {
            plan,
            listeners: vec![Box::new(NextVisitListener::new())],
            cached_score_millis: None,
        };
        director.trigger_variable_listeners();
        director
    }

    /// The current score: negated total travel time in milliseconds.
    ///
    /// Served from the cache when no notification arrived since the last
    /// computation. Fails if some chain is corrupt.
    pub fn calculate_score(&mut self) -> Result<i64> {
        if let Some(score) = self.cached_score_millis {
            return Ok(score);
        }
        let score = Self::score_of(&self.plan)?;
        self.cached_score_millis = Some(score);
        Ok(score)
    }

    fn score_of(plan: &RoutingPlan) -> Result<i64> {
        let mut total = 0i64;
        for vehicle in plan.vehicles() {
            total += route_travel_time_millis(plan, vehicle)?;
        }
        Ok(-total)
    }

    fn invalidate_score(&mut self) {
        self.cached_score_millis = None;
    }
}

impl std::fmt::Debug for ShadowDirector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShadowDirector")
            .field("vehicles", &self.plan.vehicle_count())
            .field("visits", &self.plan.visit_count())
            .field("cached_score_millis", &self.cached_score_millis)
            .finish()
    }
}

impl PlanDirector for ShadowDirector {
    fn working_plan(&self) -> &RoutingPlan {
        &self.plan
    }

    fn working_plan_mut(&mut self) -> &mut RoutingPlan {
        &mut self.plan
    }

    fn before_variable_changed(&mut self, visit_id: i64, _variable: &str) {
        self.invalidate_score();
        for listener in &mut self.listeners {
            listener.before_variable_changed(&self.plan, visit_id);
        }
    }

    fn after_variable_changed(&mut self, visit_id: i64, _variable: &str) {
        self.invalidate_score();
        for listener in &mut self.listeners {
            listener.after_variable_changed(&mut self.plan, visit_id);
        }
    }

    fn before_fact_added(&mut self, _kind: FactKind, _id: i64) {
        self.invalidate_score();
    }

    fn after_fact_added(&mut self, _kind: FactKind, _id: i64) {}

    fn before_fact_removed(&mut self, _kind: FactKind, _id: i64) {
        self.invalidate_score();
    }

    fn after_fact_removed(&mut self, _kind: FactKind, _id: i64) {}

    fn before_fact_changed(&mut self, _kind: FactKind, _id: i64) {
        self.invalidate_score();
    }

    fn after_fact_changed(&mut self, _kind: FactKind, _id: i64) {}

    fn trigger_variable_listeners(&mut self) {
        for listener in &mut self.listeners {
            listener.reset_working_plan(&mut self.plan);
        }
        self.cached_score_millis = Self::score_of(&self.plan).ok();
    }
}

#[cfg(test)]
#[path = "shadow_tests.rs"]
mod tests;

//! Removes a visit, splicing its route back together.

use tracing::debug;

use fleetroute_core::{FleetRouteError, Result};
use fleetroute_director::{FactKind, PlanDirector};

use crate::realtime::FactChange;

/// Removes a visit from the working plan.
///
/// If the visit sits mid-chain, its successor is spliced onto its
/// predecessor before the removal, so no visit ends up pointing at an entity
/// that left the plan.
#[derive(Debug)]
pub struct RemoveVisit {
    visit_id: i64,
}

impl RemoveVisit {
    pub fn new(visit_id: i64) -> Self {
        Self { visit_id }
    }
}

impl FactChange for RemoveVisit {
    fn apply(&self, director: &mut dyn PlanDirector) -> Result<()> {
        // Resolve the live working copy of the visit.
        let (previous, next) = director
            .working_plan()
            .visit(self.visit_id)
            .map(|v| (v.previous_standstill(), v.next_visit()))
            .ok_or(FleetRouteError::UnknownFact {
                kind: "visit",
                id: self.visit_id,
            })?;

        // Splice the successor onto the removed visit's predecessor.
        if let Some(next_id) = next {
            director.before_variable_changed(next_id, "previous_standstill");
            director
                .working_plan_mut()
                .visit_mut(next_id)
                .ok_or(FleetRouteError::InconsistentChain { visit_id: next_id })?
                .set_previous_standstill(previous);
            director.after_variable_changed(next_id, "previous_standstill");
        }

        // Detach the visit itself before it leaves the plan.
        if previous.is_some() {
            director.before_variable_changed(self.visit_id, "previous_standstill");
            if let Some(visit) = director.working_plan_mut().visit_mut(self.visit_id) {
                visit.set_previous_standstill(None);
            }
            director.after_variable_changed(self.visit_id, "previous_standstill");
        }

        // Swap in a fresh copy of the visit list without the visit.
        director.before_fact_removed(FactKind::Visit, self.visit_id);
        let plan = director.working_plan_mut();
        let mut visits = plan.visits().to_vec();
        visits.retain(|v| v.id() != self.visit_id);
        plan.set_visit_list(visits);
        director.after_fact_removed(FactKind::Visit, self.visit_id);

        director.trigger_variable_listeners();
        debug!(visit_id = self.visit_id, "removed visit");
        Ok(())
    }
}

//! Adds a visit to the working plan.

use tracing::debug;

use fleetroute_core::domain::factory;
use fleetroute_core::{PlanningLocation, Result};
use fleetroute_director::{FactKind, PlanDirector};

use crate::realtime::FactChange;

/// Adds an unassigned visit at the given location.
///
/// The visit takes its id from the location. Routing it onto a vehicle is
/// the optimizer's job, not the fact change's.
#[derive(Debug)]
pub struct AddVisit {
    location: PlanningLocation,
    demand: i32,
}

impl AddVisit {
    pub fn new(location: PlanningLocation, demand: i32) -> Self {
        Self { location, demand }
    }
}

impl FactChange for AddVisit {
    fn apply(&self, director: &mut dyn PlanDirector) -> Result<()> {
        let visit = factory::visit_with_demand(self.location.clone(), self.demand);
        let visit_id = visit.id();

        director.before_fact_added(FactKind::Visit, visit_id);
        let plan = director.working_plan_mut();
        let mut visits = plan.visits().to_vec();
        visits.push(visit);
        plan.set_visit_list(visits);
        director.after_fact_added(FactKind::Visit, visit_id);

        director.trigger_variable_listeners();
        debug!(visit_id, "added visit");
        Ok(())
    }
}

//! Chain walking and shadow-pointer recompute.

use crate::error::{FleetRouteError, Result};

use super::{PlanningVehicle, PlanningVisit, RoutingPlan, Standstill};

/// Lazy iterator over the visits of one vehicle's chain, in route order.
///
/// Follows `next_visit` starting at the vehicle. The walk is bounded by the
/// plan's total visit count: a longer walk can only mean the chain loops, so
/// the iterator yields [`FleetRouteError::BrokenChain`] instead of spinning.
/// A `next_visit` id absent from the plan's visit list yields
/// [`FleetRouteError::InconsistentChain`]. After either error the iterator
/// is exhausted.
///
/// The walk is restartable: creating a new `ChainWalk` from the same plan
/// repeats the same sequence.
#[derive(Debug)]
pub struct ChainWalk<'a> {
    plan: &'a RoutingPlan,
    vehicle_id: i64,
    next: Option<i64>,
    steps: usize,
}

impl<'a> ChainWalk<'a> {
    pub(super) fn new(plan: &'a RoutingPlan, vehicle: &PlanningVehicle) -> Self {
        Self {
            plan,
            vehicle_id: vehicle.id(),
            next: vehicle.next_visit(),
            steps: 0,
        }
    }
}

impl<'a> Iterator for ChainWalk<'a> {
    type Item = Result<&'a PlanningVisit>;

    fn next(&mut self) -> Option<Self::Item> {
        let visit_id = self.next?;
        if self.steps >= self.plan.visit_count() {
            self.next = None;
            return Some(Err(FleetRouteError::BrokenChain {
                vehicle_id: self.vehicle_id,
                limit: self.plan.visit_count(),
            }));
        }
        match self.plan.visit(visit_id) {
            Some(visit) => {
                self.steps += 1;
                self.next = visit.next_visit();
                Some(Ok(visit))
            }
            None => {
                self.next = None;
                Some(Err(FleetRouteError::InconsistentChain { visit_id }))
            }
        }
    }
}

/// Recomputes every `next_visit` shadow from the genuine
/// `previous_standstill` links.
///
/// All shadows are cleared first, so stale pointers cannot survive a missed
/// incremental notification. Links to standstills that no longer exist are
/// dropped silently here; extraction is where dangling references fail.
pub fn rebuild_next_visit_shadows(plan: &mut RoutingPlan) {
    let links: Vec<(i64, Standstill)> = plan
        .visits()
        .iter()
        .filter_map(|visit| visit.previous_standstill().map(|s| (visit.id(), s)))
        .collect();

    for vehicle in plan.vehicles_mut() {
        vehicle.set_next_visit(None);
    }
    for visit in plan.visits_mut() {
        visit.set_next_visit(None);
    }

    for (visit_id, standstill) in links {
        match standstill {
            Standstill::Vehicle(vehicle_id) => {
                if let Some(vehicle) = plan.vehicle_mut(vehicle_id) {
                    vehicle.set_next_visit(Some(visit_id));
                }
            }
            Standstill::Visit(previous_id) => {
                if let Some(previous) = plan.visit_mut(previous_id) {
                    previous.set_next_visit(Some(visit_id));
                }
            }
        }
    }
}

/// Directed-leg travel time along one vehicle's chain, in milliseconds.
///
/// Sums depot -> first visit, every visit -> visit leg, and the closing leg
/// from the last visit back to the depot. An empty chain, or a plan without
/// a depot, costs zero.
pub fn route_travel_time_millis(plan: &RoutingPlan, vehicle: &PlanningVehicle) -> Result<i64> {
    let Some(depot) = plan.depot() else {
        return Ok(0);
    };

    let mut total = 0i64;
    let mut from = depot.location();
    let mut on_route = false;
    for visit in plan.walk_chain(vehicle) {
        let visit = visit?;
        total += from.travel_time_millis_to(visit.location().id());
        from = visit.location();
        on_route = true;
    }
    if on_route {
        total += from.travel_time_millis_to(depot.location().id());
    }
    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::super::{factory, PlanningLocation, Standstill};
    use super::*;

    fn location(id: i64) -> PlanningLocation {
        PlanningLocation::new(id, id as f64, id as f64)
    }

    fn chained_plan() -> RoutingPlan {
        let mut plan = factory::plan_from_visits(
            vec![factory::vehicle(1)],
            Some(factory::depot(location(10))),
            vec![factory::visit(location(2)), factory::visit(location(3))],
        );
        factory::link_chain(&mut plan, 1, &[2, 3]);
        plan
    }

    #[test]
    fn walk_follows_shadow_pointers_in_order() {
        let plan = chained_plan();
        let vehicle = plan.vehicle(1).unwrap();

        let ids: Vec<i64> = plan
            .walk_chain(vehicle)
            .map(|visit| visit.unwrap().id())
            .collect();

        assert_eq!(ids, vec![2, 3]);
    }

    #[test]
    fn walk_of_empty_chain_yields_nothing() {
        let plan = factory::plan_from_visits(vec![factory::vehicle(1)], None, vec![]);
        let vehicle = plan.vehicle(1).unwrap();

        assert_eq!(plan.walk_chain(vehicle).count(), 0);
    }

    #[test]
    fn walk_is_restartable() {
        let plan = chained_plan();
        let vehicle = plan.vehicle(1).unwrap();

        let first: Vec<i64> = plan
            .walk_chain(vehicle)
            .map(|visit| visit.unwrap().id())
            .collect();
        let second: Vec<i64> = plan
            .walk_chain(vehicle)
            .map(|visit| visit.unwrap().id())
            .collect();

        assert_eq!(first, second);
    }

    #[test]
    fn walk_detects_cycles() {
        let mut plan = chained_plan();
        // Loop the chain back onto itself: 2 -> 3 -> 2 -> ...
        plan.visit_mut(3).unwrap().set_next_visit(Some(2));
        let vehicle = plan.vehicle(1).unwrap();

        let last = plan.walk_chain(vehicle).last().unwrap();

        assert_eq!(
            last,
            Err(FleetRouteError::BrokenChain {
                vehicle_id: 1,
                limit: 2
            })
        );
    }

    #[test]
    fn walk_fails_on_visit_missing_from_the_plan() {
        let mut plan = chained_plan();
        plan.visit_mut(2).unwrap().set_next_visit(Some(99));
        let vehicle = plan.vehicle(1).unwrap();

        let results: Vec<_> = plan.walk_chain(vehicle).collect();

        assert_eq!(results.len(), 2);
        assert_eq!(
            results[1],
            Err(FleetRouteError::InconsistentChain { visit_id: 99 })
        );
    }

    #[test]
    fn rebuild_overwrites_stale_shadow_pointers() {
        let mut plan = chained_plan();
        // Corrupt every shadow, then rebuild from the genuine links.
        plan.vehicle_mut(1).unwrap().set_next_visit(Some(3));
        plan.visit_mut(2).unwrap().set_next_visit(None);
        plan.visit_mut(3).unwrap().set_next_visit(Some(2));

        rebuild_next_visit_shadows(&mut plan);

        assert_eq!(plan.vehicle(1).unwrap().next_visit(), Some(2));
        assert_eq!(plan.visit(2).unwrap().next_visit(), Some(3));
        assert_eq!(plan.visit(3).unwrap().next_visit(), None);
    }

    #[test]
    fn rebuild_clears_shadows_of_unassigned_visits() {
        let mut plan = chained_plan();
        for visit_id in [2, 3] {
            plan.visit_mut(visit_id)
                .unwrap()
                .set_previous_standstill(None);
        }

        rebuild_next_visit_shadows(&mut plan);

        assert_eq!(plan.vehicle(1).unwrap().next_visit(), None);
        assert_eq!(plan.visit(2).unwrap().next_visit(), None);
    }

    #[test]
    fn route_travel_time_includes_the_closing_leg() {
        let depot_location = location(10)
            .with_travel_time_millis(2, 1_000)
            .with_travel_time_millis(3, 5_000);
        let mut plan = factory::plan_from_visits(
            vec![factory::vehicle(1)],
            Some(factory::depot(depot_location)),
            vec![
                factory::visit(location(2).with_travel_time_millis(3, 2_000)),
                factory::visit(location(3).with_travel_time_millis(10, 3_000)),
            ],
        );
        factory::link_chain(&mut plan, 1, &[2, 3]);
        let vehicle = plan.vehicle(1).unwrap();

        assert_eq!(route_travel_time_millis(&plan, vehicle), Ok(6_000));
    }

    #[test]
    fn standstill_roles() {
        assert!(Standstill::Vehicle(1).is_vehicle());
        assert!(!Standstill::Visit(1).is_vehicle());
        assert_eq!(Standstill::Vehicle(1).vehicle_id(), Some(1));
        assert_eq!(Standstill::Visit(2).visit_id(), Some(2));
    }
}

//! Chain extraction: from pointer chains to explicit routes.

use fleetroute_core::{FleetRouteError, Result, RoutingPlan};

use super::{RouteSnapshot, ShallowRoute};

/// Converts the working plan into a validated route snapshot.
///
/// Pure with respect to the plan: extracting twice from an unmutated plan
/// yields identical snapshots. Must run against a quiesced plan, either
/// inside the optimizer's serialization point or on a copy taken at one.
///
/// Validation is fail-fast: a chain visit missing from the plan's visit list
/// fails with [`FleetRouteError::InconsistentChain`], and a depot/vehicle
/// pairing violation (in either direction) fails with
/// [`FleetRouteError::MissingDepotAssignment`]. The plan is left untouched
/// either way, so extraction can be retried once the input is corrected.
pub fn plan_to_snapshot(plan: &RoutingPlan) -> Result<RouteSnapshot> {
    let vehicle_ids: Vec<i64> = plan.vehicles().iter().map(|v| v.id()).collect();
    let depot_id = plan.depot().map(|d| d.id());
    let visit_ids: Vec<i64> = plan.visits().iter().map(|v| v.id()).collect();

    let mut routes = Vec::new();
    let mut total_millis = 0i64;

    if let Some(depot) = plan.depot() {
        for vehicle in plan.vehicles() {
            if vehicle.depot() != Some(depot.id()) {
                return Err(FleetRouteError::MissingDepotAssignment {
                    vehicle_id: vehicle.id(),
                    vehicle_depot: vehicle.depot(),
                    plan_depot: Some(depot.id()),
                });
            }

            let mut route_visit_ids = Vec::new();
            let mut from = depot.location();
            for visit in plan.walk_chain(vehicle) {
                let visit = visit?;
                total_millis += from.travel_time_millis_to(visit.location().id());
                from = visit.location();
                route_visit_ids.push(visit.id());
            }
            // A vehicle with an empty chain has no route to report.
            if route_visit_ids.is_empty() {
                continue;
            }
            total_millis += from.travel_time_millis_to(depot.location().id());
            routes.push(ShallowRoute {
                vehicle_id: vehicle.id(),
                depot_id: depot.id(),
                visit_ids: route_visit_ids,
            });
        }
    } else if let Some(vehicle) = plan.vehicles().iter().find(|v| v.depot().is_some()) {
        return Err(FleetRouteError::MissingDepotAssignment {
            vehicle_id: vehicle.id(),
            vehicle_depot: vehicle.depot(),
            plan_depot: None,
        });
    }

    Ok(RouteSnapshot {
        vehicle_ids,
        depot_id,
        visit_ids,
        routes,
        distance: format_travel_time(total_millis),
    })
}

/// Formats a travel time as `"<H>h <M>m <S>s"`, rounded down to the second.
fn format_travel_time(millis: i64) -> String {
    let seconds = millis / 1000;
    format!(
        "{}h {}m {}s",
        seconds / 3600,
        (seconds % 3600) / 60,
        seconds % 60
    )
}

#[cfg(test)]
mod tests {
    use fleetroute_core::domain::factory;
    use fleetroute_core::PlanningLocation;

    use super::*;

    fn location(id: i64) -> PlanningLocation {
        PlanningLocation::new(id, id as f64, id as f64)
    }

    #[test]
    fn empty_plan_has_no_routes_vehicles_or_distance() {
        let snapshot = plan_to_snapshot(&factory::empty_plan()).unwrap();

        assert!(snapshot.vehicle_ids.is_empty());
        assert_eq!(snapshot.depot_id, None);
        assert!(snapshot.visit_ids.is_empty());
        assert!(snapshot.routes.is_empty());
        assert_eq!(snapshot.distance, "0h 0m 0s");
    }

    #[test]
    fn plan_with_vehicles_and_no_depot_has_no_routes() {
        let plan = factory::plan_from_visits(vec![factory::vehicle(1)], None, vec![]);

        let snapshot = plan_to_snapshot(&plan).unwrap();

        assert_eq!(snapshot.vehicle_ids, vec![1]);
        assert_eq!(snapshot.depot_id, None);
        assert!(snapshot.visit_ids.is_empty());
        assert!(snapshot.routes.is_empty());
        assert_eq!(snapshot.distance, "0h 0m 0s");
    }

    #[test]
    fn nonempty_plan_without_vehicles_has_no_routes_but_contains_visits() {
        let plan = factory::plan_from_locations(
            vec![],
            Some(factory::depot(location(1))),
            vec![location(2)],
        );

        let snapshot = plan_to_snapshot(&plan).unwrap();

        assert!(snapshot.vehicle_ids.is_empty());
        assert_eq!(snapshot.depot_id, Some(1));
        assert_eq!(snapshot.visit_ids, vec![2]);
        assert!(snapshot.routes.is_empty());
        assert_eq!(snapshot.distance, "0h 0m 0s");
    }

    #[test]
    fn initialized_plan_has_one_route_per_vehicle() {
        let mut plan = factory::plan_from_locations(
            vec![factory::vehicle(1001), factory::vehicle(2001)],
            Some(factory::depot(location(1))),
            vec![location(2), location(3)],
        );
        // Send both vehicles through both visits.
        factory::link_chain(&mut plan, 1001, &[2, 3]);
        factory::link_chain(&mut plan, 2001, &[2, 3]);

        let snapshot = plan_to_snapshot(&plan).unwrap();

        assert_eq!(snapshot.routes.len(), plan.vehicle_count());
        let route_vehicles: Vec<i64> = snapshot.routes.iter().map(|r| r.vehicle_id).collect();
        assert!(route_vehicles.contains(&1001));
        assert!(route_vehicles.contains(&2001));
        for route in &snapshot.routes {
            assert_eq!(route.depot_id, 1);
            // Routes list the visits only, never the depot.
            assert_eq!(route.visit_ids, vec![2, 3]);
        }
        assert_eq!(snapshot.vehicle_ids, vec![1001, 2001]);
        assert_eq!(snapshot.depot_id, Some(1));
        assert_eq!(snapshot.visit_ids, vec![2, 3]);
        assert_eq!(snapshot.distance, "0h 0m 0s");
    }

    #[test]
    fn fail_fast_if_a_vehicles_next_visit_does_not_exist() {
        let mut plan = factory::plan_from_locations(
            vec![factory::vehicle(1)],
            Some(factory::depot(location(1))),
            vec![location(3)],
        );
        plan.vehicle_mut(1).unwrap().set_next_visit(Some(2));

        let err = plan_to_snapshot(&plan).unwrap_err();

        assert_eq!(err, FleetRouteError::InconsistentChain { visit_id: 2 });
        assert!(err.to_string().contains("visit 2"));
    }

    #[test]
    fn vehicle_without_a_depot_is_illegal_if_a_depot_exists() {
        let mut plan = factory::plan_from_visits(
            vec![factory::vehicle(1)],
            Some(factory::depot(location(1))),
            vec![],
        );
        plan.vehicle_mut(1).unwrap().set_depot(None);

        let err = plan_to_snapshot(&plan).unwrap_err();

        assert_eq!(
            err,
            FleetRouteError::MissingDepotAssignment {
                vehicle_id: 1,
                vehicle_depot: None,
                plan_depot: Some(1),
            }
        );
        assert!(err.to_string().contains("vehicle 1"));
    }

    #[test]
    fn vehicle_with_a_depot_is_illegal_if_the_plan_has_none() {
        let mut plan = factory::plan_from_visits(vec![factory::vehicle(1)], None, vec![]);
        plan.vehicle_mut(1).unwrap().set_depot(Some(7));

        let err = plan_to_snapshot(&plan).unwrap_err();

        assert_eq!(
            err,
            FleetRouteError::MissingDepotAssignment {
                vehicle_id: 1,
                vehicle_depot: Some(7),
                plan_depot: None,
            }
        );
    }

    #[test]
    fn extraction_is_idempotent() {
        let mut plan = factory::plan_from_locations(
            vec![factory::vehicle(1)],
            Some(factory::depot(location(1))),
            vec![location(2), location(3)],
        );
        factory::link_chain(&mut plan, 1, &[2, 3]);

        let first = plan_to_snapshot(&plan).unwrap();
        let second = plan_to_snapshot(&plan).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn distance_sums_directed_legs_including_the_return() {
        let depot_location = location(1).with_travel_time_millis(2, 600_000);
        let mut plan = factory::plan_from_locations(
            vec![factory::vehicle(1)],
            Some(factory::depot(depot_location)),
            vec![
                location(2).with_travel_time_millis(3, 1_200_000),
                location(3).with_travel_time_millis(1, 1_861_500),
            ],
        );
        factory::link_chain(&mut plan, 1, &[2, 3]);

        let snapshot = plan_to_snapshot(&plan).unwrap();

        // 600s + 1200s + 1861.5s = 3661s, rounded down to the second.
        assert_eq!(snapshot.distance, "1h 1m 1s");
    }

    #[test]
    fn travel_time_formatting_rounds_down_to_the_second() {
        assert_eq!(format_travel_time(0), "0h 0m 0s");
        assert_eq!(format_travel_time(999), "0h 0m 0s");
        assert_eq!(format_travel_time(59_999), "0h 0m 59s");
        assert_eq!(format_travel_time(3_600_000), "1h 0m 0s");
        assert_eq!(format_travel_time(26 * 3_600_000), "26h 0m 0s");
    }
}

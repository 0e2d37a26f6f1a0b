use fleetroute_core::domain::factory;
use fleetroute_core::{PlanningLocation, Standstill};

use crate::{PlanDirector, ShadowDirector};

fn location(id: i64) -> PlanningLocation {
    PlanningLocation::new(id, id as f64, id as f64)
}

fn director_with_two_visits() -> ShadowDirector {
    let plan = factory::plan_from_visits(
        vec![factory::vehicle(1)],
        Some(factory::depot(location(10))),
        vec![factory::visit(location(2)), factory::visit(location(3))],
    );
    ShadowDirector::new(plan)
}

fn assign(director: &mut ShadowDirector, visit_id: i64, previous: Option<Standstill>) {
    director.before_variable_changed(visit_id, "previous_standstill");
    director
        .working_plan_mut()
        .visit_mut(visit_id)
        .unwrap()
        .set_previous_standstill(previous);
    director.after_variable_changed(visit_id, "previous_standstill");
}

#[test]
fn notified_assignment_updates_the_inverse_shadow() {
    let mut director = director_with_two_visits();

    assign(&mut director, 2, Some(Standstill::Vehicle(1)));
    assign(&mut director, 3, Some(Standstill::Visit(2)));

    let plan = director.working_plan();
    assert_eq!(plan.vehicle(1).unwrap().next_visit(), Some(2));
    assert_eq!(plan.visit(2).unwrap().next_visit(), Some(3));
    assert_eq!(plan.visit(3).unwrap().next_visit(), None);
}

#[test]
fn notified_detach_clears_the_inverse_shadow() {
    let mut director = director_with_two_visits();
    assign(&mut director, 2, Some(Standstill::Vehicle(1)));

    assign(&mut director, 2, None);

    assert_eq!(director.working_plan().vehicle(1).unwrap().next_visit(), None);
}

#[test]
fn repointing_a_visit_moves_the_shadow() {
    let plan = factory::plan_from_visits(
        vec![factory::vehicle(1), factory::vehicle(4)],
        Some(factory::depot(location(10))),
        vec![factory::visit(location(2))],
    );
    let mut director = ShadowDirector::new(plan);
    assign(&mut director, 2, Some(Standstill::Vehicle(1)));

    assign(&mut director, 2, Some(Standstill::Vehicle(4)));

    let plan = director.working_plan();
    assert_eq!(plan.vehicle(1).unwrap().next_visit(), None);
    assert_eq!(plan.vehicle(4).unwrap().next_visit(), Some(2));
}

#[test]
fn trigger_rebuilds_shadows_after_an_unnotified_edit() {
    let mut director = director_with_two_visits();

    // Bypass the notification protocol on purpose.
    director
        .working_plan_mut()
        .visit_mut(2)
        .unwrap()
        .set_previous_standstill(Some(Standstill::Vehicle(1)));
    assert_eq!(director.working_plan().vehicle(1).unwrap().next_visit(), None);

    director.trigger_variable_listeners();

    assert_eq!(
        director.working_plan().vehicle(1).unwrap().next_visit(),
        Some(2)
    );
}

#[test]
fn score_is_the_negated_route_travel_time() {
    let depot_location = location(10).with_travel_time_millis(2, 1_000);
    let plan = factory::plan_from_visits(
        vec![factory::vehicle(1)],
        Some(factory::depot(depot_location)),
        vec![factory::visit(location(2).with_travel_time_millis(10, 4_000))],
    );
    let mut director = ShadowDirector::new(plan);
    assign(&mut director, 2, Some(Standstill::Vehicle(1)));

    assert_eq!(director.calculate_score(), Ok(-5_000));
}

#[test]
fn notifications_invalidate_the_score_cache() {
    let depot_location = location(10).with_travel_time_millis(2, 1_000);
    let plan = factory::plan_from_visits(
        vec![factory::vehicle(1)],
        Some(factory::depot(depot_location)),
        vec![factory::visit(location(2).with_travel_time_millis(10, 4_000))],
    );
    let mut director = ShadowDirector::new(plan);
    assert_eq!(director.calculate_score(), Ok(0));

    assign(&mut director, 2, Some(Standstill::Vehicle(1)));

    assert_eq!(director.calculate_score(), Ok(-5_000));
}

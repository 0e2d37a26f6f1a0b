//! The mutable working plan owned by the optimizer loop.

use super::{ChainWalk, PlanningDepot, PlanningVehicle, PlanningVisit};

/// The working solution: the current vehicles, the optional depot and all
/// visits, plus the chain relation among them.
///
/// The plan is only ever mutated through the fact-change protocol inside the
/// optimizer's serialized context; external code reads it through clones
/// taken at a serialization point.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RoutingPlan {
    vehicles: Vec<PlanningVehicle>,
    depot: Option<PlanningDepot>,
    visits: Vec<PlanningVisit>,
}

impl RoutingPlan {
    /// A plan with no vehicles, no depot and no visits.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn vehicles(&self) -> &[PlanningVehicle] {
        &self.vehicles
    }

    pub fn vehicles_mut(&mut self) -> &mut [PlanningVehicle] {
        &mut self.vehicles
    }

    pub fn visits(&self) -> &[PlanningVisit] {
        &self.visits
    }

    pub fn visits_mut(&mut self) -> &mut [PlanningVisit] {
        &mut self.visits
    }

    pub fn depot(&self) -> Option<&PlanningDepot> {
        self.depot.as_ref()
    }

    pub fn set_depot(&mut self, depot: Option<PlanningDepot>) {
        self.depot = depot;
    }

    pub fn vehicle(&self, id: i64) -> Option<&PlanningVehicle> {
        self.vehicles.iter().find(|v| v.id() == id)
    }

    pub fn vehicle_mut(&mut self, id: i64) -> Option<&mut PlanningVehicle> {
        self.vehicles.iter_mut().find(|v| v.id() == id)
    }

    pub fn visit(&self, id: i64) -> Option<&PlanningVisit> {
        self.visits.iter().find(|v| v.id() == id)
    }

    pub fn visit_mut(&mut self, id: i64) -> Option<&mut PlanningVisit> {
        self.visits.iter_mut().find(|v| v.id() == id)
    }

    pub fn vehicle_count(&self) -> usize {
        self.vehicles.len()
    }

    pub fn visit_count(&self) -> usize {
        self.visits.len()
    }

    /// Replaces the vehicle list wholesale.
    ///
    /// Fact changes never edit the list in place: they clone it, edit the
    /// clone and swap it in, so the optimizer cannot observe a half-edited
    /// collection it may have cached by reference.
    pub fn set_vehicle_list(&mut self, vehicles: Vec<PlanningVehicle>) {
        self.vehicles = vehicles;
    }

    /// Replaces the visit list wholesale. Same contract as
    /// [`set_vehicle_list`](Self::set_vehicle_list).
    pub fn set_visit_list(&mut self, visits: Vec<PlanningVisit>) {
        self.visits = visits;
    }

    /// Walks `vehicle`'s chain, yielding its visits in route order.
    pub fn walk_chain<'a>(&'a self, vehicle: &PlanningVehicle) -> ChainWalk<'a> {
        ChainWalk::new(self, vehicle)
    }
}

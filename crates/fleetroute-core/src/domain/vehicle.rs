//! Planning vehicles.

/// A vehicle with a capacity and an optional depot assignment.
///
/// `next_visit` is a shadow variable: it mirrors the inverse of the visits'
/// `previous_standstill` links and is maintained by the director's listeners,
/// never written directly by fact changes.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlanningVehicle {
    id: i64,
    capacity: i32,
    depot: Option<i64>,
    // Shadow variable
    next_visit: Option<i64>,
}

impl PlanningVehicle {
    pub fn new(id: i64, capacity: i32) -> Self {
        Self {
            id,
            capacity,
            depot: None,
            next_visit: None,
        }
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn capacity(&self) -> i32 {
        self.capacity
    }

    pub fn set_capacity(&mut self, capacity: i32) {
        self.capacity = capacity;
    }

    /// The depot this vehicle departs from, if one is assigned.
    pub fn depot(&self) -> Option<i64> {
        self.depot
    }

    pub fn set_depot(&mut self, depot: Option<i64>) {
        self.depot = depot;
    }

    /// First visit of this vehicle's route, or `None` for an empty route.
    pub fn next_visit(&self) -> Option<i64> {
        self.next_visit
    }

    pub fn set_next_visit(&mut self, next_visit: Option<i64>) {
        self.next_visit = next_visit;
    }
}

//! Planning visits (delivery stops).

use super::{PlanningLocation, Standstill};

/// A delivery stop on some vehicle's route, or an unassigned stop.
///
/// `previous_standstill` is the genuine planning variable: the vehicle or
/// visit immediately before this one on its route, or `None` while the visit
/// is unassigned. `next_visit` is the inverse shadow pointer, maintained by
/// the director's listeners.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlanningVisit {
    id: i64,
    location: PlanningLocation,
    demand: i32,
    previous_standstill: Option<Standstill>,
    // Shadow variable
    next_visit: Option<i64>,
}

impl PlanningVisit {
    pub fn new(id: i64, location: PlanningLocation, demand: i32) -> Self {
        Self {
            id,
            location,
            demand,
            previous_standstill: None,
            next_visit: None,
        }
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn location(&self) -> &PlanningLocation {
        &self.location
    }

    pub fn demand(&self) -> i32 {
        self.demand
    }

    /// The standstill immediately before this visit on its route.
    pub fn previous_standstill(&self) -> Option<Standstill> {
        self.previous_standstill
    }

    pub fn set_previous_standstill(&mut self, previous_standstill: Option<Standstill>) {
        self.previous_standstill = previous_standstill;
    }

    /// The visit immediately after this one, or `None` for the last stop.
    pub fn next_visit(&self) -> Option<i64> {
        self.next_visit
    }

    pub fn set_next_visit(&mut self, next_visit: Option<i64>) {
        self.next_visit = next_visit;
    }

    /// True while the visit is part of some vehicle's chain.
    pub fn is_assigned(&self) -> bool {
        self.previous_standstill.is_some()
    }
}

//! The depot all routes start and end at.

use super::PlanningLocation;

/// The single depot of the working plan.
///
/// At most one depot exists at a time; every vehicle must reference it while
/// it is present.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlanningDepot {
    id: i64,
    location: PlanningLocation,
}

impl PlanningDepot {
    pub fn new(id: i64, location: PlanningLocation) -> Self {
        Self { id, location }
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn location(&self) -> &PlanningLocation {
        &self.location
    }
}

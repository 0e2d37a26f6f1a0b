//! Geographic locations and directed travel times.

use std::collections::HashMap;

/// An opaque geographic point identified by a stable numeric id.
///
/// Locations are immutable once created, except for their travel-time map:
/// the map is filled in by an external distance-matrix collaborator and may
/// lag behind newly added locations, so a missing entry reads as zero rather
/// than failing.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlanningLocation {
    id: i64,
    latitude: f64,
    longitude: f64,
    #[cfg_attr(feature = "serde", serde(default))]
    travel_time_millis: HashMap<i64, i64>,
}

impl PlanningLocation {
    /// Creates a location with an empty travel-time map.
    pub fn new(id: i64, latitude: f64, longitude: f64) -> Self {
        Self {
            id,
            latitude,
            longitude,
            travel_time_millis: HashMap::new(),
        }
    }

    /// Returns the stable id of this location.
    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Records the directed travel time to another location.
    pub fn set_travel_time_millis(&mut self, to: i64, millis: i64) {
        self.travel_time_millis.insert(to, millis);
    }

    /// Builder-style variant of [`set_travel_time_millis`](Self::set_travel_time_millis).
    pub fn with_travel_time_millis(mut self, to: i64, millis: i64) -> Self {
        self.set_travel_time_millis(to, millis);
        self
    }

    /// Directed travel time to `to` in milliseconds.
    ///
    /// Zero when the matrix has no entry for the leg yet.
    pub fn travel_time_millis_to(&self, to: i64) -> i64 {
        self.travel_time_millis.get(&to).copied().unwrap_or(0)
    }
}

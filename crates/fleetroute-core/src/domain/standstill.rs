//! The standstill role: any point a route leg departs from.

/// Either a vehicle at its depot or a previously visited visit.
///
/// Every assigned visit's `previous_standstill` references one of these;
/// a chain is anchored where the standstill is a vehicle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Standstill {
    /// A vehicle anchoring a chain.
    Vehicle(i64),
    /// A visit somewhere along a chain.
    Visit(i64),
}

impl Standstill {
    /// True if this standstill anchors a chain.
    pub fn is_vehicle(&self) -> bool {
        matches!(self, Standstill::Vehicle(_))
    }

    /// The vehicle id, if this standstill is a vehicle.
    pub fn vehicle_id(&self) -> Option<i64> {
        match self {
            Standstill::Vehicle(id) => Some(*id),
            Standstill::Visit(_) => None,
        }
    }

    /// The visit id, if this standstill is a visit.
    pub fn visit_id(&self) -> Option<i64> {
        match self {
            Standstill::Vehicle(_) => None,
            Standstill::Visit(id) => Some(*id),
        }
    }
}

//! Immutable route snapshot values.

use serde::{Deserialize, Serialize};

/// One vehicle's route: the depot it leaves from and its stops in order.
///
/// The visit list excludes the depot itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShallowRoute {
    pub vehicle_id: i64,
    pub depot_id: i64,
    pub visit_ids: Vec<i64>,
}

/// An externally consumable description of the plan's routes at one instant.
///
/// `vehicle_ids` and `visit_ids` list every vehicle and visit regardless of
/// assignment state; `routes` only contains vehicles with a non-empty chain.
/// `distance` is the total directed-leg travel time formatted as
/// `"<H>h <M>m <S>s"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteSnapshot {
    pub vehicle_ids: Vec<i64>,
    pub depot_id: Option<i64>,
    pub visit_ids: Vec<i64>,
    pub routes: Vec<ShallowRoute>,
    pub distance: String,
}

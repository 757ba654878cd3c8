//! Allocation result types

use serde::{Deserialize, Serialize};

/// Which capacity dimension required the most trucks
///
/// Ties resolve to volume. `None` only occurs for an empty or all-zero
/// load where no trucks are needed at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LimitingFactor {
    Volume,
    Weight,
    None,
}

impl std::fmt::Display for LimitingFactor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LimitingFactor::Volume => write!(f, "volume"),
            LimitingFactor::Weight => write!(f, "weight"),
            LimitingFactor::None => write!(f, "none"),
        }
    }
}

/// Result of a capacity allocation calculation
///
/// `utilization_percentage` is the fill fraction of the limiting
/// dimension across all allocated trucks; the non-limiting dimension's
/// own utilization can be far lower.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationResult {
    pub total_volume: f64,
    pub total_weight: f64,
    pub trucks_needed: u32,
    pub trucks_needed_by_volume: u32,
    pub trucks_needed_by_weight: u32,
    pub utilization_percentage: f64,
    pub limiting_factor: LimitingFactor,
    pub volume_utilization: f64,
    pub weight_utilization: f64,
}

impl AllocationResult {
    /// The zero result for an empty or weightless, volumeless load
    pub fn empty() -> Self {
        Self {
            total_volume: 0.0,
            total_weight: 0.0,
            trucks_needed: 0,
            trucks_needed_by_volume: 0,
            trucks_needed_by_weight: 0,
            utilization_percentage: 0.0,
            limiting_factor: LimitingFactor::None,
            volume_utilization: 0.0,
            weight_utilization: 0.0,
        }
    }
}

/// Unused capacity in the allocated trucks, per dimension
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpareCapacity {
    pub spare_volume: f64,
    pub spare_weight: f64,
    pub spare_volume_percent: f64,
    pub spare_weight_percent: f64,
}

/// Outcome of running the allocation against one candidate truck type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TruckTypeComparison {
    pub trucks_needed: u32,
    pub utilization: f64,
    pub total_volume_capacity: f64,
    pub total_weight_capacity: f64,
}

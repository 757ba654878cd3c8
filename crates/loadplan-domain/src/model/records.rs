//! Persisted record types for calculation history and item templates

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{AllocationResult, LineItem, TruckSpec};

/// A stored calculation: inputs, result, and when it ran
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationRecord {
    pub destination: String,
    pub truck_type: String,
    pub truck_spec: TruckSpec,
    pub items: Vec<LineItem>,
    pub result: AllocationResult,
    pub timestamp: DateTime<Utc>,
}

/// A named, reusable snapshot of a line-item list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemTemplate {
    pub template_name: String,
    pub items: Vec<LineItem>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

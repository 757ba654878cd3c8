//! Line item (SKU) type definitions

use loadplan_types::{Error, Result};
use serde::{Deserialize, Serialize};

/// A single SKU row in a shipment
///
/// Per-unit volume is in m³, per-unit weight in kg. Totals are derived
/// on demand and never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub name: String,
    pub quantity: u32,
    pub volume_per_unit: f64,
    pub weight_per_unit: f64,
}

impl LineItem {
    /// Create a validated line item
    pub fn new(
        name: impl Into<String>,
        quantity: u32,
        volume_per_unit: f64,
        weight_per_unit: f64,
    ) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(Error::InvalidInput("line item name is empty".to_string()));
        }
        if !volume_per_unit.is_finite() || volume_per_unit < 0.0 {
            return Err(Error::InvalidInput(format!(
                "negative or non-finite volume per unit for '{}': {}",
                name, volume_per_unit
            )));
        }
        if !weight_per_unit.is_finite() || weight_per_unit < 0.0 {
            return Err(Error::InvalidInput(format!(
                "negative or non-finite weight per unit for '{}': {}",
                name, weight_per_unit
            )));
        }
        Ok(Self {
            name,
            quantity,
            volume_per_unit,
            weight_per_unit,
        })
    }

    /// Total volume of this line (quantity × per-unit volume), in m³
    pub fn total_volume(&self) -> f64 {
        self.quantity as f64 * self.volume_per_unit
    }

    /// Total weight of this line (quantity × per-unit weight), in kg
    pub fn total_weight(&self) -> f64 {
        self.quantity as f64 * self.weight_per_unit
    }
}

//! Utilization advisory service
//!
//! Produces human-readable suggestions for under-utilized shipments and
//! quantity recommendations toward a target fill level. The route
//! suggestions are sampled from a fixed pool through an injected random
//! source, so callers can seed them for reproducible output.

use std::collections::HashMap;

use rand::seq::IndexedRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use loadplan_types::Result;

use crate::model::{AllocationResult, LimitingFactor, LineItem, TruckSpec};

/// Suggestions are capped at this many entries, in generation order
pub const MAX_SUGGESTIONS: usize = 5;

/// Below this utilization the load is considered badly consolidated
pub const LOW_UTILIZATION_PCT: f64 = 50.0;

/// Below this utilization there is still meaningful room for cargo
pub const MODERATE_UTILIZATION_PCT: f64 = 70.0;

/// Below this a smaller truck type is worth considering
const SMALLER_TRUCK_PCT: f64 = 60.0;

/// Above this a larger truck type is worth considering
const LARGER_TRUCK_PCT: f64 = 95.0;

/// Default target fill level for quantity recommendations
pub const DEFAULT_TARGET_UTILIZATION: f64 = 85.0;

const ROUTE_SUGGESTIONS: [&str; 3] = [
    "Check for nearby destinations that could be combined in the same route",
    "Consider scheduling flexibility to combine multiple orders",
    "Evaluate if partial shipments could be consolidated with future orders",
];

const ROUTE_SAMPLE_SIZE: usize = 2;

/// Additional quantity recommendation for a single item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuantityRecommendation {
    pub current_quantity: u32,
    pub recommended_additional: u32,
    pub new_total: u32,
}

/// Quantity recommendations toward a target utilization
///
/// `trucks_needed` here comes from a simplified estimate
/// (`trunc(total / capacity) + 1`, minimum 1) that intentionally differs
/// from the allocator's ceiling formula; do not expect the two to agree.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QuantityPlan {
    pub target_utilization: f64,
    pub current_utilization: f64,
    pub trucks_needed: u32,
    pub recommendations: HashMap<String, QuantityRecommendation>,
}

/// Advisory engine bound to one truck spec
#[derive(Debug, Clone, Copy)]
pub struct Advisor {
    spec: TruckSpec,
}

impl Advisor {
    pub fn new(spec: TruckSpec) -> Result<Self> {
        spec.validate()?;
        Ok(Self { spec })
    }

    /// Generate up to five suggestions for the given allocation result
    ///
    /// Order: utilization-threshold pair, first item with headroom,
    /// combine hint, truck sizing, then the random route picks. The list
    /// is truncated, never re-ranked. For a zero result only the route
    /// picks are returned.
    pub fn generate_suggestions<R: Rng + ?Sized>(
        &self,
        result: &AllocationResult,
        items: &[LineItem],
        rng: &mut R,
    ) -> Vec<String> {
        let mut suggestions = Vec::new();

        if result.trucks_needed == 0 {
            suggestions.extend(self.route_suggestions(rng));
            suggestions.truncate(MAX_SUGGESTIONS);
            return suggestions;
        }

        let utilization = result.utilization_percentage;
        let trucks = result.trucks_needed as f64;

        // Spare capacity in the limiting dimension's own unit
        let (spare_capacity, capacity_unit) = match result.limiting_factor {
            LimitingFactor::Weight => (
                self.spec.weight_capacity * trucks - result.total_weight,
                "kg",
            ),
            _ => (
                self.spec.volume_capacity * trucks - result.total_volume,
                "m³",
            ),
        };

        if utilization < LOW_UTILIZATION_PCT {
            suggestions.push(format!(
                "Consider consolidating shipments - you have {:.2} {} of unused capacity",
                spare_capacity, capacity_unit
            ));
            suggestions.push(
                "Look for additional SKUs going to the same destination or nearby locations"
                    .to_string(),
            );
        } else if utilization < MODERATE_UTILIZATION_PCT {
            suggestions.push(format!(
                "You can add {:.2} {} more cargo to improve efficiency",
                spare_capacity, capacity_unit
            ));
            suggestions.push(
                "Consider adding fast-moving items to fill the remaining space".to_string(),
            );
        }

        suggestions.extend(self.item_suggestions(
            items,
            spare_capacity,
            result.limiting_factor,
        ));
        suggestions.extend(self.truck_sizing_suggestions(utilization));
        suggestions.extend(self.route_suggestions(rng));

        suggestions.truncate(MAX_SUGGESTIONS);
        suggestions
    }

    /// Per-item and combine suggestions
    fn item_suggestions(
        &self,
        items: &[LineItem],
        spare_capacity: f64,
        limiting_factor: LimitingFactor,
    ) -> Vec<String> {
        let mut suggestions = Vec::new();

        // Only suggest for the first item with headroom to avoid clutter
        for item in items {
            let per_unit = match limiting_factor {
                LimitingFactor::Weight => item.weight_per_unit,
                _ => item.volume_per_unit,
            };
            if per_unit <= 0.0 {
                continue;
            }
            let additional_units = (spare_capacity / per_unit).floor() as u32;
            if additional_units > 0 {
                suggestions.push(format!(
                    "Add {} more units of '{}' to improve utilization",
                    additional_units, item.name
                ));
                break;
            }
        }

        if items.len() > 1 {
            suggestions
                .push("Consider combining similar SKUs into a single shipment".to_string());
        }

        suggestions
    }

    fn truck_sizing_suggestions(&self, utilization: f64) -> Vec<String> {
        if utilization < SMALLER_TRUCK_PCT {
            vec![
                "Consider using a smaller truck type if available for better cost efficiency"
                    .to_string(),
            ]
        } else if utilization > LARGER_TRUCK_PCT {
            vec!["Consider using a larger truck type to accommodate future growth".to_string()]
        } else {
            Vec::new()
        }
    }

    /// Random sample from the route suggestion pool, without replacement
    fn route_suggestions<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<String> {
        let sample_size = ROUTE_SAMPLE_SIZE.min(ROUTE_SUGGESTIONS.len());
        ROUTE_SUGGESTIONS
            .choose_multiple(rng, sample_size)
            .map(|s| s.to_string())
            .collect()
    }

    /// Per-item additional quantities to reach the target utilization
    ///
    /// The additional units for each item are computed independently for
    /// volume and weight and the smaller of the two is taken, so neither
    /// constraint is exceeded. Items with no positive recommendation are
    /// omitted.
    pub fn recommend_optimal_quantities(
        &self,
        items: &[LineItem],
        target_utilization: f64,
    ) -> QuantityPlan {
        if items.is_empty() {
            return QuantityPlan {
                target_utilization,
                ..QuantityPlan::default()
            };
        }

        let current_volume: f64 = items.iter().map(LineItem::total_volume).sum();
        let current_weight: f64 = items.iter().map(LineItem::total_weight).sum();

        // Simplified truck estimate, kept distinct from the allocator's
        // ceiling formula
        let trucks_by_volume = ((current_volume / self.spec.volume_capacity) as u32 + 1).max(1);
        let trucks_by_weight = ((current_weight / self.spec.weight_capacity) as u32 + 1).max(1);
        let trucks_needed = trucks_by_volume.max(trucks_by_weight);
        let trucks = trucks_needed as f64;

        let target_volume =
            self.spec.volume_capacity * trucks * (target_utilization / 100.0);
        let target_weight =
            self.spec.weight_capacity * trucks * (target_utilization / 100.0);

        let additional_volume_needed = (target_volume - current_volume).max(0.0);
        let additional_weight_needed = (target_weight - current_weight).max(0.0);

        let mut recommendations = HashMap::new();
        for item in items {
            let by_volume = if additional_volume_needed > 0.0 && item.volume_per_unit > 0.0 {
                (additional_volume_needed / item.volume_per_unit) as u32
            } else {
                0
            };
            let by_weight = if additional_weight_needed > 0.0 && item.weight_per_unit > 0.0 {
                (additional_weight_needed / item.weight_per_unit) as u32
            } else {
                0
            };

            let additional_units = by_volume.min(by_weight);
            if additional_units > 0 {
                recommendations.insert(
                    item.name.clone(),
                    QuantityRecommendation {
                        current_quantity: item.quantity,
                        recommended_additional: additional_units,
                        new_total: item.quantity.saturating_add(additional_units),
                    },
                );
            }
        }

        let current_utilization = (current_volume / self.spec.volume_capacity)
            .max(current_weight / self.spec.weight_capacity)
            / trucks
            * 100.0;

        QuantityPlan {
            target_utilization,
            current_utilization,
            trucks_needed,
            recommendations,
        }
    }
}

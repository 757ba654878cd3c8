//! Capacity allocation service
//!
//! Computes how many trucks a load needs, which dimension (volume or
//! weight) is the binding constraint, and how full the allocated trucks
//! are in that dimension.

use std::collections::HashMap;

use loadplan_types::{Error, Result};

use crate::model::{
    AllocationResult, LimitingFactor, LineItem, SpareCapacity, TruckSpec, TruckTypeComparison,
};

/// Allocation calculator bound to one truck spec
#[derive(Debug, Clone, Copy)]
pub struct Allocator {
    spec: TruckSpec,
}

impl Allocator {
    /// Create an allocator; fails with `InvalidConfiguration` unless
    /// both capacities are strictly positive.
    pub fn new(spec: TruckSpec) -> Result<Self> {
        spec.validate()?;
        Ok(Self { spec })
    }

    pub fn spec(&self) -> TruckSpec {
        self.spec
    }

    /// Compute truck requirements for the given line items
    ///
    /// The truck count is the ceiling of total over capacity in each
    /// dimension; the real count is the max of the two. Utilization is
    /// reported for the limiting dimension, so it is always in (0, 100]
    /// when any trucks are needed at all.
    pub fn compute_requirements(&self, items: &[LineItem]) -> Result<AllocationResult> {
        validate_items(items)?;

        if items.is_empty() {
            return Ok(AllocationResult::empty());
        }

        let total_volume: f64 = items.iter().map(LineItem::total_volume).sum();
        let total_weight: f64 = items.iter().map(LineItem::total_weight).sum();

        let trucks_needed_by_volume = trucks_for(total_volume, self.spec.volume_capacity);
        let trucks_needed_by_weight = trucks_for(total_weight, self.spec.weight_capacity);
        let trucks_needed = trucks_needed_by_volume.max(trucks_needed_by_weight);

        if trucks_needed == 0 {
            return Ok(AllocationResult {
                total_volume,
                total_weight,
                ..AllocationResult::empty()
            });
        }

        // Tie favors volume
        let limiting_factor = if trucks_needed_by_volume >= trucks_needed_by_weight {
            LimitingFactor::Volume
        } else {
            LimitingFactor::Weight
        };

        let allocated_volume = self.spec.volume_capacity * trucks_needed as f64;
        let allocated_weight = self.spec.weight_capacity * trucks_needed as f64;
        let volume_utilization = total_volume / allocated_volume * 100.0;
        let weight_utilization = total_weight / allocated_weight * 100.0;

        let utilization_percentage = match limiting_factor {
            LimitingFactor::Volume => volume_utilization,
            LimitingFactor::Weight => weight_utilization,
            LimitingFactor::None => 0.0,
        };

        Ok(AllocationResult {
            total_volume,
            total_weight,
            trucks_needed,
            trucks_needed_by_volume,
            trucks_needed_by_weight,
            utilization_percentage,
            limiting_factor,
            volume_utilization,
            weight_utilization,
        })
    }

    /// Unused capacity across the allocated trucks
    ///
    /// All zeros when no trucks are needed, so the percentages never
    /// divide by zero.
    pub fn spare_capacity(&self, result: &AllocationResult) -> SpareCapacity {
        if result.trucks_needed == 0 {
            return SpareCapacity {
                spare_volume: 0.0,
                spare_weight: 0.0,
                spare_volume_percent: 0.0,
                spare_weight_percent: 0.0,
            };
        }

        let total_volume_capacity = self.spec.volume_capacity * result.trucks_needed as f64;
        let total_weight_capacity = self.spec.weight_capacity * result.trucks_needed as f64;
        let spare_volume = total_volume_capacity - result.total_volume;
        let spare_weight = total_weight_capacity - result.total_weight;

        SpareCapacity {
            spare_volume,
            spare_weight,
            spare_volume_percent: spare_volume / total_volume_capacity * 100.0,
            spare_weight_percent: spare_weight / total_weight_capacity * 100.0,
        }
    }
}

/// Run the allocation once per candidate truck type
///
/// Pure fan-out; each type is evaluated independently.
pub fn compare_truck_types(
    items: &[LineItem],
    truck_types: &HashMap<String, TruckSpec>,
) -> Result<HashMap<String, TruckTypeComparison>> {
    let mut comparisons = HashMap::new();

    for (name, spec) in truck_types {
        let allocator = Allocator::new(*spec)?;
        let result = allocator.compute_requirements(items)?;

        comparisons.insert(
            name.clone(),
            TruckTypeComparison {
                trucks_needed: result.trucks_needed,
                utilization: result.utilization_percentage,
                total_volume_capacity: spec.volume_capacity * result.trucks_needed as f64,
                total_weight_capacity: spec.weight_capacity * result.trucks_needed as f64,
            },
        );
    }

    Ok(comparisons)
}

fn trucks_for(total: f64, capacity: f64) -> u32 {
    if total > 0.0 {
        (total / capacity).ceil() as u32
    } else {
        0
    }
}

fn validate_items(items: &[LineItem]) -> Result<()> {
    for item in items {
        if !item.volume_per_unit.is_finite() || item.volume_per_unit < 0.0 {
            return Err(Error::InvalidInput(format!(
                "negative volume per unit for '{}'",
                item.name
            )));
        }
        if !item.weight_per_unit.is_finite() || item.weight_per_unit < 0.0 {
            return Err(Error::InvalidInput(format!(
                "negative weight per unit for '{}'",
                item.name
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(volume: f64, weight: f64) -> TruckSpec {
        TruckSpec::new(volume, weight).unwrap()
    }

    #[test]
    fn test_single_item_tie_favors_volume() {
        let allocator = Allocator::new(spec(40.0, 7000.0)).unwrap();
        let items = vec![LineItem::new("Electronics A", 50, 0.08, 2.5).unwrap()];

        let result = allocator.compute_requirements(&items).unwrap();
        assert!((result.total_volume - 4.0).abs() < 1e-9);
        assert!((result.total_weight - 125.0).abs() < 1e-9);
        assert_eq!(result.trucks_needed_by_volume, 1);
        assert_eq!(result.trucks_needed_by_weight, 1);
        assert_eq!(result.trucks_needed, 1);
        assert_eq!(result.limiting_factor, LimitingFactor::Volume);
        assert!((result.utilization_percentage - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_items_zero_result() {
        let allocator = Allocator::new(spec(40.0, 7000.0)).unwrap();
        let result = allocator.compute_requirements(&[]).unwrap();
        assert_eq!(result.trucks_needed, 0);
        assert_eq!(result.limiting_factor, LimitingFactor::None);
        assert_eq!(result.utilization_percentage, 0.0);
    }

    #[test]
    fn test_zero_quantity_items_zero_result() {
        let allocator = Allocator::new(spec(40.0, 7000.0)).unwrap();
        let items = vec![LineItem::new("Nothing", 0, 0.5, 10.0).unwrap()];
        let result = allocator.compute_requirements(&items).unwrap();
        assert_eq!(result.trucks_needed, 0);
        assert_eq!(result.limiting_factor, LimitingFactor::None);
    }

    #[test]
    fn test_multi_truck_utilization() {
        let allocator = Allocator::new(spec(20.0, 3000.0)).unwrap();
        let items = vec![LineItem::new("Bricks", 100, 0.3, 40.0).unwrap()];

        let result = allocator.compute_requirements(&items).unwrap();
        assert!((result.total_volume - 30.0).abs() < 1e-9);
        assert!((result.total_weight - 4000.0).abs() < 1e-9);
        assert_eq!(result.trucks_needed_by_volume, 2);
        assert_eq!(result.trucks_needed_by_weight, 2);
        assert_eq!(result.trucks_needed, 2);
        assert!((result.utilization_percentage - 75.0).abs() < 1e-9);
    }

    #[test]
    fn test_weight_limited_load() {
        let allocator = Allocator::new(spec(40.0, 1000.0)).unwrap();
        let items = vec![LineItem::new("Steel", 30, 0.1, 100.0).unwrap()];

        let result = allocator.compute_requirements(&items).unwrap();
        assert_eq!(result.trucks_needed_by_volume, 1);
        assert_eq!(result.trucks_needed_by_weight, 3);
        assert_eq!(result.trucks_needed, 3);
        assert_eq!(result.limiting_factor, LimitingFactor::Weight);
        // Non-limiting dimension can be far below 100%
        assert!(result.volume_utilization < result.weight_utilization);
        assert!(result.utilization_percentage <= 100.0);
    }

    #[test]
    fn test_spare_capacity() {
        let allocator = Allocator::new(spec(40.0, 7000.0)).unwrap();
        let items = vec![LineItem::new("Electronics A", 50, 0.08, 2.5).unwrap()];
        let result = allocator.compute_requirements(&items).unwrap();

        let spare = allocator.spare_capacity(&result);
        assert!((spare.spare_volume - 36.0).abs() < 1e-9);
        assert!((spare.spare_weight - 6875.0).abs() < 1e-9);
        assert!((spare.spare_volume_percent - 90.0).abs() < 1e-9);
    }

    #[test]
    fn test_spare_capacity_zero_trucks() {
        let allocator = Allocator::new(spec(40.0, 7000.0)).unwrap();
        let result = allocator.compute_requirements(&[]).unwrap();
        let spare = allocator.spare_capacity(&result);
        assert_eq!(spare.spare_volume, 0.0);
        assert_eq!(spare.spare_volume_percent, 0.0);
    }

    #[test]
    fn test_compare_truck_types() {
        let mut truck_types = HashMap::new();
        truck_types.insert("Small".to_string(), spec(20.0, 3000.0));
        truck_types.insert("Large".to_string(), spec(80.0, 15000.0));
        let items = vec![LineItem::new("Boxes", 100, 0.3, 40.0).unwrap()];

        let comparisons = compare_truck_types(&items, &truck_types).unwrap();
        assert_eq!(comparisons.len(), 2);
        assert_eq!(comparisons["Small"].trucks_needed, 2);
        assert_eq!(comparisons["Large"].trucks_needed, 1);
        assert!((comparisons["Small"].total_volume_capacity - 40.0).abs() < 1e-9);
    }

    #[test]
    fn test_rejects_bad_spec() {
        assert!(Allocator::new(TruckSpec {
            volume_capacity: 0.0,
            weight_capacity: 100.0
        })
        .is_err());
    }
}

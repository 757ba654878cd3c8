//! Standard truck type catalog

use std::collections::HashMap;

use loadplan_domain::model::TruckSpec;

/// Truck type used when none is specified
pub const DEFAULT_TRUCK_TYPE: &str = "Medium";

/// Standard truck types and their capacities (m³ / kg)
pub fn default_truck_types() -> HashMap<String, TruckSpec> {
    let mut m = HashMap::new();

    m.insert(
        "Small".to_string(),
        TruckSpec {
            volume_capacity: 20.0,
            weight_capacity: 3000.0,
        },
    );

    m.insert(
        "Medium".to_string(),
        TruckSpec {
            volume_capacity: 40.0,
            weight_capacity: 7000.0,
        },
    );

    m.insert(
        "Large".to_string(),
        TruckSpec {
            volume_capacity: 80.0,
            weight_capacity: 15000.0,
        },
    );

    m
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let types = default_truck_types();
        assert_eq!(types.len(), 3);
        for spec in types.values() {
            assert!(spec.validate().is_ok());
        }
        assert!(types.contains_key(DEFAULT_TRUCK_TYPE));
    }

    #[test]
    fn test_medium_spec() {
        let types = default_truck_types();
        let medium = &types["Medium"];
        assert_eq!(medium.volume_capacity, 40.0);
        assert_eq!(medium.weight_capacity, 7000.0);
    }
}

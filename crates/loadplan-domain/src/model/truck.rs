//! Truck specification type definitions

use loadplan_types::{Error, Result};
use serde::{Deserialize, Serialize};

/// Capacity limits of a single truck
///
/// Volume capacity in m³, weight capacity in kg. Both must be strictly
/// positive; the allocator refuses a spec that is not.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TruckSpec {
    pub volume_capacity: f64,
    pub weight_capacity: f64,
}

impl TruckSpec {
    /// Create a validated truck spec
    pub fn new(volume_capacity: f64, weight_capacity: f64) -> Result<Self> {
        let spec = Self {
            volume_capacity,
            weight_capacity,
        };
        spec.validate()?;
        Ok(spec)
    }

    /// Check that both capacities are positive and finite
    pub fn validate(&self) -> Result<()> {
        if !self.volume_capacity.is_finite() || self.volume_capacity <= 0.0 {
            return Err(Error::InvalidConfiguration(format!(
                "volume capacity must be positive, got {}",
                self.volume_capacity
            )));
        }
        if !self.weight_capacity.is_finite() || self.weight_capacity <= 0.0 {
            return Err(Error::InvalidConfiguration(format!(
                "weight capacity must be positive, got {}",
                self.weight_capacity
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_spec() {
        assert!(TruckSpec::new(40.0, 7000.0).is_ok());
    }

    #[test]
    fn test_rejects_non_positive_capacity() {
        assert!(matches!(
            TruckSpec::new(0.0, 7000.0),
            Err(Error::InvalidConfiguration(_))
        ));
        assert!(matches!(
            TruckSpec::new(40.0, -1.0),
            Err(Error::InvalidConfiguration(_))
        ));
    }
}

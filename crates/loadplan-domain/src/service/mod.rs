//! Domain services

pub mod advisor;
pub mod allocator;

pub use advisor::{Advisor, QuantityPlan, QuantityRecommendation};
pub use allocator::{compare_truck_types, Allocator};

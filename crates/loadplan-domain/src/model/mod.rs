//! Domain model types

mod allocation;
mod line_item;
mod records;
mod truck;

pub use allocation::{AllocationResult, LimitingFactor, SpareCapacity, TruckTypeComparison};
pub use line_item::LineItem;
pub use records::{CalculationRecord, ItemTemplate};
pub use truck::TruckSpec;

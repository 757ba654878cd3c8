//! Application constants

mod truck_types;

pub use truck_types::{default_truck_types, DEFAULT_TRUCK_TYPE};

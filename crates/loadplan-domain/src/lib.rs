//! Domain layer for loadplan
//!
//! Holds the value types (line items, truck specs, allocation results),
//! the allocation and advisory services, and the repository traits the
//! storage layer implements.

pub mod model;
pub mod repository;
pub mod service;

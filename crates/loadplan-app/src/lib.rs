//! Application service layer - config, CSV input, store access

pub mod config;
pub mod constants;
pub mod items_csv;
pub mod query_service;
pub mod repository;

//! Repository trait definitions for data persistence

use crate::model::{CalculationRecord, ItemTemplate};
use loadplan_types::Error;

/// Repository for calculation history
pub trait CalculationHistoryRepository {
    /// Append a calculation record
    fn save(&mut self, record: &CalculationRecord) -> Result<(), Error>;

    /// Most recent records, newest first
    fn find_recent(&self, limit: usize) -> Result<Vec<CalculationRecord>, Error>;

    /// All records, newest first
    fn find_all(&self) -> Result<Vec<CalculationRecord>, Error>;

    /// Delete all records
    fn clear(&mut self) -> Result<(), Error>;
}

/// Repository for named item templates
pub trait TemplateRepository {
    /// Insert or replace a template by name
    fn save(&mut self, template: &ItemTemplate) -> Result<(), Error>;

    /// Find a template by its unique name
    fn find_by_name(&self, name: &str) -> Result<Option<ItemTemplate>, Error>;

    /// All templates, most recently updated first
    fn find_all(&self) -> Result<Vec<ItemTemplate>, Error>;

    /// Delete a template; returns whether it existed
    fn delete(&mut self, name: &str) -> Result<bool, Error>;
}

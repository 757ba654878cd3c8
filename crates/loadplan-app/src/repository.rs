//! Store access helpers

use loadplan_store::{HistoryStore, TemplateStore};
use loadplan_types::Result;

use crate::config::Config;

/// Open the calculation history store in the configured data directory
pub fn open_history_store(config: &Config) -> Result<HistoryStore> {
    HistoryStore::open(config.data_dir()?)
}

/// Open the template store in the configured data directory
pub fn open_template_store(config: &Config) -> Result<TemplateStore> {
    TemplateStore::open(config.data_dir()?)
}

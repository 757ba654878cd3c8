//! File-backed persistence for loadplan
//!
//! Stores live as pretty-printed JSON files in the data directory:
//! `history.json` for calculation records, `templates.json` for item
//! templates.

mod history;
mod templates;

pub use history::{HistoryStore, HistorySummary};
pub use templates::TemplateStore;

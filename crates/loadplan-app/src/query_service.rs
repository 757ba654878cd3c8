//! Read and maintenance access to stored data through the repository traits

use loadplan_domain::model::{CalculationRecord, ItemTemplate};
use loadplan_domain::repository::{CalculationHistoryRepository, TemplateRepository};
use loadplan_types::{Error, Result};

/// Most recent calculations, newest first
pub fn recent_calculations<R: CalculationHistoryRepository>(
    repo: &R,
    limit: usize,
) -> Result<Vec<CalculationRecord>> {
    repo.find_recent(limit)
}

/// Delete all stored calculations
pub fn clear_history<R: CalculationHistoryRepository>(repo: &mut R) -> Result<()> {
    repo.clear()
}

/// All templates, most recently updated first
pub fn list_templates<R: TemplateRepository>(repo: &R) -> Result<Vec<ItemTemplate>> {
    repo.find_all()
}

/// Look up a template by its unique name
pub fn load_template<R: TemplateRepository>(repo: &R, name: &str) -> Result<ItemTemplate> {
    repo.find_by_name(name)?
        .ok_or_else(|| Error::TemplateNotFound(name.to_string()))
}

/// Delete a template by name
pub fn delete_template<R: TemplateRepository>(repo: &mut R, name: &str) -> Result<()> {
    if repo.delete(name)? {
        Ok(())
    } else {
        Err(Error::TemplateNotFound(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use loadplan_domain::model::LineItem;
    use loadplan_store::TemplateStore;
    use tempfile::tempdir;

    #[test]
    fn test_load_missing_template() {
        let dir = tempdir().unwrap();
        let store = TemplateStore::open(dir.path().to_path_buf()).unwrap();
        assert!(matches!(
            load_template(&store, "nope"),
            Err(Error::TemplateNotFound(_))
        ));
    }

    #[test]
    fn test_template_round_trip() {
        let dir = tempdir().unwrap();
        let mut store = TemplateStore::open(dir.path().to_path_buf()).unwrap();
        store
            .save_template(
                "Electronics",
                vec![LineItem::new("Laptop", 10, 0.08, 3.0).unwrap()],
            )
            .unwrap();

        let template = load_template(&store, "Electronics").unwrap();
        assert_eq!(template.items.len(), 1);
        assert_eq!(list_templates(&store).unwrap().len(), 1);

        delete_template(&mut store, "Electronics").unwrap();
        assert!(list_templates(&store).unwrap().is_empty());
    }
}

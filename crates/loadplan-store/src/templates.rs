//! Item template store

use std::collections::HashMap;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;

use chrono::Utc;

use loadplan_domain::model::{ItemTemplate, LineItem};
use loadplan_domain::repository::TemplateRepository;
use loadplan_types::{Error, Result};

/// Persistent store for named item templates
///
/// Template names are unique; saving under an existing name replaces
/// the item list but keeps the original `created_at`.
pub struct TemplateStore {
    store_path: PathBuf,
    templates: HashMap<String, ItemTemplate>,
}

impl TemplateStore {
    /// Create or load a template store
    pub fn open(store_dir: PathBuf) -> Result<Self> {
        fs::create_dir_all(&store_dir)?;
        let store_path = store_dir.join("templates.json");

        let templates = if store_path.exists() {
            let file = File::open(&store_path)?;
            let reader = BufReader::new(file);
            serde_json::from_reader(reader).unwrap_or_default()
        } else {
            HashMap::new()
        };

        Ok(Self {
            store_path,
            templates,
        })
    }

    /// Save store to disk
    fn persist(&self) -> Result<()> {
        let file = File::create(&self.store_path)?;
        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, &self.templates)?;
        Ok(())
    }

    /// Insert or replace a template by name
    pub fn save_template(&mut self, name: &str, items: Vec<LineItem>) -> Result<()> {
        let now = Utc::now();
        let created_at = self
            .templates
            .get(name)
            .map(|t| t.created_at)
            .unwrap_or(now);

        self.templates.insert(
            name.to_string(),
            ItemTemplate {
                template_name: name.to_string(),
                items,
                created_at,
                updated_at: now,
            },
        );
        self.persist()
    }

    /// Get a template by name
    pub fn get(&self, name: &str) -> Option<&ItemTemplate> {
        self.templates.get(name)
    }

    /// All templates, most recently updated first
    pub fn all_templates(&self) -> Vec<&ItemTemplate> {
        let mut templates: Vec<_> = self.templates.values().collect();
        templates.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        templates
    }

    /// Delete a template; returns whether it existed
    pub fn delete_template(&mut self, name: &str) -> Result<bool> {
        let removed = self.templates.remove(name).is_some();
        if removed {
            self.persist()?;
        }
        Ok(removed)
    }

    /// Number of stored templates
    pub fn count(&self) -> usize {
        self.templates.len()
    }
}

impl TemplateRepository for TemplateStore {
    fn save(&mut self, template: &ItemTemplate) -> std::result::Result<(), Error> {
        self.templates
            .insert(template.template_name.clone(), template.clone());
        self.persist()
    }

    fn find_by_name(&self, name: &str) -> std::result::Result<Option<ItemTemplate>, Error> {
        Ok(self.templates.get(name).cloned())
    }

    fn find_all(&self) -> std::result::Result<Vec<ItemTemplate>, Error> {
        Ok(self.all_templates().into_iter().cloned().collect())
    }

    fn delete(&mut self, name: &str) -> std::result::Result<bool, Error> {
        self.delete_template(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn electronics() -> Vec<LineItem> {
        vec![
            LineItem::new("Laptop", 10, 0.08, 3.0).unwrap(),
            LineItem::new("Monitor", 15, 0.12, 5.0).unwrap(),
        ]
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempdir().unwrap();
        {
            let mut store = TemplateStore::open(dir.path().to_path_buf()).unwrap();
            store
                .save_template("Electronics Standard", electronics())
                .unwrap();
        }

        let store = TemplateStore::open(dir.path().to_path_buf()).unwrap();
        let template = store.get("Electronics Standard").unwrap();
        assert_eq!(template.items.len(), 2);
        assert_eq!(template.items[0].name, "Laptop");
    }

    #[test]
    fn test_upsert_keeps_created_at() {
        let dir = tempdir().unwrap();
        let mut store = TemplateStore::open(dir.path().to_path_buf()).unwrap();
        store.save_template("Electronics", electronics()).unwrap();
        let created = store.get("Electronics").unwrap().created_at;

        store
            .save_template(
                "Electronics",
                vec![LineItem::new("Tablet", 5, 0.02, 0.6).unwrap()],
            )
            .unwrap();

        let template = store.get("Electronics").unwrap();
        assert_eq!(template.created_at, created);
        assert!(template.updated_at >= created);
        assert_eq!(template.items.len(), 1);
        assert_eq!(store.count(), 1);
    }

    #[test]
    fn test_delete() {
        let dir = tempdir().unwrap();
        let mut store = TemplateStore::open(dir.path().to_path_buf()).unwrap();
        store.save_template("Electronics", electronics()).unwrap();

        assert!(store.delete_template("Electronics").unwrap());
        assert!(!store.delete_template("Electronics").unwrap());
        assert!(store.get("Electronics").is_none());
    }

    #[test]
    fn test_listing_order() {
        let dir = tempdir().unwrap();
        let mut store = TemplateStore::open(dir.path().to_path_buf()).unwrap();
        store.save_template("First", electronics()).unwrap();
        store.save_template("Second", electronics()).unwrap();

        let names: Vec<_> = store
            .all_templates()
            .iter()
            .map(|t| t.template_name.clone())
            .collect();
        assert_eq!(names[0], "Second");
    }
}

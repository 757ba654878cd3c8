//! Calculation history store

use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use loadplan_domain::model::CalculationRecord;
use loadplan_domain::repository::CalculationHistoryRepository;
use loadplan_types::{Error, Result};

/// Aggregate statistics over the stored calculations
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HistorySummary {
    pub total_calculations: usize,
    pub avg_utilization: f64,
    pub avg_trucks_needed: f64,
    pub total_volume_shipped: f64,
    pub total_weight_shipped: f64,
}

/// Persistent store for calculation records
///
/// Records are kept in insertion order; reads return newest first.
pub struct HistoryStore {
    store_path: PathBuf,
    records: Vec<CalculationRecord>,
}

impl HistoryStore {
    /// Create or load a history store
    pub fn open(store_dir: PathBuf) -> Result<Self> {
        fs::create_dir_all(&store_dir)?;
        let store_path = store_dir.join("history.json");

        let records = if store_path.exists() {
            let file = File::open(&store_path)?;
            let reader = BufReader::new(file);
            serde_json::from_reader(reader).unwrap_or_default()
        } else {
            Vec::new()
        };

        Ok(Self {
            store_path,
            records,
        })
    }

    /// Save store to disk
    fn persist(&self) -> Result<()> {
        let file = File::create(&self.store_path)?;
        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, &self.records)?;
        Ok(())
    }

    /// Append a calculation record
    pub fn add_record(&mut self, record: CalculationRecord) -> Result<()> {
        self.records.push(record);
        self.persist()
    }

    /// Most recent records, newest first
    pub fn recent(&self, limit: usize) -> Vec<CalculationRecord> {
        let mut records = self.records.clone();
        records.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        records.truncate(limit);
        records
    }

    /// All records, newest first
    pub fn all_records(&self) -> Vec<CalculationRecord> {
        let mut records = self.records.clone();
        records.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        records
    }

    /// Delete all records
    pub fn clear_all(&mut self) -> Result<()> {
        self.records.clear();
        self.persist()
    }

    /// Number of stored records
    pub fn count(&self) -> usize {
        self.records.len()
    }

    /// Aggregate statistics over all stored calculations
    pub fn summary(&self) -> HistorySummary {
        let total = self.records.len();
        if total == 0 {
            return HistorySummary::default();
        }

        let n = total as f64;
        let mut summary = HistorySummary {
            total_calculations: total,
            ..HistorySummary::default()
        };
        for record in &self.records {
            summary.avg_utilization += record.result.utilization_percentage;
            summary.avg_trucks_needed += record.result.trucks_needed as f64;
            summary.total_volume_shipped += record.result.total_volume;
            summary.total_weight_shipped += record.result.total_weight;
        }
        summary.avg_utilization /= n;
        summary.avg_trucks_needed /= n;
        summary
    }
}

impl CalculationHistoryRepository for HistoryStore {
    fn save(&mut self, record: &CalculationRecord) -> std::result::Result<(), Error> {
        self.add_record(record.clone())
    }

    fn find_recent(&self, limit: usize) -> std::result::Result<Vec<CalculationRecord>, Error> {
        Ok(self.recent(limit))
    }

    fn find_all(&self) -> std::result::Result<Vec<CalculationRecord>, Error> {
        Ok(self.all_records())
    }

    fn clear(&mut self) -> std::result::Result<(), Error> {
        self.clear_all()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use loadplan_domain::model::{AllocationResult, LimitingFactor, LineItem, TruckSpec};
    use tempfile::tempdir;

    fn sample_record(destination: &str, hour: u32, utilization: f64) -> CalculationRecord {
        CalculationRecord {
            destination: destination.to_string(),
            truck_type: "Medium".to_string(),
            truck_spec: TruckSpec::new(40.0, 7000.0).unwrap(),
            items: vec![LineItem::new("Electronics A", 50, 0.08, 2.5).unwrap()],
            result: AllocationResult {
                total_volume: 4.0,
                total_weight: 125.0,
                trucks_needed: 1,
                trucks_needed_by_volume: 1,
                trucks_needed_by_weight: 1,
                utilization_percentage: utilization,
                limiting_factor: LimitingFactor::Volume,
                volume_utilization: utilization,
                weight_utilization: 125.0 / 7000.0 * 100.0,
            },
            timestamp: Utc.with_ymd_and_hms(2025, 3, 14, hour, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_add_and_reload() {
        let dir = tempdir().unwrap();
        {
            let mut store = HistoryStore::open(dir.path().to_path_buf()).unwrap();
            store.add_record(sample_record("New York", 9, 10.0)).unwrap();
            store.add_record(sample_record("Boston", 11, 20.0)).unwrap();
        }

        let store = HistoryStore::open(dir.path().to_path_buf()).unwrap();
        assert_eq!(store.count(), 2);
        let recent = store.recent(10);
        assert_eq!(recent[0].destination, "Boston");
        assert_eq!(recent[1].destination, "New York");
    }

    #[test]
    fn test_recent_limit() {
        let dir = tempdir().unwrap();
        let mut store = HistoryStore::open(dir.path().to_path_buf()).unwrap();
        for hour in 8..12 {
            store
                .add_record(sample_record("Chicago", hour, 50.0))
                .unwrap();
        }
        assert_eq!(store.recent(2).len(), 2);
    }

    #[test]
    fn test_summary() {
        let dir = tempdir().unwrap();
        let mut store = HistoryStore::open(dir.path().to_path_buf()).unwrap();
        store.add_record(sample_record("A", 8, 10.0)).unwrap();
        store.add_record(sample_record("B", 9, 30.0)).unwrap();

        let summary = store.summary();
        assert_eq!(summary.total_calculations, 2);
        assert!((summary.avg_utilization - 20.0).abs() < 1e-9);
        assert!((summary.avg_trucks_needed - 1.0).abs() < 1e-9);
        assert!((summary.total_volume_shipped - 8.0).abs() < 1e-9);
        assert!((summary.total_weight_shipped - 250.0).abs() < 1e-9);
    }

    #[test]
    fn test_summary_empty() {
        let dir = tempdir().unwrap();
        let store = HistoryStore::open(dir.path().to_path_buf()).unwrap();
        assert_eq!(store.summary(), HistorySummary::default());
    }

    #[test]
    fn test_clear() {
        let dir = tempdir().unwrap();
        let mut store = HistoryStore::open(dir.path().to_path_buf()).unwrap();
        store.add_record(sample_record("A", 8, 10.0)).unwrap();
        store.clear_all().unwrap();
        assert_eq!(store.count(), 0);

        let reloaded = HistoryStore::open(dir.path().to_path_buf()).unwrap();
        assert_eq!(reloaded.count(), 0);
    }
}

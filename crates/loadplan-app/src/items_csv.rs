//! CSV loader for line items
//!
//! Expected CSV header:
//! name,quantity,volume_per_unit,weight_per_unit

use std::path::Path;

use loadplan_domain::model::LineItem;
use loadplan_types::{Error, Result};

/// Load line items from a CSV file
pub fn load_items_from_csv<P: AsRef<Path>>(path: P) -> Result<Vec<LineItem>> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(Error::FileNotFound(path.display().to_string()));
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|e| Error::CsvLoader(e.to_string()))?;

    let headers = reader
        .headers()
        .map_err(|e| Error::CsvLoader(e.to_string()))?
        .clone();
    let columns = ColumnIndex::from_headers(&headers)?;

    let mut items = Vec::new();
    for (row_idx, record) in reader.records().enumerate() {
        let record = record.map_err(|e| Error::CsvLoader(e.to_string()))?;
        let row_num = row_idx + 2; // header is row 1

        if record.iter().all(|field| field.is_empty()) {
            continue;
        }
        items.push(parse_record(&record, &columns, row_num)?);
    }

    Ok(items)
}

struct ColumnIndex {
    name: usize,
    quantity: usize,
    volume_per_unit: usize,
    weight_per_unit: usize,
}

impl ColumnIndex {
    fn from_headers(headers: &csv::StringRecord) -> Result<Self> {
        let find = |column: &str| -> Result<usize> {
            headers
                .iter()
                .position(|h| h.eq_ignore_ascii_case(column))
                .ok_or_else(|| Error::CsvLoader(format!("missing required column: {}", column)))
        };

        Ok(Self {
            name: find("name")?,
            quantity: find("quantity")?,
            volume_per_unit: find("volume_per_unit")?,
            weight_per_unit: find("weight_per_unit")?,
        })
    }
}

fn parse_record(
    record: &csv::StringRecord,
    columns: &ColumnIndex,
    row_num: usize,
) -> Result<LineItem> {
    let name = record.get(columns.name).unwrap_or("").to_string();

    let quantity_raw: i64 = parse_number(record.get(columns.quantity), row_num, "quantity")?;
    let quantity = u32::try_from(quantity_raw).map_err(|_| {
        Error::InvalidInput(format!(
            "negative quantity in row {}: {}",
            row_num, quantity_raw
        ))
    })?;

    let volume_per_unit: f64 =
        parse_number(record.get(columns.volume_per_unit), row_num, "volume_per_unit")?;
    let weight_per_unit: f64 =
        parse_number(record.get(columns.weight_per_unit), row_num, "weight_per_unit")?;

    LineItem::new(name, quantity, volume_per_unit, weight_per_unit)
        .map_err(|e| Error::InvalidInput(format!("row {}: {}", row_num, e)))
}

fn parse_number<T: std::str::FromStr>(
    field: Option<&str>,
    row: usize,
    column: &str,
) -> Result<T> {
    let raw = field.unwrap_or("").trim().replace(',', "");
    raw.parse().map_err(|_| {
        Error::CsvLoader(format!(
            "invalid number in row {}, column {}: '{}'",
            row, column, raw
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_csv(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_items() {
        let file = write_csv(
            "name,quantity,volume_per_unit,weight_per_unit\n\
             Electronics A,50,0.08,2.5\n\
             Bricks,100,0.3,40\n",
        );

        let items = load_items_from_csv(file.path()).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].name, "Electronics A");
        assert_eq!(items[0].quantity, 50);
        assert!((items[1].weight_per_unit - 40.0).abs() < 1e-9);
    }

    #[test]
    fn test_missing_column() {
        let file = write_csv("name,quantity,volume_per_unit\nA,1,0.5\n");
        assert!(matches!(
            load_items_from_csv(file.path()),
            Err(Error::CsvLoader(_))
        ));
    }

    #[test]
    fn test_negative_quantity_is_invalid_input() {
        let file = write_csv(
            "name,quantity,volume_per_unit,weight_per_unit\nA,-5,0.5,1.0\n",
        );
        assert!(matches!(
            load_items_from_csv(file.path()),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn test_negative_per_unit_is_invalid_input() {
        let file = write_csv(
            "name,quantity,volume_per_unit,weight_per_unit\nA,5,-0.5,1.0\n",
        );
        assert!(matches!(
            load_items_from_csv(file.path()),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn test_skips_blank_rows() {
        let file = write_csv(
            "name,quantity,volume_per_unit,weight_per_unit\nA,5,0.5,1.0\n,,,\n",
        );
        let items = load_items_from_csv(file.path()).unwrap();
        assert_eq!(items.len(), 1);
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            load_items_from_csv("/nonexistent/items.csv"),
            Err(Error::FileNotFound(_))
        ));
    }
}

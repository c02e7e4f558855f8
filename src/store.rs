//! Local SQLite-backed asset table.
//!
//! Append-only by design: there is no uniqueness constraint, so re-running
//! an import duplicates rows.

use crate::error::Result;
use rusqlite::{Connection, params};
use std::path::Path;

/// One asset row as persisted locally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredAsset {
    pub id: String,
    pub hostname: Option<String>,
    pub os: Option<String>,
    pub last_scan_date: Option<String>,
}

pub struct AssetStore {
    conn: Connection,
}

impl AssetStore {
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;
        let store = Self { conn };
        store.init_schema()?;
        Ok(store)
    }

    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let store = Self { conn };
        store.init_schema()?;
        Ok(store)
    }

    fn init_schema(&self) -> Result<()> {
        self.conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS assets (
                id TEXT,
                hostname TEXT,
                os TEXT,
                last_scan_date TEXT
            );
        "#,
        )?;
        Ok(())
    }

    /// Append one row per asset. Returns the number of rows written.
    pub fn insert_assets(&self, assets: &[StoredAsset]) -> Result<usize> {
        let mut count = 0;
        for asset in assets {
            self.conn.execute(
                "INSERT INTO assets (id, hostname, os, last_scan_date) VALUES (?1, ?2, ?3, ?4)",
                params![asset.id, asset.hostname, asset.os, asset.last_scan_date],
            )?;
            count += 1;
        }
        Ok(count)
    }

    pub fn count(&self) -> Result<i64> {
        let count = self
            .conn
            .query_row("SELECT COUNT(*) FROM assets", [], |row| row.get(0))?;
        Ok(count)
    }

    pub fn list_assets(&self) -> Result<Vec<StoredAsset>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, hostname, os, last_scan_date FROM assets")?;
        let mut rows = stmt.query([])?;

        let mut assets = Vec::new();
        while let Some(row) = rows.next()? {
            assets.push(StoredAsset {
                id: row.get(0)?,
                hostname: row.get(1)?,
                os: row.get(2)?,
                last_scan_date: row.get(3)?,
            });
        }
        Ok(assets)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_asset() -> StoredAsset {
        StoredAsset {
            id: "42".to_string(),
            hostname: Some("h1".to_string()),
            os: Some("Ubuntu Linux 22.04".to_string()),
            last_scan_date: Some("2024-05-01T10:00:00Z".to_string()),
        }
    }

    #[test]
    fn schema_is_created_and_rows_append() {
        let store = AssetStore::open_in_memory().unwrap();

        let written = store.insert_assets(&[sample_asset()]).unwrap();
        assert_eq!(written, 1);

        let assets = store.list_assets().unwrap();
        assert_eq!(assets, vec![sample_asset()]);
    }

    #[test]
    fn reinserting_duplicates_rows() {
        let store = AssetStore::open_in_memory().unwrap();

        store.insert_assets(&[sample_asset()]).unwrap();
        store.insert_assets(&[sample_asset()]).unwrap();

        assert_eq!(store.count().unwrap(), 2);
    }

    #[test]
    fn optional_fields_round_trip_as_null() {
        let store = AssetStore::open_in_memory().unwrap();
        let asset = StoredAsset {
            id: "7".to_string(),
            hostname: None,
            os: None,
            last_scan_date: None,
        };

        store.insert_assets(std::slice::from_ref(&asset)).unwrap();
        assert_eq!(store.list_assets().unwrap(), vec![asset]);
    }
}

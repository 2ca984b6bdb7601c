use crate::domain::model::{FeaturedEntry, Period, PeriodState, Restaurant};
use crate::domain::ports::{FeaturedStore, RestaurantCatalog, StoreOutcome};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::fs;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;

/// File-backed featured-period store: one JSON document per period under
/// `<base>/featured/<YYYY-MM>.json`, carrying the entry list and a version
/// counter.
///
/// The write lock serializes the read-check-write sequence, which makes the
/// version check and the write a single atomic conditional write in-process.
/// Nothing is cached between calls; every load hits the file.
pub struct JsonStore {
    base_path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonStore {
    pub fn new(base_path: &str) -> Self {
        Self {
            base_path: PathBuf::from(base_path),
            write_lock: Mutex::new(()),
        }
    }

    fn period_path(&self, period: Period) -> PathBuf {
        self.base_path
            .join("featured")
            .join(format!("{}.json", period.key()))
    }

    fn read_state(&self, period: Period) -> Result<PeriodState> {
        let path = self.period_path(period);
        if !path.exists() {
            return Ok(PeriodState::default());
        }
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }
}

#[async_trait]
impl FeaturedStore for JsonStore {
    async fn load(&self, period: Period) -> Result<PeriodState> {
        self.read_state(period)
    }

    async fn store(
        &self,
        period: Period,
        expected_version: u64,
        entries: Vec<FeaturedEntry>,
    ) -> Result<StoreOutcome> {
        let _guard = self.write_lock.lock().await;

        let current = self.read_state(period)?;
        if current.version != expected_version {
            return Ok(StoreOutcome::Conflict);
        }

        let next = PeriodState {
            entries,
            version: expected_version + 1,
        };

        let path = self.period_path(period);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_json::to_string_pretty(&next)?)?;
        Ok(StoreOutcome::Committed)
    }
}

/// Restaurant catalog read from `<base>/restaurants.json`. The file is owned
/// by the catalog side of the platform; this adapter only reads it, and
/// re-reads on every call so catalog deletions are observed immediately.
pub struct JsonCatalog {
    catalog_path: PathBuf,
}

impl JsonCatalog {
    pub fn new(base_path: &str) -> Self {
        Self {
            catalog_path: Path::new(base_path).join("restaurants.json"),
        }
    }

    fn read_all(&self) -> Result<Vec<Restaurant>> {
        if !self.catalog_path.exists() {
            return Ok(Vec::new());
        }
        let raw = fs::read_to_string(&self.catalog_path)?;
        Ok(serde_json::from_str(&raw)?)
    }
}

#[async_trait]
impl RestaurantCatalog for JsonCatalog {
    async fn restaurant_exists(&self, id: &str) -> Result<bool> {
        Ok(self.read_all()?.iter().any(|r| r.id == id))
    }

    async fn restaurant_count(&self) -> Result<usize> {
        Ok(self.read_all()?.len())
    }
}

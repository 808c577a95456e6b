//! Best survival time record
//!
//! Persisted to LocalStorage as a single JSON record. When nothing is stored
//! yet, a 20 second placeholder is written so there is always a time to beat.

use serde::{Deserialize, Serialize};

use crate::consts::BEST_TIME_KEY;
use crate::error::StorageError;
use crate::platform::{KeyValueStore, MemoryStore};
use crate::sim::SurvivalTime;

pub use crate::sim::format_time;

/// The stored best time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BestTimeRecord {
    #[serde(flatten)]
    pub time: SurvivalTime,
    /// True only for the synthetic default record
    pub placeholder: bool,
}

impl Default for BestTimeRecord {
    fn default() -> Self {
        Self {
            time: SurvivalTime::new(0, 20, 0),
            placeholder: true,
        }
    }
}

impl BestTimeRecord {
    /// A real record set by a finished game
    pub fn achieved(time: SurvivalTime) -> Self {
        Self {
            time,
            placeholder: false,
        }
    }

    /// Strictly longer survival beats the record; ties do not
    pub fn is_beaten_by(&self, elapsed: SurvivalTime) -> bool {
        elapsed.as_millis() > self.time.as_millis()
    }

    /// Text for the best-time display
    pub fn label(&self) -> String {
        if self.placeholder {
            format!("Best time: {} (placeholder)", self.time)
        } else {
            format!("Best time: {}", self.time)
        }
    }
}

/// Best-time record bound to its backing store
pub struct BestTimeBook {
    store: Box<dyn KeyValueStore>,
    record: BestTimeRecord,
}

impl BestTimeBook {
    /// Storage key
    const STORAGE_KEY: &'static str = BEST_TIME_KEY;

    /// Load the record from `store`, seeding the placeholder if none exists.
    ///
    /// Unreadable or corrupt records are logged and replaced by the placeholder
    /// in memory; the store is left untouched in that case.
    pub fn open(mut store: Box<dyn KeyValueStore>) -> Self {
        let record = match Self::load(&*store) {
            Ok(Some(record)) => {
                log::info!("Loaded best time {}", record.time);
                record
            }
            Ok(None) => {
                let record = BestTimeRecord::default();
                if let Err(e) = Self::write(&mut *store, &record) {
                    log::warn!("Could not seed placeholder best time: {e}");
                }
                log::info!("No best time found, seeded placeholder");
                record
            }
            Err(e) => {
                log::warn!("Ignoring stored best time: {e}");
                BestTimeRecord::default()
            }
        };

        Self { store, record }
    }

    /// Non-persistent book
    pub fn in_memory() -> Self {
        Self::open(Box::new(MemoryStore::new()))
    }

    /// Read the stored record, if any
    pub fn load(store: &dyn KeyValueStore) -> Result<Option<BestTimeRecord>, StorageError> {
        let Some(json) = store.get(Self::STORAGE_KEY)? else {
            return Ok(None);
        };
        serde_json::from_str(&json)
            .map(Some)
            .map_err(|source| StorageError::Corrupt {
                key: Self::STORAGE_KEY.to_string(),
                source,
            })
    }

    fn write(store: &mut dyn KeyValueStore, record: &BestTimeRecord) -> Result<(), StorageError> {
        let json = serde_json::to_string(record)?;
        store.set(Self::STORAGE_KEY, &json)
    }

    pub fn record(&self) -> &BestTimeRecord {
        &self.record
    }

    /// Whether records survive a reload
    pub fn is_persistent(&self) -> bool {
        self.store.is_persistent()
    }

    /// Offer a finished game's time. Returns true if it set a new best.
    ///
    /// Compares against the stored record (another page may have written a
    /// better one since load), falling back to the cached record when the
    /// store is empty or unreadable. The in-memory record is updated even if
    /// saving fails.
    pub fn submit(&mut self, elapsed: SurvivalTime) -> bool {
        match Self::load(&*self.store) {
            Ok(Some(stored)) => self.record = stored,
            Ok(None) => {}
            Err(e) => log::warn!("Comparing against cached best time: {e}"),
        }

        if !self.record.is_beaten_by(elapsed) {
            return false;
        }

        self.record = BestTimeRecord::achieved(elapsed);
        match Self::write(&mut *self.store, &self.record) {
            Ok(()) => log::info!("New best time saved: {}", elapsed),
            Err(e) => log::error!("New best time {} not saved: {e}", elapsed),
        }
        true
    }
}

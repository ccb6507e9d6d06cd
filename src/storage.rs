//! Storage port for captured leads. The browser build writes to
//! `localStorage`; tests and storage-less browsers use the in-memory store.

use std::cell::RefCell;
use std::rc::Rc;

use thiserror::Error;
use web_sys::{window, Storage};

use crate::config;
use crate::models::lead::LeadRecord;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("local storage is not available")]
    Unavailable,
    #[error("could not read saved leads: {0}")]
    Read(String),
    #[error("could not save lead: {0}")]
    Write(String),
    #[error("saved leads are corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
}

pub trait LeadStore {
    fn load(&self) -> Result<Vec<LeadRecord>, StorageError>;
    fn append(&self, record: LeadRecord) -> Result<(), StorageError>;

    fn latest(&self) -> Result<Option<LeadRecord>, StorageError> {
        Ok(self.load()?.pop())
    }
}

/// Leads kept as a JSON array under a single `localStorage` key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalStorageLeadStore {
    key: String,
}

impl Default for LocalStorageLeadStore {
    fn default() -> Self {
        Self::new(config::LEADS_STORAGE_KEY)
    }
}

impl LocalStorageLeadStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    fn storage(&self) -> Result<Storage, StorageError> {
        window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .ok_or(StorageError::Unavailable)
    }
}

impl LeadStore for LocalStorageLeadStore {
    fn load(&self) -> Result<Vec<LeadRecord>, StorageError> {
        let raw = self
            .storage()?
            .get_item(&self.key)
            .map_err(|e| StorageError::Read(format!("{:?}", e)))?;

        match raw {
            Some(json) if !json.trim().is_empty() => Ok(serde_json::from_str(&json)?),
            _ => Ok(Vec::new()),
        }
    }

    fn append(&self, record: LeadRecord) -> Result<(), StorageError> {
        let mut leads = self.load()?;
        leads.push(record);
        let json = serde_json::to_string(&leads)?;

        self.storage()?
            .set_item(&self.key, &json)
            .map_err(|e| StorageError::Write(format!("{:?}", e)))
    }
}

/// Shared handle to whichever store the app runs with, handed to components
/// through a context.
#[derive(Clone)]
pub struct LeadStoreHandle(pub Rc<dyn LeadStore>);

impl PartialEq for LeadStoreHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl LeadStoreHandle {
    /// `localStorage` when the browser offers it, memory otherwise.
    pub fn detect() -> Self {
        let local = LocalStorageLeadStore::default();
        match local.storage() {
            Ok(_) => Self(Rc::new(local)),
            Err(e) => {
                log::warn!("Falling back to in-memory lead store: {}", e);
                Self(Rc::new(MemoryLeadStore::default()))
            }
        }
    }
}

#[derive(Debug, Default)]
pub struct MemoryLeadStore {
    leads: RefCell<Vec<LeadRecord>>,
    fail_writes: bool,
}

impl MemoryLeadStore {
    /// Store whose writes always fail, like a full or disabled `localStorage`.
    #[cfg(test)]
    pub fn failing() -> Self {
        Self {
            leads: RefCell::new(Vec::new()),
            fail_writes: true,
        }
    }
}

impl LeadStore for MemoryLeadStore {
    fn load(&self) -> Result<Vec<LeadRecord>, StorageError> {
        Ok(self.leads.borrow().clone())
    }

    fn append(&self, record: LeadRecord) -> Result<(), StorageError> {
        if self.fail_writes {
            return Err(StorageError::Write("quota exceeded".to_string()));
        }
        self.leads.borrow_mut().push(record);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn record(id: &str, name: &str) -> LeadRecord {
        LeadRecord {
            id: id.to_string(),
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            phone: String::new(),
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn memory_store_keeps_append_order() {
        let store = MemoryLeadStore::default();
        assert_eq!(store.latest().unwrap(), None);

        store.append(record("1", "Ada")).unwrap();
        store.append(record("2", "Grace")).unwrap();

        let names: Vec<_> = store.load().unwrap().into_iter().map(|l| l.name).collect();
        assert_eq!(names, vec!["Ada", "Grace"]);
        assert_eq!(store.latest().unwrap().map(|l| l.name), Some("Grace".to_string()));
    }

    #[test]
    fn lead_records_serialize_as_flat_json() {
        let json = serde_json::to_value(vec![record("17", "Ada")]).unwrap();
        let first = &json[0];
        for field in ["id", "name", "email", "phone", "timestamp"] {
            assert!(first.get(field).is_some(), "missing {}", field);
        }
    }

    #[test]
    fn corrupt_json_maps_to_corrupt_error() {
        let err: StorageError = serde_json::from_str::<Vec<LeadRecord>>("{not json")
            .unwrap_err()
            .into();
        assert!(matches!(err, StorageError::Corrupt(_)));
    }
}

//! Append-to-front, capped history of completed sessions.

use serde::{Deserialize, Serialize};

use crate::KeyValueStore;
use crate::constants::HISTORY_CAP;

/// Storage key for the serialized collection.
pub const HISTORY_KEY: &str = "sajulotto.history";

/// One persisted session result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryRecord {
    pub id: String,
    pub name: String,
    pub numbers: Vec<u8>,
    pub main_element: String,
    pub timestamp: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_report: Option<String>,
}

/// History CRUD over the platform key-value store.
///
/// The whole collection is rewritten on every mutation; concurrent tabs are
/// last-write-wins by contract.
pub struct HistoryStore<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> HistoryStore<S> {
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// Load the persisted collection. A missing or unreadable collection is
    /// treated as empty rather than an error.
    #[must_use]
    pub fn load_all(&self) -> Vec<HistoryRecord> {
        self.store
            .get(HISTORY_KEY)
            .ok()
            .flatten()
            .and_then(|json| serde_json::from_str(&json).ok())
            .unwrap_or_default()
    }

    /// Prepend `record`, truncate to the cap, and persist.
    ///
    /// # Errors
    ///
    /// Returns the store's error when the collection cannot be written.
    pub fn append(&self, record: HistoryRecord) -> Result<Vec<HistoryRecord>, S::Error> {
        let mut items = self.load_all();
        items.insert(0, record);
        items.truncate(HISTORY_CAP);
        self.persist(&items)?;
        Ok(items)
    }

    /// Remove the record with `id`, if present, and persist.
    ///
    /// # Errors
    ///
    /// Returns the store's error when the collection cannot be written.
    pub fn remove(&self, id: &str) -> Result<Vec<HistoryRecord>, S::Error> {
        let mut items = self.load_all();
        items.retain(|item| item.id != id);
        self.persist(&items)?;
        Ok(items)
    }

    fn persist(&self, items: &[HistoryRecord]) -> Result<(), S::Error> {
        let json = serde_json::to_string(items).expect("history records serialize to JSON");
        self.store.set(HISTORY_KEY, &json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::convert::Infallible;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct MemoryStore {
        values: Rc<RefCell<HashMap<String, String>>>,
    }

    impl KeyValueStore for MemoryStore {
        type Error = Infallible;

        fn get(&self, key: &str) -> Result<Option<String>, Self::Error> {
            Ok(self.values.borrow().get(key).cloned())
        }

        fn set(&self, key: &str, value: &str) -> Result<(), Self::Error> {
            self.values
                .borrow_mut()
                .insert(key.to_string(), value.to_string());
            Ok(())
        }

        fn remove(&self, key: &str) -> Result<(), Self::Error> {
            self.values.borrow_mut().remove(key);
            Ok(())
        }
    }

    fn record(id: u32) -> HistoryRecord {
        HistoryRecord {
            id: id.to_string(),
            name: "Ji-ho".to_string(),
            numbers: vec![1, 2, 3, 4, 5, 6],
            main_element: "Wood".to_string(),
            timestamp: u64::from(id),
            full_report: None,
        }
    }

    #[test]
    fn append_prepends_and_persists() {
        let store = MemoryStore::default();
        let history = HistoryStore::new(store.clone());
        history.append(record(1)).unwrap();
        let items = history.append(record(2)).unwrap();
        assert_eq!(items[0].id, "2");
        assert_eq!(items[1].id, "1");

        let reloaded = HistoryStore::new(store).load_all();
        assert_eq!(reloaded, items);
    }

    #[test]
    fn cap_drops_the_oldest_record() {
        let history = HistoryStore::new(MemoryStore::default());
        for id in 0..50 {
            history.append(record(id)).unwrap();
        }
        assert_eq!(history.load_all().len(), HISTORY_CAP);

        let items = history.append(record(999)).unwrap();
        assert_eq!(items.len(), HISTORY_CAP);
        assert_eq!(items[0].id, "999");
        assert!(!items.iter().any(|r| r.id == "0"), "oldest record dropped");
    }

    #[test]
    fn remove_filters_by_id_only() {
        let history = HistoryStore::new(MemoryStore::default());
        history.append(record(1)).unwrap();
        history.append(record(2)).unwrap();
        let items = history.remove("1").unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, "2");
        let items = history.remove("missing").unwrap();
        assert_eq!(items.len(), 1);
    }

    #[test]
    fn corrupt_or_missing_collection_loads_empty() {
        let store = MemoryStore::default();
        let history = HistoryStore::new(store.clone());
        assert!(history.load_all().is_empty());
        store.set(HISTORY_KEY, "{not json").unwrap();
        assert!(history.load_all().is_empty());
    }

    #[test]
    fn full_report_round_trips_optionally() {
        let history = HistoryStore::new(MemoryStore::default());
        let mut with_report = record(1);
        with_report.full_report = Some("[Opening]\nLong text".to_string());
        history.append(with_report.clone()).unwrap();
        assert_eq!(history.load_all()[0], with_report);
    }
}

//! Membership flag gating history saves.

use crate::KeyValueStore;

/// Storage key for the boolean login flag.
pub const MEMBER_KEY: &str = "sajulotto.member";

/// Thin wrapper over the store's login flag.
pub struct AccountGate<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> AccountGate<S> {
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// Whether a member session is active. Store failures read as logged out.
    #[must_use]
    pub fn is_member(&self) -> bool {
        matches!(self.store.get(MEMBER_KEY), Ok(Some(flag)) if flag == "true")
    }

    /// Persist the member flag.
    ///
    /// # Errors
    ///
    /// Returns the store's error when the flag cannot be written.
    pub fn log_in(&self) -> Result<(), S::Error> {
        self.store.set(MEMBER_KEY, "true")
    }

    /// Clear the member flag.
    ///
    /// # Errors
    ///
    /// Returns the store's error when the flag cannot be removed.
    pub fn log_out(&self) -> Result<(), S::Error> {
        self.store.remove(MEMBER_KEY)
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

    #[test]
    fn flag_round_trips() {
        let gate = AccountGate::new(MemoryStore::default());
        assert!(!gate.is_member());
        gate.log_in().unwrap();
        assert!(gate.is_member());
        gate.log_out().unwrap();
        assert!(!gate.is_member());
    }

    #[test]
    fn unexpected_values_read_as_logged_out() {
        let store = MemoryStore::default();
        store.set(MEMBER_KEY, "yes").unwrap();
        assert!(!AccountGate::new(store).is_member());
    }
}

//! In-memory settings store
//!
//! Used by tests and by hosts without a registry. Can be switched to fail
//! reads or writes to simulate an unavailable backend.

use super::{SettingsStore, StoreError};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;

#[derive(Debug)]
pub struct MemoryStore {
    values: RefCell<HashMap<String, u32>>,
    readable: Cell<bool>,
    writable: Cell<bool>,
}

impl MemoryStore {
    /// Creates an empty, readable and writable store
    pub fn new() -> Self {
        Self {
            values: RefCell::new(HashMap::new()),
            readable: Cell::new(true),
            writable: Cell::new(true),
        }
    }

    /// Creates a store seeded with the given values
    pub fn with_values<'a>(values: impl IntoIterator<Item = (&'a str, u32)>) -> Self {
        let store = Self::new();
        store.values.borrow_mut().extend(
            values
                .into_iter()
                .map(|(name, value)| (name.to_string(), value)),
        );
        store
    }

    /// Makes subsequent reads fail with `StoreError::Unavailable`
    pub fn set_readable(&self, readable: bool) {
        self.readable.set(readable);
    }

    /// Makes subsequent writes fail with `StoreError::Unavailable`
    pub fn set_writable(&self, writable: bool) {
        self.writable.set(writable);
    }

    /// Inspects a stored value regardless of the readable flag
    pub fn get(&self, name: &str) -> Option<u32> {
        self.values.borrow().get(name).copied()
    }

    /// True if nothing has been seeded or written yet
    pub fn is_empty(&self) -> bool {
        self.values.borrow().is_empty()
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SettingsStore for MemoryStore {
    fn read_u32(&self, name: &str) -> Result<Option<u32>, StoreError> {
        if !self.readable.get() {
            return Err(StoreError::Unavailable);
        }
        Ok(self.get(name))
    }

    fn write_u32(&self, name: &str, value: u32) -> Result<(), StoreError> {
        if !self.writable.get() {
            return Err(StoreError::Unavailable);
        }
        self.values.borrow_mut().insert(name.to_string(), value);
        Ok(())
    }
}

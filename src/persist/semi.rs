use super::KeyValueStore;

/// A string value mirrored into a [`KeyValueStore`].
///
/// Read once at construction (falling back when absent or empty), then
/// written on every change. Construction itself never writes.
pub struct SemiPersistent<K> {
    store: K,
    key: String,
    value: String,
}

impl<K: KeyValueStore> SemiPersistent<K> {
    pub fn new(store: K, key: impl Into<String>, fallback: impl Into<String>) -> Self {
        let key = key.into();
        let value = store
            .get(&key)
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| fallback.into());
        Self { store, key, value }
    }

    pub fn get(&self) -> &str {
        &self.value
    }

    /// Updates the value; the store is only touched when it actually changes.
    ///
    /// Write failures are logged and otherwise ignored: the in-memory value
    /// stays authoritative for the session.
    pub fn set(&mut self, value: impl Into<String>) {
        let value = value.into();
        if value == self.value {
            return;
        }
        self.value = value;
        if let Err(e) = self.store.set(&self.key, &self.value) {
            tracing::warn!(key = %self.key, error = %e, "Failed to persist value");
        }
    }

    pub fn store(&self) -> &K {
        &self.store
    }
}

use std::collections::HashMap;

/// Store key for the JSON-encoded photo payload list.
pub const KEY_PHOTOS: &str = "photos";

/// Store key for the locale-formatted capture timestamp.
pub const KEY_TIMESTAMP: &str = "timestamp";

/// Store key for the stringified selected photo count.
pub const KEY_PHOTO_COUNT: &str = "photoCount";

/// Store key for the selected strip format tag.
pub const KEY_FORMAT: &str = "format";

/// A string-valued key/value persistence adapter for the session handoff.
///
/// The typed [`SessionContext`](crate::SessionContext) is the API; this trait
/// only abstracts where the strings live for the duration of one browsing
/// session.
pub trait SessionStore {
    /// Read a value.
    fn get(&self, key: &str) -> Option<String>;

    /// Write a value.
    fn set(&mut self, key: &str, value: String);

    /// Delete a value.
    fn remove(&mut self, key: &str);
}

/// In-process store backed by a `HashMap`.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    values: HashMap<String, String>,
}

impl MemorySessionStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) {
        self.values.insert(key.to_string(), value);
    }

    fn remove(&mut self, key: &str) {
        self.values.remove(key);
    }
}

use anyhow::Context;

use crate::compose::format::StripFormat;
use crate::foundation::{
    core::EncodedPhoto,
    error::{BoothError, BoothResult},
};
use crate::session::store::{
    KEY_FORMAT, KEY_PHOTO_COUNT, KEY_PHOTOS, KEY_TIMESTAMP, SessionStore,
};

/// Typed handoff state passed between the capture and review stages.
///
/// Persisted through a [`SessionStore`] as four string values; photo payloads
/// are hex-encoded inside a JSON array.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionContext {
    /// Captured photos in shot order.
    pub photos: Vec<EncodedPhoto>,
    /// Selected photo count.
    pub count: usize,
    /// Locale-formatted capture timestamp.
    pub timestamp: String,
    /// Selected strip format.
    pub format: StripFormat,
}

impl SessionContext {
    /// Persist this context into `store`.
    pub fn save(&self, store: &mut dyn SessionStore) -> BoothResult<()> {
        let encoded: Vec<String> = self
            .photos
            .iter()
            .map(|p| hex::encode(p.as_bytes()))
            .collect();
        let photos_json = serde_json::to_string(&encoded)
            .map_err(|e| BoothError::session(format!("encode photo list: {e}")))?;
        store.set(KEY_PHOTOS, photos_json);
        store.set(KEY_TIMESTAMP, self.timestamp.clone());
        store.set(KEY_PHOTO_COUNT, self.count.to_string());
        store.set(KEY_FORMAT, self.format.as_str().to_string());
        Ok(())
    }

    /// Load the context back from `store`.
    ///
    /// Returns `Ok(None)` when no photos were stored (the caller's
    /// redirect-to-start condition); malformed stored data is a
    /// [`BoothError::Session`]. A missing count or format falls back to the
    /// photo list length and portrait.
    pub fn load(store: &dyn SessionStore) -> BoothResult<Option<Self>> {
        let Some(photos_json) = store.get(KEY_PHOTOS) else {
            return Ok(None);
        };
        let encoded: Vec<String> = serde_json::from_str(&photos_json)
            .map_err(|e| BoothError::session(format!("parse photo list: {e}")))?;
        if encoded.is_empty() {
            return Ok(None);
        }
        let photos = encoded
            .iter()
            .map(|s| {
                hex::decode(s)
                    .context("decode photo payload hex")
                    .map(EncodedPhoto::new)
            })
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| BoothError::session(e.to_string()))?;

        let count = match store.get(KEY_PHOTO_COUNT) {
            Some(s) => s
                .parse::<usize>()
                .map_err(|e| BoothError::session(format!("parse photo count: {e}")))?,
            None => photos.len(),
        };
        let timestamp = store.get(KEY_TIMESTAMP).unwrap_or_default();
        let format = store
            .get(KEY_FORMAT)
            .and_then(|s| StripFormat::parse(&s))
            .unwrap_or(StripFormat::Portrait);

        Ok(Some(Self {
            photos,
            count,
            timestamp,
            format,
        }))
    }

    /// Remove every session key from `store` (explicit new-session action).
    pub fn clear(store: &mut dyn SessionStore) {
        store.remove(KEY_PHOTOS);
        store.remove(KEY_TIMESTAMP);
        store.remove(KEY_PHOTO_COUNT);
        store.remove(KEY_FORMAT);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/context.rs"]
mod tests;

// libt4t-rs/libt4t/src/store/memory.rs
//! In-memory key-value store for card content and message texts.

use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use log::info;

use crate::config::{Messages, TagConfig};
use crate::ndef::NdefTextRecord;
use crate::store::traits::ContentSource;
use crate::{Error, Result};

const KEY_CONTENT: &str = "ID";
const KEY_SUCCESS_MESSAGE: &str = "S_TOAST";
const KEY_ERROR_MESSAGE: &str = "E_TOAST";

/// Shared key-value store for the tag content and notification texts.
///
/// Clones share the same map, so the application side can update content
/// while a session reads it. Content is validated when it is set: text that
/// would not fit the NDEF file is refused here. Build the store with
/// `for_config` from the same `TagConfig` the service uses, otherwise the
/// check runs against other limits; the session still refuses oversized
/// records at read time with `6A 82`.
#[derive(Debug, Clone)]
pub struct MemoryStore {
    entries: Arc<RwLock<HashMap<String, String>>>,
    language: String,
    max_ndef_size: u16,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::for_config(&TagConfig::default())
    }
}

impl MemoryStore {
    /// Store checking content against `TagConfig::default()`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store whose language and file size limit follow `config`.
    pub fn for_config(config: &TagConfig) -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
            language: config.language.clone(),
            max_ndef_size: config.max_ndef_size,
        }
    }

    /// Replace the card content. Fails with `RecordTooLarge` when the NDEF
    /// file image would exceed the store's size limit.
    pub fn set_card_content(&self, content: &str) -> Result<()> {
        let size = NdefTextRecord::file_len(&self.language, content);
        if size > self.max_ndef_size as usize {
            return Err(Error::RecordTooLarge {
                max: self.max_ndef_size as usize,
                actual: size,
            });
        }
        info!("card content set ({} bytes)", content.len());
        self.write().insert(KEY_CONTENT.to_string(), content.to_string());
        Ok(())
    }

    /// Remove the card content; reads answer `6A 82` until it is set again.
    pub fn clear_card_content(&self) {
        info!("card content cleared");
        self.write().remove(KEY_CONTENT);
    }

    /// Stored content, empty text included.
    pub fn card_content(&self) -> Option<String> {
        self.read().get(KEY_CONTENT).cloned()
    }

    /// Override the text shown after a completed read.
    pub fn set_success_message(&self, message: &str) {
        info!("success message set: {}", message);
        self.write()
            .insert(KEY_SUCCESS_MESSAGE.to_string(), message.to_string());
    }

    /// Override the text shown after a failed read.
    pub fn set_error_message(&self, message: &str) {
        info!("error message set: {}", message);
        self.write()
            .insert(KEY_ERROR_MESSAGE.to_string(), message.to_string());
    }

    /// Configured messages, with defaults for unset entries.
    pub fn messages(&self) -> Messages {
        let defaults = Messages::default();
        let entries = self.read();
        Messages {
            success: entries
                .get(KEY_SUCCESS_MESSAGE)
                .cloned()
                .unwrap_or(defaults.success),
            error: entries
                .get(KEY_ERROR_MESSAGE)
                .cloned()
                .unwrap_or(defaults.error),
        }
    }

    // poisoned locks are recovered
    fn read(&self) -> RwLockReadGuard<'_, HashMap<String, String>> {
        self.entries.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<String, String>> {
        self.entries.write().unwrap_or_else(|e| e.into_inner())
    }
}

impl ContentSource for MemoryStore {
    // one lock: presence and text are read together
    fn current_text(&self) -> Option<String> {
        self.read()
            .get(KEY_CONTENT)
            .filter(|c| !c.is_empty())
            .cloned()
    }
}

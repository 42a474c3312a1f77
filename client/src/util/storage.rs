//! Persisted credential slot.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session reads the slot once at startup and is the only writer. The
//! browser implementation is `localStorage`; server rendering has no storage
//! and sees an empty slot.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

/// A single string-valued storage slot.
pub trait CredentialStore {
    fn load(&self) -> Option<String>;
    fn save(&self, credential: &str);
    fn clear(&self);
}

/// `localStorage`-backed slot under a fixed key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BrowserStore {
    key: String,
}

impl BrowserStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Logs a failed storage write. Returns whether the write went through.
#[cfg(any(test, feature = "hydrate"))]
fn report_write<E>(result: Result<(), E>, action: &str, key: &str) -> bool {
    let ok = result.is_ok();
    if !ok {
        log::warn!("could not {action} credential under {key}");
    }
    ok
}

impl CredentialStore for BrowserStore {
    fn load(&self) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.get_item(&self.key).ok().flatten().filter(|v| !v.is_empty())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn save(&self, credential: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                report_write(storage.set_item(&self.key, credential), "persist", &self.key);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = credential;
        }
    }

    fn clear(&self) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                report_write(storage.remove_item(&self.key), "clear", &self.key);
            }
        }
    }
}

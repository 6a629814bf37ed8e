//! Result history persisted per browser session
//!
//! One JSON array of `OrderResult` records in LocalStorage, written once per
//! submit. A marker in SessionStorage tells a page reload apart from a fresh
//! tab: reloads keep the history, fresh tabs start clean.

use serde::{Deserialize, Serialize};

use crate::game::OrderResult;

/// Append-only log of submitted orders
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResultHistory {
    results: Vec<OrderResult>,
}

impl ResultHistory {
    /// LocalStorage key holding the serialized result array (wasm32 only)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "pizza_fractions_results";
    /// SessionStorage key marking a live session (wasm32 only)
    #[allow(dead_code)]
    const SESSION_KEY: &'static str = "pizza_fractions_session";

    /// Create empty history
    pub fn new() -> Self {
        Self { results: Vec::new() }
    }

    /// Record one submission
    pub fn append(&mut self, result: OrderResult) {
        self.results.push(result);
    }

    pub fn results(&self) -> &[OrderResult] {
        &self.results
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Successful submissions only (the minigame candidate pool)
    pub fn successes(&self) -> impl Iterator<Item = &OrderResult> + '_ {
        self.results.iter().filter(|result| result.success)
    }

    /// Drop every record, in memory and in storage
    pub fn clear(&mut self) {
        self.results.clear();
        Self::erase_storage();
    }

    /// What a load starts from, given the session marker and the raw
    /// stored array
    ///
    /// A dead session marker means this is a new tab, so whatever storage
    /// still holds from the previous session is dropped. Unreadable JSON
    /// falls back to an empty history.
    #[allow(dead_code)]
    fn results_for_session(session_live: bool, stored: Option<&str>) -> Vec<OrderResult> {
        if !session_live {
            return Vec::new();
        }
        stored
            .and_then(|json| serde_json::from_str::<Vec<OrderResult>>(json).ok())
            .unwrap_or_default()
    }

    /// Load history from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let session = web_sys::window()
            .and_then(|w| w.session_storage().ok())
            .flatten();

        let session_live = session
            .as_ref()
            .map(|s| matches!(s.get_item(Self::SESSION_KEY), Ok(Some(_))))
            .unwrap_or(false);

        let stored = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .and_then(|s| s.get_item(Self::STORAGE_KEY).ok())
            .flatten();

        let results = Self::results_for_session(session_live, stored.as_deref());

        if !session_live {
            if let Some(session) = &session {
                let _ = session.set_item(Self::SESSION_KEY, "1");
            }
            Self::erase_storage();
            log::info!("New session, result history cleared");
        } else {
            log::info!("Loaded {} past results", results.len());
        }

        Self { results }
    }

    /// Save history to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(&self.results) {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Result history saved ({} entries)", self.results.len());
            }
        }
    }

    #[cfg(target_arch = "wasm32")]
    fn erase_storage() {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            let _ = storage.remove_item(Self::STORAGE_KEY);
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::new()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn erase_storage() {
        // No-op for native
    }
}

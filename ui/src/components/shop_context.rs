use dioxus::prelude::*;
use serde::{Deserialize, Serialize};

const STORAGE_KEY: &str = "orchard-shop-context";

/// Per-browser shopper state shared across all components.
///
/// Persisted to localStorage so the profile and linked ordering account
/// survive full page reloads (which is how the orders page recovers from
/// a failed fetch).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ShopContext {
    /// Display name chosen during account setup. None until the shopper
    /// signs up; the members area stays closed until then.
    pub shopper_name: Option<String>,
    /// Reference linking this browser to an account in the external
    /// ordering system. None until the shopper connects one; the orders
    /// page treats an unlinked account as simply having no orders.
    pub client_id: Option<String>,
}

impl ShopContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the shopper has completed account setup.
    pub fn is_member(&self) -> bool {
        self.shopper_name.is_some()
    }

    /// Restore persisted context from browser storage, or start fresh.
    pub fn load() -> Self {
        match read_storage(STORAGE_KEY) {
            Some(raw) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                tracing::warn!("Discarding unreadable shop context: {e}");
                Self::new()
            }),
            None => Self::new(),
        }
    }

    /// Persist to browser storage. Best effort; storage may be denied.
    pub fn save(&self) {
        match serde_json::to_string(self) {
            Ok(raw) => write_storage(STORAGE_KEY, &raw),
            Err(e) => tracing::warn!("Failed to encode shop context: {e}"),
        }
    }
}

/// Access the shop context provided at the top of the app.
pub fn use_shop_context() -> Signal<ShopContext> {
    use_context::<Signal<ShopContext>>()
}

#[cfg(target_family = "wasm")]
fn read_storage(key: &str) -> Option<String> {
    web_sys::window()?
        .local_storage()
        .ok()
        .flatten()?
        .get_item(key)
        .ok()
        .flatten()
}

#[cfg(target_family = "wasm")]
fn write_storage(key: &str, value: &str) {
    let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
    if let Some(storage) = storage {
        if storage.set_item(key, value).is_err() {
            tracing::warn!("localStorage write rejected");
        }
    }
}

// Non-WASM stubs for type checking
#[cfg(not(target_family = "wasm"))]
fn read_storage(_key: &str) -> Option<String> {
    None
}

#[cfg(not(target_family = "wasm"))]
fn write_storage(_key: &str, _value: &str) {}

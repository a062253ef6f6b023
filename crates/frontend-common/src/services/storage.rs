//! Browser session storage for the persisted session

use brewhouse_core::{AuthConfig, CoreError, CoreResult, PersistedSession};
use tracing::warn;
use web_sys::Storage;

/// Get sessionStorage
fn get_session_storage() -> Option<Storage> {
    web_sys::window().and_then(|w| w.session_storage().ok().flatten())
}

/// Raw stored session, if any
pub fn load_raw() -> Option<String> {
    get_session_storage()?
        .get_item(AuthConfig::SESSION_STORAGE_KEY)
        .ok()
        .flatten()
}

pub fn save(session: &PersistedSession) -> CoreResult<()> {
    let storage = get_session_storage()
        .ok_or_else(|| CoreError::storage_error("sessionStorage is unavailable"))?;
    storage
        .set_item(AuthConfig::SESSION_STORAGE_KEY, &session.encode()?)
        .map_err(|e| CoreError::storage_error(format!("{e:?}")))
}

pub fn clear() {
    if let Some(storage) = get_session_storage() {
        if let Err(e) = storage.remove_item(AuthConfig::SESSION_STORAGE_KEY) {
            warn!(error = ?e, "failed to clear stored session");
        }
    }
}

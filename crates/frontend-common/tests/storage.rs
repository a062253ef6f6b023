//! Browser-only checks for session storage; run with `wasm-pack test --headless --firefox`
#![cfg(target_arch = "wasm32")]

use brewhouse_core::{PersistedSession, Role, User};
use brewhouse_frontend_common::services::storage;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn session() -> PersistedSession {
    PersistedSession {
        user: User {
            id: "u-1".to_string(),
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            role: Role::Customer,
        },
        token: "token-1".to_string(),
        expires_at: Some(4_102_444_800),
    }
}

#[wasm_bindgen_test]
fn saved_session_can_be_read_back() {
    storage::clear();
    assert!(storage::load_raw().is_none());

    storage::save(&session()).unwrap();
    let raw = storage::load_raw().unwrap();
    assert_eq!(PersistedSession::decode(&raw).unwrap(), session());

    storage::clear();
    assert!(storage::load_raw().is_none());
}

#[wasm_bindgen_test]
fn expired_stored_session_is_not_restored() {
    let expired = PersistedSession {
        expires_at: Some(1),
        ..session()
    };
    storage::save(&expired).unwrap();

    assert!(PersistedSession::restore(storage::load_raw().as_deref(), 10).is_none());
    storage::clear();
}

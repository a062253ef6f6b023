//! Global authentication context and provider

use crate::components::SessionExpiredNotice;
use crate::services::AuthService;
use brewhouse_core::{AuthConfig, AuthView};
use gloo::timers::callback::Interval;
use std::rc::Rc;
use yew::prelude::*;

/// What the provider shares with the tree: a snapshot of the auth slice and
/// the service that writes it
#[derive(Clone, PartialEq)]
pub struct AuthContext {
    pub view: AuthView,
    pub service: AuthService,
}

/// Auth provider props
#[derive(Properties, PartialEq)]
pub struct AuthProviderProps {
    pub children: Children,
}

/// Auth provider component
///
/// Subscribes to the auth store and re-renders the tree with a fresh snapshot
/// on every change.
#[function_component(AuthProvider)]
pub fn auth_provider(props: &AuthProviderProps) -> Html {
    let service = use_memo((), |_| AuthService::new());
    let snapshot = use_state(|| service.reader().state());

    // Subscribe, then start the session check
    {
        let service = service.clone();
        let snapshot = snapshot.clone();
        use_effect_with((), move |_| {
            let reader = service.reader();
            let subscription = {
                let snapshot = snapshot.clone();
                reader.subscribe(move |state| snapshot.set(Rc::clone(state)))
            };
            snapshot.set(reader.state());

            let service = (*service).clone();
            wasm_bindgen_futures::spawn_local(async move {
                service.restore_session().await;
            });

            move || drop(subscription)
        });
    }

    // Periodic expiry check while signed in
    {
        let service = service.clone();
        use_effect_with(snapshot.is_authenticated(), move |authenticated| {
            let interval = authenticated.then(|| {
                let service = service.clone();
                Interval::new(AuthConfig::SESSION_CHECK_INTERVAL_MS, move || {
                    service.validate_expiry();
                })
            });
            move || drop(interval)
        });
    }

    let context = AuthContext {
        view: AuthView::new((*snapshot).clone()),
        service: (*service).clone(),
    };

    html! {
        <ContextProvider<AuthContext> context={context}>
            <SessionExpiredNotice />
            {props.children.clone()}
        </ContextProvider<AuthContext>>
    }
}

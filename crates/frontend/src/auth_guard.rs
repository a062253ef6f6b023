//! Authentication guards for gated routes

use crate::routes::Route;
use brewhouse_core::{GateWatcher, Guarded, Navigate, Redirect, Role, RouteGate};
use brewhouse_frontend_common::{use_auth, use_auth_service};
use tracing::{debug, warn};
use yew::prelude::*;
use yew_router::prelude::*;

/// Router-backed navigation for gate redirects
struct RouterNavigator(Navigator);

impl Navigate for RouterNavigator {
    fn navigate(&self, redirect: &Redirect) {
        let route = Route::recognize(&redirect.to).unwrap_or(Route::Home);
        debug!(?route, replace = redirect.replace, "guard redirect");
        if redirect.replace {
            self.0.replace(&route);
        } else {
            self.0.push(&route);
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct RouteGuardProps {
    pub gate: RouteGate,
    pub children: Children,
}

/// Renders a spinner, redirects, or renders children, as the gate decides.
///
/// Rendering follows the snapshot the provider hands down. Navigation is left
/// to a [`GateWatcher`] subscribed to the store for as long as the guard is
/// mounted, so each change into a redirect navigates exactly once.
#[function_component(RouteGuard)]
pub fn route_guard(props: &RouteGuardProps) -> Html {
    let auth = use_auth();
    let reader = use_auth_service().reader();
    let navigator = use_navigator();

    use_effect_with((props.gate.clone(), reader), move |(gate, reader)| {
        let watcher = match navigator {
            Some(navigator) => Some(GateWatcher::watch(
                gate.clone(),
                reader,
                RouterNavigator(navigator),
            )),
            None => {
                warn!("route guard rendered outside a router");
                None
            }
        };
        move || drop(watcher)
    });

    match props.gate.guard(&auth, props.children.clone()) {
        Guarded::Spinner => html! {
            <div class="flex items-center justify-center min-h-[40vh]">
                <div class="text-center p-10" role="status">
                    <div class="w-10 h-10 border-4 border-stone-200 border-t-amber-700 rounded-full animate-spin mx-auto mb-5"></div>
                    <p class="text-stone-600 text-sm m-0">{"Checking your session..."}</p>
                </div>
            </div>
        },
        Guarded::Redirecting(_) => html! {},
        Guarded::Children(children) => html! { <>{ children }</> },
    }
}

#[derive(Properties, PartialEq)]
pub struct GuardedRouteProps {
    pub children: Children,
}

/// Only for visitors who are not signed in; signed-in users go home
#[function_component(PublicOnlyRoute)]
pub fn public_only_route(props: &GuardedRouteProps) -> Html {
    html! {
        <RouteGuard gate={RouteGate::PublicOnly}>{ props.children.clone() }</RouteGuard>
    }
}

/// Any signed-in user; everyone else goes to the login page
#[function_component(ProtectedRoute)]
pub fn protected_route(props: &GuardedRouteProps) -> Html {
    html! {
        <RouteGuard gate={RouteGate::Authenticated}>{ props.children.clone() }</RouteGuard>
    }
}

/// Admins only
#[function_component(AdminRoute)]
pub fn admin_route(props: &GuardedRouteProps) -> Html {
    html! {
        <RouteGuard gate={RouteGate::Role(Role::Admin)}>{ props.children.clone() }</RouteGuard>
    }
}

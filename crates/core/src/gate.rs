//! Route gates
//!
//! A gate looks at the auth slice and decides whether a route shows a loading
//! indicator, sends the visitor elsewhere, or renders its content. Checks run
//! in a fixed order: loading first, then the redirect rule, then render.

use crate::auth::{AuthState, Role};
use crate::config::AuthConfig;
use crate::store::{AuthReader, Subscription};
use std::cell::RefCell;
use std::rc::Rc;
use tracing::debug;

/// Client-side navigation request
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Redirect {
    pub to: String,
    /// Replace the current history entry instead of pushing a new one
    pub replace: bool,
}

impl Redirect {
    /// Redirect that replaces the current history entry
    pub fn replace(to: impl Into<String>) -> Self {
        Self {
            to: to.into(),
            replace: true,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GateDecision {
    Loading,
    Redirect(Redirect),
    Render,
}

/// Access rule attached to a route
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RouteGate {
    /// Only for visitors who are not signed in (login, signup)
    PublicOnly,
    /// Any signed-in user
    Authenticated,
    /// Signed-in users holding exactly this role
    Role(Role),
}

/// What a guarded route renders for a given state
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Guarded<C> {
    Spinner,
    Redirecting(Redirect),
    Children(C),
}

impl RouteGate {
    /// Decide for `state`. The `error` field never affects the outcome.
    pub fn evaluate(&self, state: &AuthState) -> GateDecision {
        if state.is_loading() {
            return GateDecision::Loading;
        }

        match self {
            Self::PublicOnly => {
                if state.is_authenticated() {
                    GateDecision::Redirect(Redirect::replace(AuthConfig::ROOT_PATH))
                } else {
                    GateDecision::Render
                }
            }
            Self::Authenticated => {
                if state.is_authenticated() {
                    GateDecision::Render
                } else {
                    GateDecision::Redirect(Redirect::replace(AuthConfig::LOGIN_PATH))
                }
            }
            Self::Role(role) => match state.role() {
                None => GateDecision::Redirect(Redirect::replace(AuthConfig::LOGIN_PATH)),
                Some(current) if current == role => GateDecision::Render,
                Some(_) => GateDecision::Redirect(Redirect::replace(AuthConfig::ROOT_PATH)),
            },
        }
    }

    /// Apply the decision to `children`, handing them back untouched when the
    /// route may render.
    pub fn guard<C>(&self, state: &AuthState, children: C) -> Guarded<C> {
        match self.evaluate(state) {
            GateDecision::Loading => Guarded::Spinner,
            GateDecision::Redirect(redirect) => Guarded::Redirecting(redirect),
            GateDecision::Render => Guarded::Children(children),
        }
    }
}

/// Navigation primitive able to perform a [`Redirect`]
pub trait Navigate {
    fn navigate(&self, redirect: &Redirect);
}

impl<N: Navigate + ?Sized> Navigate for Rc<N> {
    fn navigate(&self, redirect: &Redirect) {
        (**self).navigate(redirect);
    }
}

/// Keeps a gate's decision current by subscribing to the auth slice.
///
/// A redirect is issued once each time the decision becomes a redirect;
/// further notifications that produce the same decision do not navigate again.
pub struct GateWatcher {
    decision: Rc<RefCell<GateDecision>>,
    _subscription: Subscription,
}

impl GateWatcher {
    pub fn watch<N>(gate: RouteGate, reader: &AuthReader, navigator: N) -> Self
    where
        N: Navigate + 'static,
    {
        let initial = gate.evaluate(&reader.state());
        if let GateDecision::Redirect(redirect) = &initial {
            debug!(?gate, to = %redirect.to, "gate redirecting");
            navigator.navigate(redirect);
        }
        let decision = Rc::new(RefCell::new(initial));

        let subscription = {
            let decision = Rc::clone(&decision);
            reader.subscribe(move |state| {
                let next = gate.evaluate(state);
                let changed = {
                    let mut current = decision.borrow_mut();
                    if *current == next {
                        false
                    } else {
                        *current = next.clone();
                        true
                    }
                };

                if changed {
                    if let GateDecision::Redirect(redirect) = &next {
                        debug!(?gate, to = %redirect.to, "gate redirecting");
                        navigator.navigate(redirect);
                    }
                }
            })
        };

        Self {
            decision,
            _subscription: subscription,
        }
    }

    pub fn decision(&self) -> GateDecision {
        self.decision.borrow().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{AuthStateParts, User};
    use crate::error::AuthError;

    fn user(role: Role) -> User {
        User {
            id: "u-5".to_string(),
            name: "Mo".to_string(),
            email: "mo@example.com".to_string(),
            role,
        }
    }

    #[test]
    fn loading_wins_over_everything() {
        let refreshing = AuthState::from_parts(AuthStateParts {
            user: Some(user(Role::Admin)),
            is_authenticated: true,
            is_loading: true,
            error: Some(AuthError::InvalidCredentials),
        })
        .unwrap();

        for gate in [
            RouteGate::PublicOnly,
            RouteGate::Authenticated,
            RouteGate::Role(Role::Admin),
        ] {
            assert_eq!(gate.evaluate(&AuthState::loading()), GateDecision::Loading);
            assert_eq!(gate.evaluate(&refreshing), GateDecision::Loading);
        }
    }

    #[test]
    fn public_only_ignores_error() {
        let state = AuthState::failed(AuthError::network("offline"));
        assert_eq!(RouteGate::PublicOnly.evaluate(&state), GateDecision::Render);
    }

    #[test]
    fn authenticated_gate_sends_anonymous_to_login() {
        assert_eq!(
            RouteGate::Authenticated.evaluate(&AuthState::anonymous()),
            GateDecision::Redirect(Redirect::replace("/login"))
        );
        assert_eq!(
            RouteGate::Authenticated.evaluate(&AuthState::authenticated(user(Role::Customer))),
            GateDecision::Render
        );
    }

    #[test]
    fn role_gate() {
        let admin_only = RouteGate::Role(Role::Admin);
        assert_eq!(
            admin_only.evaluate(&AuthState::anonymous()),
            GateDecision::Redirect(Redirect::replace("/login"))
        );
        assert_eq!(
            admin_only.evaluate(&AuthState::authenticated(user(Role::Customer))),
            GateDecision::Redirect(Redirect::replace("/"))
        );
        assert_eq!(
            admin_only.evaluate(&AuthState::authenticated(user(Role::Admin))),
            GateDecision::Render
        );
    }

    #[test]
    fn guard_returns_children_untouched() {
        let children = vec!["login-form", "footer"];
        assert_eq!(
            RouteGate::PublicOnly.guard(&AuthState::anonymous(), children.clone()),
            Guarded::Children(children)
        );
    }
}

//! Auth store: one writer, many readers
//!
//! [`AuthStore`] is the only handle able to change the auth slice. Everyone
//! else gets an [`AuthReader`], which can read the current state and subscribe
//! to changes. Notifications are delivered synchronously on the dispatching
//! call stack, so a subscriber always re-evaluates against the state that was
//! just written.

use crate::auth::{AuthAction, AuthState};
use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};
use tracing::{debug, trace};

type Listener = Rc<dyn Fn(&Rc<AuthState>)>;

struct Inner {
    state: Rc<AuthState>,
    listeners: Vec<(u64, Listener)>,
    next_id: u64,
}

impl Inner {
    fn subscribe(this: &Rc<RefCell<Self>>, listener: Listener) -> Subscription {
        let mut inner = this.borrow_mut();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.listeners.push((id, listener));
        trace!(subscription = id, "auth subscriber added");

        Subscription {
            id,
            inner: Rc::downgrade(this),
        }
    }

    fn is_subscribed(&self, id: u64) -> bool {
        self.listeners.iter().any(|(sid, _)| *sid == id)
    }
}

/// Owner of the auth slice and its single write path
pub struct AuthStore {
    inner: Rc<RefCell<Inner>>,
}

/// Read-only, cloneable view of an [`AuthStore`]
#[derive(Clone)]
pub struct AuthReader {
    inner: Rc<RefCell<Inner>>,
}

/// Keeps a listener registered; dropping it unsubscribes
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    id: u64,
    inner: Weak<RefCell<Inner>>,
}

impl Default for AuthStore {
    fn default() -> Self {
        Self::new()
    }
}

impl AuthStore {
    /// Create a store in the initial loading state
    pub fn new() -> Self {
        Self::with_state(AuthState::default())
    }

    pub fn with_state(state: AuthState) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                state: Rc::new(state),
                listeners: Vec::new(),
                next_id: 0,
            })),
        }
    }

    /// Hand out a read-only handle
    pub fn reader(&self) -> AuthReader {
        AuthReader {
            inner: Rc::clone(&self.inner),
        }
    }

    pub fn state(&self) -> Rc<AuthState> {
        Rc::clone(&self.inner.borrow().state)
    }

    pub fn subscribe(&self, listener: impl Fn(&Rc<AuthState>) + 'static) -> Subscription {
        Inner::subscribe(&self.inner, Rc::new(listener))
    }

    /// Apply `action` and notify subscribers if the state changed.
    ///
    /// Returns whether the state changed. Listeners may dispatch again; once a
    /// nested dispatch has replaced the state, the remaining listeners of the
    /// outer dispatch are skipped because they were already told about the
    /// newer state.
    pub fn dispatch(&self, action: AuthAction) -> bool {
        let kind = action.kind();
        let (next, listeners) = {
            let mut inner = self.inner.borrow_mut();
            let next = inner.state.reduce(action);
            if next == *inner.state {
                trace!(action = kind, "auth state unchanged");
                return false;
            }
            let next = Rc::new(next);
            inner.state = Rc::clone(&next);
            let listeners: Vec<(u64, Listener)> = inner
                .listeners
                .iter()
                .map(|(id, listener)| (*id, Rc::clone(listener)))
                .collect();
            (next, listeners)
        };

        debug!(
            action = kind,
            loading = next.is_loading(),
            authenticated = next.is_authenticated(),
            has_error = next.error().is_some(),
            "auth state changed"
        );

        for (id, listener) in listeners {
            {
                let inner = self.inner.borrow();
                if !Rc::ptr_eq(&inner.state, &next) {
                    break;
                }
                if !inner.is_subscribed(id) {
                    continue;
                }
            }
            trace!(subscription = id, "notifying auth subscriber");
            listener(&next);
        }

        true
    }
}

impl AuthReader {
    pub fn state(&self) -> Rc<AuthState> {
        Rc::clone(&self.inner.borrow().state)
    }

    pub fn subscribe(&self, listener: impl Fn(&Rc<AuthState>) + 'static) -> Subscription {
        Inner::subscribe(&self.inner, Rc::new(listener))
    }

    /// Number of live subscriptions
    pub fn subscriber_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }
}

impl PartialEq for AuthReader {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(inner) = self.inner.upgrade() {
            inner.borrow_mut().listeners.retain(|(id, _)| *id != self.id);
            trace!(subscription = self.id, "auth subscriber removed");
        }
    }
}

impl fmt::Debug for AuthStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthStore")
            .field("state", &self.inner.borrow().state)
            .finish_non_exhaustive()
    }
}

impl fmt::Debug for AuthReader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthReader")
            .field("state", &self.inner.borrow().state)
            .finish_non_exhaustive()
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{Role, User};
    use std::cell::Cell;

    fn admin() -> User {
        User {
            id: "u-9".to_string(),
            name: "Grace".to_string(),
            email: "grace@example.com".to_string(),
            role: Role::Admin,
        }
    }

    #[test]
    fn reader_sees_writes() {
        let store = AuthStore::new();
        let reader = store.reader();
        assert!(reader.state().is_loading());

        store.dispatch(AuthAction::SessionResolved(Some(admin())));
        assert!(reader.state().is_authenticated());
        assert_eq!(reader, store.reader());
    }

    #[test]
    fn notifies_only_on_change() {
        let store = AuthStore::new();
        let calls = Rc::new(Cell::new(0));
        let _sub = {
            let calls = Rc::clone(&calls);
            store.reader().subscribe(move |_| calls.set(calls.get() + 1))
        };

        assert!(store.dispatch(AuthAction::SessionResolved(None)));
        assert!(!store.dispatch(AuthAction::Logout));
        assert!(!store.dispatch(AuthAction::ClearError));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn dropping_subscription_unsubscribes() {
        let store = AuthStore::new();
        let reader = store.reader();
        let calls = Rc::new(Cell::new(0));
        let sub = {
            let calls = Rc::clone(&calls);
            reader.subscribe(move |_| calls.set(calls.get() + 1))
        };
        assert_eq!(reader.subscriber_count(), 1);

        drop(sub);
        assert_eq!(reader.subscriber_count(), 0);
        store.dispatch(AuthAction::Logout);
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn listeners_run_in_subscription_order() {
        let store = AuthStore::new();
        let order = Rc::new(RefCell::new(Vec::new()));
        let _first = {
            let order = Rc::clone(&order);
            store.subscribe(move |_| order.borrow_mut().push("first"))
        };
        let _second = {
            let order = Rc::clone(&order);
            store.subscribe(move |_| order.borrow_mut().push("second"))
        };

        store.dispatch(AuthAction::Logout);
        assert_eq!(*order.borrow(), vec!["first", "second"]);
    }

    #[test]
    fn nested_dispatch_does_not_deliver_stale_state() {
        let store = Rc::new(AuthStore::new());
        let seen = Rc::new(RefCell::new(Vec::new()));

        // First listener signs the user out as soon as anyone signs in.
        let _bouncer = {
            let weak = Rc::downgrade(&store);
            store.subscribe(move |state| {
                if state.is_authenticated() {
                    if let Some(store) = weak.upgrade() {
                        store.dispatch(AuthAction::Logout);
                    }
                }
            })
        };
        let _recorder = {
            let seen = Rc::clone(&seen);
            store.subscribe(move |state| seen.borrow_mut().push(state.is_authenticated()))
        };

        store.dispatch(AuthAction::LoginSucceeded(admin()));
        assert_eq!(*seen.borrow(), vec![false]);
        assert!(!store.state().is_authenticated());
    }

    #[test]
    fn subscription_outliving_store_is_harmless() {
        let store = AuthStore::new();
        let sub = store.subscribe(|_| {});
        drop(store);
        drop(sub);
    }
}

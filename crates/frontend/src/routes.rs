//! Route tree

use crate::auth_guard::{AdminRoute, ProtectedRoute, PublicOnlyRoute};
use crate::layouts::{AuthLayout, MainLayout};
use crate::pages::{
    AccountPage, AdminPage, HomePage, LoginPage, MenuPage, NotFoundPage, SignupPage,
};
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, Routable)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/menu")]
    Menu,
    #[at("/login")]
    Login,
    #[at("/signup")]
    Signup,
    #[at("/account")]
    Account,
    #[at("/admin")]
    Admin,
    #[not_found]
    #[at("/404")]
    NotFound,
}

pub fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <MainLayout><HomePage /></MainLayout> },
        Route::Menu => html! { <MainLayout><MenuPage /></MainLayout> },
        Route::Login => html! {
            <AuthLayout>
                <PublicOnlyRoute><LoginPage /></PublicOnlyRoute>
            </AuthLayout>
        },
        Route::Signup => html! {
            <AuthLayout>
                <PublicOnlyRoute><SignupPage /></PublicOnlyRoute>
            </AuthLayout>
        },
        Route::Account => html! {
            <MainLayout>
                <ProtectedRoute><AccountPage /></ProtectedRoute>
            </MainLayout>
        },
        Route::Admin => html! {
            <MainLayout>
                <AdminRoute><AdminPage /></AdminRoute>
            </MainLayout>
        },
        Route::NotFound => html! { <MainLayout><NotFoundPage /></MainLayout> },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use brewhouse_core::AuthConfig;

    #[test]
    fn gate_targets_are_routes() {
        assert_eq!(Route::Home.to_path(), AuthConfig::ROOT_PATH);
        assert_eq!(Route::Login.to_path(), AuthConfig::LOGIN_PATH);
        assert_eq!(Route::recognize(AuthConfig::ROOT_PATH), Some(Route::Home));
        assert_eq!(Route::recognize(AuthConfig::LOGIN_PATH), Some(Route::Login));
    }
}

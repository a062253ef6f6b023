//! Layout shells wrapping routed pages

use crate::routes::Route;
use brewhouse_frontend_common::{use_auth, use_auth_service};
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub children: Children,
}

/// Storefront shell: header navigation, page content, footer
#[function_component(MainLayout)]
pub fn main_layout(props: &LayoutProps) -> Html {
    let auth = use_auth();
    let service = use_auth_service();

    let on_logout = Callback::from(move |_: MouseEvent| {
        let service = service.clone();
        wasm_bindgen_futures::spawn_local(async move {
            service.logout().await;
        });
    });

    html! {
        <div class="min-h-screen flex flex-col bg-stone-50 text-stone-900">
            <header class="bg-white border-b border-stone-200">
                <nav class="max-w-6xl mx-auto px-4 h-16 flex items-center justify-between">
                    <Link<Route> to={Route::Home} classes="text-2xl font-bold text-amber-800">
                        {"Brewhouse"}
                    </Link<Route>>
                    <div class="flex items-center gap-6 text-sm font-medium">
                        <Link<Route> to={Route::Menu} classes="hover:text-amber-700">{"Menu"}</Link<Route>>
                        if auth.is_admin {
                            <Link<Route> to={Route::Admin} classes="hover:text-amber-700">{"Admin"}</Link<Route>>
                        }
                        if let Some(user) = auth.user() {
                            <Link<Route> to={Route::Account} classes="hover:text-amber-700">
                                {format!("Hi, {}", user.name)}
                            </Link<Route>>
                            <button onclick={on_logout} class="text-stone-500 hover:text-stone-900">
                                {"Sign out"}
                            </button>
                        } else if !auth.is_loading() {
                            <Link<Route> to={Route::Login} classes="px-4 py-2 rounded-md text-white bg-amber-700 hover:bg-amber-800">
                                {"Sign in"}
                            </Link<Route>>
                        }
                    </div>
                </nav>
            </header>

            <main class="flex-1 max-w-6xl w-full mx-auto px-4 py-10">
                { props.children.clone() }
            </main>

            <footer class="border-t border-stone-200 py-8 text-center text-sm text-stone-500">
                {"© Brewhouse Coffee. Roasted in small batches."}
            </footer>
        </div>
    }
}

/// Centered card for the sign-in and sign-up forms
#[function_component(AuthLayout)]
pub fn auth_layout(props: &LayoutProps) -> Html {
    html! {
        <div class="min-h-screen bg-gradient-to-br from-amber-50 to-stone-200 flex items-center justify-center px-4">
            <div class="max-w-md w-full">
                <div class="text-center mb-8">
                    <Link<Route> to={Route::Home} classes="text-3xl font-bold text-amber-800">
                        {"Brewhouse"}
                    </Link<Route>>
                    <p class="mt-2 text-stone-600">{"Order ahead, skip the line."}</p>
                </div>
                <div class="bg-white rounded-2xl shadow-lg p-8">
                    { props.children.clone() }
                </div>
            </div>
        </div>
    }
}

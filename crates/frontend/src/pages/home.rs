use crate::catalog::{self, format_price};
use crate::routes::Route;
use brewhouse_frontend_common::use_auth;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(HomePage)]
pub fn home_page() -> Html {
    let auth = use_auth();

    html! {
        <>
            <section class="text-center py-12">
                <h1 class="text-4xl sm:text-5xl font-extrabold tracking-tight">
                    {"Fresh coffee, ready when you are"}
                </h1>
                <p class="mt-4 max-w-xl mx-auto text-lg text-stone-600">
                    {"Order ahead from our espresso bar and bakery, then pick up at the counter."}
                </p>
                <div class="mt-8 flex justify-center gap-4">
                    <Link<Route> to={Route::Menu} classes="px-6 py-3 rounded-md text-white bg-amber-700 hover:bg-amber-800">
                        {"See the menu"}
                    </Link<Route>>
                    if !auth.is_authenticated() {
                        <Link<Route> to={Route::Signup} classes="px-6 py-3 rounded-md bg-white border border-stone-300 hover:bg-stone-100">
                            {"Create an account"}
                        </Link<Route>>
                    }
                </div>
            </section>

            <section class="mt-8">
                <h2 class="text-sm font-semibold uppercase tracking-wide text-amber-700">{"Featured"}</h2>
                <div class="mt-4 grid gap-6 sm:grid-cols-3">
                    { for catalog::featured().map(|item| html! {
                        <div class="bg-white rounded-lg shadow-sm p-6">
                            <div class="flex justify-between items-baseline">
                                <h3 class="font-semibold">{item.name}</h3>
                                <span class="text-amber-800">{format_price(item.price_cents)}</span>
                            </div>
                            <p class="mt-2 text-sm text-stone-600">{item.description}</p>
                        </div>
                    }) }
                </div>
            </section>
        </>
    }
}

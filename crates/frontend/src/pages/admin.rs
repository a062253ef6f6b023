use crate::catalog::{Category, MENU, in_category};
use brewhouse_frontend_common::use_auth;
use yew::prelude::*;

#[function_component(AdminPage)]
pub fn admin_page() -> Html {
    let auth = use_auth();
    let name = auth.user().map(|user| user.name.clone()).unwrap_or_default();

    html! {
        <div class="space-y-8">
            <div>
                <h1 class="text-3xl font-bold">{"Shop dashboard"}</h1>
                <p class="mt-1 text-stone-600">{format!("Signed in as {name}")}</p>
            </div>
            <div class="grid gap-6 sm:grid-cols-2 lg:grid-cols-5">
                <div class="bg-white rounded-lg shadow-sm p-6">
                    <p class="text-sm text-stone-500">{"Menu items"}</p>
                    <p class="text-3xl font-bold">{MENU.len().to_string()}</p>
                </div>
                { for Category::ALL.into_iter().map(|category| html! {
                    <div class="bg-white rounded-lg shadow-sm p-6">
                        <p class="text-sm text-stone-500">{category.label()}</p>
                        <p class="text-3xl font-bold">{in_category(category).count().to_string()}</p>
                    </div>
                }) }
            </div>
        </div>
    }
}

use crate::catalog::{self, Category, format_price};
use yew::prelude::*;

#[function_component(MenuPage)]
pub fn menu_page() -> Html {
    html! {
        <div class="space-y-10">
            <h1 class="text-3xl font-bold">{"Menu"}</h1>
            { for Category::ALL.into_iter().map(|category| html! {
                <section>
                    <h2 class="text-xl font-semibold border-b border-stone-200 pb-2">{category.label()}</h2>
                    <ul class="mt-4 divide-y divide-stone-100">
                        { for catalog::in_category(category).map(|item| html! {
                            <li class="py-3 flex justify-between gap-4">
                                <div>
                                    <p class="font-medium">{item.name}</p>
                                    <p class="text-sm text-stone-600">{item.description}</p>
                                </div>
                                <span class="text-amber-800 whitespace-nowrap">{format_price(item.price_cents)}</span>
                            </li>
                        }) }
                    </ul>
                </section>
            }) }
        </div>
    }
}

use crate::routes::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <div class="text-center py-20">
            <h1 class="text-4xl font-bold">{"Page not found"}</h1>
            <p class="mt-4 text-stone-600">{"We couldn't find what you were looking for."}</p>
            <Link<Route> to={Route::Home} classes="mt-6 inline-block text-amber-700 font-medium">
                {"Back to the shop"}
            </Link<Route>>
        </div>
    }
}

use super::{INPUT_CLASS, SUBMIT_CLASS, bind_input};
use crate::routes::Route;
use brewhouse_frontend_common::auth::form_error;
use brewhouse_frontend_common::{use_auth, use_auth_service};
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let auth = use_auth();
    let service = use_auth_service();
    let email = use_state(String::new);
    let password = use_state(String::new);

    let on_submit = {
        let email = email.clone();
        let password = password.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let service = service.clone();
            let email = (*email).clone();
            let password = (*password).clone();
            wasm_bindgen_futures::spawn_local(async move {
                service.login(email, password).await;
            });
        })
    };

    html! {
        <form onsubmit={on_submit} class="space-y-5">
            <h1 class="text-xl font-semibold text-stone-900">{"Sign in"}</h1>

            if let Some(message) = auth.error().and_then(form_error) {
                <div class="p-3 bg-red-50 text-red-700 rounded text-sm">
                    {message}
                </div>
            }

            <label class="block">
                <span class="text-sm text-stone-700">{"Email"}</span>
                <input
                    type="email"
                    required=true
                    autocomplete="email"
                    class={INPUT_CLASS}
                    value={(*email).clone()}
                    oninput={bind_input(&email)}
                />
            </label>
            <label class="block">
                <span class="text-sm text-stone-700">{"Password"}</span>
                <input
                    type="password"
                    required=true
                    autocomplete="current-password"
                    class={INPUT_CLASS}
                    value={(*password).clone()}
                    oninput={bind_input(&password)}
                />
            </label>

            <button type="submit" class={SUBMIT_CLASS}>{"Sign in"}</button>

            <p class="text-center text-sm text-stone-600">
                {"New here? "}
                <Link<Route> to={Route::Signup} classes="text-amber-700 font-medium">
                    {"Create an account"}
                </Link<Route>>
            </p>
        </form>
    }
}

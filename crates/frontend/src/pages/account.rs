use brewhouse_frontend_common::use_auth;
use yew::prelude::*;

#[function_component(AccountPage)]
pub fn account_page() -> Html {
    let auth = use_auth();
    let Some(user) = auth.user() else {
        return html! {};
    };

    html! {
        <div class="max-w-lg bg-white rounded-lg shadow-sm p-8">
            <h1 class="text-2xl font-bold">{"Your account"}</h1>
            <dl class="mt-6 space-y-3 text-sm">
                <div class="flex justify-between">
                    <dt class="text-stone-500">{"Name"}</dt>
                    <dd>{user.name.clone()}</dd>
                </div>
                <div class="flex justify-between">
                    <dt class="text-stone-500">{"Email"}</dt>
                    <dd>{user.email.clone()}</dd>
                </div>
                <div class="flex justify-between">
                    <dt class="text-stone-500">{"Role"}</dt>
                    <dd>
                        <span class="px-2 py-0.5 rounded-full bg-amber-100 text-amber-800">
                            {user.role.to_string()}
                        </span>
                    </dd>
                </div>
            </dl>
        </div>
    }
}

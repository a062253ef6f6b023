//! Session expired notice

use crate::hooks::{use_auth, use_auth_service};
use brewhouse_core::{AuthConfig, AuthError};
use yew::prelude::*;

/// Banner shown after a signed-in session lapses
#[function_component(SessionExpiredNotice)]
pub fn session_expired_notice() -> Html {
    let auth = use_auth();
    let service = use_auth_service();

    if auth.error() != Some(&AuthError::SessionExpired) {
        return html! {};
    }

    let on_dismiss = Callback::from(move |_: MouseEvent| service.clear_error());

    html! {
        <div class="fixed top-4 inset-x-0 flex justify-center z-50 px-4">
            <div class="bg-amber-50 border border-amber-200 rounded-lg p-4 max-w-md w-full shadow-lg flex items-start gap-3">
                <svg class="w-6 h-6 text-amber-600 shrink-0" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                    <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2"
                        d="M12 8v4l3 3m6-3a9 9 0 11-18 0 9 9 0 0118 0z" />
                </svg>
                <div class="flex-1">
                    <p class="font-semibold text-amber-900">{"Session expired"}</p>
                    <p class="text-sm text-amber-800 mt-1">
                        {"Your session has expired. "}
                        <a href={AuthConfig::LOGIN_PATH} class="underline font-medium">{"Sign in again"}</a>
                        {" to keep ordering."}
                    </p>
                </div>
                <button
                    onclick={on_dismiss}
                    class="text-amber-700 hover:text-amber-900 text-sm"
                    aria-label="Dismiss"
                >
                    {"✕"}
                </button>
            </div>
        </div>
    }
}

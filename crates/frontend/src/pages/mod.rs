mod account;
mod admin;
mod home;
mod login;
mod menu;
mod not_found;
mod signup;

pub use account::AccountPage;
pub use admin::AdminPage;
pub use home::HomePage;
pub use login::LoginPage;
pub use menu::MenuPage;
pub use not_found::NotFoundPage;
pub use signup::SignupPage;

use web_sys::HtmlInputElement;
use yew::prelude::*;

/// Keep a text field's value in `state`
fn bind_input(state: &UseStateHandle<String>) -> Callback<InputEvent> {
    let state = state.clone();
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        state.set(input.value());
    })
}

const INPUT_CLASS: &str = "w-full px-3 py-2 border border-stone-300 rounded-md focus:outline-none focus:ring-2 focus:ring-amber-600";
const SUBMIT_CLASS: &str = "w-full py-3 rounded-md text-white font-medium bg-amber-700 hover:bg-amber-800 transition-colors";

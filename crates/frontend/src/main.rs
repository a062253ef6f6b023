mod app;
mod auth_guard;
mod catalog;
mod layouts;
mod pages;
mod routes;

use app::App;
use brewhouse_frontend_common::init_logging;

fn main() {
    init_logging();
    yew::Renderer::<App>::new().render();
}

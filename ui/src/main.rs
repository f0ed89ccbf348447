mod api;
mod components;
mod config;
mod error;
mod notice;
mod store;
mod tracker;
mod types;
mod view;

use components::dashboard::Dashboard;
use yew::prelude::*;

#[function_component(App)]
fn app() -> Html {
    html! {
        <div class="app">
            <header class="header">
                <h1>{"Price Tracker"}</h1>
                <p class="subtitle">{"Get an e-mail when a product drops to your target price."}</p>
            </header>
            <main class="main">
                <Dashboard />
            </main>
        </div>
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    yew::Renderer::<App>::new().render();
}

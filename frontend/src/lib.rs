pub mod accuracy;
pub mod config;
pub mod hooks;
pub mod pages;
pub mod styles;

use yew::prelude::*;

use crate::pages::roulette::Roulette;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <div class="relative min-h-screen w-full">
            <div class="fixed inset-0 bg-white dark:bg-gray-950 -z-50"></div>
            <div class="relative z-0 mx-auto py-8">
                <Roulette />
            </div>
        </div>
    }
}

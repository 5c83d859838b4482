// Home page - birds background, hero, about
use yew::prelude::*;

use crate::sections::{About, BirdsBackground, Hero};

#[function_component(HomePage)]
pub fn home_page() -> Html {
    html! {
        <div class="min-h-screen text-gray-800 dark:text-gray-100 relative">
            <BirdsBackground />
            <Hero />
            <About />
        </div>
    }
}

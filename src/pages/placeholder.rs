use yew::prelude::*;
use yew_router::prelude::*;

use crate::routes::Route;

#[derive(Properties, PartialEq)]
pub struct PlaceholderProps {
    pub title: AttrValue,
}

/// Stand-in for routes whose content lives outside this crate.
#[function_component(PlaceholderPage)]
pub fn placeholder_page(props: &PlaceholderProps) -> Html {
    html! {
        <main class="min-h-screen flex flex-col items-center justify-center gap-6 px-4 text-gray-900">
            <h1 class="text-4xl font-bold">{ props.title.clone() }</h1>
            <Link<Route> to={Route::Home} classes="text-blue-600 hover:underline font-semibold">
                { "Back to home" }
            </Link<Route>>
        </main>
    }
}

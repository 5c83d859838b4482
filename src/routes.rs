use yew::prelude::*;
use yew_router::prelude::*;

use crate::pages::{HomePage, PlaceholderPage};

#[derive(Debug, Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/projects")]
    Projects,
    #[at("/profiles")]
    Profiles,
    #[not_found]
    #[at("/404")]
    NotFound,
}

pub fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <HomePage /> },
        // Project and team listings are served by their own pages.
        Route::Projects => html! { <PlaceholderPage title="Projects" /> },
        Route::Profiles => html! { <PlaceholderPage title="Our Team" /> },
        Route::NotFound => html! { <PlaceholderPage title="Page not found" /> },
    }
}

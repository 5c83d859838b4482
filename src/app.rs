use std::rc::Rc;

use yew::prelude::*;
use yew_router::prelude::*;

use crate::background::{DomScriptInjector, PageScripts};
use crate::routes::{switch, Route};

/// App-wide script registry, handed to pages through context.
#[derive(Clone)]
pub struct SharedScripts(Rc<PageScripts>);

impl SharedScripts {
    pub fn registry(&self) -> &PageScripts {
        &self.0
    }

    pub fn shared(&self) -> Rc<PageScripts> {
        self.0.clone()
    }
}

impl PartialEq for SharedScripts {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

#[function_component(App)]
pub fn app() -> Html {
    // Built once; survives route changes so remounting Home reuses loaded scripts.
    let scripts = use_memo((), |_| PageScripts::new(DomScriptInjector));

    html! {
        <ContextProvider<SharedScripts> context={SharedScripts(scripts)}>
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </ContextProvider<SharedScripts>>
    }
}

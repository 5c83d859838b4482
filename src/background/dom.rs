use std::cell::RefCell;
use std::rc::Rc;

use futures::channel::oneshot;
use futures::future::{self, FutureExt, LocalBoxFuture};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlScriptElement;

use super::scripts::{Library, ScriptInjector};
use crate::error::LoadError;

/// Inserts `<script async>` tags into `<body>`.
///
/// Tags stay in the document after the page unmounts: the libraries are
/// page-wide and the registry never asks for the same one twice.
#[derive(Debug, Default, Clone, Copy)]
pub struct DomScriptInjector;

impl ScriptInjector for DomScriptInjector {
    fn inject(&self, library: &Library) -> LocalBoxFuture<'static, Result<(), LoadError>> {
        match PendingScript::append(library) {
            Ok(pending) => pending.finished().boxed_local(),
            Err(err) => future::ready(Err(err)).boxed_local(),
        }
    }
}

/// A script tag in flight. Owns the event closures until the outcome arrives.
struct PendingScript {
    id: &'static str,
    element: HtmlScriptElement,
    _on_load: Closure<dyn FnMut()>,
    _on_error: Closure<dyn FnMut()>,
    outcome: oneshot::Receiver<bool>,
}

impl PendingScript {
    fn append(library: &Library) -> Result<Self, LoadError> {
        let dom_err = |e: JsValue| LoadError::Dom {
            id: library.id,
            reason: format!("{e:?}"),
        };

        let document = gloo::utils::document();
        let element: HtmlScriptElement = document
            .create_element("script")
            .map_err(dom_err)?
            .dyn_into()
            .map_err(|_| LoadError::Dom {
                id: library.id,
                reason: "created element is not a <script>".into(),
            })?;
        element.set_src(library.src);
        element.set_async(true);

        let (tx, rx) = oneshot::channel();
        let tx = Rc::new(RefCell::new(Some(tx)));
        let report = move |tx: &Rc<RefCell<Option<oneshot::Sender<bool>>>>, loaded: bool| {
            if let Some(tx) = tx.borrow_mut().take() {
                let _ = tx.send(loaded);
            }
        };

        let on_load = {
            let tx = tx.clone();
            Closure::<dyn FnMut()>::new(move || report(&tx, true))
        };
        let on_error = Closure::<dyn FnMut()>::new(move || report(&tx, false));

        element.set_onload(Some(on_load.as_ref().unchecked_ref()));
        element.set_onerror(Some(on_error.as_ref().unchecked_ref()));

        gloo::utils::body().append_child(&element).map_err(dom_err)?;

        Ok(Self {
            id: library.id,
            element,
            _on_load: on_load,
            _on_error: on_error,
            outcome: rx,
        })
    }

    async fn finished(mut self) -> Result<(), LoadError> {
        let id = self.id;
        let outcome = (&mut self.outcome).await;

        // Detach before the closures drop with `self`.
        self.element.set_onload(None);
        self.element.set_onerror(None);

        match outcome {
            Ok(true) => {
                log::debug!("script `{id}` loaded");
                Ok(())
            }
            Ok(false) => Err(LoadError::Failed { id }),
            Err(oneshot::Canceled) => Err(LoadError::Abandoned { id }),
        }
    }
}

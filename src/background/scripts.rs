use std::cell::RefCell;
use std::collections::HashMap;

use futures::future::{FutureExt, LocalBoxFuture, Shared};

use crate::error::LoadError;

/// A remote script the page depends on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Library {
    pub id: &'static str,
    pub src: &'static str,
}

pub const THREE: Library = Library {
    id: "three",
    src: "https://cdnjs.cloudflare.com/ajax/libs/three.js/r134/three.min.js",
};

pub const VANTA_BIRDS: Library = Library {
    id: "vanta.birds",
    src: "https://cdn.jsdelivr.net/npm/vanta@latest/dist/vanta.birds.min.js",
};

/// vanta.birds reads `window.THREE` when it evaluates, so order matters.
pub const BIRDS_PLAN: [Library; 2] = [THREE, VANTA_BIRDS];

pub type LoadFuture = Shared<LocalBoxFuture<'static, Result<(), LoadError>>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStatus {
    Pending,
    Loaded,
    Failed,
}

/// Starts loading a script and resolves once the browser reports the outcome.
pub trait ScriptInjector {
    fn inject(&self, library: &Library) -> LocalBoxFuture<'static, Result<(), LoadError>>;
}

/// Keyed registry of script loads, shared by every page instance.
///
/// A library is handed to the injector once; later requests get a clone of
/// the same future. A failed load is dropped from the registry on the next
/// request so a fresh mount can try again.
pub struct ScriptRegistry<I> {
    injector: I,
    loads: RefCell<HashMap<&'static str, LoadFuture>>,
}

impl<I: ScriptInjector> ScriptRegistry<I> {
    pub fn new(injector: I) -> Self {
        Self {
            injector,
            loads: RefCell::new(HashMap::new()),
        }
    }

    pub fn load(&self, library: &Library) -> LoadFuture {
        let mut loads = self.loads.borrow_mut();

        if let Some(existing) = loads.get(library.id) {
            if !matches!(existing.peek(), Some(Err(_))) {
                return existing.clone();
            }
            log::debug!("retrying script `{}` after an earlier failure", library.id);
        }

        log::debug!("injecting script `{}` from {}", library.id, library.src);
        let load = self.injector.inject(library).shared();
        loads.insert(library.id, load.clone());
        load
    }

    pub fn status(&self, id: &str) -> Option<LoadStatus> {
        let loads = self.loads.borrow();
        let load = loads.get(id)?;
        Some(match load.peek() {
            None => LoadStatus::Pending,
            Some(Ok(())) => LoadStatus::Loaded,
            Some(Err(_)) => LoadStatus::Failed,
        })
    }

    /// Number of distinct libraries requested so far.
    pub fn requested(&self) -> usize {
        self.loads.borrow().len()
    }

    pub fn injector(&self) -> &I {
        &self.injector
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::rc::Rc;

    use futures::channel::oneshot;
    use futures::future::{FutureExt, LocalBoxFuture};

    use super::{Library, ScriptInjector};
    use crate::error::LoadError;

    type Outcome = Result<(), LoadError>;

    /// Injector whose loads finish only when the test says so.
    #[derive(Clone, Default)]
    pub struct ManualInjector {
        pending: Rc<RefCell<HashMap<&'static str, oneshot::Sender<Outcome>>>>,
        injected: Rc<RefCell<Vec<&'static str>>>,
    }

    impl ManualInjector {
        pub fn injected(&self) -> Vec<&'static str> {
            self.injected.borrow().clone()
        }

        pub fn succeed(&self, library: &Library) {
            self.finish(library, Ok(()));
        }

        pub fn fail(&self, library: &Library) {
            self.finish(library, Err(LoadError::Failed { id: library.id }));
        }

        fn finish(&self, library: &Library, outcome: Outcome) {
            let tx = self
                .pending
                .borrow_mut()
                .remove(library.id)
                .unwrap_or_else(|| panic!("`{}` was never injected", library.id));
            tx.send(outcome).expect("load future dropped");
        }
    }

    impl ScriptInjector for ManualInjector {
        fn inject(&self, library: &Library) -> LocalBoxFuture<'static, Outcome> {
            let (tx, rx) = oneshot::channel();
            self.pending.borrow_mut().insert(library.id, tx);
            self.injected.borrow_mut().push(library.id);

            let id = library.id;
            async move { rx.await.unwrap_or(Err(LoadError::Abandoned { id })) }.boxed_local()
        }
    }
}

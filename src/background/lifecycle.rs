use std::cell::{Cell, RefCell};
use std::future::Future;
use std::rc::Rc;

use futures::future::{abortable, AbortHandle, FutureExt};

use super::scripts::{Library, ScriptInjector, ScriptRegistry};
use crate::error::EffectError;

/// A running effect. Releasing consumes it, so it cannot be released twice.
pub trait EffectHandle {
    fn destroy(self);
}

/// Builds an effect attached to a mount target.
pub trait EffectFactory {
    type Target;
    type Handle: EffectHandle;

    fn create(&self, target: &Self::Target) -> Result<Self::Handle, EffectError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Uninitialized,
    /// Waiting for the library with this id.
    Loading(&'static str),
    Active,
    /// A load failed, the mount target was gone or the constructor
    /// refused; the background stays static.
    Degraded,
    Released,
}

/// Owns at most one effect for one mounted page instance.
///
/// `mounted` is the cancellation flag: it is cleared the moment teardown
/// starts and every later step checks it before acting.
pub struct EffectLifecycle<F: EffectFactory> {
    factory: F,
    mounted: Cell<bool>,
    phase: Cell<Phase>,
    handle: RefCell<Option<F::Handle>>,
}

impl<F: EffectFactory> EffectLifecycle<F> {
    pub fn new(factory: F) -> Self {
        Self {
            factory,
            mounted: Cell::new(true),
            phase: Cell::new(Phase::Uninitialized),
            handle: RefCell::new(None),
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted.get()
    }

    pub fn phase(&self) -> Phase {
        self.phase.get()
    }

    pub fn is_active(&self) -> bool {
        self.handle.borrow().is_some()
    }

    /// Records that `library` is being waited on. Returns `false` once
    /// unmounted, in which case nothing more should be requested.
    pub fn enter_loading(&self, library: &Library) -> bool {
        if !self.is_mounted() {
            return false;
        }
        if !self.is_active() {
            self.phase.set(Phase::Loading(library.id));
        }
        true
    }

    pub fn degrade(&self) {
        if self.is_mounted() && !self.is_active() {
            self.phase.set(Phase::Degraded);
        }
    }

    /// Creates the effect if still mounted, the target exists and no effect
    /// is running yet. Returns whether a new effect was created.
    pub fn try_activate(&self, target: Option<&F::Target>) -> bool {
        if !self.is_mounted() {
            log::debug!("page unmounted before the background could start");
            return false;
        }

        let mut slot = self.handle.borrow_mut();
        if slot.is_some() {
            return false;
        }

        let Some(target) = target else {
            log::debug!("background mount target missing; staying static");
            self.phase.set(Phase::Degraded);
            return false;
        };

        match self.factory.create(target) {
            Ok(handle) => {
                log::debug!("background effect started");
                *slot = Some(handle);
                self.phase.set(Phase::Active);
                true
            }
            Err(err) => {
                log::warn!("background effect unavailable: {err}");
                self.phase.set(Phase::Degraded);
                false
            }
        }
    }

    /// Clears the mounted flag and releases the effect if one is running.
    /// Safe to call any number of times.
    pub fn teardown(&self) {
        self.mounted.set(false);
        self.phase.set(Phase::Released);

        let handle = self.handle.borrow_mut().take();
        if let Some(handle) = handle {
            log::debug!("releasing background effect");
            handle.destroy();
        }
    }
}

/// Loads `plan` in order, then starts the effect on `target`.
///
/// Stops early when a load fails or the page unmounts; a library is never
/// requested after teardown. Returns the phase the lifecycle settled in.
pub async fn acquire<I, F, T>(
    registry: &ScriptRegistry<I>,
    plan: &[Library],
    lifecycle: &EffectLifecycle<F>,
    target: T,
) -> Phase
where
    I: ScriptInjector,
    F: EffectFactory,
    T: FnOnce() -> Option<F::Target>,
{
    for library in plan {
        if !lifecycle.enter_loading(library) {
            return lifecycle.phase();
        }
        if let Err(err) = registry.load(library).await {
            log::warn!("{err}; background stays static");
            lifecycle.degrade();
            return lifecycle.phase();
        }
    }

    lifecycle.try_activate(target().as_ref());
    lifecycle.phase()
}

/// Owned form of [`acquire`] for spawning on the event loop.
///
/// Aborting the returned handle drops the task, and with it the task's
/// references to the registry and lifecycle, even while a load hangs.
pub fn acquire_task<I, F, T>(
    registry: Rc<ScriptRegistry<I>>,
    plan: &'static [Library],
    lifecycle: Rc<EffectLifecycle<F>>,
    target: T,
) -> (impl Future<Output = ()> + 'static, AbortHandle)
where
    I: ScriptInjector + 'static,
    F: EffectFactory + 'static,
    F::Target: 'static,
    F::Handle: 'static,
    T: FnOnce() -> Option<F::Target> + 'static,
{
    let (task, abort) = abortable(async move {
        let phase = acquire(&*registry, plan, &*lifecycle, target).await;
        log::debug!("background settled: {phase:?}");
    });
    (task.map(|_| ()), abort)
}

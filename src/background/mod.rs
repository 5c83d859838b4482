//! Animated page background.
//!
//! The birds effect needs two remote scripts loaded in order (three.js, then
//! vanta.birds). Loads go through an app-wide [`ScriptRegistry`] so each tag
//! is inserted once; each mounted page owns one [`EffectLifecycle`] that
//! creates the effect at most once and releases it on unmount.

pub mod birds;
pub mod dom;
pub mod lifecycle;
pub mod scripts;

pub use birds::{BirdsConfig, ColorMode, VantaBirds, VantaEffect};
pub use dom::DomScriptInjector;
pub use lifecycle::{acquire, acquire_task, EffectFactory, EffectHandle, EffectLifecycle, Phase};
pub use scripts::{
    Library, LoadFuture, LoadStatus, ScriptInjector, ScriptRegistry, BIRDS_PLAN, THREE, VANTA_BIRDS,
};

/// Registry backed by real `<script>` tags.
pub type PageScripts = ScriptRegistry<DomScriptInjector>;

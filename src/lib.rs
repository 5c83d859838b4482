//! R&D Hub website: landing page over an animated birds background.

pub mod app;
pub mod background;
pub mod error;
pub mod icons;
pub mod pages;
pub mod routes;
pub mod sections;

pub use app::{App, SharedScripts};
pub use routes::Route;

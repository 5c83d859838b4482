// Routed pages
mod home;
mod placeholder;

pub use home::HomePage;
pub use placeholder::PlaceholderPage;

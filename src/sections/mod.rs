// Home page sections
mod about;
mod background;
mod hero;

pub use about::About;
pub use background::BirdsBackground;
pub use hero::Hero;

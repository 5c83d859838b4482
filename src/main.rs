// src/main.rs
use rnd_hub_home::App;

fn main() {
    console_error_panic_hook::set_once();

    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    _ = console_log::init_with_level(level);

    yew::Renderer::<App>::new().render();
}

mod components;
mod model;
mod storage;
mod util;

use components::app::App;

fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    yew::Renderer::<App>::new().render();
}

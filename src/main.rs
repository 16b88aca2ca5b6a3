mod components;
mod config;
mod model;
mod state;
mod util;

use components::app::App;

fn main() {
    util::init_logging();
    log::info!("starting card grid demo");
    yew::Renderer::<App>::new().render();
}

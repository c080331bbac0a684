mod collision;
mod components;
mod config;
mod economy;
mod game;
mod input;
mod model;
mod render;
mod shop;
mod spawner;
mod state;
mod util;

use components::app::App;

fn main() {
    yew::Renderer::<App>::new().render();
}

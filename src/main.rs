use log::info;

mod components;

use components::App;

fn main() {
    // Initialize logging
    env_logger::init();

    info!("Starting BirdHaven site");

    // Launch the Dioxus desktop application
    dioxus::launch(App);
}

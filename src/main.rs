use fandial::config;
use fandial::gui::app::AppModel;
use fandial::gui::dial::DialState;
use fandial::sys::runtime;
use relm4::prelude::*;

fn main() {
    env_logger::init();

    match config::write_default_config() {
        Ok(path) => log::debug!("Config file: {}", path.display()),
        Err(e) => log::warn!("Could not create default config: {}", e),
    }

    let config = config::load_or_default();

    let (tx, rx) = async_channel::bounded(32);

    // Start Background Services
    runtime::start_background_services(tx);

    let app = RelmApp::new("org.fandial.FanDial");

    app.run::<AppModel>((DialState::default(), config, rx));
}

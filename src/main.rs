mod application;
mod controllers;
mod logging;
mod populator;
mod prelude;
mod ui;
mod widgets;

use art_grants::{constants, criteria, grant_filter, models, repository, route};

fn main() -> anyhow::Result<()> {
    logging::init();
    application::Application::new().activate()
}

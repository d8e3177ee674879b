//! ParkFree Frontend Entry Point

mod app;
mod components;
mod config;
mod context;
mod logging;
mod map;
mod storage;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logging::init_logger();
    mount_to_body(App);
}

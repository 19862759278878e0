#![recursion_limit = "1024"]

mod api;
mod app;
mod bootstrap;
mod console;
mod model;
mod pages;
mod routes;
mod utils;

use wasm_bindgen::prelude::*;

#[cfg(not(debug_assertions))]
const LOG_LEVEL: log::Level = log::Level::Info;
#[cfg(debug_assertions)]
const LOG_LEVEL: log::Level = log::Level::Trace;

pub fn main() -> Result<(), JsValue> {
    wasm_logger::init(wasm_logger::Config::new(LOG_LEVEL));

    if let Err(err) = bootstrap::start(&bootstrap::BrowserHost) {
        log::error!("Failed to start application: {err}");
        return Err(JsValue::from_str(&err.to_string()));
    }

    Ok(())
}

#![allow(warnings)]
//! Pomodoro Board Frontend Entry Point

mod models;
mod error;
mod board;
mod store;
mod settings;
mod interaction;
mod context;
mod markdown;
mod components;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    #[cfg(target_arch = "wasm32")]
    wasm_tracing::set_as_global_default();

    tracing::info!("starting pomodoro board frontend");
    mount_to_body(App);
}

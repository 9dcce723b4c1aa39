// src/main.rs
//
// MediClinic Web - Single-page patient portal for the clinic site
//

mod api;
mod app;
mod booking;
mod components;
mod config;
mod content;
mod error;
mod mock;
mod models;
mod session;
mod state;

use leptos::*;

fn main() {
    // Better panic messages in browser console
    console_error_panic_hook::set_once();

    // Initialize logging
    let _ = console_log::init_with_level(log::Level::Debug);

    log::info!("МедиКлиника portal starting...");

    // Mount Leptos app
    mount_to_body(|| {
        view! { <app::App /> }
    });
}

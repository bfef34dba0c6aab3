#![allow(warnings)]
//! ZuzzBee Frontend Entry Point

mod commands;
mod context;
mod store;
mod format;
mod components;
mod app;

use app::App;
use leptos::prelude::*;
use ring_logger::RingLogger;

/// Records printed ahead of a panic message
const PANIC_LOG_TAIL: usize = 20;

fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        let trail: Vec<String> = ring_logger::recent(PANIC_LOG_TAIL)
            .iter()
            .map(|entry| entry.to_string())
            .collect();
        if !trail.is_empty() {
            web_sys::console::error_1(&format!("[APP] last log lines:\n{}", trail.join("\n")).into());
        }
        console_error_panic_hook::hook(info);
    }));
}

fn main() {
    install_panic_hook();
    if let Err(e) = RingLogger::default().with_level(log::LevelFilter::Debug).init() {
        web_sys::console::error_1(&format!("logger init failed: {}", e).into());
    }
    mount_to_body(App);
}

// Behaviour modules are driven by the wasm frontend; a host build only compiles them for tests.
#![cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]

mod config;
mod contact;
mod cursor;
mod error;
mod navbar;
mod navigation;
mod particles;
mod rate_limit;
mod reveal;
mod scheduler;
mod skills;
mod telemetry;
mod typing;

#[cfg(target_arch = "wasm32")]
mod frontend;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!("This project is frontend-only. Run `trunk serve` or `trunk build --release`.");
}

#[cfg(target_arch = "wasm32")]
fn main() {
    frontend::run();
}

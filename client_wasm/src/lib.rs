//! Browser client for Pong
//!
//! Canvas 2D drawing, DOM keyboard input and a requestAnimationFrame loop
//! around `game_core`. Only key mapping is built for native targets, so it
//! can be tested without a browser.

pub mod input;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod canvas;

#[cfg(target_arch = "wasm32")]
pub use app::start_game;

//! Terminal front end: event loop, effect execution, storage and rendering.
mod app;
mod config;
mod effects;
mod logging;
mod persistence;
mod ui;

pub use app::run_app;

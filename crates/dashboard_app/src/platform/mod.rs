mod app;
mod http;
mod logging;
mod panels;
mod settings;

pub use app::run_app;

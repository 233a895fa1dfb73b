mod app;
mod components;
mod resume;
mod state;

use dioxus::desktop::tao::dpi::LogicalSize;
use dioxus::desktop::{Config, WindowBuilder};
use resume::{AppConfig, load_config};
use tracing::warn;

fn init_logging() {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,resume_dashboard=debug"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_target(true).with_line_number(true))
        .init();
}

fn main() {
    init_logging();

    let config = match load_config() {
        Ok(c) => c,
        Err(e) => {
            warn!(error = %e, "Failed to load config, using defaults");
            AppConfig::new()
        }
    };
    let size = config.window.clamped();

    let window_builder = WindowBuilder::new()
        .with_title("Resume Dashboard")
        .with_inner_size(LogicalSize::new(size.width as f64, size.height as f64));

    dioxus::LaunchBuilder::new()
        .with_cfg(
            Config::new()
                .with_menu(None)
                .with_window(window_builder),
        )
        .with_context(config)
        .launch(app::App);
}

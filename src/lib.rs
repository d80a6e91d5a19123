pub mod config;
pub mod dispatch;
pub mod error;
pub mod filters;
pub mod preview;
pub mod state;

pub use config::{FilterSettings, Settings};
pub use dispatch::{Command, Dispatcher, Notice, NoticeLevel, Outcome};
pub use error::{Error, Result};
pub use filters::{Filter, FilterBank};
pub use preview::{PreviewLayout, scale_to_fit};
pub use state::{AppState, Image, PreviewPair};

#[cfg(feature = "gui")]
pub mod gui;

/// Initializes the logger.
///
/// `RUST_LOG` wins when set; otherwise `info`, or `debug` with `verbose`.
/// Renderer crates are held at `warn`.
pub fn init_logger(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .filter_module("wgpu_core", log::LevelFilter::Warn)
        .filter_module("wgpu_hal", log::LevelFilter::Warn)
        .filter_module("naga", log::LevelFilter::Warn)
        .filter_module("cosmic_text", log::LevelFilter::Warn)
        .format_timestamp_millis()
        .init();
}

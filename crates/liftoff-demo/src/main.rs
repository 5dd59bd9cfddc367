//! Liftoff demo - entry point
//!
//! ## Command line flags
//!
//! - `--open`: start with the modal shown
//! - `--title <text>`: override the configured dialog title

use clap::Parser;
use iced::Size;

use liftoff_demo::app::DemoApp;
use liftoff_demo::config::{self, Cli};

fn main() -> iced::Result {
    // Initialize logger - set RUST_LOG=debug for verbose output
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    log::info!("liftoff-demo starting up");

    let cli = Cli::parse();

    let config_path = config::default_config_path();
    let mut config = config::load_config(&config_path);
    cli.apply(&mut config);

    let window_size = Size::new(config.window.width, config.window.height);

    let result = iced::application(
        move || DemoApp::new(config.clone()),
        DemoApp::update,
        DemoApp::view,
    )
    .subscription(DemoApp::subscription)
    .theme(DemoApp::theme)
    .title("Liftoff")
    .window_size(window_size)
    .run();

    log::info!("liftoff-demo stopped");
    result
}

//! Quiet Memory - a decorative personal memory journal
//! Built with iced for a soft, scrapbook-style UI

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod content;
mod features;
mod ui;

fn main() -> iced::Result {
    // Initialize tracing for logging
    tracing_subscriber::fmt::init();

    iced::application(app::App::new, app::App::update, app::App::view)
        .title(app::App::title)
        .theme(app::App::theme)
        .subscription(app::App::subscription)
        .window_size(iced::Size::new(1180.0, 780.0))
        .antialiasing(true)
        .run()
}

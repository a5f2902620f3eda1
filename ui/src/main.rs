#![warn(clippy::all, rust_2018_idioms)]
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use chrono::Utc;
use gamedesk_business::Session;
use gamedesk_ui::GamedeskApp;

fn main() -> eframe::Result {
    // Log to stderr (if you run with `RUST_LOG=debug`).
    env_logger::Builder::from_env(env_logger::Env::default()).init();

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 720.0])
            .with_min_inner_size([720.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Gamedesk",
        native_options,
        Box::new(|cc| {
            // Thumbnail and icon cells render image URIs.
            egui_extras::install_image_loaders(&cc.egui_ctx);

            // Local session until a login flow exists; the app only ever
            // sees an explicit Session value.
            let session = Session::local(Utc::now());
            Ok(Box::new(GamedeskApp::new(session)))
        }),
    )
}

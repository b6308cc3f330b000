#![warn(clippy::all, rust_2018_idioms)]

use draw_pad::{DrawPadApp, DrawPadConfig};

fn main() -> eframe::Result {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).

    let config = DrawPadConfig::load_or_default();
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Draw Pad")
            .with_inner_size(config.window_size),
        ..Default::default()
    };

    eframe::run_native(
        "Draw Pad",
        native_options,
        Box::new(move |cc| Ok(Box::new(DrawPadApp::new(cc, config)))),
    )
}

use eframe::egui;
use tarjeta::gui::TarjetaApp;
use tracing_subscriber::EnvFilter;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 720.0])
            .with_min_inner_size([640.0, 480.0])
            .with_title("Tarjeta"),
        ..Default::default()
    };

    eframe::run_native("Tarjeta", options, Box::new(|cc| Ok(Box::new(TarjetaApp::new(cc)))))
}

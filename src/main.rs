use coinglyph::CoinglyphApp;
use coinglyph::config::AppConfig;
use std::path::PathBuf;

fn main() -> eframe::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("coinglyph=info"))
        .init();

    let initial_catalog_path: Option<PathBuf> = std::env::args_os().nth(1).map(PathBuf::from);
    let config = AppConfig::load();
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 760.0])
            .with_min_inner_size([480.0, 360.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Coinglyph · Crypto Icon Catalog",
        native_options,
        Box::new(move |cc| {
            egui_extras::install_image_loaders(&cc.egui_ctx);
            Ok(Box::new(CoinglyphApp::new(
                config,
                initial_catalog_path.as_deref(),
            )))
        }),
    )
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("folio")
            .with_inner_size([1100.0, 800.0])
            .with_min_inner_size([640.0, 480.0]),
        ..Default::default()
    };
    eframe::run_native(
        "folio",
        options,
        Box::new(|cc| Ok(Box::new(folio_ui::PortfolioApp::new(cc)))),
    )
}

// The wasm build enters through `folio_ui::start` instead.
#[cfg(target_arch = "wasm32")]
fn main() {}

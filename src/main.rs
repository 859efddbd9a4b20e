#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

use eframe::NativeOptions;
use shade_slider::config::seed_override_from_args;

fn main() -> eframe::Result<()> {
    env_logger::init();

    // CLI: `--seed <n>` で乱数シードを固定する。引数が不正なら GUI は起動しない。
    let seed = match seed_override_from_args(std::env::args().skip(1)) {
        Ok(seed) => seed,
        Err(msg) => {
            eprintln!("{msg}");
            return Ok(());
        }
    };

    let options = NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([480.0, 860.0])
            .with_min_inner_size([360.0, 640.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Shade Slider",
        options,
        Box::new(move |cc| Ok(Box::new(shade_slider::app::ShadeSliderApp::new(cc, seed)))),
    )
}

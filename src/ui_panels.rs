//! メイン画面のパネル描画ロジック。
//!
//! - すべて `&mut ShadeSliderApp` を引数に取り、状態は `ShadeSliderApp` にだけ持たせます。
//! - ピッカーのパネルは判定より前に、スウォッチのパネルは判定より後に描画します
//!   （`app.rs` の `update` を参照）。

use eframe::egui;

use crate::app::ShadeSliderApp;
use crate::game_types::format_frame_stats;
use crate::ui_components::{card_frame, color_swatch, field_label, rgb_to_color32, section_title};
use crate::ui_theme::{colors, font_sizes, layout};

/// ヘッダーパネルを描画
pub fn render_header(app: &mut ShadeSliderApp, ctx: &egui::Context) {
    egui::TopBottomPanel::top("header")
        .frame(
            egui::Frame::none()
                .fill(colors::SURFACE_BG)
                .inner_margin(egui::Margin::symmetric(20.0, 12.0)),
        )
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new("Shade Slider")
                        .size(font_sizes::TITLE)
                        .color(colors::TEXT_PRIMARY),
                );

                ui.add_space(16.0);
                ui.label(
                    egui::RichText::new(format!("Round {}", app.state.rounds_won + 1))
                        .size(font_sizes::SECTION)
                        .color(colors::TEXT_SECONDARY),
                );

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui
                        .add(
                            egui::Button::new("New colors")
                                .min_size(egui::vec2(110.0, layout::BUTTON_HEIGHT)),
                        )
                        .clicked()
                    {
                        app.skip_round();
                    }
                });
            });
        });
}

/// フッター（フレーム時間とログ）を描画
pub fn render_footer(app: &mut ShadeSliderApp, ctx: &egui::Context) {
    egui::TopBottomPanel::bottom("footer")
        .exact_height(layout::LOG_PANEL_HEIGHT)
        .frame(
            egui::Frame::none()
                .fill(colors::SURFACE_BG)
                .inner_margin(egui::Margin::symmetric(20.0, 8.0)),
        )
        .show(ctx, |ui| {
            ui.label(field_label(&format_frame_stats(app.frame_dt)));
            egui::ScrollArea::vertical()
                .stick_to_bottom(true)
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    ui.label(
                        egui::RichText::new(&app.log)
                            .monospace()
                            .color(colors::TEXT_SECONDARY),
                    );
                });
        });
}

/// カラーホイールのパネルを描画。
///
/// ホイールが操作されたフレームだけ `state.picked` に書き戻す。
pub fn render_picker_panel(app: &mut ShadeSliderApp, ctx: &egui::Context) {
    egui::TopBottomPanel::bottom("picker")
        .frame(
            egui::Frame::none()
                .fill(rgb_to_color32(app.config.background_color))
                .inner_margin(egui::Margin::same(layout::CARD_PADDING)),
        )
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                card_frame().show(ui, |ui| {
                    ui.label(section_title("Your color"));
                    ui.spacing_mut().slider_width = layout::PICKER_SIZE;
                    if egui::color_picker::color_picker_hsva_2d(
                        ui,
                        &mut app.picker,
                        egui::color_picker::Alpha::Opaque,
                    ) {
                        app.apply_picker();
                    }
                });
            });
        });
}

/// ターゲットとピック色のスウォッチ、距離表示を描画
pub fn render_swatch_panel(app: &mut ShadeSliderApp, ctx: &egui::Context) {
    egui::CentralPanel::default()
        .frame(
            egui::Frame::none()
                .fill(rgb_to_color32(app.config.background_color))
                .inner_margin(egui::Margin::same(layout::CARD_PADDING)),
        )
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                card_frame().show(ui, |ui| {
                    ui.horizontal(|ui| {
                        color_swatch(ui, "Target", app.state.target);
                        ui.add_space(layout::CARD_PADDING);
                        color_swatch(ui, "Yours", app.state.picked);
                    });

                    ui.add_space(8.0);
                    render_distance(app, ui);
                });
            });
        });
}

/// 現在の距離と許容差を表示
fn render_distance(app: &ShadeSliderApp, ui: &mut egui::Ui) {
    let distance = app.state.distance();
    let color = if app.state.is_match() {
        colors::MATCH
    } else {
        colors::TEXT_PRIMARY
    };
    ui.label(
        egui::RichText::new(format!("{:.1}%", distance * 100.0))
            .size(font_sizes::HERO)
            .color(color),
    );
    ui.label(field_label(&format!(
        "off by (max channel) / tolerance {:.1}%",
        app.state.tolerance * 100.0
    )));
}

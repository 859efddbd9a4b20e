//! 再利用可能な UI コンポーネント／ヘルパー関数。
//!
//! - ラベル装飾、カードフレーム、色スウォッチなどをまとめています。

use eframe::egui;

use crate::color::Color;
use crate::ui_theme::{colors, font_sizes, layout};

/// セクション見出しラベルを作成
pub fn section_title(text: &str) -> egui::RichText {
    egui::RichText::new(text)
        .size(font_sizes::SECTION)
        .color(colors::TEXT_PRIMARY)
}

/// フィールドラベルを作成
pub fn field_label(text: &str) -> egui::RichText {
    egui::RichText::new(text)
        .size(font_sizes::LABEL)
        .color(colors::TEXT_SECONDARY)
}

/// カードフレームを作成
pub fn card_frame() -> egui::Frame {
    egui::Frame::none()
        .fill(colors::CARD_BG)
        .rounding(egui::Rounding::same(layout::CARD_ROUNDING))
        .inner_margin(egui::Margin::same(layout::CARD_PADDING))
}

/// ゲームの色（カラーピッカーと同じ線形 RGB）を表示用の `Color32` に変換する。
pub fn to_color32(color: Color) -> egui::Color32 {
    egui::Color32::from(egui::Rgba::from_rgb(color.r, color.g, color.b))
}

/// `[r, g, b]`（0.0〜1.0 のガンマ値）を `Color32` に変換する。
pub fn rgb_to_color32(rgb: [f32; 3]) -> egui::Color32 {
    let to_u8 = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
    egui::Color32::from_rgb(to_u8(rgb[0]), to_u8(rgb[1]), to_u8(rgb[2]))
}

/// ラベル付きの色スウォッチを描画
pub fn color_swatch(ui: &mut egui::Ui, label: &str, color: Color) {
    ui.vertical(|ui| {
        ui.label(field_label(label));
        let size = egui::vec2(layout::SWATCH_SIZE, layout::SWATCH_SIZE);
        let (rect, _) = ui.allocate_exact_size(size, egui::Sense::hover());
        let painter = ui.painter();
        painter.rect_filled(rect, layout::CARD_ROUNDING, to_color32(color));
        painter.rect_stroke(
            rect,
            layout::CARD_ROUNDING,
            egui::Stroke::new(1.0, colors::SWATCH_BORDER),
        );
    });
}

//! egui スタイル設定まわりをまとめたモジュール。
//!
//! `ShadeSliderApp::new` から呼び出され、ゲーム画面のダークテーマを構成します。

use eframe::egui;

use crate::ui_theme::{colors, font_sizes};

/// グローバルな egui スタイルを設定する。
///
/// - スマートフォンでも押しやすいよう、余白とボタンを大きめにとる。
/// - スウォッチの色を邪魔しないよう、ウィジェットは無彩色にしてアクセントだけ色を付ける。
pub fn setup_style(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();

    // 指でも押しやすいよう余白は広めに
    style.spacing.item_spacing = egui::vec2(12.0, 12.0);
    style.spacing.button_padding = egui::vec2(18.0, 10.0);
    style.spacing.window_margin = egui::Margin::same(16.0);

    // 純黒ベース。スウォッチの色だけが目立つようにする
    style.visuals.dark_mode = true;
    style.visuals.panel_fill = colors::SURFACE_BG;
    style.visuals.extreme_bg_color = colors::SURFACE_BG;
    style.visuals.faint_bg_color = colors::CARD_BG;
    style.visuals.window_stroke = egui::Stroke::NONE;

    style.visuals.widgets.noninteractive.bg_fill = colors::CARD_BG;
    style.visuals.widgets.noninteractive.fg_stroke = egui::Stroke {
        width: 1.0,
        color: colors::TEXT_SECONDARY,
    };

    // 大きめの角丸
    style.visuals.window_rounding = egui::Rounding::same(14.0);
    style.visuals.widgets.inactive.rounding = egui::Rounding::same(10.0);
    style.visuals.widgets.hovered.rounding = egui::Rounding::same(10.0);
    style.visuals.widgets.active.rounding = egui::Rounding::same(10.0);

    // インタラクティブ要素は無彩色
    style.visuals.widgets.inactive.bg_fill = egui::Color32::from_rgb(0x38, 0x38, 0x3A);
    style.visuals.widgets.inactive.fg_stroke = egui::Stroke {
        width: 1.0,
        color: colors::TEXT_PRIMARY,
    };
    style.visuals.widgets.hovered.bg_fill = egui::Color32::from_rgb(0x48, 0x48, 0x4A);
    style.visuals.widgets.active.bg_fill = colors::ACCENT;

    // 選択範囲
    style.visuals.selection.bg_fill = colors::ACCENT.linear_multiply(0.4);
    style.visuals.selection.stroke = egui::Stroke::NONE;

    // テキストスタイル（論理ピクセル指定で DPI スケーリングに対応）
    style
        .text_styles
        .insert(egui::TextStyle::Heading, egui::FontId::proportional(font_sizes::TITLE));
    style
        .text_styles
        .insert(egui::TextStyle::Body, egui::FontId::proportional(font_sizes::BODY));
    style
        .text_styles
        .insert(egui::TextStyle::Button, egui::FontId::proportional(font_sizes::BODY));
    style
        .text_styles
        .insert(egui::TextStyle::Small, egui::FontId::proportional(font_sizes::LABEL));

    ctx.set_style(style);
}

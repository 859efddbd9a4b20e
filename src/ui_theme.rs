//! UI テーマ定数（カラーパレット・フォントサイズ・レイアウト）。
//!
//! - 他のモジュールからは `crate::ui_theme::{colors, font_sizes, layout}` として参照します。

/// カラーパレット
pub mod colors {
    use eframe::egui;

    /// アクセントカラー（ボタン・選択範囲）
    pub const ACCENT: egui::Color32 = egui::Color32::from_rgb(0xFF, 0x9F, 0x0A);
    /// 一致したときの表示色
    pub const MATCH: egui::Color32 = egui::Color32::from_rgb(0x30, 0xD1, 0x58);
    /// カード背景
    pub const CARD_BG: egui::Color32 = egui::Color32::from_rgb(0x1C, 0x1C, 0x1E);
    /// ヘッダー・フッター背景
    pub const SURFACE_BG: egui::Color32 = egui::Color32::from_rgb(0x00, 0x00, 0x00);
    /// スウォッチの枠線
    pub const SWATCH_BORDER: egui::Color32 = egui::Color32::from_rgb(0x3A, 0x3A, 0x3C);
    /// プライマリテキスト
    pub const TEXT_PRIMARY: egui::Color32 = egui::Color32::from_rgb(0xF5, 0xF5, 0xF7);
    /// セカンダリテキスト
    pub const TEXT_SECONDARY: egui::Color32 = egui::Color32::from_rgb(0x86, 0x86, 0x8B);
}

/// フォントサイズ（論理ピクセル）
pub mod font_sizes {
    /// ラウンド数の大きな表示
    pub const HERO: f32 = 36.0;
    /// タイトル
    pub const TITLE: f32 = 22.0;
    /// セクション見出し
    pub const SECTION: f32 = 16.0;
    /// 本文
    pub const BODY: f32 = 14.0;
    /// ラベル
    pub const LABEL: f32 = 12.0;
}

/// レイアウト定数（論理ピクセル）
pub mod layout {
    /// カード内パディング
    pub const CARD_PADDING: f32 = 16.0;
    /// カード角丸
    pub const CARD_ROUNDING: f32 = 10.0;
    /// ボタンの高さ
    pub const BUTTON_HEIGHT: f32 = 32.0;
    /// 色スウォッチの一辺
    pub const SWATCH_SIZE: f32 = 140.0;
    /// カラーホイールの一辺
    pub const PICKER_SIZE: f32 = 260.0;
    /// ログパネルの高さ
    pub const LOG_PANEL_HEIGHT: f32 = 110.0;
}

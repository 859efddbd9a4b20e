//! GUI アプリケーション本体。
//!
//! このモジュールは `eframe::App` の実装（`update` ループ）のみを保持し、
//! アプリケーション状態とフレーム処理は `app_state` に分割されています。

use eframe::{egui, App};

pub use crate::app_state::ShadeSliderApp;

impl App for ShadeSliderApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.frame_dt = ctx.input(|i| i.stable_dt);

        // 描画順 = 処理順: 入力（ピッカー）→ 判定 → 結果表示（スウォッチ）
        crate::ui_panels::render_header(self, ctx);
        crate::ui_panels::render_footer(self, ctx);
        crate::ui_panels::render_picker_panel(self, ctx);

        self.step_round();

        crate::ui_panels::render_swatch_panel(self, ctx);

        // 入力がなくても毎フレーム判定を回す
        ctx.request_repaint();
    }
}

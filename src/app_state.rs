//! アプリケーション状態 (`ShadeSliderApp`) と初期化ロジックをまとめたモジュール。
//!
//! - `ShadeSliderApp` 構造体
//! - `ShadeSliderApp::new` / `ShadeSliderApp::with_config` による初期化
//! - ホスト側のフレーム処理（ピッカー → 判定 → ハプティクス）

use eframe::egui::ecolor::Hsva;
use eframe::CreationContext;

use crate::app_style::setup_style;
use crate::config::{load_or_create_config, Config};
use crate::game_types::FrameOutcome;
use crate::haptics::{play_round_won_pulse, HapticPulse, Haptics, LogHaptics};
use crate::round_controller::{RoundController, RoundState};

pub struct ShadeSliderApp {
    pub config: Config,
    pub state: RoundState,
    pub controller: RoundController,
    pub haptics: Box<dyn Haptics>,
    pub pulse: HapticPulse,
    /// カラーホイールの編集状態。色相を保持するため RGB とは別に持つ
    pub picker: Hsva,
    pub log: String,
    /// 直近フレームの経過時間（秒）
    pub frame_dt: f32,
}

impl ShadeSliderApp {
    pub fn new(cc: &CreationContext<'_>, seed_override: Option<u64>) -> Self {
        let mut config = match load_or_create_config() {
            Ok(cfg) => cfg,
            Err(e) => {
                log::warn!("Failed to load settings, using defaults: {e}");
                Config::default()
            }
        };
        if seed_override.is_some() {
            config.seed = seed_override;
        }

        setup_style(&cc.egui_ctx);

        Self::with_config(config, Box::new(LogHaptics::default()))
    }

    /// 設定とハプティクス実装から状態を組み立てる（ウィンドウ不要）。
    pub fn with_config(config: Config, haptics: Box<dyn Haptics>) -> Self {
        let mut controller = match config.seed {
            Some(seed) => RoundController::with_seed(seed),
            None => RoundController::from_entropy(),
        };

        let tolerance = config.normalized_tolerance();
        let mut state = controller.new_round_state(tolerance, 1.0);
        if let Some(target) = config.initial_target_color() {
            state.target = target;
        }
        if let Some(picked) = config.initial_picked_color() {
            state.picked = picked;
        }

        log::info!(
            "Shade Slider started: tolerance {:.4}, seed {:?}, pulse {:.2} / {} ms",
            tolerance,
            config.seed,
            config.haptic_intensity,
            config.haptic_duration_ms
        );

        let pulse = config.haptic_pulse();
        let picker = Hsva::from_rgb(state.picked.rgb_array());

        Self {
            config,
            state,
            controller,
            haptics,
            pulse,
            picker,
            log: String::new(),
            frame_dt: 0.0,
        }
    }

    /// ピッカーで編集された色を `state.picked` に書き込む（alpha は保持）。
    pub fn apply_picker(&mut self) {
        self.state.picked = self.state.picked.with_rgb(self.picker.to_rgb());
    }

    /// 1 フレーム分のゲーム処理。
    ///
    /// `state.picked` はこの呼び出しの前にホストが更新済みであること。
    pub fn step_round(&mut self) -> FrameOutcome {
        let outcome = self.controller.evaluate_frame(&mut self.state);
        if outcome.is_round_won() {
            play_round_won_pulse(self.haptics.as_mut(), self.pulse);
            self.sync_picker();
            log::info!("Round {} cleared", self.state.rounds_won);
            self.push_log(&format!("Round {} cleared", self.state.rounds_won));
        }
        outcome
    }

    /// 勝利としてカウントせずに色を引き直す。
    pub fn skip_round(&mut self) {
        self.controller.regenerate(&mut self.state);
        self.sync_picker();
        self.push_log("Skipped to new colors");
    }

    fn sync_picker(&mut self) {
        self.picker = Hsva::from_rgb(self.state.picked.rgb_array());
    }

    fn push_log(&mut self, msg: &str) {
        let stamp = chrono::Local::now().format("%H:%M:%S");
        self.log.push_str(&format!("[{stamp}] {msg}\n"));
    }
}

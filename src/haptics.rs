//! ハプティクス（振動フィードバック）のホスト境界。
//!
//! - ラウンドをクリアしたフレームでちょうど 1 回だけパルスを要求します。
//! - デバイスが無い・失敗した場合はログに残して無視し、ラウンドの進行には影響させません。

use std::fmt;

use crate::game_types::GameResult;

/// パルスの強さ（0.0〜1.0）と長さ（ミリ秒）
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HapticPulse {
    pub intensity: f32,
    pub duration_ms: u32,
}

impl HapticPulse {
    /// 強さは 0.0〜1.0 にクランプする。
    pub fn new(intensity: f32, duration_ms: u32) -> Self {
        Self {
            intensity: intensity.clamp(0.0, 1.0),
            duration_ms,
        }
    }
}

impl Default for HapticPulse {
    fn default() -> Self {
        Self::new(0.75, 500)
    }
}

/// 振動デバイスへの窓口。プラットフォームごとに実装する。
pub trait Haptics {
    fn play_pulse(&mut self, pulse: HapticPulse) -> GameResult<()>;
}

/// デスクトップ用: 実際には振動させず、パルス要求をログに出すだけの実装。
#[derive(Debug, Default)]
pub struct LogHaptics {
    pulses_played: u64,
}

impl LogHaptics {
    pub fn pulses_played(&self) -> u64 {
        self.pulses_played
    }
}

impl Haptics for LogHaptics {
    fn play_pulse(&mut self, pulse: HapticPulse) -> GameResult<()> {
        self.pulses_played += 1;
        log::info!(
            "haptic pulse: intensity {:.2}, {} ms",
            pulse.intensity,
            pulse.duration_ms
        );
        Ok(())
    }
}

/// 振動デバイスが存在しない環境用。常に `HapticsUnsupported` を返す。
#[derive(Debug, Default)]
pub struct NoHaptics;

#[derive(Debug)]
pub struct HapticsUnsupported;

impl fmt::Display for HapticsUnsupported {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "haptic feedback is not supported on this device")
    }
}

impl std::error::Error for HapticsUnsupported {}

impl Haptics for NoHaptics {
    fn play_pulse(&mut self, _pulse: HapticPulse) -> GameResult<()> {
        Err(Box::new(HapticsUnsupported))
    }
}

/// ラウンドクリア時のパルスを要求する。
///
/// 失敗は `log::warn!` に出すだけで呼び出し元には返さない。戻り値は再生できたかどうか。
pub fn play_round_won_pulse(haptics: &mut dyn Haptics, pulse: HapticPulse) -> bool {
    match haptics.play_pulse(pulse) {
        Ok(()) => true,
        Err(e) => {
            log::warn!("Failed to play haptic pulse: {e}");
            false
        }
    }
}

use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::Path;

use crate::color::{ChannelScale, Color};
use crate::game_types::GameResult;
use crate::haptics::HapticPulse;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Config {
    /// チャンネルごとの許容差（`channel_scale` の単位）
    #[serde(default = "default_tolerance")]
    pub tolerance: f32,
    /// `tolerance` と初期色の単位。旧設定は 0〜255 の `Byte`
    #[serde(default)]
    pub channel_scale: ChannelScale,
    #[serde(default = "default_haptic_intensity")]
    pub haptic_intensity: f32,
    #[serde(default = "default_haptic_duration_ms")]
    pub haptic_duration_ms: u32,
    /// 乱数シード。未指定ならエントロピーから初期化
    #[serde(default)]
    pub seed: Option<u64>,
    /// 最初のラウンドのターゲット色 [r, g, b]（未指定ならランダム）
    #[serde(default)]
    pub initial_target: Option<[f32; 3]>,
    /// 最初のラウンドのピック色 [r, g, b]（未指定ならランダム）
    #[serde(default)]
    pub initial_picked: Option<[f32; 3]>,
    /// ゲーム画面の背景色 [r, g, b]（0.0〜1.0）
    #[serde(default = "default_background_color")]
    pub background_color: [f32; 3],
}

fn default_tolerance() -> f32 {
    0.05
}

fn default_haptic_intensity() -> f32 {
    0.75
}

fn default_haptic_duration_ms() -> u32 {
    500
}

fn default_background_color() -> [f32; 3] {
    [0.45, 0.55, 0.60]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tolerance: default_tolerance(),
            channel_scale: ChannelScale::Unit,
            haptic_intensity: default_haptic_intensity(),
            haptic_duration_ms: default_haptic_duration_ms(),
            seed: None,
            initial_target: None,
            initial_picked: None,
            background_color: default_background_color(),
        }
    }
}

impl Config {
    /// 0.0〜1.0 スケールに直した許容差。負の値は 0 に丸める。
    pub fn normalized_tolerance(&self) -> f32 {
        let tolerance = self.channel_scale.normalize(self.tolerance);
        if tolerance < 0.0 {
            log::warn!("Negative tolerance {} in settings, using 0", self.tolerance);
            return 0.0;
        }
        tolerance
    }

    pub fn haptic_pulse(&self) -> HapticPulse {
        HapticPulse::new(self.haptic_intensity, self.haptic_duration_ms)
    }

    pub fn initial_target_color(&self) -> Option<Color> {
        self.initial_target.map(|rgb| self.scaled_color(rgb))
    }

    pub fn initial_picked_color(&self) -> Option<Color> {
        self.initial_picked.map(|rgb| self.scaled_color(rgb))
    }

    fn scaled_color(&self, rgb: [f32; 3]) -> Color {
        let scale = self.channel_scale;
        Color::new(
            scale.normalize(rgb[0]).clamp(0.0, 1.0),
            scale.normalize(rgb[1]).clamp(0.0, 1.0),
            scale.normalize(rgb[2]).clamp(0.0, 1.0),
            1.0,
        )
    }
}

const SETTINGS_FILE: &str = "settings.toml";

pub fn parse_config(contents: &str) -> GameResult<Config> {
    let cfg = toml::from_str(contents)?;
    Ok(cfg)
}

pub fn load_or_create_config() -> GameResult<Config> {
    load_or_create_config_at(SETTINGS_FILE)
}

/// 設定ファイルがあれば読み込み、なければデフォルト値で作成する。
pub fn load_or_create_config_at(path: impl AsRef<Path>) -> GameResult<Config> {
    let path = path.as_ref();
    if path.exists() {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;
        parse_config(&contents)
    } else {
        let cfg = Config::default();
        save_config_at(&cfg, path)?;
        Ok(cfg)
    }
}

pub fn save_config_at(cfg: &Config, path: impl AsRef<Path>) -> GameResult<()> {
    let toml_str = toml::to_string_pretty(cfg)?;
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(toml_str.as_bytes())?;
    writer.flush()?;
    Ok(())
}

/// `--seed <n>` 形式の CLI オプションを読む（先頭要素はプログラム名を除いた引数列）。
///
/// - `--seed` 以外の引数・引数なし → `Ok(None)`（GUI は通常どおり起動する）
/// - 値が無い／数値でない → 標準エラーに出すメッセージを `Err` で返す
pub fn seed_override_from_args<I>(args: I) -> Result<Option<u64>, String>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();
    let Some(first) = args.next() else {
        return Ok(None);
    };

    if first != "--seed" {
        return Ok(None);
    }

    let Some(seed_str) = args.next() else {
        return Err("Usage: shade-slider --seed <n>".to_string());
    };

    seed_str
        .parse::<u64>()
        .map(Some)
        .map_err(|e| format!("Invalid seed: {seed_str} ({e})"))
}

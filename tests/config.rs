use std::path::PathBuf;

use shade_slider::color::{ChannelScale, Color};
use shade_slider::config::{
    load_or_create_config_at, parse_config, save_config_at, seed_override_from_args, Config,
};
use shade_slider::haptics::HapticPulse;

/// テストごとに別名の一時ファイルパスを作る（並列実行で衝突しないように）。
fn temp_settings_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!(
        "shade_slider_{}_{}.toml",
        name,
        std::process::id()
    ))
}

#[test]
fn empty_file_uses_defaults() {
    let cfg = parse_config("").expect("empty settings should parse");
    assert_eq!(cfg, Config::default());
    assert_eq!(cfg.tolerance, 0.05);
    assert_eq!(cfg.channel_scale, ChannelScale::Unit);
    assert_eq!(cfg.haptic_pulse(), HapticPulse::new(0.75, 500));
    assert_eq!(cfg.seed, None);
}

/// 旧スケール（0〜255、許容差 25）の設定が正規化されることを確認する。
#[test]
fn legacy_byte_scale_settings_are_normalized() {
    let cfg = parse_config(
        r#"
tolerance = 25.5
channel_scale = "Byte"
initial_target = [255.0, 0.0, 51.0]
"#,
    )
    .expect("legacy settings should parse");

    assert!((cfg.normalized_tolerance() - 0.1).abs() < 1e-6);
    assert_eq!(cfg.initial_target_color(), Some(Color::new(1.0, 0.0, 0.2, 1.0)));
    assert_eq!(cfg.initial_picked_color(), None);
}

#[test]
fn negative_tolerance_normalizes_to_zero() {
    let cfg = Config {
        tolerance: -0.5,
        ..Config::default()
    };
    assert_eq!(cfg.normalized_tolerance(), 0.0);
}

#[test]
fn haptic_intensity_is_clamped() {
    let cfg = Config {
        haptic_intensity: 3.0,
        haptic_duration_ms: 2000,
        ..Config::default()
    };
    assert_eq!(cfg.haptic_pulse(), HapticPulse::new(1.0, 2000));
}

#[test]
fn invalid_toml_is_an_error() {
    assert!(parse_config("tolerance = \"wide\"").is_err());
}

/// ファイルが無ければデフォルトで作成し、次回はその内容を読み込む。
#[test]
fn settings_file_is_created_then_reloaded() {
    let path = temp_settings_path("create");
    let _ = std::fs::remove_file(&path);

    let created = load_or_create_config_at(&path).expect("create settings");
    assert_eq!(created, Config::default());
    assert!(path.exists());

    let custom = Config {
        tolerance: 0.09,
        seed: Some(1234),
        initial_picked: Some([0.1, 0.2, 0.3]),
        ..Config::default()
    };
    save_config_at(&custom, &path).expect("save settings");

    let reloaded = load_or_create_config_at(&path).expect("reload settings");
    assert_eq!(reloaded, custom);

    let _ = std::fs::remove_file(&path);
}

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

/// `--seed <n>` だけを解釈し、知らない引数は無視して GUI を起動させる。
#[test]
fn seed_argument_is_parsed_and_unknown_arguments_are_ignored() {
    assert_eq!(seed_override_from_args(args(&[])), Ok(None));
    assert_eq!(seed_override_from_args(args(&["--seed", "42"])), Ok(Some(42)));
    assert_eq!(seed_override_from_args(args(&["--fullscreen"])), Ok(None));
    assert_eq!(seed_override_from_args(args(&["-psn_0_12345", "--seed", "1"])), Ok(None));
}

#[test]
fn missing_or_invalid_seed_is_an_error() {
    assert!(seed_override_from_args(args(&["--seed"])).is_err());
    assert!(seed_override_from_args(args(&["--seed", "abc"])).is_err());
    assert!(seed_override_from_args(args(&["--seed", "-1"])).is_err());
}

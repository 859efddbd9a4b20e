use std::cell::Cell;
use std::rc::Rc;

use shade_slider::app::ShadeSliderApp;
use shade_slider::color::Color;
use shade_slider::config::Config;
use shade_slider::game_types::{FrameOutcome, GameResult};
use shade_slider::haptics::{play_round_won_pulse, HapticPulse, Haptics, LogHaptics, NoHaptics};

/// 要求されたパルスの回数を数えるテスト用ハプティクス。
struct CountingHaptics {
    count: Rc<Cell<u32>>,
}

impl Haptics for CountingHaptics {
    fn play_pulse(&mut self, _pulse: HapticPulse) -> GameResult<()> {
        self.count.set(self.count.get() + 1);
        Ok(())
    }
}

/// 最初のラウンドが一致した状態で始まる設定。
fn matching_config() -> Config {
    Config {
        seed: Some(77),
        initial_target: Some([0.5, 0.5, 0.5]),
        initial_picked: Some([0.5, 0.5, 0.5]),
        ..Config::default()
    }
}

#[test]
fn fixed_initial_colors_come_from_config() {
    let app = ShadeSliderApp::with_config(matching_config(), Box::new(NoHaptics));
    assert_eq!(app.state.target, Color::rgb(0.5, 0.5, 0.5));
    assert_eq!(app.state.picked, Color::rgb(0.5, 0.5, 0.5));
    assert_eq!(app.state.tolerance, 0.05);
}

/// 勝利したフレームでパルスがちょうど 1 回要求される。
#[test]
fn one_pulse_per_winning_frame() {
    let count = Rc::new(Cell::new(0));
    let haptics = CountingHaptics {
        count: Rc::clone(&count),
    };
    let mut app = ShadeSliderApp::with_config(matching_config(), Box::new(haptics));

    assert_eq!(app.step_round(), FrameOutcome::RoundWon);
    assert_eq!(count.get(), 1);

    // 引き直した直後はほぼ確実に一致しない。ずらして確実に外す
    app.state.picked = app.state.target.with_rgb([
        1.0 - app.state.target.r.round(),
        app.state.target.g,
        app.state.target.b,
    ]);
    assert_eq!(app.step_round(), FrameOutcome::NoChange);
    assert_eq!(count.get(), 1);
}

/// ハプティクスが失敗してもラウンドは進む。
#[test]
fn haptic_failure_does_not_block_the_round() {
    let mut app = ShadeSliderApp::with_config(matching_config(), Box::new(NoHaptics));

    assert_eq!(app.step_round(), FrameOutcome::RoundWon);
    assert_eq!(app.state.rounds_won, 1);
    assert!(app.log.contains("Round 1 cleared"));
}

#[test]
fn play_round_won_pulse_reports_result() {
    let mut log_haptics = LogHaptics::default();
    assert!(play_round_won_pulse(&mut log_haptics, HapticPulse::default()));
    assert_eq!(log_haptics.pulses_played(), 1);

    let mut none = NoHaptics;
    assert!(!play_round_won_pulse(&mut none, HapticPulse::default()));
}

#[test]
fn skip_round_does_not_count_as_win() {
    let mut app = ShadeSliderApp::with_config(matching_config(), Box::new(NoHaptics));
    app.skip_round();
    assert_eq!(app.state.rounds_won, 0);
    assert!(app.log.contains("Skipped"));
}

/// 同じシードのアプリは同じ色の列を出す。
#[test]
fn seeded_apps_are_reproducible() {
    let config = Config {
        seed: Some(2024),
        ..Config::default()
    };
    let a = ShadeSliderApp::with_config(config.clone(), Box::new(NoHaptics));
    let b = ShadeSliderApp::with_config(config, Box::new(NoHaptics));
    assert_eq!(a.state, b.state);
}

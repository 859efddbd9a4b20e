//! ラウンドの進行と一致判定（ゲームのコア）。
//!
//! - ホスト（UI 層）は毎フレーム `state.picked` を更新してから `evaluate_frame` を 1 回呼びます。
//! - コントローラが `picked` を書き換えるのはラウンドが切り替わるときだけです。
//! - ここには I/O もエラーもありません。ハプティクスなどの副作用はホスト側の責務です。

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::color::{ChannelScale, Color};
use crate::game_types::FrameOutcome;

/// 1 ラウンド分の状態。
///
/// - `target`     : プレイヤーが合わせるべき基準色
/// - `picked`     : プレイヤーが操作中の色（ホストが毎フレーム書き込む）
/// - `tolerance`  : チャンネルごとの許容差（0.0〜1.0 スケール、常に 0 以上）
/// - `rounds_won` : これまでにクリアしたラウンド数
#[derive(Debug, Clone, PartialEq)]
pub struct RoundState {
    pub target: Color,
    pub picked: Color,
    pub tolerance: f32,
    pub rounds_won: u64,
}

impl RoundState {
    /// 負の許容差は 0 に丸める。
    pub fn new(target: Color, picked: Color, tolerance: f32) -> Self {
        Self {
            target,
            picked,
            tolerance: tolerance.max(0.0),
            rounds_won: 0,
        }
    }

    /// 現在のターゲットとピック色のチェビシェフ距離
    pub fn distance(&self) -> f32 {
        self.target.chebyshev_distance(&self.picked)
    }

    pub fn is_match(&self) -> bool {
        channels_within_tolerance(self.target, self.picked, self.tolerance)
    }
}

/// 境界判定で吸収する `f32` の丸め誤差。
///
/// 0.7 と 0.8 の差は `f32` では 0.100000024 になるため、許容差 0.1 の境界に乗せるのに必要。
pub const MATCH_EPSILON: f32 = 1e-6;

/// RGB の各チャンネル差がすべて `tolerance` 以下なら true（境界を含む）。
///
/// alpha は比較しない。
pub fn channels_within_tolerance(target: Color, picked: Color, tolerance: f32) -> bool {
    let bound = tolerance + MATCH_EPSILON;
    (target.r - picked.r).abs() <= bound
        && (target.g - picked.g).abs() <= bound
        && (target.b - picked.b).abs() <= bound
}

/// ラウンドの勝敗判定と色の再生成を行うコントローラ。
///
/// 乱数生成器を所有します。テストや再現プレイでは `with_seed` で固定シードを使います。
#[derive(Debug, Clone)]
pub struct RoundController<R: Rng = StdRng> {
    rng: R,
}

impl RoundController<StdRng> {
    /// OS のエントロピーから初期化する。
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    /// 固定シードで初期化する（同じシードなら同じ色の列になる）。
    pub fn with_seed(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RoundController<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// 1 フレーム分の評価を行う。
    ///
    /// 一致していればターゲットとピック色を両方とも再生成し `RoundWon` を返す。
    /// 一致していなければ `state` には一切触れずに `NoChange` を返す。
    pub fn evaluate_frame(&mut self, state: &mut RoundState) -> FrameOutcome {
        if !state.is_match() {
            return FrameOutcome::NoChange;
        }

        self.regenerate(state);
        state.rounds_won += 1;
        FrameOutcome::RoundWon
    }

    /// 勝敗に関係なく両方の色を引き直す（スキップ用）。
    ///
    /// alpha はそれぞれ元の値を引き継ぐ。
    pub fn regenerate(&mut self, state: &mut RoundState) {
        state.target = self.random_color(state.target.a);
        state.picked = self.random_color(state.picked.a);
    }

    /// RGB を 0.0〜1.0 の一様分布から独立に引いた色を返す。alpha はそのまま。
    pub fn random_color(&mut self, alpha: f32) -> Color {
        self.random_color_scaled(alpha, ChannelScale::Unit)
    }

    /// `scale` の範囲（0〜1 または 0〜255）で RGB を引き、0.0〜1.0 に正規化した色を返す。
    ///
    /// `alpha` はすでに正規化済みの値として扱う。
    pub fn random_color_scaled(&mut self, alpha: f32, scale: ChannelScale) -> Color {
        let high = scale.max_value();
        let r: f32 = self.rng.gen_range(0.0..=high);
        let g: f32 = self.rng.gen_range(0.0..=high);
        let b: f32 = self.rng.gen_range(0.0..=high);
        Color::new(
            scale.normalize(r).clamp(0.0, 1.0),
            scale.normalize(g).clamp(0.0, 1.0),
            scale.normalize(b).clamp(0.0, 1.0),
            alpha,
        )
    }

    /// ランダムなターゲットとピック色で最初のラウンドを作る。
    pub fn new_round_state(&mut self, tolerance: f32, alpha: f32) -> RoundState {
        let target = self.random_color(alpha);
        let picked = self.random_color(alpha);
        RoundState::new(target, picked, tolerance)
    }
}

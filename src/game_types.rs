use std::error::Error;

// ゲーム本体（ラウンド判定）とホスト層（設定ファイル・ハプティクス・UI）で共有する型の定義。
//
// - ラウンド判定そのものは失敗しないため、この結果型はホスト側の I/O 境界でのみ使います。

/// ホスト層共通の結果型。
///
/// - 設定ファイルの読み書きやハプティクス呼び出しなど、失敗しうる処理はこの型を返します。
/// - エラーは `Send + Sync` な Box でラップし、呼び出し側でログに出して処理を続行する想定です。
pub type GameResult<T> = Result<T, Box<dyn Error + Send + Sync>>;

/// 1 フレームの評価結果。
///
/// - `NoChange` : 一致していない。状態は一切変更されていない。
/// - `RoundWon` : 一致した。ターゲットとピック色は同じフレーム内で再生成済み。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    NoChange,
    RoundWon,
}

impl FrameOutcome {
    pub fn is_round_won(self) -> bool {
        matches!(self, FrameOutcome::RoundWon)
    }
}

/// フレーム時間（秒）を「x.xxx ms/frame (y.y FPS)」形式の文字列にする。
///
/// - `dt_secs` が 0 以下の場合（起動直後など）は FPS を計算できないので `"-- ms/frame"` を返す。
pub fn format_frame_stats(dt_secs: f32) -> String {
    if dt_secs <= 0.0 {
        return "-- ms/frame".to_string();
    }
    format!("{:.3} ms/frame ({:.1} FPS)", dt_secs * 1000.0, 1.0 / dt_secs)
}

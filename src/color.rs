//! ゲームで扱う色の値型。
//!
//! - チャンネルはすべて 0.0〜1.0 に正規化した `f32` で持ちます。
//! - 古い版の設定では 0〜255 スケールの値が使われていたため、`ChannelScale::Byte`
//!   から正規化する変換も用意しています。

use serde::{Deserialize, Serialize};

/// チャンネル値のスケール。
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChannelScale {
    /// 0.0〜1.0
    #[default]
    Unit,
    /// 0〜255（旧スケール）
    Byte,
}

impl ChannelScale {
    /// スケールの最大値（正規化時の除数）
    pub fn max_value(self) -> f32 {
        match self {
            ChannelScale::Unit => 1.0,
            ChannelScale::Byte => 255.0,
        }
    }

    /// このスケールの値を 0.0〜1.0 に正規化する。
    pub fn normalize(self, value: f32) -> f32 {
        value / self.max_value()
    }
}

/// RGBA 色。各チャンネルは 0.0〜1.0。
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// 不透明な色を作る。
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }

    pub fn from_rgb_array(rgb: [f32; 3], a: f32) -> Self {
        Self::new(rgb[0], rgb[1], rgb[2], a)
    }

    /// 指定スケールのチャンネル値から色を作る（alpha も同じスケールで解釈する）。
    pub fn from_scaled(r: f32, g: f32, b: f32, a: f32, scale: ChannelScale) -> Self {
        Self::new(
            scale.normalize(r),
            scale.normalize(g),
            scale.normalize(b),
            scale.normalize(a),
        )
    }

    pub fn rgb_array(&self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }

    /// RGB のみ差し替え、alpha は保持した新しい色を返す。
    pub fn with_rgb(self, rgb: [f32; 3]) -> Self {
        Self::from_rgb_array(rgb, self.a)
    }

    /// RGB 3 チャンネルのチェビシェフ距離（各チャンネル差の絶対値の最大）。
    ///
    /// alpha は比較に含めない。
    pub fn chebyshev_distance(&self, other: &Color) -> f32 {
        let dr = (self.r - other.r).abs();
        let dg = (self.g - other.g).abs();
        let db = (self.b - other.b).abs();
        dr.max(dg).max(db)
    }

    /// 全チャンネルが 0.0〜1.0 に収まっているか
    pub fn is_normalized(&self) -> bool {
        [self.r, self.g, self.b, self.a]
            .iter()
            .all(|c| (0.0..=1.0).contains(c))
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::BLACK
    }
}

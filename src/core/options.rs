//! 変換オプション
//!
//! 置換語の長さ・文字種と、出力全体の文字種を選ぶ。

use serde::{Deserialize, Serialize};

/// 置換語の文字種
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FillerScript {
    #[default]
    Hiragana,
    Katakana,
}

/// 置換語の長さ
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FillerLength {
    /// 2モーラ (ぴっぴ)
    #[default]
    Long,
    /// 1モーラ (ぴ)
    Short,
}

/// 出力全体の文字種
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputScript {
    /// 置換後の文字列をそのまま出力
    #[default]
    AsSubstituted,
    /// 置換後に全体をカタカナへ変換
    Katakana,
}

/// 1回の変換で使う不変の設定
///
/// `output_script` が `Katakana` のとき `filler_script` は常に `Katakana` になる。
/// どのコンストラクタ・ビルダーを通ってもこの関係は崩れない。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TransformOptions {
    filler_script: FillerScript,
    filler_length: FillerLength,
    output_script: OutputScript,
}

impl TransformOptions {
    pub fn new(
        filler_script: FillerScript,
        filler_length: FillerLength,
        output_script: OutputScript,
    ) -> Self {
        let filler_script = match output_script {
            OutputScript::Katakana => FillerScript::Katakana,
            OutputScript::AsSubstituted => filler_script,
        };
        Self {
            filler_script,
            filler_length,
            output_script,
        }
    }

    /// 置換語の文字種を設定
    pub fn with_filler_script(self, filler_script: FillerScript) -> Self {
        Self::new(filler_script, self.filler_length, self.output_script)
    }

    /// 置換語の長さを設定
    pub fn with_filler_length(self, filler_length: FillerLength) -> Self {
        Self::new(self.filler_script, filler_length, self.output_script)
    }

    /// 出力全体の文字種を設定
    pub fn with_output_script(self, output_script: OutputScript) -> Self {
        Self::new(self.filler_script, self.filler_length, output_script)
    }

    pub fn filler_script(&self) -> FillerScript {
        self.filler_script
    }

    pub fn filler_length(&self) -> FillerLength {
        self.filler_length
    }

    pub fn output_script(&self) -> OutputScript {
        self.output_script
    }
}

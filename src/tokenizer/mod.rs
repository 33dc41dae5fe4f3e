//! 形態素解析器とのインターフェース
//!
//! パイプラインは `Tokenizer` トレイトだけに依存する。
//! 辞書を使う実装は [`DictionaryTokenizer`] (vibrato) を参照。

mod dictionary;

pub use dictionary::{initialize, reading_from_feature, DictionaryTokenizer};

/// 形態素 1 つ分
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// 入力テキスト中の表層形
    pub surface: String,
    /// 読み (IPADIC ではカタカナ)。辞書にない語では `None`
    pub reading: Option<String>,
}

impl Token {
    pub fn new(surface: impl Into<String>, reading: Option<String>) -> Self {
        Self {
            surface: surface.into(),
            reading,
        }
    }

    /// 読みが空でなければ読み、そうでなければ表層形
    pub fn reading_or_surface(&self) -> &str {
        match self.reading.as_deref() {
            Some(reading) if !reading.is_empty() => reading,
            _ => &self.surface,
        }
    }
}

/// テキストを左から順に形態素へ分割する
pub trait Tokenizer {
    fn tokenize(&self, text: &str) -> Vec<Token>;
}

/// 辞書の初期化エラー
#[derive(Debug)]
pub enum TokenizerError {
    /// 辞書ファイルの読み込み失敗
    Io(std::io::Error),
    /// 辞書データの形式エラー
    Dictionary(String),
}

impl std::fmt::Display for TokenizerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenizerError::Io(e) => write!(f, "辞書ファイル読み込みエラー: {}", e),
            TokenizerError::Dictionary(s) => write!(f, "辞書形式エラー: {}", s),
        }
    }
}

impl std::error::Error for TokenizerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TokenizerError::Io(e) => Some(e),
            TokenizerError::Dictionary(_) => None,
        }
    }
}

impl From<std::io::Error> for TokenizerError {
    fn from(e: std::io::Error) -> Self {
        TokenizerError::Io(e)
    }
}

impl From<vibrato::errors::VibratoError> for TokenizerError {
    fn from(e: vibrato::errors::VibratoError) -> Self {
        TokenizerError::Dictionary(e.to_string())
    }
}

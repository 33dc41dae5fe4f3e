pub mod clipboard;
pub mod config;
pub mod core;
pub mod share;
pub mod tokenizer;

pub use crate::core::converter::{transform, transform_reading};
pub use crate::core::kana::{hiragana_to_katakana, katakana_to_hiragana};
pub use crate::core::options::{FillerLength, FillerScript, OutputScript, TransformOptions};
pub use tokenizer::{initialize, DictionaryTokenizer, Token, Tokenizer, TokenizerError};

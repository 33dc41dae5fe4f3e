//! 変換の中核: 文字種変換、読みの抽出、置換

pub mod converter;
pub mod kana;
pub mod options;
pub mod reading;
pub mod substitution;

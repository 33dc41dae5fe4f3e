//! テキスト -> ぴっぴ語 変換パイプライン

use crate::core::options::TransformOptions;
use crate::core::reading::extract_reading;
use crate::core::substitution::substitute;
use crate::tokenizer::Tokenizer;

/// 入力テキストを形態素解析し、読みの「し」を置換語に変換
/// 読みを持たない文字 (英数字、記号など) はそのまま残る
pub fn transform<T: Tokenizer + ?Sized>(
    tokenizer: &T,
    text: &str,
    options: &TransformOptions,
) -> String {
    let tokens = tokenizer.tokenize(text);
    log::debug!("形態素数: {}", tokens.len());

    let reading = extract_reading(&tokens);
    log::debug!("読み: {}", reading);

    transform_reading(&reading, options)
}

/// 形態素解析済みのひらがなの読みを変換
pub fn transform_reading(reading: &str, options: &TransformOptions) -> String {
    substitute(reading, options)
}

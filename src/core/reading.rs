//! 形態素列からひらがなの読みを組み立てる

use crate::core::kana::katakana_to_hiragana;
use crate::tokenizer::Token;

/// 形態素ごとの読みをひらがなに揃えて連結
/// 読みがない形態素は表層形をそのまま使う
pub fn extract_reading(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(|token| katakana_to_hiragana(token.reading_or_surface()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token(surface: &str, reading: Option<&str>) -> Token {
        Token::new(surface, reading.map(str::to_string))
    }

    #[test]
    fn test_concatenate_readings() {
        let tokens = vec![
            token("私", Some("ワタシ")),
            token("は", Some("ハ")),
            token("学生", Some("ガクセイ")),
            token("です", Some("デス")),
        ];
        assert_eq!(extract_reading(&tokens), "わたしはがくせいです");
    }

    #[test]
    fn test_surface_fallback() {
        // 未知語は表層形、カタカナの表層形もひらがなに揃う
        let tokens = vec![
            token("Rust", None),
            token("ピッピ", None),
            token("語", Some("")),
        ];
        assert_eq!(extract_reading(&tokens), "Rustぴっぴ語");
    }

    #[test]
    fn test_empty_tokens() {
        assert_eq!(extract_reading(&[]), "");
    }
}

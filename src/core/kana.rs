//! ひらがな・カタカナ相互変換ユーティリティ

/// ひらがな音節ブロックの先頭 (ぁ)
const HIRAGANA_START: u32 = 0x3041;
/// ひらがな音節ブロックの末尾 (ゖ)
const HIRAGANA_END: u32 = 0x3096;

/// カタカナ音節ブロックの先頭 (ァ)
const KATAKANA_START: u32 = 0x30A1;
/// カタカナ音節ブロックの末尾 (ヶ)
const KATAKANA_END: u32 = 0x30F6;

/// ひらがなとカタカナのコードポイント差
const KANA_OFFSET: u32 = 0x60;

/// 変換対象のひらがなかどうか (U+3041..=U+3096)
///
/// ゝゞ・゛゜などブロック外の記号は含まない
pub fn is_hiragana(c: char) -> bool {
    (HIRAGANA_START..=HIRAGANA_END).contains(&(c as u32))
}

/// 変換対象のカタカナかどうか (U+30A1..=U+30F6)
///
/// 中黒 (・) と長音符 (ー) は範囲外
pub fn is_katakana(c: char) -> bool {
    (KATAKANA_START..=KATAKANA_END).contains(&(c as u32))
}

/// 文字列にひらがなが残っているか
pub fn has_hiragana(s: &str) -> bool {
    s.chars().any(is_hiragana)
}

/// ひらがなをカタカナに変換
/// 範囲外の文字 (漢字、英数字、記号、既存のカタカナ) はそのまま
pub fn hiragana_to_katakana(s: &str) -> String {
    s.chars()
        .map(|c| {
            if is_hiragana(c) {
                char::from_u32(c as u32 + KANA_OFFSET).unwrap_or(c)
            } else {
                c
            }
        })
        .collect()
}

/// カタカナをひらがなに変換
pub fn katakana_to_hiragana(s: &str) -> String {
    s.chars()
        .map(|c| {
            if is_katakana(c) {
                char::from_u32(c as u32 - KANA_OFFSET).unwrap_or(c)
            } else {
                c
            }
        })
        .collect()
}

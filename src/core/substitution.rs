//! 「し」を置換語に差し替える

use crate::core::kana::{has_hiragana, hiragana_to_katakana};
use crate::core::options::{FillerLength, FillerScript, OutputScript, TransformOptions};

/// 置換対象の音
pub const TARGET_SOUND: &str = "し";
/// 2モーラの置換語
pub const LONG_FILLER: &str = "ぴっぴ";
/// 1モーラの置換語
pub const SHORT_FILLER: &str = "ぴ";

/// オプションに応じた置換語 (文字種変換済み)
pub fn filler_word(options: &TransformOptions) -> String {
    let filler = match options.filler_length() {
        FillerLength::Long => LONG_FILLER,
        FillerLength::Short => SHORT_FILLER,
    };

    match options.filler_script() {
        FillerScript::Katakana => hiragana_to_katakana(filler),
        FillerScript::Hiragana => filler.to_string(),
    }
}

/// ひらがなの読み全体で「し」を置換し、必要なら全体をカタカナにする
///
/// 単語境界は見ない。助詞でも漢字の読みでも「し」なら同じく置換する。
pub fn substitute(reading: &str, options: &TransformOptions) -> String {
    let replaced = reading.replace(TARGET_SOUND, &filler_word(options));

    match options.output_script() {
        OutputScript::Katakana => {
            let converted = hiragana_to_katakana(&replaced);
            debug_assert!(!has_hiragana(&converted));
            converted
        }
        OutputScript::AsSubstituted => replaced,
    }
}

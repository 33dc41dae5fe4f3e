//! 変換結果をクリップボードへコピー

/// テキストをクリップボードにコピー (空文字列はエラー)
///
/// X11 ではプロセス終了後も内容を残すにはクリップボードマネージャが必要。
pub fn copy(text: &str) -> Result<(), String> {
    if text.is_empty() {
        return Err("コピーする内容がありません".to_string());
    }

    let mut clipboard =
        arboard::Clipboard::new().map_err(|e| format!("クリップボード初期化失敗: {}", e))?;
    clipboard
        .set_text(text)
        .map_err(|e| format!("クリップボード書き込み失敗: {}", e))?;

    log::debug!("クリップボードにコピー: {} 文字", text.chars().count());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copy_empty_is_rejected() {
        assert!(copy("").is_err());
    }
}

//! 共有用 URL の組み立て

/// 共有テキストの末尾に付けるリンク
pub const SHARE_LINK: &str = "https://pippi.oto.im/pippi/";

/// 投稿画面のエンドポイント
pub const INTENT_ENDPOINT: &str = "https://twitter.com/intent/tweet?text=";

/// 変換結果とリンクを空行で区切って連結
pub fn share_text(result: &str) -> String {
    format!("{}\n\n{}", result, SHARE_LINK)
}

/// 共有用 URL を作成。変換結果が空なら `None`
pub fn share_url(result: &str) -> Option<String> {
    if result.is_empty() {
        return None;
    }
    Some(format!(
        "{}{}",
        INTENT_ENDPOINT,
        encode_uri_component(&share_text(result))
    ))
}

/// URI コンポーネント用のパーセントエンコード
/// 英数字と `-_.!~*'()` 以外は UTF-8 バイト単位で `%XX` にする
pub fn encode_uri_component(s: &str) -> String {
    let mut out = String::with_capacity(s.len() * 3);
    for byte in s.bytes() {
        if is_unreserved(byte) {
            out.push(byte as char);
        } else {
            out.push_str(&format!("%{:02X}", byte));
        }
    }
    out
}

fn is_unreserved(byte: u8) -> bool {
    byte.is_ascii_alphanumeric()
        || matches!(byte, b'-' | b'_' | b'.' | b'!' | b'~' | b'*' | b'\'' | b'(' | b')')
}

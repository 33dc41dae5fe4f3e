//! vibrato による辞書ベースの形態素解析
//!
//! IPADIC 形式の辞書を前提とし、素性の 8 列目 (読み) を `Token::reading` に使う。

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use vibrato::Dictionary;

use super::{Token, TokenizerError, Tokenizer};

/// IPADIC 素性における読みの列番号
const READING_FEATURE_INDEX: usize = 7;

/// 初期化済みの形態素解析器
///
/// `initialize` が成功したときだけ得られるので、未初期化のまま変換されることはない。
pub struct DictionaryTokenizer {
    inner: vibrato::Tokenizer,
}

impl DictionaryTokenizer {
    /// 構築済みの辞書から生成
    pub fn from_dictionary(dict: Dictionary) -> Self {
        Self {
            inner: vibrato::Tokenizer::new(dict),
        }
    }

    /// 辞書データを読み込んで生成 (非圧縮)
    pub fn from_reader<R: Read>(rdr: R) -> Result<Self, TokenizerError> {
        let dict = Dictionary::read(rdr)?;
        Ok(Self::from_dictionary(dict))
    }
}

impl std::fmt::Debug for DictionaryTokenizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DictionaryTokenizer").finish_non_exhaustive()
    }
}

impl Tokenizer for DictionaryTokenizer {
    fn tokenize(&self, text: &str) -> Vec<Token> {
        if text.is_empty() {
            return Vec::new();
        }

        // ワーカーは呼び出しごとに作るので、同じハンドルを複数スレッドで共有できる
        let mut worker = self.inner.new_worker();
        worker.reset_sentence(text);
        worker.tokenize();

        worker
            .token_iter()
            .map(|t| Token::new(t.surface(), reading_from_feature(t.feature())))
            .collect()
    }
}

/// 辞書ファイルを読み込んで形態素解析器を初期化
///
/// 拡張子が `.zst` なら zstd 圧縮として展開する。失敗は呼び出し側に返し、再試行はしない。
pub fn initialize(path: impl AsRef<Path>) -> Result<DictionaryTokenizer, TokenizerError> {
    let path = path.as_ref();
    log::info!("辞書読み込み: {}", path.display());

    let file = File::open(path)?;
    let tokenizer = if path.extension().is_some_and(|ext| ext == "zst") {
        DictionaryTokenizer::from_reader(zstd::Decoder::new(file)?)?
    } else {
        DictionaryTokenizer::from_reader(BufReader::new(file))?
    };

    log::info!("辞書読み込み完了");
    Ok(tokenizer)
}

/// IPADIC の素性文字列から読みを取り出す
/// 列が足りない、または `*` の場合は `None`
pub fn reading_from_feature(feature: &str) -> Option<String> {
    feature
        .split(',')
        .nth(READING_FEATURE_INDEX)
        .filter(|reading| !reading.is_empty() && *reading != "*")
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::converter::transform;
    use crate::core::options::TransformOptions;
    use vibrato::SystemDictionaryBuilder;

    const LEXICON: &str = "\
私,1,1,100,名詞,代名詞,一般,*,*,*,私,ワタシ,ワタシ
は,2,2,100,助詞,係助詞,*,*,*,*,は,ハ,ワ
学生,1,1,100,名詞,一般,*,*,*,*,学生,ガクセイ,ガクセー
です,3,3,100,助動詞,*,*,*,特殊・デス,基本形,です,デス,デス
";
    const MATRIX: &str = "4 4\n";
    const CHAR_DEF: &str = "DEFAULT 0 1 0\n";
    const UNK_DEF: &str = "DEFAULT,0,0,10000,名詞,一般,*,*,*,*,*\n";

    fn test_dictionary() -> Dictionary {
        SystemDictionaryBuilder::from_readers(
            LEXICON.as_bytes(),
            MATRIX.as_bytes(),
            CHAR_DEF.as_bytes(),
            UNK_DEF.as_bytes(),
        )
        .unwrap()
    }

    fn test_tokenizer() -> DictionaryTokenizer {
        DictionaryTokenizer::from_dictionary(test_dictionary())
    }

    #[test]
    fn test_reading_from_feature() {
        assert_eq!(
            reading_from_feature("名詞,代名詞,一般,*,*,*,私,ワタシ,ワタシ"),
            Some("ワタシ".to_string())
        );
        assert_eq!(reading_from_feature("名詞,一般,*,*,*,*,*"), None);
        assert_eq!(reading_from_feature("名詞,一般,*,*,*,*,*,*,*"), None);
        assert_eq!(reading_from_feature(""), None);
    }

    #[test]
    fn test_tokenize_sentence() {
        let tokens = test_tokenizer().tokenize("私は学生です");
        let surfaces: Vec<&str> = tokens.iter().map(|t| t.surface.as_str()).collect();
        assert_eq!(surfaces, vec!["私", "は", "学生", "です"]);
        assert_eq!(tokens[0].reading.as_deref(), Some("ワタシ"));
        assert_eq!(tokens[2].reading.as_deref(), Some("ガクセイ"));
    }

    #[test]
    fn test_tokenize_empty() {
        assert!(test_tokenizer().tokenize("").is_empty());
    }

    #[test]
    fn test_initialize_missing_file() {
        let err = initialize("/nonexistent/pippi/system.dic.zst").unwrap_err();
        assert!(matches!(err, TokenizerError::Io(_)));
    }

    #[test]
    fn test_initialize_broken_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.dic");
        std::fs::write(&path, b"not a dictionary").unwrap();
        assert!(initialize(&path).is_err());
    }

    #[test]
    fn test_initialize_raw_and_zstd() {
        let mut bytes = Vec::new();
        test_dictionary().write(&mut bytes).unwrap();

        let dir = tempfile::tempdir().unwrap();
        let raw_path = dir.path().join("system.dic");
        let zst_path = dir.path().join("system.dic.zst");
        std::fs::write(&raw_path, &bytes).unwrap();
        std::fs::write(&zst_path, zstd::encode_all(bytes.as_slice(), 0).unwrap()).unwrap();

        let options = TransformOptions::default();
        for path in [&raw_path, &zst_path] {
            let tokenizer = initialize(path).unwrap();
            assert_eq!(
                transform(&tokenizer, "私は学生です", &options),
                "わたぴっぴはがくせいです"
            );
        }
    }
}

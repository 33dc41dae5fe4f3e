//! 設定ファイルの読み込み・保存 (JSON)

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::options::{FillerLength, FillerScript, OutputScript, TransformOptions};

/// pippi 設定
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct PippiConfig {
    /// vibrato 辞書ファイルのパス (.zst なら zstd 展開)
    #[serde(default)]
    pub dictionary_path: Option<PathBuf>,
    /// 置換語の長さ
    #[serde(default)]
    pub filler_length: FillerLength,
    /// 置換語の文字種
    #[serde(default)]
    pub filler_script: FillerScript,
    /// 出力全体の文字種
    #[serde(default)]
    pub output_script: OutputScript,
}

impl PippiConfig {
    /// 設定値から変換オプションを作成
    pub fn options(&self) -> TransformOptions {
        TransformOptions::new(self.filler_script, self.filler_length, self.output_script)
    }
}

/// 設定ファイルのパス: ~/.config/pippi/config.json
pub fn config_path() -> PathBuf {
    let home = std::env::var("HOME")
        .ok()
        .map(PathBuf::from)
        .filter(|p| p.is_absolute() && p.is_dir())
        .unwrap_or_else(|| {
            // HOME が未設定または無効なら /var/tmp にフォールバック
            PathBuf::from("/var/tmp")
        });
    home.join(".config").join("pippi").join("config.json")
}

/// 既定のパスから設定を読み込む
pub fn load_config() -> PippiConfig {
    load_config_from(&config_path())
}

/// 設定ファイルを読み込む (ファイルがない、または解析に失敗した場合は既定値)
pub fn load_config_from(path: &Path) -> PippiConfig {
    match fs::read_to_string(path) {
        Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
            log::warn!("設定ファイル解析失敗 ({}): {}", path.display(), e);
            PippiConfig::default()
        }),
        Err(_) => PippiConfig::default(),
    }
}

/// 既定のパスに設定を保存
pub fn save_config(config: &PippiConfig) -> Result<(), String> {
    save_config_to(&config_path(), config)
}

/// 設定ファイルを保存
pub fn save_config_to(path: &Path, config: &PippiConfig) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| format!("設定ディレクトリ作成失敗: {}", e))?;
    }
    let json = serde_json::to_string_pretty(config).map_err(|e| format!("シリアライズ失敗: {}", e))?;
    fs::write(path, json).map_err(|e| format!("設定ファイル保存失敗: {}", e))?;
    Ok(())
}

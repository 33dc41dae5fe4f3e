//! pippi - 日本語テキストの「し」を「ぴっぴ」に変換する CLI
//!
//! ```sh
//! pippi --dict ipadic/system.dic.zst 私は学生です
//! echo 私は学生です | pippi --katakana --share
//! pippi --reading わたしはがくせいです --short
//! ```

use clap::Parser;
use pippi::config::{load_config, load_config_from, save_config, save_config_to, PippiConfig};
use pippi::{
    clipboard, initialize, katakana_to_hiragana, share, transform, transform_reading,
    FillerLength, FillerScript, OutputScript, TransformOptions,
};
use std::io::{self, Read};
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(name = "pippi", version, about = "日本語テキストの「し」を「ぴっぴ」に変換")]
struct Cli {
    /// 変換するテキスト (省略時は標準入力を 1 行ずつ変換)
    text: Vec<String>,

    /// vibrato 辞書ファイル (設定ファイルより優先)
    #[arg(short, long)]
    dict: Option<PathBuf>,

    /// 設定ファイル (既定: ~/.config/pippi/config.json)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// 置換語を「ぴ」にする
    #[arg(long)]
    short: bool,

    /// 置換語をカタカナにする
    #[arg(long)]
    kata_filler: bool,

    /// 出力全体をカタカナにする (置換語もカタカナになる)
    #[arg(long)]
    katakana: bool,

    /// 入力を形態素解析せず読みとして扱う
    #[arg(long)]
    reading: bool,

    /// 変換結果をクリップボードにコピー
    #[arg(long)]
    copy: bool,

    /// 共有用 URL を出力
    #[arg(long)]
    share: bool,

    /// 現在の辞書パスとオプションを設定ファイルに保存
    #[arg(long)]
    save_config: bool,
}

fn main() {
    // ログ初期化 (warn 以上のみ出力)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        log::error!("{}", e);
        eprintln!("エラー: {}", e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), String> {
    let config = match &cli.config {
        Some(path) => load_config_from(path),
        None => load_config(),
    };

    let options = apply_flags(config.options(), &cli);
    let dictionary_path = cli.dict.clone().or_else(|| config.dictionary_path.clone());

    if cli.save_config {
        let updated = PippiConfig {
            dictionary_path: dictionary_path.clone(),
            filler_length: options.filler_length(),
            filler_script: options.filler_script(),
            output_script: options.output_script(),
        };
        match &cli.config {
            Some(path) => save_config_to(path, &updated)?,
            None => save_config(&updated)?,
        }
    }

    let lines = read_input(&cli.text)?;

    let output = if cli.reading {
        lines
            .iter()
            .map(|line| convert_reading_line(line, &options))
            .collect::<Vec<_>>()
            .join("\n")
    } else {
        let path = dictionary_path
            .ok_or("辞書パスが指定されていません (--dict または設定ファイルの dictionary_path)")?;
        let tokenizer =
            initialize(&path).map_err(|e| format!("形態素解析器の初期化エラー: {}", e))?;
        lines
            .iter()
            .map(|line| transform(&tokenizer, line, &options))
            .collect::<Vec<_>>()
            .join("\n")
    };

    println!("{}", output);

    if cli.copy {
        clipboard::copy(&output)?;
    }

    if cli.share {
        match share::share_url(&output) {
            Some(url) => println!("{}", url),
            None => log::warn!("共有する内容がありません"),
        }
    }

    Ok(())
}

/// コマンドラインのフラグは設定ファイルの値を強める方向にだけ働く
fn apply_flags(mut options: TransformOptions, cli: &Cli) -> TransformOptions {
    if cli.short {
        options = options.with_filler_length(FillerLength::Short);
    }
    if cli.kata_filler {
        options = options.with_filler_script(FillerScript::Katakana);
    }
    if cli.katakana {
        options = options.with_output_script(OutputScript::Katakana);
    }
    options
}

/// 読みとして与えられた行を変換 (カタカナの読みもひらがなに揃える)
fn convert_reading_line(line: &str, options: &TransformOptions) -> String {
    transform_reading(&katakana_to_hiragana(line), options)
}

fn read_input(text: &[String]) -> Result<Vec<String>, String> {
    if !text.is_empty() {
        return Ok(vec![text.join(" ")]);
    }

    let mut buffer = String::new();
    io::stdin()
        .read_to_string(&mut buffer)
        .map_err(|e| format!("標準入力の読み込み失敗: {}", e))?;
    Ok(buffer.lines().map(str::to_string).collect())
}

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "label-scan")]
#[command(about = "ボトルラベルのOCRテキストから製品を特定するツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// ラベルテキストを解析して属性をJSONで出力（カタログ照合なし）
    Parse {
        /// OCRテキストファイル（`-` で標準入力）
        #[arg(required = true)]
        input: PathBuf,

        /// 出力JSONファイル（省略時は標準出力）
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// ラベルテキストを解析してカタログと照合
    Scan {
        /// OCRテキストファイル（`-` で標準入力）
        #[arg(required = true)]
        input: PathBuf,

        /// カタログJSONファイル（省略時は設定値）
        #[arg(short, long)]
        catalog: Option<PathBuf>,

        /// 出力JSONファイル（省略時は標準出力）
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// フォルダ内のOCRテキストを一括照合
    Batch {
        /// OCRテキスト（.txt）のフォルダ
        #[arg(required = true)]
        folder: PathBuf,

        /// カタログJSONファイル（省略時は設定値）
        #[arg(short, long)]
        catalog: Option<PathBuf>,

        /// 出力ファイル/ディレクトリ（デフォルト: 入力フォルダ）
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// 出力形式 (json/excel/both)
        #[arg(short, long, default_value = "json")]
        format: ExportFormat,

        /// サブフォルダも再帰的にスキャン
        #[arg(short = 'r', long)]
        recursive: bool,
    },

    /// カタログファイルの内容を確認
    Catalog {
        /// カタログJSONファイル
        #[arg(required = true)]
        path: PathBuf,
    },

    /// 設定を表示/編集
    Config {
        /// 既定のカタログファイルを設定
        #[arg(long)]
        set_catalog: Option<PathBuf>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ExportFormat {
    #[default]
    Json,
    Excel,
    Both,
}

impl std::str::FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "excel" | "xlsx" => Ok(ExportFormat::Excel),
            "both" => Ok(ExportFormat::Both),
            _ => Err(format!("Unknown format: {}. Use json, excel, or both", s)),
        }
    }
}

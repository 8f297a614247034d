use chrono::Datelike;
use clap::Parser;
use label_scan_common::{parse_label_text_with_year, scan_label_with_year, BeverageType};
use label_scan_rust::catalog::load_catalog;
use label_scan_rust::{analyzer, cli, config, error, export, scanner};
use cli::{Cli, Commands};
use config::Config;
use error::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "label_scan_rust=debug,label_scan_common=debug"
    } else {
        "warn"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = Config::load()?;
    let year = config
        .current_year
        .unwrap_or_else(|| chrono::Local::now().year());

    match cli.command {
        Commands::Parse { input, output } => {
            let text = scanner::read_text_input(&input)?;
            let parsed = parse_label_text_with_year(&text, year);

            match output {
                Some(path) => {
                    export::write_json(&parsed, &path, config.pretty_json)?;
                    eprintln!("✔ 結果を保存: {}", path.display());
                }
                None => println!("{}", serde_json::to_string_pretty(&parsed)?),
            }
        }

        Commands::Scan { input, catalog, output } => {
            let catalog_path = config.resolve_catalog(catalog)?;
            let catalog = load_catalog(&catalog_path)?;

            let text = scanner::read_text_input(&input)?;
            let result = scan_label_with_year(&text, &catalog, year)?;

            match output {
                Some(path) => {
                    export::write_json(&result, &path, config.pretty_json)?;
                    eprintln!("✔ 結果を保存: {} (信頼度: {})", path.display(), result.confidence);
                }
                None => println!("{}", serde_json::to_string_pretty(&result)?),
            }
        }

        Commands::Batch { folder, catalog, output, format, recursive } => {
            println!("🍷 label-scan - 一括照合\n");

            // 1. カタログ読み込み
            println!("[1/3] カタログを読み込み中...");
            let catalog_path = config.resolve_catalog(catalog)?;
            let catalog = load_catalog(&catalog_path)?;
            println!("✔ {}件の製品\n", catalog.len());

            // 2. テキストスキャン
            println!("[2/3] OCRテキストをスキャン中...");
            let files = scanner::scan_folder(&folder, recursive || config.recursive)?;
            if files.is_empty() {
                return Err(error::LabelScanError::NoTextFound(
                    folder.display().to_string()
                ));
            }
            println!("✔ {}件のテキストを検出\n", files.len());

            // 3. 照合・出力
            println!("[3/3] 照合中...");
            let records = analyzer::analyze_files(&files, &catalog, Some(year), cli.verbose)?;
            let summary = analyzer::summarize(&records);
            println!(
                "✔ 照合完了: high {} / medium {} / low {}（候補なし {}）\n",
                summary.high, summary.medium, summary.low, summary.unmatched
            );

            let output_dir = output.unwrap_or_else(|| folder.clone());
            for path in export::export_records(&records, &format, &output_dir, config.pretty_json)? {
                println!("✔ 出力: {}", path.display());
            }

            println!("\n✅ 完了");
        }

        Commands::Catalog { path } => {
            let catalog = load_catalog(&path)?;
            let counts = catalog.count_by_type();

            println!("カタログ: {}", path.display());
            println!("  製品数: {}", catalog.len());
            for beverage_type in [BeverageType::Wine, BeverageType::Spirit, BeverageType::Beer] {
                println!(
                    "  {}: {}",
                    beverage_type,
                    counts.get(&beverage_type).copied().unwrap_or(0)
                );
            }
        }

        Commands::Config { set_catalog, show } => {
            let mut config = config;

            if let Some(path) = set_catalog {
                config.set_catalog(path)?;
                println!("✔ カタログを設定しました");
            }

            if show {
                println!("設定:");
                println!(
                    "  カタログ: {}",
                    config
                        .catalog_path
                        .as_ref()
                        .map(|p| p.display().to_string())
                        .unwrap_or_else(|| "未設定".to_string())
                );
                println!("  JSON整形: {}", config.pretty_json);
                println!("  再帰スキャン: {}", config.recursive);
                println!(
                    "  基準年: {}",
                    config
                        .current_year
                        .map(|y| y.to_string())
                        .unwrap_or_else(|| "システム時刻".to_string())
                );
            }
        }
    }

    Ok(())
}

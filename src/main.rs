//! cyberlaw-detector 命令行入口
//! scan：单条文本检测；batch：批量文件检测与 CSV 导出；catalog：查看/导出规则库

use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::warn;
use tracing_subscriber::EnvFilter;

use cyberlaw_detector::{
    AnalysisResult, BatchReport, CancelToken, CatalogLoader, ConfigManager, CsvExporter,
    JsonExporter, PostExtractor, ViolationDetector, default_export_file_name,
};

const DISCLAIMER: &str =
    "Disclaimer: preliminary screening only. Legal consultation is recommended for actual enforcement.";

#[derive(Parser)]
#[command(name = "cyberlaw-detector")]
#[command(version, about = "Detect potential cyber law violations in online posts", long_about = None)]
struct Cli {
    /// Custom catalog file (.json or .mp); defaults to the built-in catalog
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a single post
    Scan {
        /// Post text (omit with --stdin)
        text: Option<String>,
        /// Read the post from standard input
        #[arg(long, conflicts_with = "text")]
        stdin: bool,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Analyze a .txt (one post per line) or .csv (`post` column) file
    Batch {
        /// Input file
        file: PathBuf,
        /// CSV output path (defaults to cyber_law_analysis_<timestamp>.csv)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Print the full report as JSON instead of a table
        #[arg(long)]
        json: bool,
        /// Number of concurrent workers
        #[arg(long)]
        concurrency: Option<usize>,
    },
    /// List the catalog categories or export the catalog
    Catalog {
        /// Export path (.json or .mp)
        #[arg(long)]
        export: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut builder = ConfigManager::custom();
    if let Some(path) = cli.catalog.clone() {
        builder = builder.catalog_path(path);
    }
    if let Commands::Batch { concurrency: Some(n), .. } = &cli.command {
        builder = builder.concurrency(*n);
    }
    let config = builder.build();

    match cli.command {
        Commands::Scan { text, stdin, json } => {
            let text = if stdin {
                let mut buf = String::new();
                std::io::stdin()
                    .read_to_string(&mut buf)
                    .context("failed to read post from stdin")?;
                buf
            } else {
                text.unwrap_or_default()
            };
            if text.trim().is_empty() {
                eprintln!("Please enter some text to analyze.");
                return Ok(ExitCode::from(2));
            }

            let detector = ViolationDetector::new(config)
                .await
                .context("failed to initialize detector")?;
            let result = detector.analyze(&text);
            if json {
                println!("{}", JsonExporter::to_pretty(&result)?);
            } else {
                print_scan_result(&result);
            }
        }
        Commands::Batch { file, output, json, .. } => {
            let items = PostExtractor::from_path(&file)
                .await
                .with_context(|| format!("error processing file {}", file.display()))?;
            if items.is_empty() {
                eprintln!("No posts found in {}", file.display());
                return Ok(ExitCode::from(2));
            }
            eprintln!("Loaded {} posts for analysis", items.len());

            let detector = ViolationDetector::new(config)
                .await
                .context("failed to initialize detector")?;

            let cancel = CancelToken::new();
            let signal_token = cancel.clone();
            tokio::spawn(async move {
                if tokio::signal::ctrl_c().await.is_ok() {
                    warn!("收到中断信号，正在取消批量检测");
                    signal_token.cancel();
                }
            });

            let report = detector
                .analyze_batch_concurrent(items, Some(cancel))
                .await
                .context("batch analysis failed")?;

            if json {
                println!("{}", JsonExporter::to_pretty(&report)?);
            } else {
                print_batch_report(&report);
            }

            let output = output.unwrap_or_else(|| PathBuf::from(default_export_file_name()));
            CsvExporter::save(&report, &output)
                .await
                .with_context(|| format!("failed to write {}", output.display()))?;
            eprintln!("Results saved to {}", output.display());
        }
        Commands::Catalog { export } => {
            let catalog = CatalogLoader::load(&config).await?;
            // 导出前先确认规则可编译
            ViolationDetector::from_catalog(&catalog, config).context("invalid catalog")?;
            match export {
                Some(path) => {
                    CatalogLoader::export(&path, &catalog)
                        .await
                        .with_context(|| format!("failed to export catalog to {}", path.display()))?;
                    eprintln!("Catalog exported to {}", path.display());
                }
                None => {
                    for (i, category) in catalog.categories.iter().enumerate() {
                        println!("{}. {} ({} patterns)", i + 1, category.name, category.patterns.len());
                        println!("   Law: {}", category.legal_reference);
                        println!("   {}", category.description);
                    }
                }
            }
            return Ok(ExitCode::SUCCESS);
        }
    }

    println!();
    println!("{}", DISCLAIMER);
    Ok(ExitCode::SUCCESS)
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_scan_result(result: &AnalysisResult) {
    if result.is_empty() {
        println!("NO VIOLATIONS DETECTED");
        println!("Status: Content appears to comply with cyber laws");
        return;
    }

    println!("VIOLATIONS DETECTED");
    println!("Status: Content flagged for potential cyber law violations");
    println!("Number of violations: {}", result.len());
    for (i, violation) in result.iter().enumerate() {
        println!();
        println!("Violation {}: {}", i + 1, violation.category);
        println!("  Legal Reference: {}", violation.legal_reference);
        println!("  Description: {}", violation.description);
    }
}

fn print_batch_report(report: &BatchReport) {
    let summary = &report.summary;
    println!("Total Posts:   {}", summary.total);
    println!("Flagged Posts: {} ({:.1}%)", summary.flagged, summary.flagged_percent());
    println!("Clean Posts:   {} ({:.1}%)", summary.clean, summary.clean_percent());
    if summary.unprocessed > 0 {
        println!("Unprocessed:   {}", summary.unprocessed);
    }
    println!();
    println!("{:>6}  {:<8}  {:>10}  {}", "Post #", "Status", "Violations", "Content Preview");
    for row in &report.rows {
        println!(
            "{:>6}  {:<8}  {:>10}  {}",
            row.index,
            row.status.to_string(),
            row.violations,
            row.preview
        );
        if !row.types.is_empty() {
            println!("{:>30}Types: {}", "", row.types.join(", "));
            println!("{:>30}Laws:  {}", "", row.laws.join(", "));
        }
    }
}

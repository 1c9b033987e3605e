//! Batch processing command for multiple receipt submissions.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use clap::Args;
use console::style;
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::{debug, error, warn};

use rcpt_core::models::{Report, Submission};
use rcpt_core::validator::{ValidatorContext, validate_submission};

use super::process::{OutputFormat, format_report};

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Submission files glob pattern
    #[arg(required = true)]
    input: String,

    /// Output directory
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Output format for each file
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Also generate a summary CSV
    #[arg(long)]
    summary: bool,

    /// Number of submissions validated concurrently
    #[arg(short = 'j', long, default_value = "4")]
    jobs: usize,

    /// Continue on error
    #[arg(long)]
    continue_on_error: bool,

    /// Client whose rules apply to submissions that name none
    #[arg(long)]
    client: Option<String>,
}

/// Result of processing a single file.
struct ProcessResult {
    path: PathBuf,
    report: Option<Report>,
    error: Option<String>,
    processing_time_ms: u64,
}

pub async fn run(args: BatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    let config = super::load_config(config_path)?;

    // Expand glob pattern
    let mut files: Vec<PathBuf> = glob(&args.input)?
        .filter_map(|r| r.ok())
        .filter(|p| {
            let ext = p.extension().and_then(|e| e.to_str()).unwrap_or("");
            ext.eq_ignore_ascii_case("json")
        })
        .collect();
    files.sort();

    if files.is_empty() {
        anyhow::bail!("No matching files found for pattern: {}", args.input);
    }

    println!(
        "{} Found {} files to process",
        style("ℹ").blue(),
        files.len()
    );

    // Create output directory if specified
    if let Some(ref output_dir) = args.output_dir {
        fs::create_dir_all(output_dir)?;
    }

    let progress = ProgressBar::new(files.len() as u64);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files")?
            .progress_chars("=>-"),
    );

    let context = Arc::new(ValidatorContext::from_config(&config)?);
    let default_client: Arc<str> = args
        .client
        .clone()
        .unwrap_or_else(|| config.validation.default_client.clone())
        .into();
    let permits = Arc::new(Semaphore::new(args.jobs.max(1)));

    let mut tasks = JoinSet::new();
    for path in files {
        let context = Arc::clone(&context);
        let default_client = Arc::clone(&default_client);
        let permits = Arc::clone(&permits);

        tasks.spawn(async move {
            let _permit = permits.acquire_owned().await?;
            let file_start = Instant::now();
            let result = process_single_file(&path, &context, &default_client).await;
            let processing_time_ms = file_start.elapsed().as_millis() as u64;
            anyhow::Ok((path, result, processing_time_ms))
        });
    }

    let mut results = Vec::new();
    while let Some(joined) = tasks.join_next().await {
        let (path, result, processing_time_ms) = joined??;
        progress.inc(1);

        match result {
            Ok(report) => results.push(ProcessResult {
                path,
                report: Some(report),
                error: None,
                processing_time_ms,
            }),
            Err(e) => {
                let error_msg = e.to_string();
                if args.continue_on_error {
                    warn!("Failed to process {}: {}", path.display(), error_msg);
                    results.push(ProcessResult {
                        path,
                        report: None,
                        error: Some(error_msg),
                        processing_time_ms,
                    });
                } else {
                    error!("Failed to process {}: {}", path.display(), error_msg);
                    tasks.abort_all();
                    anyhow::bail!("Processing failed: {}", error_msg);
                }
            }
        }
    }

    progress.finish_and_clear();

    // Completion order is arbitrary; report in file order.
    results.sort_by(|a, b| a.path.cmp(&b.path));

    // Write outputs
    if let Some(output_dir) = &args.output_dir {
        for result in &results {
            let Some(report) = &result.report else {
                continue;
            };

            let output_name = result
                .path
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("receipt");
            let output_path =
                output_dir.join(format!("{}.verdict.{}", output_name, args.format.extension()));

            let content = format_report(report, args.format, config.output.pretty, None)?;
            fs::write(&output_path, content)?;
            debug!("Wrote output to {}", output_path.display());
        }
    }

    // Generate summary if requested
    if args.summary {
        let summary_path = args
            .output_dir
            .as_ref()
            .map(|d| d.join("summary.csv"))
            .unwrap_or_else(|| PathBuf::from("summary.csv"));

        write_summary(&summary_path, &results)?;
        println!(
            "{} Summary written to {}",
            style("✓").green(),
            summary_path.display()
        );
    }

    let approved = results
        .iter()
        .filter_map(|r| r.report.as_ref())
        .filter(|r| r.validation_result.is_approved())
        .count();
    let validated = results.iter().filter(|r| r.report.is_some()).count();
    let failed: Vec<_> = results.iter().filter(|r| r.error.is_some()).collect();

    println!();
    println!(
        "{} Processed {} files in {:?}",
        style("✓").green(),
        results.len(),
        start.elapsed()
    );
    println!(
        "   {} approved, {} rejected, {} failed",
        style(approved).green(),
        style(validated - approved).yellow(),
        style(failed.len()).red()
    );

    if !failed.is_empty() {
        println!();
        println!("{}", style("Failed files:").red());
        for result in &failed {
            println!(
                "  - {}: {}",
                result.path.display(),
                result.error.as_deref().unwrap_or("unknown error")
            );
        }
    }

    Ok(())
}

async fn process_single_file(
    path: &Path,
    context: &ValidatorContext,
    default_client: &str,
) -> anyhow::Result<Report> {
    let content = tokio::fs::read_to_string(path).await?;
    let submission: Submission = serde_json::from_str(&content)?;

    Ok(validate_submission(&submission, context, default_client)?)
}

fn write_summary(path: &Path, results: &[ProcessResult]) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "filename",
        "receipt_id",
        "client",
        "status",
        "receipt_date_detected",
        "receipt_number_detected",
        "brand_model_detected",
        "brand_detected",
        "processing_time_ms",
        "error",
    ])?;

    for result in results {
        let filename = result.path.file_name().and_then(|s| s.to_str()).unwrap_or("");

        if let Some(report) = &result.report {
            let verdict = &report.validation_result;
            wtr.write_record([
                filename,
                &report.receipt_id.map(|id| id.to_string()).unwrap_or_default(),
                &report.client,
                &verdict.status().to_string(),
                &verdict.receipt_date().detected.len().to_string(),
                &verdict.receipt_number().detected.len().to_string(),
                &verdict.brand_model().detected.len().to_string(),
                &verdict.brand().detected.len().to_string(),
                &result.processing_time_ms.to_string(),
                "",
            ])?;
        } else {
            wtr.write_record([
                filename,
                "",
                "",
                "error",
                "",
                "",
                "",
                "",
                &result.processing_time_ms.to_string(),
                result.error.as_deref().unwrap_or(""),
            ])?;
        }
    }

    wtr.flush()?;
    Ok(())
}

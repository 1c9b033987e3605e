//! Process command - validate a single receipt submission.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use tracing::{debug, info};

use rcpt_core::models::{Classification, Report, Submission};
use rcpt_core::validator::{ValidatorContext, validate_submission};

/// Arguments for the process command.
#[derive(Args)]
pub struct ProcessArgs {
    /// Submission file (claim fields, optional client and OCR response)
    #[arg(required = true)]
    input: PathBuf,

    /// OCR provider response, replacing the one in the submission
    #[arg(long)]
    ocr: Option<PathBuf>,

    /// Client whose rules apply, replacing the one in the submission
    #[arg(long)]
    client: Option<String>,

    /// Image classifier score (probability of a printed receipt)
    #[arg(long)]
    classifier_score: Option<f32>,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Receipt image, used to print pixel bounding boxes in text output
    #[arg(long)]
    image: Option<PathBuf>,

    /// Exit with an error when the receipt is rejected
    #[arg(long)]
    strict: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV output
    Csv,
    /// Plain text summary
    Text,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Csv => "csv",
            Self::Text => "txt",
        }
    }
}

pub async fn run(args: ProcessArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    let config = super::load_config(config_path)?;

    // Check input file exists
    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    info!("Processing submission: {}", args.input.display());

    let mut submission = Submission::from_file(&args.input)?;

    if let Some(ocr_path) = &args.ocr {
        let content = fs::read_to_string(ocr_path)?;
        submission.ocr = Some(serde_json::from_str(&content)?);
    }
    if let Some(client) = &args.client {
        submission.receipt_client = Some(client.clone());
    }
    if let Some(score) = args.classifier_score {
        submission.classification = Some(Classification::from_score(score));
    }

    let context = ValidatorContext::from_config(&config)?;
    let report = validate_submission(&submission, &context, &config.validation.default_client)?;

    let image_size = match &args.image {
        Some(path) => {
            let (width, height) = image::image_dimensions(path)?;
            debug!("Image {} is {}x{}", path.display(), width, height);
            Some((f64::from(width), f64::from(height)))
        }
        None => None,
    };

    let output = format_report(&report, args.format, config.output.pretty, image_size)?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    debug!("Total processing time: {:?}", start.elapsed());

    if args.strict && !report.validation_result.is_approved() {
        anyhow::bail!("Receipt rejected");
    }

    Ok(())
}

pub fn format_report(
    report: &Report,
    format: OutputFormat,
    pretty: bool,
    image_size: Option<(f64, f64)>,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json if pretty => Ok(serde_json::to_string_pretty(report)?),
        OutputFormat::Json => Ok(serde_json::to_string(report)?),
        OutputFormat::Csv => format_csv(report),
        OutputFormat::Text => format_text(report, image_size),
    }
}

fn format_csv(report: &Report) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);
    let verdict = &report.validation_result;

    let mut header = vec!["receipt_id".to_string(), "client".to_string(), "status".to_string()];
    let mut row = vec![
        report.receipt_id.map(|id| id.to_string()).unwrap_or_default(),
        report.client.clone(),
        verdict.status().to_string(),
    ];

    for (field, result) in verdict.fields() {
        header.push(field.as_str().to_string());
        header.push(format!("{}_detected", field.as_str()));
        row.push(result.user_input.clone());
        row.push(result.detected.len().to_string());
    }

    header.push("receipt_type".to_string());
    row.push(
        report
            .receipt_type
            .map(|c| format!("{:?}", c.label))
            .unwrap_or_default(),
    );

    wtr.write_record(&header)?;
    wtr.write_record(&row)?;

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

fn format_text(report: &Report, image_size: Option<(f64, f64)>) -> anyhow::Result<String> {
    let verdict = &report.validation_result;
    let mut output = String::new();

    match report.receipt_id {
        Some(id) => output.push_str(&format!("Receipt: {} ({})\n", id, report.client)),
        None => output.push_str(&format!("Client: {}\n", report.client)),
    }
    output.push_str(&format!("Status: {}\n", verdict.status()));

    for (field, result) in verdict.fields() {
        output.push('\n');
        output.push_str(&format!(
            "{}: {:?} - {} block(s)\n",
            field.as_str(),
            result.user_input,
            result.detected.len()
        ));

        for record in &result.detected {
            output.push_str(&format!("  [{}] {}", record.block_type, record.text));
            if let (Some((width, height)), Some(bbox)) = (image_size, record.bounding_box()) {
                let pixels = bbox.to_pixels(width, height)?;
                output.push_str(&format!(
                    " @ ({:.0}, {:.0}, {:.0}x{:.0})",
                    pixels.left, pixels.top, pixels.width, pixels.height
                ));
            }
            output.push('\n');
        }
    }

    if let Some(classification) = report.receipt_type {
        output.push_str(&format!(
            "\nReceipt type: {:?} ({:.2})\n",
            classification.label, classification.confidence
        ));
    }

    Ok(output)
}

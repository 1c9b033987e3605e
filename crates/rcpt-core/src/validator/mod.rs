//! Receipt validators: field-by-field checks of a claim against OCR evidence.

mod luxottica;
mod registry;

pub use luxottica::{LuxotticaValidator, clean_brand_label};
pub use registry::{LUXOTTICA, select_validator, supported_clients, validate_submission};

use std::sync::Arc;

use tracing::{debug, info};

use crate::brands::BrandDirectory;
use crate::error::Result;
use crate::models::config::RcptConfig;
use crate::models::submission::Claim;
use crate::models::verdict::{FieldVerdict, Verdict};
use crate::ocr::{OcrEvidence, TextBlock};

/// Shared inputs every validator is built from.
#[derive(Debug, Clone)]
pub struct ValidatorContext {
    /// Brand catalog.
    pub brands: Arc<BrandDirectory>,
    /// chrono format of claimed dates.
    pub date_input_format: String,
    /// Keep block geometry in verdicts.
    pub include_geometry: bool,
}

impl ValidatorContext {
    pub fn new(brands: BrandDirectory, date_input_format: impl Into<String>) -> Self {
        Self {
            brands: Arc::new(brands),
            date_input_format: date_input_format.into(),
            include_geometry: true,
        }
    }

    pub fn with_geometry(mut self, include_geometry: bool) -> Self {
        self.include_geometry = include_geometry;
        self
    }

    /// Build a context from configuration, loading the brand catalog it names.
    pub fn from_config(config: &RcptConfig) -> Result<Self> {
        Ok(
            Self::new(config.brand_directory()?, config.validation.date_input_format.clone())
                .with_geometry(config.output.include_geometry),
        )
    }
}

impl Default for ValidatorContext {
    fn default() -> Self {
        Self::new(BrandDirectory::luxottica(), crate::dates::DEFAULT_INPUT_FORMAT)
    }
}

/// A tenant-specific set of field checks.
///
/// Each check returns the supporting blocks in evidence order; an empty list
/// means the field is not supported. None of them fail.
pub trait ReceiptValidator: Send + Sync {
    /// Client identifier this validator is registered under.
    fn client(&self) -> &str;

    /// Whether verdicts keep block geometry.
    fn include_geometry(&self) -> bool {
        true
    }

    fn validate_receipt_number<'a>(&self, claim: &Claim, blocks: &'a [TextBlock]) -> Vec<&'a TextBlock>;

    fn validate_receipt_date<'a>(&self, claim: &Claim, blocks: &'a [TextBlock]) -> Vec<&'a TextBlock>;

    fn validate_brand_model<'a>(&self, claim: &Claim, blocks: &'a [TextBlock]) -> Vec<&'a TextBlock>;

    /// Brand check; may use the blocks found by [`Self::validate_brand_model`].
    fn validate_brand<'a>(
        &self,
        claim: &Claim,
        blocks: &'a [TextBlock],
        brand_model_blocks: &[&'a TextBlock],
    ) -> Vec<&'a TextBlock>;

    /// Run every check and aggregate the verdict.
    fn validate(&self, claim: &Claim, evidence: &OcrEvidence) -> Verdict {
        let blocks = evidence.blocks();
        let geometry = self.include_geometry();

        let receipt_date = self.validate_receipt_date(claim, blocks);
        debug!("Receipt date '{}': {} blocks", claim.receipt_date, receipt_date.len());

        let receipt_number = self.validate_receipt_number(claim, blocks);
        debug!("Receipt number '{}': {} blocks", claim.receipt_number, receipt_number.len());

        let brand_model = self.validate_brand_model(claim, blocks);
        debug!("Brand model '{}': {} blocks", claim.brand_model, brand_model.len());

        let brand = self.validate_brand(claim, blocks, &brand_model);
        debug!("Brand '{}': {} blocks", claim.brand, brand.len());

        let verdict = Verdict::new(
            FieldVerdict::new(&claim.receipt_date, &receipt_date, geometry),
            FieldVerdict::new(&claim.receipt_number, &receipt_number, geometry),
            FieldVerdict::new(&claim.brand_model, &brand_model, geometry),
            FieldVerdict::new(&claim.brand, &brand, geometry),
        );

        info!("{} receipt {}: {}", self.client(), claim.receipt_number, verdict.status());

        verdict
    }
}

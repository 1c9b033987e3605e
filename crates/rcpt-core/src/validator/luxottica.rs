//! Luxottica receipt rules.

use std::sync::Arc;

use tracing::debug;

use super::{ReceiptValidator, ValidatorContext};
use crate::brands::BrandDirectory;
use crate::dates::{DateCandidates, DateFormatExpander};
use crate::matching::{DATE_KINDS, TEXT_KINDS, matching_blocks, normalize};
use crate::models::submission::Claim;
use crate::ocr::TextBlock;

/// Strip the "- Sunglasses" / "- Optical" product line qualifiers from a brand label.
pub fn clean_brand_label(label: &str) -> String {
    label
        .replace("- Sunglasses", "")
        .replace("- Optical", "")
        .trim()
        .to_string()
}

/// Validator for Luxottica eyewear receipts.
#[derive(Debug, Clone)]
pub struct LuxotticaValidator {
    brands: Arc<BrandDirectory>,
    dates: DateFormatExpander,
    include_geometry: bool,
}

impl LuxotticaValidator {
    pub fn new(context: &ValidatorContext) -> Self {
        Self {
            brands: Arc::clone(&context.brands),
            dates: DateFormatExpander::new(context.date_input_format.clone()),
            include_geometry: context.include_geometry,
        }
    }
}

impl ReceiptValidator for LuxotticaValidator {
    fn client(&self) -> &str {
        super::LUXOTTICA
    }

    fn include_geometry(&self) -> bool {
        self.include_geometry
    }

    fn validate_receipt_number<'a>(&self, claim: &Claim, blocks: &'a [TextBlock]) -> Vec<&'a TextBlock> {
        matching_blocks(&normalize(&claim.receipt_number), blocks, TEXT_KINDS)
    }

    fn validate_receipt_date<'a>(&self, claim: &Claim, blocks: &'a [TextBlock]) -> Vec<&'a TextBlock> {
        let candidates = DateCandidates::new(self.dates.expand(&claim.receipt_date));
        if candidates.is_empty() {
            return Vec::new();
        }
        debug!("Checking {} date renderings", candidates.len());

        blocks
            .iter()
            .filter(|block| DATE_KINDS.contains(block.block_type()))
            .filter(|block| candidates.found_in(block.date_text()))
            .collect()
    }

    fn validate_brand_model<'a>(&self, claim: &Claim, blocks: &'a [TextBlock]) -> Vec<&'a TextBlock> {
        matching_blocks(&normalize(&claim.brand_model), blocks, TEXT_KINDS)
    }

    fn validate_brand<'a>(
        &self,
        claim: &Claim,
        blocks: &'a [TextBlock],
        brand_model_blocks: &[&'a TextBlock],
    ) -> Vec<&'a TextBlock> {
        let label = clean_brand_label(&claim.brand);
        let Some(brand) = self.brands.brand_from_user_label(&label) else {
            debug!("Unknown brand label '{}'", label);
            return Vec::new();
        };

        let direct = matching_blocks(&normalize(brand), blocks, TEXT_KINDS);
        if !direct.is_empty() || brand_model_blocks.is_empty() {
            return direct;
        }

        // First brand model block whose catalog prefix belongs to the claimed brand.
        let fallback = brand_model_blocks
            .iter()
            .find(|block| self.brands.brand_from_catalog_code(block.text()) == Some(brand));

        match fallback {
            Some(block) => {
                debug!("Brand '{}' confirmed by catalog code '{}'", brand, block.text());
                vec![*block]
            }
            None => Vec::new(),
        }
    }
}

//! User claims and the submissions that carry them.

use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::classification::Classification;
use crate::error::Result;
use crate::ocr::OcrEvidence;

/// Purchase attributes declared by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Claim {
    /// Receipt or order number.
    pub receipt_number: String,

    /// Purchase date, written in the configured input format.
    pub receipt_date: String,

    /// Brand label as picked by the user (e.g. "Ray-Ban - Sunglasses").
    pub brand: String,

    /// Free-text catalog code (e.g. "RB7178").
    pub brand_model: String,
}

impl Claim {
    pub fn new(
        receipt_number: impl Into<String>,
        receipt_date: impl Into<String>,
        brand: impl Into<String>,
        brand_model: impl Into<String>,
    ) -> Self {
        Self {
            receipt_number: receipt_number.into(),
            receipt_date: receipt_date.into(),
            brand: brand.into(),
            brand_model: brand_model.into(),
        }
    }
}

/// A receipt submitted for approval: the claim plus whatever the providers returned.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Submission {
    /// Caller-side receipt identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receipt_id: Option<i64>,

    /// Tenant whose rules apply.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receipt_client: Option<String>,

    /// Claimed attributes.
    #[serde(flatten)]
    pub claim: Claim,

    /// Raw OCR provider response (`{"Blocks": [...]}`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ocr: Option<Value>,

    /// Image classifier output, passed through to reports.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub classification: Option<Classification>,
}

impl Submission {
    /// Load a submission from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// OCR evidence carried by this submission, empty when absent.
    pub fn evidence(&self) -> OcrEvidence {
        self.ocr
            .as_ref()
            .map(OcrEvidence::from_response)
            .unwrap_or_default()
    }
}

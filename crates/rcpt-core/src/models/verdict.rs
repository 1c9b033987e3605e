//! Validation verdicts.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::classification::Classification;
use crate::ocr::{BlockRecord, TextBlock};

/// Overall decision for a receipt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ApprovalStatus {
    Approved,
    Rejected,
}

impl fmt::Display for ApprovalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Approved => f.write_str("Approved"),
            Self::Rejected => f.write_str("Rejected"),
        }
    }
}

/// Claim fields checked against OCR evidence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClaimField {
    ReceiptDate,
    ReceiptNumber,
    BrandModel,
    Brand,
}

impl ClaimField {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ReceiptDate => "receipt_date",
            Self::ReceiptNumber => "receipt_number",
            Self::BrandModel => "brand_model",
            Self::Brand => "brand",
        }
    }
}

/// Result for one claim field: what the user entered and the blocks that support it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldVerdict {
    pub user_input: String,
    pub detected: Vec<BlockRecord>,
}

impl FieldVerdict {
    pub fn new(user_input: &str, blocks: &[&TextBlock], include_geometry: bool) -> Self {
        Self {
            user_input: user_input.to_string(),
            detected: blocks
                .iter()
                .map(|block| block.to_record(include_geometry))
                .collect(),
        }
    }

    /// Whether at least one block supports the field.
    pub fn is_detected(&self) -> bool {
        !self.detected.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
struct StatusRecord {
    detected: ApprovalStatus,
}

/// Per-field results plus the overall approval status.
///
/// The status is derived on construction: approved iff the receipt date,
/// receipt number and brand each have supporting blocks. The brand model
/// never gates approval on its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Verdict {
    receipt_date: FieldVerdict,
    receipt_number: FieldVerdict,
    brand_model: FieldVerdict,
    brand: FieldVerdict,
    #[serde(rename = "AI_APPROVED_STATUS")]
    status: StatusRecord,
}

impl Verdict {
    pub fn new(
        receipt_date: FieldVerdict,
        receipt_number: FieldVerdict,
        brand_model: FieldVerdict,
        brand: FieldVerdict,
    ) -> Self {
        let detected = if receipt_date.is_detected()
            && receipt_number.is_detected()
            && brand.is_detected()
        {
            ApprovalStatus::Approved
        } else {
            ApprovalStatus::Rejected
        };

        Self {
            receipt_date,
            receipt_number,
            brand_model,
            brand,
            status: StatusRecord { detected },
        }
    }

    pub fn receipt_date(&self) -> &FieldVerdict {
        &self.receipt_date
    }

    pub fn receipt_number(&self) -> &FieldVerdict {
        &self.receipt_number
    }

    pub fn brand_model(&self) -> &FieldVerdict {
        &self.brand_model
    }

    pub fn brand(&self) -> &FieldVerdict {
        &self.brand
    }

    pub fn status(&self) -> ApprovalStatus {
        self.status.detected
    }

    pub fn is_approved(&self) -> bool {
        self.status() == ApprovalStatus::Approved
    }

    /// Field results in verdict order.
    pub fn fields(&self) -> [(ClaimField, &FieldVerdict); 4] {
        [
            (ClaimField::ReceiptDate, &self.receipt_date),
            (ClaimField::ReceiptNumber, &self.receipt_number),
            (ClaimField::BrandModel, &self.brand_model),
            (ClaimField::Brand, &self.brand),
        ]
    }
}

/// Verdict with the submission context it was produced for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receipt_id: Option<i64>,
    pub client: String,
    pub validation_result: Verdict,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receipt_type: Option<Classification>,
}

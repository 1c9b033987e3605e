//! Core library for retail receipt approval.
//!
//! This crate provides:
//! - OCR block model (text, kind, relative geometry)
//! - Brand catalog lookups by user label and catalog code prefix
//! - Date rendering expansion for fuzzy date matching
//! - Per-client receipt validators producing approve/reject verdicts

pub mod brands;
pub mod dates;
pub mod error;
pub mod matching;
pub mod models;
pub mod ocr;
pub mod validator;

pub use brands::{BrandDirectory, BrandEntry, CatalogCode, split_catalog_code};
pub use dates::DateFormatExpander;
pub use error::{RcptError, Result};
pub use matching::{matching_blocks, normalize};
pub use models::{ApprovalStatus, Claim, Classification, RcptConfig, Report, Submission, Verdict};
pub use ocr::{BlockType, OcrEvidence, PixelBox, TextBlock};
pub use validator::{
    ReceiptValidator, ValidatorContext, select_validator, supported_clients, validate_submission,
};

//! Data models: claims, verdicts, classifier output, and configuration.

pub mod classification;
pub mod config;
pub mod submission;
pub mod verdict;

pub use classification::{Classification, ReceiptKind};
pub use config::{OutputConfig, RcptConfig, ValidationConfig};
pub use submission::{Claim, Submission};
pub use verdict::{ApprovalStatus, ClaimField, FieldVerdict, Report, Verdict};

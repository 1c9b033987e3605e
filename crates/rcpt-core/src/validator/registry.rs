//! Client-keyed validator selection.

use tracing::debug;

use super::{LuxotticaValidator, ReceiptValidator, ValidatorContext};
use crate::error::{RcptError, Result};
use crate::models::submission::Submission;
use crate::models::verdict::Report;

/// Client identifier for Luxottica receipts.
pub const LUXOTTICA: &str = "Luxottica";

type Constructor = fn(&ValidatorContext) -> Box<dyn ReceiptValidator>;

/// Registered clients. A new tenant is one more entry here.
const REGISTRY: &[(&str, Constructor)] = &[(LUXOTTICA, luxottica)];

fn luxottica(context: &ValidatorContext) -> Box<dyn ReceiptValidator> {
    Box::new(LuxotticaValidator::new(context))
}

/// Identifiers of every registered client.
pub fn supported_clients() -> impl Iterator<Item = &'static str> {
    REGISTRY.iter().map(|(client, _)| *client)
}

/// Build the validator registered for `client_id`.
pub fn select_validator(
    client_id: &str,
    context: &ValidatorContext,
) -> Result<Box<dyn ReceiptValidator>> {
    REGISTRY
        .iter()
        .find(|(client, _)| *client == client_id)
        .map(|(_, constructor)| constructor(context))
        .ok_or_else(|| RcptError::UnsupportedClient(client_id.to_string()))
}

/// Validate a submission with the validator of its client, or `default_client`
/// when it names none.
pub fn validate_submission(
    submission: &Submission,
    context: &ValidatorContext,
    default_client: &str,
) -> Result<Report> {
    let client = submission
        .receipt_client
        .as_deref()
        .unwrap_or(default_client);
    let validator = select_validator(client, context)?;

    let evidence = submission.evidence();
    debug!("Validating against {} OCR blocks", evidence.len());

    Ok(Report {
        receipt_id: submission.receipt_id,
        client: client.to_string(),
        validation_result: validator.validate(&submission.claim, &evidence),
        receipt_type: submission.classification,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::submission::Claim;
    use crate::models::verdict::ApprovalStatus;
    use serde_json::json;
    use std::sync::Arc;

    #[test]
    fn test_select_luxottica() {
        let validator = select_validator("Luxottica", &ValidatorContext::default()).unwrap();
        assert_eq!(validator.client(), "Luxottica");
    }

    #[test]
    fn test_select_unsupported_client() {
        let result = select_validator("Acme", &ValidatorContext::default());
        assert!(matches!(result, Err(RcptError::UnsupportedClient(client)) if client == "Acme"));

        assert!(select_validator("luxottica", &ValidatorContext::default()).is_err());
    }

    #[test]
    fn test_supported_clients() {
        assert_eq!(supported_clients().collect::<Vec<_>>(), vec!["Luxottica"]);
    }

    fn submission(client: Option<&str>) -> Submission {
        Submission {
            receipt_id: Some(11),
            receipt_client: client.map(str::to_string),
            claim: Claim::new("123456789", "01/01/23", "Rayban", "rb7178"),
            ocr: Some(json!({
                "Blocks": [
                    {"Id": "1", "BlockType": "LINE", "Text": "Rayban"},
                    {"Id": "2", "BlockType": "WORD", "Text": "01/01/2023"},
                    {"Id": "3", "BlockType": "LINE", "Text": "123456789"}
                ]
            })),
            classification: None,
        }
    }

    #[test]
    fn test_validate_submission_default_client() {
        let report = validate_submission(&submission(None), &ValidatorContext::default(), LUXOTTICA)
            .unwrap();

        assert_eq!(report.receipt_id, Some(11));
        assert_eq!(report.client, "Luxottica");
        assert_eq!(report.validation_result.status(), ApprovalStatus::Approved);
    }

    #[test]
    fn test_validate_submission_unknown_client() {
        let result = validate_submission(
            &submission(Some("Unknown")),
            &ValidatorContext::default(),
            LUXOTTICA,
        );
        assert!(matches!(result, Err(RcptError::UnsupportedClient(_))));
    }

    #[test]
    fn test_validators_are_shareable_across_threads() {
        let validator: Arc<dyn ReceiptValidator> =
            Arc::from(select_validator(LUXOTTICA, &ValidatorContext::default()).unwrap());

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let validator = Arc::clone(&validator);
                std::thread::spawn(move || {
                    let submission = submission(None);
                    validator
                        .validate(&submission.claim, &submission.evidence())
                        .is_approved()
                })
            })
            .collect();

        for handle in handles {
            assert!(handle.join().unwrap());
        }
    }
}

//! Receipt image classifier output.

use serde::{Deserialize, Serialize};

/// How the receipt was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReceiptKind {
    Handwritten,
    Printed,
}

/// Label and score reported by the image classifier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    pub label: ReceiptKind,
    /// Raw classifier output (probability of a printed receipt).
    pub confidence: f32,
}

impl Classification {
    /// Scores above this are printed receipts.
    pub const PRINTED_THRESHOLD: f32 = 0.5;

    /// Map a binary classifier score to a label.
    pub fn from_score(score: f32) -> Self {
        let label = if score > Self::PRINTED_THRESHOLD {
            ReceiptKind::Printed
        } else {
            ReceiptKind::Handwritten
        };

        Self {
            label,
            confidence: score,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_score() {
        assert_eq!(Classification::from_score(0.95).label, ReceiptKind::Printed);
        assert_eq!(Classification::from_score(0.5).label, ReceiptKind::Handwritten);
        assert_eq!(Classification::from_score(0.1).label, ReceiptKind::Handwritten);
    }
}

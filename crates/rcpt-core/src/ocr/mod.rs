//! OCR provider output: positioned text blocks.

mod block;

pub use block::{BlockRecord, BlockType, BoundingBox, PixelBox, TextBlock};

use serde_json::Value;

use crate::error::Result;

/// Ordered OCR blocks for one receipt image.
///
/// Order does not affect matching but is preserved in verdicts.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OcrEvidence {
    blocks: Vec<TextBlock>,
}

impl OcrEvidence {
    pub fn new(blocks: Vec<TextBlock>) -> Self {
        Self { blocks }
    }

    /// Build from a provider response shaped like `{"Blocks": [...]}`.
    ///
    /// A missing or malformed `Blocks` key yields empty evidence.
    pub fn from_response(response: &Value) -> Self {
        let blocks = response
            .get("Blocks")
            .and_then(Value::as_array)
            .map(|records| records.iter().map(TextBlock::from_record).collect())
            .unwrap_or_default();

        Self { blocks }
    }

    /// Parse a provider response from JSON text.
    pub fn from_json(json: &str) -> Result<Self> {
        let response: Value = serde_json::from_str(json)?;
        Ok(Self::from_response(&response))
    }

    pub fn blocks(&self) -> &[TextBlock] {
        &self.blocks
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

impl FromIterator<TextBlock> for OcrEvidence {
    fn from_iter<I: IntoIterator<Item = TextBlock>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

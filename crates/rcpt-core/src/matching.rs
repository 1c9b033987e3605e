//! Normalized substring matching of claim values against OCR blocks.

use crate::ocr::{BlockType, TextBlock};

/// Block kinds searched for plain text fields.
pub const TEXT_KINDS: &[BlockType] = &[BlockType::Line, BlockType::Word];

/// Block kinds searched for dates.
pub const DATE_KINDS: &[BlockType] = &[BlockType::Line, BlockType::Word, BlockType::QueryResult];

/// Lower-case and strip spaces, hyphens, and forward slashes.
pub fn normalize(text: &str) -> String {
    text.chars()
        .filter(|c| !matches!(c, ' ' | '-' | '/'))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Every block of an allowed kind whose text, passed through [`normalize`],
/// contains `normalized_value`.
///
/// Containment is loose so OCR noise around the target token still matches.
/// An empty value matches nothing.
pub fn matching_blocks<'a>(
    normalized_value: &str,
    blocks: &'a [TextBlock],
    allowed_kinds: &[BlockType],
) -> Vec<&'a TextBlock> {
    if normalized_value.is_empty() {
        return Vec::new();
    }

    blocks
        .iter()
        .filter(|block| allowed_kinds.contains(block.block_type()))
        .filter(|block| normalize(block.text()).contains(normalized_value))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn blocks() -> Vec<TextBlock> {
        vec![
            TextBlock::new("1", BlockType::Line, "Receipt No. 123456789"),
            TextBlock::new("2", BlockType::Word, "123456789"),
            TextBlock::new("3", BlockType::QueryResult, "123456789"),
            TextBlock::new("4", BlockType::Other("PAGE".into()), "123456789"),
        ]
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("RB-7178 / 2"), "rb71782");
        assert_eq!(normalize("Ray-Ban"), "rayban");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        for input in ["Ray-Ban", "  01/02/2023 ", "Dolce & Gabbana", "ÄBC-def"] {
            let once = normalize(input);
            assert_eq!(normalize(&once), once);
        }
    }

    #[test]
    fn test_matching_blocks_respects_kinds() {
        let blocks = blocks();

        let ids: Vec<&str> = matching_blocks("123456789", &blocks, TEXT_KINDS)
            .into_iter()
            .map(TextBlock::id)
            .collect();
        assert_eq!(ids, vec!["1", "2"]);

        let ids: Vec<&str> = matching_blocks("123456789", &blocks, DATE_KINDS)
            .into_iter()
            .map(TextBlock::id)
            .collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
    }

    #[test]
    fn test_matching_blocks_partial_overlap() {
        let blocks = blocks();
        assert_eq!(matching_blocks("34567", &blocks, TEXT_KINDS).len(), 2);
    }

    #[test]
    fn test_matching_blocks_ignores_separators_on_both_sides() {
        let blocks = vec![
            TextBlock::new("1", BlockType::Line, "INV-001"),
            TextBlock::new("2", BlockType::Line, "Michael Kors"),
            TextBlock::new("3", BlockType::Word, "RAY-BAN"),
            TextBlock::new("4", BlockType::Line, "Order 01/ 002"),
        ];

        let ids = |value: &str| -> Vec<String> {
            matching_blocks(&normalize(value), &blocks, TEXT_KINDS)
                .into_iter()
                .map(|b| b.id().to_string())
                .collect()
        };

        assert_eq!(ids("INV-001"), vec!["1"]);
        assert_eq!(ids("inv 001"), vec!["1"]);
        assert_eq!(ids("Michael Kors"), vec!["2"]);
        assert_eq!(ids("Ray-Ban"), vec!["3"]);
        assert_eq!(ids("01002"), vec!["4"]);
    }

    #[test]
    fn test_matching_blocks_empty_value() {
        let blocks = blocks();
        assert!(matching_blocks("", &blocks, TEXT_KINDS).is_empty());
    }
}

//! A single OCR-detected text fragment.

use std::fmt;

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{RcptError, Result};

lazy_static! {
    static ref ISO_DATE_TOKEN: Regex = Regex::new(r"^\d{4}-\d{2}-\d{2}$").unwrap();
}

/// Kind of OCR block as reported by the provider.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum BlockType {
    /// A line of text.
    Line,
    /// A single word.
    Word,
    /// Answer to a provider-side query (e.g. "Date").
    QueryResult,
    /// Anything else (PAGE, TABLE, KEY_VALUE_SET, ...), kept verbatim.
    Other(String),
}

impl BlockType {
    /// Provider spelling of the block type.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Line => "LINE",
            Self::Word => "WORD",
            Self::QueryResult => "QUERY_RESULT",
            Self::Other(name) => name,
        }
    }
}

impl From<&str> for BlockType {
    fn from(value: &str) -> Self {
        match value {
            "LINE" => Self::Line,
            "WORD" => Self::Word,
            "QUERY_RESULT" => Self::QueryResult,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for BlockType {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl From<BlockType> for String {
    fn from(value: BlockType) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for BlockType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Relative bounding box, every field a fraction of the page in `[0, 1]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BoundingBox {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl BoundingBox {
    /// Read a provider `BoundingBox` object. Missing or non-numeric fields are zero.
    pub fn from_value(value: &Value) -> Self {
        let field = |name: &str| value.get(name).and_then(Value::as_f64).unwrap_or(0.0);
        Self {
            left: field("Left"),
            top: field("Top"),
            width: field("Width"),
            height: field("Height"),
        }
    }

    /// Scale to an image of the given size. Both dimensions must be strictly positive.
    pub fn to_pixels(&self, image_width: f64, image_height: f64) -> Result<PixelBox> {
        if !(image_width > 0.0) || !(image_height > 0.0) {
            return Err(RcptError::InvalidArgument(format!(
                "image dimensions must be positive, got {}x{}",
                image_width, image_height
            )));
        }

        Ok(PixelBox {
            left: self.left * image_width,
            top: self.top * image_height,
            width: self.width * image_width,
            height: self.height * image_height,
        })
    }
}

/// Bounding box converted to image pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PixelBox {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl PixelBox {
    /// `(left, top, width, height)`.
    pub fn as_tuple(&self) -> (f64, f64, f64, f64) {
        (self.left, self.top, self.width, self.height)
    }
}

/// Serialized form of a block as it appears in a verdict.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockRecord {
    #[serde(rename = "Id")]
    pub id: String,
    #[serde(rename = "BlockType")]
    pub block_type: BlockType,
    #[serde(rename = "Text")]
    pub text: String,
    pub normalized_text: String,
    #[serde(rename = "Geometry")]
    pub geometry: Map<String, Value>,
}

impl BlockRecord {
    /// Relative bounding box, if the record kept its geometry.
    pub fn bounding_box(&self) -> Option<BoundingBox> {
        self.geometry.get("BoundingBox").map(BoundingBox::from_value)
    }
}

/// One OCR text fragment with its position on the page.
#[derive(Debug, Clone, PartialEq)]
pub struct TextBlock {
    id: String,
    block_type: BlockType,
    text: String,
    normalized_text: String,
    geometry: Map<String, Value>,
    bounding_box: BoundingBox,
}

impl TextBlock {
    /// Create a block without geometry.
    pub fn new(id: impl Into<String>, block_type: BlockType, text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            id: id.into(),
            block_type,
            normalized_text: text.to_lowercase(),
            text,
            geometry: Map::new(),
            bounding_box: BoundingBox::default(),
        }
    }

    /// Attach a relative bounding box.
    pub fn with_bounding_box(mut self, bounding_box: BoundingBox) -> Self {
        self.bounding_box = bounding_box;
        if let Ok(value) = serde_json::to_value(bounding_box) {
            self.geometry.insert("BoundingBox".to_string(), value);
        }
        self
    }

    /// Build a block from a provider record (`Id`, `BlockType`, `Text`, `Geometry`).
    ///
    /// Malformed or missing keys fall back to empty values; this never fails.
    pub fn from_record(record: &Value) -> Self {
        let string = |name: &str| {
            record
                .get(name)
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string()
        };

        let geometry = record
            .get("Geometry")
            .and_then(Value::as_object)
            .cloned()
            .unwrap_or_default();
        let bounding_box = geometry
            .get("BoundingBox")
            .map(BoundingBox::from_value)
            .unwrap_or_default();

        let text = string("Text");
        Self {
            id: string("Id"),
            block_type: BlockType::from(string("BlockType")),
            normalized_text: text.to_lowercase(),
            text,
            geometry,
            bounding_box,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn block_type(&self) -> &BlockType {
        &self.block_type
    }

    /// Text exactly as detected.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Lower-cased detected text.
    pub fn normalized_text(&self) -> &str {
        &self.normalized_text
    }

    pub fn bounding_box(&self) -> BoundingBox {
        self.bounding_box
    }

    /// Convert the relative bounding box to pixels of an image of the given size.
    ///
    /// Both dimensions must be strictly positive.
    pub fn bounding_box_pixels(&self, image_width: f64, image_height: f64) -> Result<PixelBox> {
        self.bounding_box.to_pixels(image_width, image_height)
    }

    /// Text used when looking for a date in this block.
    ///
    /// A leading `YYYY-MM-DD` token is taken as the whole date and the rest of
    /// the line is ignored; otherwise the full text is used.
    pub fn date_text(&self) -> &str {
        match self.text.split_whitespace().next() {
            Some(token) if ISO_DATE_TOKEN.is_match(token) => token,
            _ => &self.text,
        }
    }

    /// Serialize for a verdict. The provider polygon is always dropped.
    pub fn to_record(&self, include_geometry: bool) -> BlockRecord {
        let geometry = if include_geometry {
            self.geometry
                .iter()
                .filter(|(key, _)| key.as_str() != "Polygon")
                .map(|(key, value)| (key.clone(), value.clone()))
                .collect()
        } else {
            Map::new()
        };

        BlockRecord {
            id: self.id.clone(),
            block_type: self.block_type.clone(),
            text: self.text.clone(),
            normalized_text: self.normalized_text.clone(),
            geometry,
        }
    }
}

impl fmt::Display for TextBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn sample_block() -> TextBlock {
        TextBlock::from_record(&json!({
            "Id": "123",
            "BlockType": "LINE",
            "Text": "Sample Text",
            "Geometry": {
                "BoundingBox": {"Left": 0.1, "Top": 0.2, "Width": 0.5, "Height": 0.3},
                "Polygon": [{"X": 0.1, "Y": 0.2}, {"X": 0.6, "Y": 0.2}]
            }
        }))
    }

    #[test]
    fn test_from_record() {
        let block = sample_block();

        assert_eq!(block.id(), "123");
        assert_eq!(block.block_type(), &BlockType::Line);
        assert_eq!(block.text(), "Sample Text");
        assert_eq!(block.normalized_text(), "sample text");
        assert_eq!(block.to_string(), "Sample Text");
    }

    #[test]
    fn test_from_malformed_record() {
        let block = TextBlock::from_record(&json!({"Text": 42, "Geometry": "nope"}));

        assert_eq!(block.id(), "");
        assert_eq!(block.block_type(), &BlockType::Other(String::new()));
        assert_eq!(block.text(), "");
        assert_eq!(block.bounding_box(), BoundingBox::default());
    }

    #[test]
    fn test_bounding_box_pixels() {
        let block = sample_block();

        let pixels = block.bounding_box_pixels(1000.0, 800.0).unwrap();
        assert_eq!(pixels.as_tuple(), (100.0, 160.0, 500.0, 240.0));
    }

    #[test]
    fn test_with_bounding_box() {
        let bbox = BoundingBox { left: 0.25, top: 0.5, width: 0.25, height: 0.125 };
        let block = TextBlock::new("1", BlockType::Word, "x").with_bounding_box(bbox);

        assert_eq!(block.to_record(true).bounding_box(), Some(bbox));
        assert_eq!(
            block.bounding_box_pixels(400.0, 800.0).unwrap().as_tuple(),
            (100.0, 400.0, 100.0, 100.0)
        );
    }

    #[test]
    fn test_bounding_box_pixels_without_geometry() {
        let block = TextBlock::new("1", BlockType::Word, "x");

        let pixels = block.bounding_box_pixels(640.0, 480.0).unwrap();
        assert_eq!(pixels.as_tuple(), (0.0, 0.0, 0.0, 0.0));
    }

    #[test]
    fn test_bounding_box_pixels_rejects_non_positive_dimensions() {
        let block = sample_block();

        assert!(matches!(
            block.bounding_box_pixels(0.0, 800.0),
            Err(RcptError::InvalidArgument(_))
        ));
        assert!(matches!(
            block.bounding_box_pixels(1000.0, 0.0),
            Err(RcptError::InvalidArgument(_))
        ));
        assert!(matches!(
            block.bounding_box_pixels(-1000.0, 800.0),
            Err(RcptError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_to_record_strips_polygon() {
        let record = sample_block().to_record(true);

        assert!(record.geometry.contains_key("BoundingBox"));
        assert!(!record.geometry.contains_key("Polygon"));

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["BlockType"], "LINE");
        assert_eq!(value["normalized_text"], "sample text");
    }

    #[test]
    fn test_to_record_without_geometry() {
        let record = sample_block().to_record(false);
        assert!(record.geometry.is_empty());
    }

    #[test]
    fn test_date_text_leading_iso_token() {
        let block = TextBlock::new("1", BlockType::Line, "2023-09-01 14:32 STORE 12");
        assert_eq!(block.date_text(), "2023-09-01");

        let block = TextBlock::new("2", BlockType::Line, "Date: 2023-09-01");
        assert_eq!(block.date_text(), "Date: 2023-09-01");

        let block = TextBlock::new("3", BlockType::Line, "2023-09-011");
        assert_eq!(block.date_text(), "2023-09-011");
    }

    #[test]
    fn test_block_type_round_trip_names() {
        assert_eq!(BlockType::from("QUERY_RESULT"), BlockType::QueryResult);
        assert_eq!(BlockType::from("PAGE").as_str(), "PAGE");
    }
}

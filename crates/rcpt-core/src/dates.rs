//! Rendering a claimed date in every way it is likely to be printed on a receipt.

use std::collections::BTreeSet;

use chrono::{Datelike, NaiveDate};

/// Separators tried between date components.
pub const SEPARATORS: [&str; 5] = ["-", "/", ".", " ", ","];

/// Default claim date format (D/M/YY).
pub const DEFAULT_INPUT_FORMAT: &str = "%d/%m/%y";

/// Expands a claimed date string into candidate renderings.
#[derive(Debug, Clone)]
pub struct DateFormatExpander {
    input_format: String,
}

impl DateFormatExpander {
    /// Create an expander for claim dates written in `input_format` (chrono strftime).
    pub fn new(input_format: impl Into<String>) -> Self {
        Self {
            input_format: input_format.into(),
        }
    }

    pub fn input_format(&self) -> &str {
        &self.input_format
    }

    /// Parse a claimed date with the configured format.
    pub fn parse(&self, date: &str) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(date.trim(), &self.input_format).ok()
    }

    /// Sorted, deduplicated renderings of `date`.
    ///
    /// A date that does not parse (including impossible calendar dates)
    /// yields no candidates.
    pub fn expand(&self, date: &str) -> Vec<String> {
        match self.parse(date) {
            Some(parsed) => date_renderings(parsed),
            None => {
                tracing::debug!(
                    "Date '{}' does not match format '{}'",
                    date,
                    self.input_format
                );
                Vec::new()
            }
        }
    }
}

impl Default for DateFormatExpander {
    fn default() -> Self {
        Self::new(DEFAULT_INPUT_FORMAT)
    }
}

/// Every year/month/day variant crossed with every separator pair, in
/// Y-M-D, D-M-Y and M-D-Y order.
pub fn date_renderings(date: NaiveDate) -> Vec<String> {
    let years = [date.format("%Y").to_string(), date.format("%y").to_string()];
    let months = [
        date.format("%m").to_string(),
        date.format("%b").to_string(),
        date.format("%B").to_string(),
        date.month().to_string(),
    ];
    let days = [date.format("%d").to_string(), date.day().to_string()];

    let mut renderings = BTreeSet::new();
    for year in &years {
        for month in &months {
            for day in &days {
                for sep1 in SEPARATORS {
                    for sep2 in SEPARATORS {
                        renderings.insert(format!("{year}{sep1}{month}{sep2}{day}"));
                        renderings.insert(format!("{day}{sep1}{month}{sep2}{year}"));
                        renderings.insert(format!("{month}{sep1}{day}{sep2}{year}"));
                    }
                }
            }
        }
    }

    renderings.into_iter().collect()
}

/// Lower-case OCR text and collapse the space OCR tends to insert after `,` and `/`.
pub fn normalize_date_text(text: &str) -> String {
    text.to_lowercase().replace(", ", ",").replace("/ ", "/")
}

/// Lower-cased candidate renderings, ready for containment tests.
#[derive(Debug, Clone, Default)]
pub struct DateCandidates {
    candidates: Vec<String>,
}

impl DateCandidates {
    pub fn new(renderings: Vec<String>) -> Self {
        let candidates: BTreeSet<String> = renderings.iter().map(|r| r.to_lowercase()).collect();
        Self {
            candidates: candidates.into_iter().collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    /// Whether the given OCR text contains any candidate.
    pub fn found_in(&self, text: &str) -> bool {
        let text = normalize_date_text(text);
        self.candidates.iter().any(|candidate| text.contains(candidate.as_str()))
    }
}

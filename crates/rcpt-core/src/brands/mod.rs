//! Brand catalog: user-facing brand labels and catalog code prefixes.

mod catalog;

use std::collections::HashMap;
use std::path::Path;

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{RcptError, Result};

lazy_static! {
    static ref CATALOG_CODE: Regex = Regex::new(r"^([A-Za-z]+)(\d+)(.*)$").unwrap();
}

/// One brand with the labels users pick for it and its catalog code prefixes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandEntry {
    /// Canonical brand name.
    pub brand: String,
    /// Labels a user may submit for this brand.
    #[serde(default)]
    pub labels: Vec<String>,
    /// Upper-case catalog code prefixes (e.g. "RB").
    #[serde(default)]
    pub codes: Vec<String>,
}

impl BrandEntry {
    pub fn new(brand: &str, labels: &[&str], codes: &[&str]) -> Self {
        Self {
            brand: brand.to_string(),
            labels: labels.iter().map(|l| l.to_string()).collect(),
            codes: codes.iter().map(|c| c.to_string()).collect(),
        }
    }
}

/// A catalog code split into its brand prefix and the model part.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogCode {
    /// Leading letters, as written.
    pub prefix: String,
    /// Digits and everything after them.
    pub model: String,
}

/// Split a code like `RB7178D` into `RB` and `7178D`.
///
/// Returns `None` when the text does not start with letters followed by digits.
pub fn split_catalog_code(code: &str) -> Option<CatalogCode> {
    let caps = CATALOG_CODE.captures(code.trim())?;
    Some(CatalogCode {
        prefix: caps[1].to_string(),
        model: format!("{}{}", &caps[2], &caps[3]),
    })
}

/// Bidirectional lookup between brands, their labels, and their code prefixes.
///
/// Lookups are exact and case-sensitive. When two entries claim the same
/// label or code, the first one wins.
#[derive(Debug, Clone)]
pub struct BrandDirectory {
    entries: Vec<BrandEntry>,
    by_label: HashMap<String, usize>,
    by_code: HashMap<String, usize>,
}

impl BrandDirectory {
    /// Build a directory from explicit entries.
    pub fn new(entries: Vec<BrandEntry>) -> Self {
        let mut by_label = HashMap::new();
        let mut by_code = HashMap::new();

        for (index, entry) in entries.iter().enumerate() {
            for label in &entry.labels {
                by_label.entry(label.clone()).or_insert(index);
            }
            for code in &entry.codes {
                by_code.entry(code.clone()).or_insert(index);
            }
        }

        Self {
            entries,
            by_label,
            by_code,
        }
    }

    /// The built-in Luxottica brand catalog.
    pub fn luxottica() -> Self {
        Self::new(catalog::luxottica_entries())
    }

    /// Load a catalog from a JSON array of `{ "brand", "labels", "codes" }` objects.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let entries: Vec<BrandEntry> = serde_json::from_str(&content)?;
        if entries.is_empty() {
            return Err(RcptError::Config(format!(
                "brand catalog {} has no entries",
                path.display()
            )));
        }
        Ok(Self::new(entries))
    }

    pub fn entries(&self) -> &[BrandEntry] {
        &self.entries
    }

    /// Canonical brand for a user-submitted label.
    pub fn brand_from_user_label(&self, label: &str) -> Option<&str> {
        self.by_label
            .get(label)
            .map(|&index| self.entries[index].brand.as_str())
    }

    /// Canonical brand for a catalog code prefix.
    pub fn brand_from_code(&self, prefix: &str) -> Option<&str> {
        self.by_code
            .get(prefix)
            .map(|&index| self.entries[index].brand.as_str())
    }

    /// Brand for a prefix as found in OCR text, in any case.
    ///
    /// Tries the whole prefix first, then its first two letters, so that
    /// codes printed with an extra letter (e.g. `RBX`) still resolve.
    pub fn brand_from_catalog_prefix(&self, prefix: &str) -> Option<&str> {
        let prefix = prefix.to_ascii_uppercase();
        self.brand_from_code(&prefix).or_else(|| {
            prefix
                .get(..2)
                .filter(|short| short.len() < prefix.len())
                .and_then(|short| self.brand_from_code(short))
        })
    }

    /// Brand implied by a full catalog code such as `rb7178`.
    pub fn brand_from_catalog_code(&self, code: &str) -> Option<&str> {
        split_catalog_code(code).and_then(|code| self.brand_from_catalog_prefix(&code.prefix))
    }
}

impl Default for BrandDirectory {
    fn default() -> Self {
        Self::luxottica()
    }
}

//! Static asset registry mapping logical request paths to resolved outputs.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};

/// One physical asset's logical request path and its resolved output path.
///
/// The output path carries the content hash produced by the asset pipeline,
/// so a record ties the path authors write in source to the cache-busted
/// name browsers should fetch. Records are immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct AssetRecord {
  /// Logical request path as written in source code.
  pub input: String,
  /// Resolved, content-addressed output path.
  pub output: String,
}

impl AssetRecord {
  /// Construct a record from an input/output path pair.
  pub fn new(input: impl Into<String>, output: impl Into<String>) -> Self {
    Self {
      input: input.into(),
      output: output.into(),
    }
  }
}

/// Ordered collection of asset records.
///
/// Insertion order is observable: when several records match one
/// `asset_filter` pattern, the emitted mapping literal lists them in
/// registry order. Duplicate `input` paths are allowed and preserved
/// verbatim; deduplication is the producer's responsibility.
///
/// The transform only ever reads the registry, so a shared reference can
/// back any number of concurrently transformed files.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct AssetRegistry {
  records: Vec<AssetRecord>,
}

impl AssetRegistry {
  /// Build a registry from records, keeping their order.
  pub fn from_records(records: Vec<AssetRecord>) -> Self {
    Self { records }
  }

  /// All records in insertion order.
  pub fn records(&self) -> &[AssetRecord] {
    &self.records
  }

  /// Iterate records in insertion order.
  pub fn iter(&self) -> std::slice::Iter<'_, AssetRecord> {
    self.records.iter()
  }

  /// Number of records in the registry.
  pub fn len(&self) -> usize {
    self.records.len()
  }

  /// Returns `true` when the registry holds no records.
  pub fn is_empty(&self) -> bool {
    self.records.is_empty()
  }

  /// Iterate records whose input path matches `pattern`, in registry order.
  ///
  /// Matching is partial: the pattern may land anywhere inside the input
  /// path unless it anchors itself.
  pub fn matches<'a>(
    &'a self,
    pattern: &'a Regex,
  ) -> impl Iterator<Item = &'a AssetRecord> + 'a {
    self
      .records
      .iter()
      .filter(move |record| pattern.is_match(&record.input))
  }

  /// Parse a registry from a JSON array of records.
  pub fn from_json(content: &str) -> Result<Self> {
    serde_json::from_str(content).context("failed to parse asset registry JSON")
  }

  /// Read and parse a registry file produced by the asset pipeline.
  pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
      .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("failed to parse {}", path.display()))
  }
}

impl FromIterator<AssetRecord> for AssetRegistry {
  fn from_iter<I: IntoIterator<Item = AssetRecord>>(iter: I) -> Self {
    Self {
      records: iter.into_iter().collect(),
    }
  }
}

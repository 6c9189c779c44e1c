use regex::Regex;

use super::recognize::AssetMacro;
use crate::error::TransformError;
use crate::registry::AssetRegistry;
use crate::syntax::{Expr, NodeFactory};

/// Build the node that replaces a validated macro call.
///
/// `asset_url` and `asset_path` pass the key through verbatim as a plain
/// string literal; resolving it to the cache-busted output name is the
/// bundling layer's job once the macro shape is gone. `asset_filter`
/// compiles the key into a regular expression and projects matching
/// registry records into a mapping literal.
pub fn replacement_for<F: NodeFactory>(
  macro_kind: AssetMacro,
  match_key: &str,
  registry: &AssetRegistry,
  factory: &F,
  file_name: &str,
) -> Result<Expr, TransformError> {
  match macro_kind {
    AssetMacro::Url | AssetMacro::Path => Ok(factory.string_literal(match_key)),
    AssetMacro::Filter => filter_mapping(match_key, registry, factory, file_name),
  }
}

/// Project registry records matching `pattern` into a mapping literal.
///
/// The pattern is used exactly as written in source, unanchored, against
/// each record's input path; matches keep registry order and duplicates are
/// emitted verbatim. An empty match set is a valid result and produces an
/// empty mapping literal. A pattern that fails to compile aborts the file.
fn filter_mapping<F: NodeFactory>(
  pattern: &str,
  registry: &AssetRegistry,
  factory: &F,
  file_name: &str,
) -> Result<Expr, TransformError> {
  let compiled = Regex::new(pattern).map_err(|source| TransformError::InvalidFilterPattern {
    file_name: file_name.to_string(),
    pattern: pattern.to_string(),
    source,
  })?;

  let properties = registry
    .matches(&compiled)
    .map(|record| factory.property(&record.input, factory.string_literal(&record.output)))
    .collect();

  Ok(factory.object_literal(properties))
}

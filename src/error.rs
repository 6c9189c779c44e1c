//! Errors surfaced by the rewriting pass.

/// Errors that abort a source file's transform.
///
/// Invalid call shapes never produce an error; they are recovered locally by
/// leaving the offending node untouched. The only fatal condition is a
/// filter pattern that fails to compile.
#[derive(Debug)]
pub enum TransformError {
  /// The pattern argument of an `asset_filter` call failed to compile.
  InvalidFilterPattern {
    /// Name of the source file containing the call.
    file_name: String,
    /// Pattern text as written in source.
    pattern: String,
    /// Underlying regex compilation error.
    source: regex::Error,
  },
}

impl std::fmt::Display for TransformError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::InvalidFilterPattern {
        file_name,
        pattern,
        source,
      } => {
        write!(
          f,
          "invalid asset_filter pattern `{pattern}` in {file_name}: {source}"
        )
      }
    }
  }
}

impl std::error::Error for TransformError {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      Self::InvalidFilterPattern { source, .. } => Some(source),
    }
  }
}

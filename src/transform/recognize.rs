use crate::syntax::Expr;

/// The closed set of pseudo-macro calls rewritten by the pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetMacro {
  /// `asset_url(..)`, rewritten to a plain string literal.
  Url,
  /// `asset_path(..)`, rewritten to a plain string literal.
  Path,
  /// `asset_filter(..)`, rewritten to a mapping literal of registry entries.
  Filter,
}

impl AssetMacro {
  /// Classify a callee identifier, returning `None` for every other name.
  pub fn classify(name: &str) -> Option<Self> {
    match name {
      "asset_url" => Some(Self::Url),
      "asset_path" => Some(Self::Path),
      "asset_filter" => Some(Self::Filter),
      _ => None,
    }
  }
}

/// A recognized macro invocation awaiting argument validation.
///
/// Exists only while one node is being decided; nothing outlives the
/// traversal step that produced it.
#[derive(Debug)]
pub struct CallSite<'a> {
  /// Which macro the callee named.
  pub macro_kind: AssetMacro,
  /// The call's single argument.
  pub argument: &'a Expr,
}

/// Match a node against the recognized call surface.
///
/// Recognition is purely structural: the callee must be a bare identifier
/// spelling one of the three macro names and the argument list must hold
/// exactly one element. Imports, aliases and member-style callees are never
/// resolved, so `assets.asset_url(..)` or a renamed binding falls through.
pub fn recognize_call(expr: &Expr) -> Option<CallSite<'_>> {
  let Expr::Call { callee, args } = expr else {
    return None;
  };
  let Expr::Ident(name) = callee.as_ref() else {
    return None;
  };
  let macro_kind = AssetMacro::classify(name)?;
  let [argument] = args.as_slice() else {
    return None;
  };
  Some(CallSite {
    macro_kind,
    argument,
  })
}

use super::node::{Expr, Property};

/// Construction seam for replacement nodes.
///
/// The host compiler supplies the factory so synthesized literals carry
/// whatever bookkeeping its node representation needs (ids, spans,
/// formatting hints). The pass itself only asks for the three node kinds
/// it can emit.
pub trait NodeFactory {
  /// Build a string-literal node holding `value`.
  fn string_literal(&self, value: &str) -> Expr;

  /// Build one key/value pair of a mapping literal.
  fn property(&self, key: &str, value: Expr) -> Property;

  /// Build a mapping-literal node from its pairs, preserving their order.
  fn object_literal(&self, properties: Vec<Property>) -> Expr;
}

/// Factory producing plain double-quoted literals with no host bookkeeping.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainNodeFactory;

impl NodeFactory for PlainNodeFactory {
  fn string_literal(&self, value: &str) -> Expr {
    Expr::string(value)
  }

  fn property(&self, key: &str, value: Expr) -> Property {
    Property {
      key: key.to_string(),
      value,
    }
  }

  fn object_literal(&self, properties: Vec<Property>) -> Expr {
    Expr::Object(properties)
  }
}

use serde::{Deserialize, Serialize};

/// Quote character a plain string literal was written with.
///
/// Carried through so untouched literals survive the pass with their source
/// spelling intact; the two styles are otherwise interchangeable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum QuoteStyle {
  /// `"..."`
  Double,
  /// `'...'`
  Single,
}

/// A plain quoted string literal.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct StrLit {
  /// Literal text without the surrounding quotes.
  pub value: String,
  /// Quote character used in source.
  pub quote: QuoteStyle,
}

/// An expression node of the host compiler's syntax tree.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub enum Expr {
  /// Bare identifier reference.
  Ident(String),
  /// Plain quoted string literal.
  Str(StrLit),
  /// Template-style literal: text runs interleaved with substitutions.
  ///
  /// A template with zero substitutions is a fixed value; one with any
  /// substitutions requires runtime computation.
  Template {
    /// Literal text runs.
    quasis: Vec<String>,
    /// Embedded expressions, evaluated at runtime.
    substitutions: Vec<Expr>,
  },
  /// Function invocation with a callee and argument list.
  Call {
    /// Invoked expression.
    callee: Box<Expr>,
    /// Arguments in source order.
    args: Vec<Expr>,
  },
  /// Property access (`object.property`).
  Member {
    /// Expression the property is read from.
    object: Box<Expr>,
    /// Property name.
    property: String,
  },
  /// Binary operation such as string concatenation.
  Binary {
    /// Operator spelling (`+`, `==`, ...).
    op: String,
    /// Left operand.
    lhs: Box<Expr>,
    /// Right operand.
    rhs: Box<Expr>,
  },
  /// Array literal.
  Array(Vec<Expr>),
  /// Mapping literal of string keys to expression values.
  Object(Vec<Property>),
}

impl Expr {
  /// Double-quoted string literal expression.
  pub fn string(value: impl Into<String>) -> Self {
    Self::Str(StrLit {
      value: value.into(),
      quote: QuoteStyle::Double,
    })
  }

  /// Single-quoted string literal expression.
  pub fn single_quoted(value: impl Into<String>) -> Self {
    Self::Str(StrLit {
      value: value.into(),
      quote: QuoteStyle::Single,
    })
  }

  /// Bare identifier expression.
  pub fn ident(name: impl Into<String>) -> Self {
    Self::Ident(name.into())
  }

  /// Invocation of `callee` with the provided arguments.
  pub fn call(callee: Expr, args: Vec<Expr>) -> Self {
    Self::Call {
      callee: Box::new(callee),
      args,
    }
  }
}

/// One key/value pair of a mapping literal.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Property {
  /// String key.
  pub key: String,
  /// Value expression.
  pub value: Expr,
}

/// A statement node of the host compiler's syntax tree.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub enum Stmt {
  /// Bare expression statement.
  Expr(Expr),
  /// Variable declaration with an optional initializer.
  Decl {
    /// Declared name.
    name: String,
    /// Initializer expression, when present.
    init: Option<Expr>,
  },
  /// Braced statement list.
  Block(Vec<Stmt>),
  /// Return statement with an optional value.
  Return(Option<Expr>),
}

/// Root node of one compilation unit.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SourceFile {
  /// File name the host parsed this tree from, used in diagnostics.
  pub file_name: String,
  /// Top-level statements in source order.
  pub body: Vec<Stmt>,
}

impl SourceFile {
  /// Construct a source file root from its name and statement list.
  pub fn new(file_name: impl Into<String>, body: Vec<Stmt>) -> Self {
    Self {
      file_name: file_name.into(),
      body,
    }
  }
}

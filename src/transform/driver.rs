use super::arguments::literal_text;
use super::recognize::{AssetMacro, recognize_call};
use super::replace::replacement_for;
use crate::error::TransformError;
use crate::registry::AssetRegistry;
use crate::syntax::{Expr, NodeFactory, Property, SourceFile, Stmt};

/// Per-file rewriting pass over the host compiler's syntax trees.
///
/// The transformer borrows the registry and never mutates it, so one
/// registry can back any number of files transformed in parallel by the
/// host. Each invocation is a pure, synchronous function of the tree and
/// the registry.
pub struct AssetTransformer<'a> {
  registry: &'a AssetRegistry,
}

impl<'a> AssetTransformer<'a> {
  /// Create a transformer reading from the provided registry.
  pub fn new(registry: &'a AssetRegistry) -> Self {
    Self { registry }
  }

  /// Rewrite every recognized, validly-shaped macro call in one file.
  ///
  /// Traversal is depth-first and pre-order: each node receives exactly one
  /// substitution decision before its children are considered, and a
  /// replaced node is never re-entered. The only failure mode is a
  /// malformed `asset_filter` pattern, which aborts the whole file.
  pub fn transform_file<F: NodeFactory>(
    &self,
    file: SourceFile,
    factory: &F,
  ) -> Result<SourceFile, TransformError> {
    let SourceFile { file_name, body } = file;
    let body = body
      .into_iter()
      .map(|stmt| self.rewrite_stmt(stmt, factory, &file_name))
      .collect::<Result<Vec<_>, _>>()?;
    Ok(SourceFile { file_name, body })
  }

  fn rewrite_stmt<F: NodeFactory>(
    &self,
    stmt: Stmt,
    factory: &F,
    file_name: &str,
  ) -> Result<Stmt, TransformError> {
    Ok(match stmt {
      Stmt::Expr(expr) => Stmt::Expr(self.rewrite_expr(expr, factory, file_name)?),
      Stmt::Decl { name, init } => Stmt::Decl {
        name,
        init: init
          .map(|expr| self.rewrite_expr(expr, factory, file_name))
          .transpose()?,
      },
      Stmt::Block(stmts) => Stmt::Block(
        stmts
          .into_iter()
          .map(|stmt| self.rewrite_stmt(stmt, factory, file_name))
          .collect::<Result<Vec<_>, _>>()?,
      ),
      Stmt::Return(expr) => Stmt::Return(
        expr
          .map(|expr| self.rewrite_expr(expr, factory, file_name))
          .transpose()?,
      ),
    })
  }

  fn rewrite_expr<F: NodeFactory>(
    &self,
    expr: Expr,
    factory: &F,
    file_name: &str,
  ) -> Result<Expr, TransformError> {
    match decide(&expr) {
      Decision::Rewrite(macro_kind, match_key) => {
        replacement_for(macro_kind, &match_key, self.registry, factory, file_name)
      }
      Decision::PassThrough => Ok(expr),
      Decision::Descend => self.descend(expr, factory, file_name),
    }
  }

  /// Rebuild a non-matching node with each child rewritten in source order.
  fn descend<F: NodeFactory>(
    &self,
    expr: Expr,
    factory: &F,
    file_name: &str,
  ) -> Result<Expr, TransformError> {
    Ok(match expr {
      Expr::Call { callee, args } => Expr::Call {
        callee: Box::new(self.rewrite_expr(*callee, factory, file_name)?),
        args: args
          .into_iter()
          .map(|arg| self.rewrite_expr(arg, factory, file_name))
          .collect::<Result<Vec<_>, _>>()?,
      },
      Expr::Template {
        quasis,
        substitutions,
      } => Expr::Template {
        quasis,
        substitutions: substitutions
          .into_iter()
          .map(|sub| self.rewrite_expr(sub, factory, file_name))
          .collect::<Result<Vec<_>, _>>()?,
      },
      Expr::Member { object, property } => Expr::Member {
        object: Box::new(self.rewrite_expr(*object, factory, file_name)?),
        property,
      },
      Expr::Binary { op, lhs, rhs } => Expr::Binary {
        op,
        lhs: Box::new(self.rewrite_expr(*lhs, factory, file_name)?),
        rhs: Box::new(self.rewrite_expr(*rhs, factory, file_name)?),
      },
      Expr::Array(items) => Expr::Array(
        items
          .into_iter()
          .map(|item| self.rewrite_expr(item, factory, file_name))
          .collect::<Result<Vec<_>, _>>()?,
      ),
      Expr::Object(properties) => Expr::Object(
        properties
          .into_iter()
          .map(|Property { key, value }| {
            Ok(Property {
              key,
              value: self.rewrite_expr(value, factory, file_name)?,
            })
          })
          .collect::<Result<Vec<_>, TransformError>>()?,
      ),
      leaf @ (Expr::Ident(_) | Expr::Str(_)) => leaf,
    })
  }
}

/// One substitution decision for an original node.
enum Decision {
  /// Recognized and validly shaped: replace with a synthesized literal.
  Rewrite(AssetMacro, String),
  /// Recognized but carrying an unacceptable argument: keep the node as is
  /// and do not descend into it.
  PassThrough,
  /// Not a recognized call: keep the node and rewrite its children.
  Descend,
}

fn decide(expr: &Expr) -> Decision {
  match recognize_call(expr) {
    Some(site) => match literal_text(site.argument) {
      Some(match_key) => Decision::Rewrite(site.macro_kind, match_key),
      None => Decision::PassThrough,
    },
    None => Decision::Descend,
  }
}

/// Build a per-file transform function closed over one registry and factory.
///
/// Convenience for hosts that schedule a factory of per-file passes rather
/// than holding a transformer value.
pub fn transformer<'a, F: NodeFactory>(
  registry: &'a AssetRegistry,
  factory: &'a F,
) -> impl Fn(SourceFile) -> Result<SourceFile, TransformError> + 'a {
  move |file| AssetTransformer::new(registry).transform_file(file, factory)
}

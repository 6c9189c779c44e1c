use crate::syntax::Expr;

/// Extract the literal match key from a recognized call's argument.
///
/// Accepted forms are a plain quoted string (either quote style) and a
/// template literal with zero substitutions; the returned key has leading
/// and trailing whitespace trimmed. Templates with substitutions and every
/// non-literal expression (concatenation, references, nested calls) yield
/// `None`, which the driver turns into a silent pass-through.
pub fn literal_text(argument: &Expr) -> Option<String> {
  match argument {
    Expr::Str(lit) => Some(lit.value.trim().to_string()),
    Expr::Template {
      quasis,
      substitutions,
    } if substitutions.is_empty() => Some(quasis.concat().trim().to_string()),
    _ => None,
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn accepts_plain_strings_of_either_quote_style() {
    assert_eq!(
      literal_text(&Expr::string("flags.png")),
      Some("flags.png".to_string())
    );
    assert_eq!(
      literal_text(&Expr::single_quoted("flags.png")),
      Some("flags.png".to_string())
    );
  }

  #[test]
  fn accepts_templates_without_substitutions() {
    let template = Expr::Template {
      quasis: vec!["flags.png".into()],
      substitutions: vec![],
    };
    assert_eq!(literal_text(&template), Some("flags.png".to_string()));
  }

  #[test]
  fn trims_surrounding_whitespace() {
    assert_eq!(
      literal_text(&Expr::string("  flags.png \n")),
      Some("flags.png".to_string())
    );
  }

  #[test]
  fn rejects_templates_with_substitutions() {
    let template = Expr::Template {
      quasis: vec!["flags.".into(), String::new()],
      substitutions: vec![Expr::ident("extension")],
    };
    assert_eq!(literal_text(&template), None);
  }

  #[test]
  fn rejects_non_literal_expressions() {
    let concat = Expr::Binary {
      op: "+".into(),
      lhs: Box::new(Expr::string("flags")),
      rhs: Box::new(Expr::ident("extension")),
    };
    assert_eq!(literal_text(&concat), None);
    assert_eq!(literal_text(&Expr::ident("path")), None);
    assert_eq!(
      literal_text(&Expr::call(Expr::ident("resolve"), vec![])),
      None
    );
  }
}

//! Splits source text into top-level declaration blocks.

use tracing::{debug, trace};

use crate::lexer::{tokenize, Token, TokenKind};
use crate::{DeclarationKind, ParseError, ParseErrorKind, SourceDeclaration, Span};

/// Finds every top-level `interface` and `class` declaration in `source`.
///
/// Declarations are returned in source order. With `exported_only` set,
/// declarations without an `export` marker are dropped. Keywords nested
/// inside other braces (function bodies, object literals) are not
/// declarations and are skipped.
pub fn split(source: &str, exported_only: bool) -> Result<Vec<SourceDeclaration<'_>>, ParseError> {
    let tokens: Vec<Token> = tokenize(source)
        .into_iter()
        .filter(|t| t.kind != TokenKind::Newline)
        .collect();

    let mut declarations = Vec::new();
    let mut open_braces: Vec<Span> = Vec::new();
    let mut idx = 0;

    while idx < tokens.len() {
        let token = tokens[idx];
        match token.kind {
            TokenKind::LBrace => open_braces.push(token.span),
            TokenKind::RBrace => {
                if open_braces.pop().is_none() {
                    return Err(ParseError::new(
                        ParseErrorKind::UnexpectedClosingBrace,
                        token.span,
                    ));
                }
            }
            TokenKind::Interface | TokenKind::Class if open_braces.is_empty() => {
                let (declaration, close_idx) = scan_declaration(source, &tokens, idx)?;
                debug!(
                    kind = %declaration.kind,
                    exported = declaration.exported,
                    start = u32::from(declaration.span.start),
                    "found declaration"
                );
                if declaration.exported || !exported_only {
                    declarations.push(declaration);
                } else {
                    trace!("skipping non-exported declaration");
                }
                idx = close_idx + 1;
                continue;
            }
            _ => {}
        }
        idx += 1;
    }

    if let Some(open) = open_braces.first() {
        return Err(ParseError::new(ParseErrorKind::UnclosedBrace, *open));
    }

    Ok(declarations)
}

/// Scans one declaration whose keyword sits at `tokens[start]`.
///
/// Returns the declaration and the index of its closing brace.
fn scan_declaration<'src>(
    source: &'src str,
    tokens: &[Token],
    start: usize,
) -> Result<(SourceDeclaration<'src>, usize), ParseError> {
    let keyword = tokens[start];
    let kind = declaration_kind(keyword.kind);

    let name = tokens[start + 1];
    if name.kind != TokenKind::Ident {
        return Err(ParseError::new(
            ParseErrorKind::MissingIdentifier {
                keyword: kind.keyword(),
                found: describe(source, name),
            },
            name.span,
        ));
    }
    let name_text = name.text(source);

    let open = tokens[start + 2];
    if open.kind != TokenKind::LBrace {
        return Err(ParseError::new(
            ParseErrorKind::ExpectedBodyOpen {
                name: name_text.to_string(),
                found: describe(source, open),
            },
            open.span,
        ));
    }

    let close_idx = find_matching_brace(tokens, start + 2).ok_or_else(|| {
        ParseError::new(
            ParseErrorKind::UnclosedBody {
                name: name_text.to_string(),
            },
            keyword.span.cover(open.span),
        )
    })?;

    let span = keyword.span.cover(tokens[close_idx].span);
    let declaration = SourceDeclaration {
        kind,
        exported: is_exported(tokens, start),
        span,
        text: span.slice(source),
    };
    Ok((declaration, close_idx))
}

/// Checks for `export` before the keyword, allowing `default`, `declare`
/// and `abstract` in between.
fn is_exported(tokens: &[Token], keyword_idx: usize) -> bool {
    tokens[..keyword_idx]
        .iter()
        .rev()
        .find(|t| !t.kind.is_declaration_modifier())
        .is_some_and(|t| t.kind == TokenKind::Export)
}

/// Returns the index of the `}` matching the `{` at `open_idx`.
///
/// Nested braces are balanced; `None` if the input ends first.
pub(crate) fn find_matching_brace(tokens: &[Token], open_idx: usize) -> Option<usize> {
    let mut depth = 0usize;
    for (idx, token) in tokens.iter().enumerate().skip(open_idx) {
        match token.kind {
            TokenKind::LBrace => depth += 1,
            TokenKind::RBrace => {
                depth -= 1;
                if depth == 0 {
                    return Some(idx);
                }
            }
            _ => {}
        }
    }
    None
}

pub(crate) fn declaration_kind(kind: TokenKind) -> DeclarationKind {
    match kind {
        TokenKind::Class => DeclarationKind::Class,
        _ => DeclarationKind::Interface,
    }
}

/// Describes a token for error messages: its text, or its kind name at
/// end of input.
pub(crate) fn describe(source: &str, token: Token) -> String {
    match token.kind {
        TokenKind::Eof | TokenKind::Newline => token.kind.name().to_string(),
        _ => format!("'{}'", token.text(source)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn texts(source: &str, exported_only: bool) -> Vec<&str> {
        split(source, exported_only)
            .unwrap()
            .into_iter()
            .map(|d| d.text)
            .collect()
    }

    #[test]
    fn test_empty_source() {
        assert!(split("", false).unwrap().is_empty());
        assert!(split("const x = 1;", false).unwrap().is_empty());
    }

    #[test]
    fn test_single_interface() {
        let source = "interface Beans { propOne: string; }";
        let declarations = split(source, false).unwrap();
        assert_eq!(declarations.len(), 1);
        assert_eq!(declarations[0].kind, DeclarationKind::Interface);
        assert!(!declarations[0].exported);
        assert_eq!(declarations[0].text, source);
    }

    #[test]
    fn test_order_is_preserved() {
        let source = "class B {} interface A {} class C { x: number; }";
        assert_eq!(
            texts(source, false),
            vec!["class B {}", "interface A {}", "class C { x: number; }"]
        );
    }

    #[test]
    fn test_export_marker_is_stripped() {
        let source = "export interface Beans {}";
        let declarations = split(source, false).unwrap();
        assert!(declarations[0].exported);
        assert_eq!(declarations[0].text, "interface Beans {}");
        assert_eq!(declarations[0].span.as_range(), 7..source.len());
    }

    #[test]
    fn test_exported_only_filters() {
        let source = "interface Beans { a: string; } export interface Second { b: number; }";
        assert_eq!(
            texts(source, true),
            vec!["interface Second { b: number; }"]
        );
        assert_eq!(texts(source, false).len(), 2);
    }

    #[test]
    fn test_export_with_modifiers() {
        let source = "export default class A {}\nexport declare interface B {}\nexport abstract class C {}";
        let declarations = split(source, true).unwrap();
        assert_eq!(declarations.len(), 3);
        assert!(declarations.iter().all(|d| d.exported));
    }

    #[test]
    fn test_export_on_previous_statement_does_not_leak() {
        let source = "export const x = 1; interface Beans {}";
        let declarations = split(source, false).unwrap();
        assert!(!declarations[0].exported);
    }

    #[test]
    fn test_braces_on_separate_lines() {
        let source = "interface Beans\n{\n    propOne: string;\n}\n";
        assert_eq!(
            texts(source, false),
            vec!["interface Beans\n{\n    propOne: string;\n}"]
        );
    }

    #[test]
    fn test_nested_braces_are_balanced() {
        let source = "interface Outer { inner: { a: string }; } class Next {}";
        assert_eq!(
            texts(source, false),
            vec!["interface Outer { inner: { a: string }; }", "class Next {}"]
        );
    }

    #[test]
    fn test_keywords_inside_other_blocks_are_ignored() {
        let source = "function make() { return class {}; }\ninterface Beans {}";
        assert_eq!(texts(source, false), vec!["interface Beans {}"]);
    }

    #[test]
    fn test_keyword_inside_comment_is_ignored() {
        let source = "// interface Hidden {}\ninterface Beans {}";
        assert_eq!(texts(source, false), vec!["interface Beans {}"]);
    }

    #[test]
    fn test_braces_inside_template_literal_are_ignored() {
        let source = "const s = `}`;\nconst t = `${\n{`;\ninterface Beans { a: string; }";
        assert_eq!(texts(source, false), vec!["interface Beans { a: string; }"]);
    }

    #[test]
    fn test_missing_identifier() {
        let err = split("interface { a: string; }", false).unwrap_err();
        assert!(matches!(
            err.kind,
            ParseErrorKind::MissingIdentifier { keyword: "interface", .. }
        ));
        assert_eq!(err.span.as_range(), 10..11);
    }

    #[test]
    fn test_keyword_at_end_of_input() {
        let err = split("class", false).unwrap_err();
        assert_eq!(
            err.kind,
            ParseErrorKind::MissingIdentifier {
                keyword: "class",
                found: "end of file".to_string(),
            }
        );
    }

    #[test]
    fn test_extends_clause_is_rejected() {
        let err = split("class A extends B {}", false).unwrap_err();
        assert_eq!(
            err.kind,
            ParseErrorKind::ExpectedBodyOpen {
                name: "A".to_string(),
                found: "'extends'".to_string(),
            }
        );
    }

    #[test]
    fn test_unclosed_body() {
        let err = split("interface Beans { a: string;", false).unwrap_err();
        assert_eq!(
            err.kind,
            ParseErrorKind::UnclosedBody {
                name: "Beans".to_string()
            }
        );
    }

    #[test]
    fn test_stray_closing_brace() {
        let err = split("interface A {} }", false).unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::UnexpectedClosingBrace);
        assert_eq!(err.span.as_range(), 15..16);
    }

    #[test]
    fn test_unclosed_outer_brace() {
        let err = split("function f() {", false).unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::UnclosedBrace);
    }
}

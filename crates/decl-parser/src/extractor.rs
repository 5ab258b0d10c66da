//! Name and property extraction from a single declaration block.
//!
//! A body is a sequence of field statements of the form
//! `modifiers* name '?'? ':' type`, each ended by `;` or the closing brace.
//! A member may also end at a line break when the next line starts another
//! member. Empty statements are skipped.

use std::ops::Range;

use smol_str::SmolStr;
use tracing::trace;

use crate::lexer::{tokenize, Token, TokenKind};
use crate::splitter::{declaration_kind, describe, find_matching_brace};
use crate::{Declaration, DeclarationKind, ParseError, ParseErrorKind, Property, Span};

/// Class member modifiers skipped in front of a field name.
const FIELD_MODIFIERS: &[&str] = &[
    "public",
    "private",
    "protected",
    "readonly",
    "static",
    "declare",
];

/// Returns the name of the first declaration in `text`.
pub fn extract_name(text: &str) -> Result<SmolStr, ParseError> {
    let tokens = tokenize(text);
    Ok(Header::parse(text, &tokens)?.name)
}

/// Returns the keyword kind of the first declaration in `text`.
pub fn extract_kind(text: &str) -> Result<DeclarationKind, ParseError> {
    let tokens = tokenize(text);
    Ok(Header::parse(text, &tokens)?.kind)
}

/// Returns the fields of the first declaration in `text`, in source order.
pub fn extract_properties(text: &str) -> Result<Vec<Property>, ParseError> {
    let tokens = tokenize(text);
    let header = Header::parse(text, &tokens)?;
    body_properties(text, &tokens, &header)
}

/// Extracts kind, name and fields of the first declaration in `text`.
///
/// The result is marked exported when `export` precedes the keyword.
pub fn parse_declaration(text: &str) -> Result<Declaration, ParseError> {
    let tokens = tokenize(text);
    let header = Header::parse(text, &tokens)?;
    let properties = body_properties(text, &tokens, &header)?;
    Ok(Declaration {
        kind: header.kind,
        exported: header.exported,
        name: header.name,
        properties,
        span: header.span,
    })
}

/// The `keyword Name {` prefix of a declaration, with token indices of its
/// braces.
struct Header {
    kind: DeclarationKind,
    exported: bool,
    name: SmolStr,
    open: usize,
    close: usize,
    span: Span,
}

impl Header {
    fn parse(text: &str, tokens: &[Token]) -> Result<Self, ParseError> {
        let keyword_idx = tokens
            .iter()
            .position(|t| matches!(t.kind, TokenKind::Interface | TokenKind::Class))
            .ok_or_else(|| {
                ParseError::new(
                    ParseErrorKind::NoDeclaration,
                    Span::from_usize_range(0..text.len()),
                )
            })?;
        let keyword = tokens[keyword_idx];
        let kind = declaration_kind(keyword.kind);

        let name_idx = next_significant(tokens, keyword_idx + 1);
        let name = tokens[name_idx];
        if name.kind != TokenKind::Ident {
            return Err(ParseError::new(
                ParseErrorKind::MissingIdentifier {
                    keyword: kind.keyword(),
                    found: describe(text, name),
                },
                name.span,
            ));
        }
        let name = SmolStr::new(name.text(text));

        let open = next_significant(tokens, name_idx + 1);
        if tokens[open].kind != TokenKind::LBrace {
            return Err(ParseError::new(
                ParseErrorKind::ExpectedBodyOpen {
                    name: name.to_string(),
                    found: describe(text, tokens[open]),
                },
                tokens[open].span,
            ));
        }

        let close = find_matching_brace(tokens, open).ok_or_else(|| {
            ParseError::new(
                ParseErrorKind::UnclosedBody {
                    name: name.to_string(),
                },
                keyword.span.cover(tokens[open].span),
            )
        })?;

        let exported = tokens[..keyword_idx]
            .iter()
            .rev()
            .find(|t| t.kind != TokenKind::Newline && !t.kind.is_declaration_modifier())
            .is_some_and(|t| t.kind == TokenKind::Export);

        Ok(Self {
            kind,
            exported,
            name,
            open,
            close,
            span: keyword.span.cover(tokens[close].span),
        })
    }
}

/// Index of the first non-newline token at or after `from`.
///
/// The token stream always ends in `Eof`, which is returned if nothing
/// else is left.
fn next_significant(tokens: &[Token], from: usize) -> usize {
    tokens[from..]
        .iter()
        .position(|t| t.kind != TokenKind::Newline)
        .map_or(tokens.len() - 1, |offset| from + offset)
}

fn body_properties(
    text: &str,
    tokens: &[Token],
    header: &Header,
) -> Result<Vec<Property>, ParseError> {
    let mut properties = Vec::new();
    for range in statement_ranges(tokens, header.open + 1, header.close) {
        if let Some(property) = parse_statement(text, &tokens[range])? {
            trace!(
                declaration = %header.name,
                property = %property.name,
                type_text = %property.type_text,
                "extracted property"
            );
            properties.push(property);
        }
    }
    Ok(properties)
}

/// Splits the body tokens `[start, end)` at top-level `;`.
///
/// A line break also ends a statement, but only once the statement has a
/// colon and a type and the next line opens a new `name?:` statement.
/// Anywhere else it is whitespace.
fn statement_ranges(tokens: &[Token], start: usize, end: usize) -> Vec<Range<usize>> {
    let mut ranges = Vec::new();
    let mut depth = 0usize;
    let mut statement_start = start;
    let mut has_colon = false;
    let mut has_type = false;

    for idx in start..end {
        match tokens[idx].kind {
            TokenKind::Semicolon if depth == 0 => {}
            TokenKind::Newline
                if depth == 0 && has_type && starts_statement(&tokens[idx + 1..end]) => {}
            TokenKind::Newline => continue,
            kind => {
                match kind {
                    TokenKind::LBrace => depth += 1,
                    TokenKind::RBrace => depth = depth.saturating_sub(1),
                    _ => {}
                }
                if has_colon {
                    has_type = true;
                } else if kind == TokenKind::Colon && depth == 0 {
                    has_colon = true;
                }
                continue;
            }
        }
        ranges.push(statement_start..idx);
        statement_start = idx + 1;
        has_colon = false;
        has_type = false;
    }
    ranges.push(statement_start..end);
    ranges
}

/// Returns true if `tokens` open with `word+ '?'? ':'` after any blank lines.
fn starts_statement(tokens: &[Token]) -> bool {
    let mut rest = tokens
        .iter()
        .filter(|t| t.kind != TokenKind::Newline)
        .peekable();
    let mut words = 0;
    while rest.next_if(|t| t.kind.is_word()).is_some() {
        words += 1;
    }
    rest.next_if(|t| t.kind == TokenKind::Question);
    words > 0 && rest.next().is_some_and(|t| t.kind == TokenKind::Colon)
}

/// Parses one field statement. Returns `None` for an empty statement.
fn parse_statement(text: &str, statement: &[Token]) -> Result<Option<Property>, ParseError> {
    let tokens: Vec<Token> = statement
        .iter()
        .copied()
        .filter(|t| t.kind != TokenKind::Newline)
        .collect();
    let Some(last) = tokens.last().copied() else {
        return Ok(None);
    };

    let mut idx = 0;
    while idx + 1 < tokens.len()
        && tokens[idx + 1].kind.is_word()
        && FIELD_MODIFIERS.contains(&tokens[idx].text(text))
    {
        idx += 1;
    }

    let name = tokens[idx];
    if !name.kind.is_word() {
        return Err(ParseError::new(
            ParseErrorKind::ExpectedFieldName {
                found: describe(text, name),
            },
            name.span,
        ));
    }
    let name_text = name.text(text);
    idx += 1;

    let optional = tokens
        .get(idx)
        .is_some_and(|t| t.kind == TokenKind::Question);
    if optional {
        idx += 1;
    }

    let colon = match tokens.get(idx) {
        Some(t) if t.kind == TokenKind::Colon => *t,
        _ => {
            return Err(ParseError::new(
                ParseErrorKind::MissingColon {
                    name: name_text.to_string(),
                },
                name.span,
            ))
        }
    };

    let type_text = if idx + 1 < tokens.len() {
        Span::new(colon.span.end, last.span.end).slice(text).trim()
    } else {
        ""
    };
    if type_text.is_empty() {
        return Err(ParseError::new(
            ParseErrorKind::MissingType {
                name: name_text.to_string(),
            },
            name.span.cover(colon.span),
        ));
    }

    Ok(Some(Property::new(name_text, type_text, optional)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_extract_name() {
        assert_eq!(extract_name("interface Beans { }").unwrap(), "Beans");
        assert_eq!(extract_name("class Beans {}").unwrap(), "Beans");
        assert_eq!(
            extract_name("export interface Beans\n{\n}").unwrap(),
            "Beans"
        );
    }

    #[test]
    fn test_extract_name_without_declaration() {
        let err = extract_name("const beans = {};").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::NoDeclaration);
    }

    #[test]
    fn test_extract_kind() {
        assert_eq!(
            extract_kind("interface A {}").unwrap(),
            DeclarationKind::Interface
        );
        assert_eq!(extract_kind("class A {}").unwrap(), DeclarationKind::Class);
    }

    #[test]
    fn test_primitive_property() {
        assert_eq!(
            extract_properties("interface Beans { propertyOne : string; }").unwrap(),
            vec![Property::new("propertyOne", "string", false)]
        );
    }

    #[test]
    fn test_list_property() {
        assert_eq!(
            extract_properties("class Beans { propertyOne : string[]; }").unwrap(),
            vec![Property::new("propertyOne", "string[]", false)]
        );
    }

    #[test]
    fn test_optional_marker_is_stripped() {
        assert_eq!(
            extract_properties("interface Beans { propTwo? : string; other?: number }").unwrap(),
            vec![
                Property::new("propTwo", "string", true),
                Property::new("other", "number", true),
            ]
        );
    }

    #[test]
    fn test_last_statement_without_semicolon() {
        assert_eq!(
            extract_properties("interface Beans { a: string; b: number }").unwrap(),
            vec![
                Property::new("a", "string", false),
                Property::new("b", "number", false),
            ]
        );
    }

    #[test]
    fn test_newline_separated_fields() {
        let text = "interface Beans {\n    a: string\n    b?: boolean\n\n    c: Custom[]\n}";
        assert_eq!(
            extract_properties(text).unwrap(),
            vec![
                Property::new("a", "string", false),
                Property::new("b", "boolean", true),
                Property::new("c", "Custom[]", false),
            ]
        );
    }

    #[test]
    fn test_field_split_across_lines() {
        let text = "interface Beans {\n    propOne\n        : string;\n    propTwo:\n        number;\n    propThree?\n        : boolean[]\n}";
        assert_eq!(
            extract_properties(text).unwrap(),
            vec![
                Property::new("propOne", "string", false),
                Property::new("propTwo", "number", false),
                Property::new("propThree", "boolean[]", true),
            ]
        );
    }

    #[test]
    fn test_union_continued_on_next_line() {
        let text = "interface A {\n    id: string\n        | number\n    name: string\n}";
        assert_eq!(
            extract_properties(text).unwrap(),
            vec![
                Property::new("id", "string\n        | number", false),
                Property::new("name", "string", false),
            ]
        );
    }

    #[test]
    fn test_empty_body() {
        assert!(extract_properties("interface Beans {}").unwrap().is_empty());
        assert!(extract_properties("class Beans {\n;\n}").unwrap().is_empty());
    }

    #[test]
    fn test_case_and_duplicates_preserved() {
        assert_eq!(
            extract_properties("interface A { URL: string; url: string; url: number; }").unwrap(),
            vec![
                Property::new("URL", "string", false),
                Property::new("url", "string", false),
                Property::new("url", "number", false),
            ]
        );
    }

    #[test]
    fn test_type_text_is_raw() {
        assert_eq!(
            extract_properties("interface A { grid: number[][]; id:   Guid  ; }").unwrap(),
            vec![
                Property::new("grid", "number[][]", false),
                Property::new("id", "Guid", false),
            ]
        );
    }

    #[test]
    fn test_keywords_as_field_names() {
        assert_eq!(
            extract_properties("interface A { class: string; default: number; }").unwrap(),
            vec![
                Property::new("class", "string", false),
                Property::new("default", "number", false),
            ]
        );
    }

    #[test]
    fn test_class_member_modifiers() {
        assert_eq!(
            extract_properties(
                "class A { public name: string; private readonly id?: number; static: boolean; }"
            )
            .unwrap(),
            vec![
                Property::new("name", "string", false),
                Property::new("id", "number", true),
                Property::new("static", "boolean", false),
            ]
        );
    }

    #[test]
    fn test_missing_colon() {
        let err = extract_properties("interface A { propOne string; }").unwrap_err();
        assert_eq!(
            err.kind,
            ParseErrorKind::MissingColon {
                name: "propOne".to_string()
            }
        );
        assert_eq!(err.span.as_range(), 14..21);
    }

    #[test]
    fn test_method_is_rejected() {
        let err = extract_properties("class A { run(): void; }").unwrap_err();
        assert!(matches!(err.kind, ParseErrorKind::MissingColon { .. }));
    }

    #[test]
    fn test_missing_type() {
        let err = extract_properties("interface A { propOne: ; }").unwrap_err();
        assert_eq!(
            err.kind,
            ParseErrorKind::MissingType {
                name: "propOne".to_string()
            }
        );
    }

    #[test]
    fn test_statement_without_name() {
        let err = extract_properties("interface A { : string; }").unwrap_err();
        assert_eq!(
            err.kind,
            ParseErrorKind::ExpectedFieldName {
                found: "':'".to_string()
            }
        );
    }

    #[test]
    fn test_parse_declaration() {
        let declaration =
            parse_declaration("export class Beans { items: Bean[]; count?: number; }").unwrap();
        assert_eq!(declaration.kind, DeclarationKind::Class);
        assert!(declaration.exported);
        assert_eq!(declaration.name, "Beans");
        assert_eq!(declaration.properties.len(), 2);
        assert_eq!(declaration.span.as_range(), 7..53);
    }
}

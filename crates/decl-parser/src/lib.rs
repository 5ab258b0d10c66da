//! TypeScript declaration parser for ts2cs.
//!
//! This crate finds `interface` and `class` declarations in TypeScript source
//! and pulls out their names and fields:
//! - Lexer (tokenizer) using `logos`
//! - [`split`]: top-level declaration blocks, optionally only exported ones
//! - [`extract_name`] / [`extract_properties`]: the parts of one block
//!
//! Only flat field declarations are understood. Generics, `extends`
//! clauses, methods and inline object types are reported as errors or kept
//! as raw type text.
//!
//! # Example
//!
//! ```
//! use decl_parser::{extract_name, extract_properties, split};
//!
//! let source = r#"
//! export interface Beans {
//!     propOne: string;
//!     propTwo?: number[];
//! }
//! "#;
//!
//! let declarations = split(source, true).unwrap();
//! assert_eq!(declarations.len(), 1);
//!
//! let text = declarations[0].text;
//! assert_eq!(extract_name(text).unwrap(), "Beans");
//! assert_eq!(extract_properties(text).unwrap()[1].type_text, "number[]");
//! ```

mod ast;
mod error;
mod extractor;
mod lexer;
mod line_index;
mod span;
mod splitter;

pub use ast::{Declaration, DeclarationKind, Property, SourceDeclaration};
pub use error::{ParseError, ParseErrorKind};
pub use extractor::{extract_kind, extract_name, extract_properties, parse_declaration};
pub use lexer::{tokenize, Lexer, Token, TokenKind};
pub use line_index::{LineCol, LineIndex};
pub use span::{ByteOffset, Span};
pub use splitter::split;

/// Splits `source` and extracts every declaration found.
///
/// Spans in the result and in any error refer to `source`.
pub fn parse_all(source: &str, exported_only: bool) -> Result<Vec<Declaration>, ParseError> {
    split(source, exported_only)?
        .into_iter()
        .map(|block| {
            let mut declaration =
                parse_declaration(block.text).map_err(|e| e.offset(block.span.start))?;
            declaration.exported = block.exported;
            declaration.span = block.span;
            Ok(declaration)
        })
        .collect()
}

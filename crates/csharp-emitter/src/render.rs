//! Class block rendering and the full conversion pipeline.

use decl_parser::{parse_declaration, split, Declaration, DeclarationKind, ParseError, Property};
use tracing::{debug, instrument};

use crate::member::render_member;
use crate::types::{TypeTable, PRIMITIVE_TYPES};

const INDENT: &str = "    ";

/// Options for converting declarations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Only convert declarations marked `export`.
    pub exported_only: bool,
    /// Prepended to every emitted class name.
    pub name_prefix: String,
    /// Appended to every emitted class name.
    pub name_suffix: String,
}

impl ConvertOptions {
    /// Returns the emitted class name for a declaration name.
    pub fn class_name(&self, name: &str) -> String {
        format!("{}{}{}", self.name_prefix, name, self.name_suffix)
    }
}

/// Renders one C# class.
///
/// Members appear in property order, separated by blank lines. An empty
/// property list gives an empty class body.
pub fn render_class(
    name: &str,
    kind: DeclarationKind,
    properties: &[Property],
    options: &ConvertOptions,
) -> String {
    render_class_with(name, kind, properties, options, &PRIMITIVE_TYPES)
}

/// Renders one C# class using a specific type table.
pub fn render_class_with(
    name: &str,
    kind: DeclarationKind,
    properties: &[Property],
    options: &ConvertOptions,
    types: &TypeTable,
) -> String {
    let mut out = format!("public class {} {{\n", options.class_name(name));
    for (i, property) in properties.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(INDENT);
        out.push_str(&render_member(property, kind, types));
        out.push('\n');
    }
    out.push('}');
    out
}

/// Renders an extracted declaration.
pub fn render_declaration(declaration: &Declaration, options: &ConvertOptions) -> String {
    render_class(
        &declaration.name,
        declaration.kind,
        &declaration.properties,
        options,
    )
}

/// Converts TypeScript source to C# classes.
///
/// Each declaration becomes one class, in source order, separated by a
/// blank line. Source without declarations converts to an empty string.
/// A malformed declaration fails the whole call; error spans refer to
/// `source`.
#[instrument(skip_all, fields(len = source.len(), exported_only = options.exported_only))]
pub fn convert(source: &str, options: &ConvertOptions) -> Result<String, ParseError> {
    let blocks = split(source, options.exported_only)?;
    debug!(count = blocks.len(), "split declarations");

    let mut classes = Vec::with_capacity(blocks.len());
    for block in blocks {
        let declaration =
            parse_declaration(block.text).map_err(|e| e.offset(block.span.start))?;
        debug!(
            name = %declaration.name,
            kind = %declaration.kind,
            properties = declaration.properties.len(),
            "rendering class"
        );
        classes.push(render_declaration(&declaration, options));
    }

    Ok(classes.join("\n\n"))
}

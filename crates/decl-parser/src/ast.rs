//! Declaration and property types.

use std::fmt;

use smol_str::SmolStr;

use crate::Span;

/// Which keyword introduced a declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum DeclarationKind {
    /// `interface Name { ... }`
    Interface,
    /// `class Name { ... }`
    Class,
}

impl DeclarationKind {
    /// Returns the source keyword for this kind.
    pub fn keyword(self) -> &'static str {
        match self {
            DeclarationKind::Interface => "interface",
            DeclarationKind::Class => "class",
        }
    }
}

impl fmt::Display for DeclarationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// One top-level declaration block located by the splitter.
///
/// `text` starts at the declaration keyword and ends at the closing brace;
/// an `export` marker in front of it is never part of the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceDeclaration<'src> {
    /// The declaration keyword.
    pub kind: DeclarationKind,
    /// Whether the declaration was preceded by `export`.
    pub exported: bool,
    /// The span of `text` in the source passed to `split`.
    pub span: Span,
    /// The declaration text, keyword through closing brace.
    pub text: &'src str,
}

/// A single field of a declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Property {
    /// The field name, in source casing.
    #[cfg_attr(feature = "serde", serde(rename = "property"))]
    pub name: SmolStr,
    /// The raw type text after the colon, trimmed. May end in `[]`.
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub type_text: String,
    /// Whether the name carried a `?` marker.
    pub optional: bool,
}

impl Property {
    /// Creates a new property.
    pub fn new(name: impl Into<SmolStr>, type_text: impl Into<String>, optional: bool) -> Self {
        Self {
            name: name.into(),
            type_text: type_text.into(),
            optional,
        }
    }
}

/// A fully extracted declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Declaration {
    /// The declaration keyword.
    pub kind: DeclarationKind,
    /// Whether the declaration was preceded by `export`.
    pub exported: bool,
    /// The declaration name.
    pub name: SmolStr,
    /// Fields in source order.
    pub properties: Vec<Property>,
    /// The span of the declaration in its source.
    pub span: Span,
}

//! TypeScript to C# type mapping.

use std::fmt;

/// A read-only lookup table from TypeScript type names to C# type names.
///
/// Names missing from the table are user-defined types and pass through
/// unchanged.
#[derive(Debug, Clone, Copy)]
pub struct TypeTable {
    entries: &'static [(&'static str, &'static str)],
}

/// The built-in primitive mappings.
pub static PRIMITIVE_TYPES: TypeTable = TypeTable {
    entries: &[
        ("string", "string"),
        ("number", "int"),
        ("boolean", "bool"),
        ("any", "object"),
    ],
};

impl TypeTable {
    /// Looks up the C# name for a TypeScript base type.
    pub fn lookup(&self, ts_name: &str) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(from, _)| *from == ts_name)
            .map(|(_, to)| *to)
    }

    /// Maps a base type, passing unknown names through.
    pub fn map<'a>(&self, ts_name: &'a str) -> &'a str {
        self.lookup(ts_name).unwrap_or(ts_name)
    }

    /// Resolves raw property type text to its C# form.
    pub fn resolve<'a>(&self, type_text: &'a str) -> ResolvedType<'a> {
        let type_ref = TypeRef::parse(type_text);
        ResolvedType {
            name: self.map(type_ref.base),
            is_collection: type_ref.is_collection,
        }
    }
}

/// Raw type text split into base type and multiplicity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeRef<'a> {
    /// The element type, or the whole type for scalars.
    pub base: &'a str,
    /// Whether the type carried a single `[]` suffix.
    pub is_collection: bool,
}

impl<'a> TypeRef<'a> {
    /// Parses raw type text. Exactly one `[]` suffix makes a collection;
    /// `T[][]` and deeper stay opaque scalars.
    pub fn parse(type_text: &'a str) -> Self {
        let type_text = type_text.trim();
        match type_text.strip_suffix("[]").map(str::trim_end) {
            Some(base) if !base.is_empty() && !base.ends_with("[]") => TypeRef {
                base,
                is_collection: true,
            },
            _ => TypeRef {
                base: type_text,
                is_collection: false,
            },
        }
    }
}

/// A C# member type: a mapped name, optionally wrapped in `IEnumerable<>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedType<'a> {
    /// The C# type name of the element or scalar.
    pub name: &'a str,
    /// Whether the member is a collection of `name`.
    pub is_collection: bool,
}

impl fmt::Display for ResolvedType<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_collection {
            write!(f, "IEnumerable<{}>", self.name)
        } else {
            f.write_str(self.name)
        }
    }
}

/// Resolves raw type text through [`PRIMITIVE_TYPES`].
pub fn resolve_type(type_text: &str) -> ResolvedType<'_> {
    PRIMITIVE_TYPES.resolve(type_text)
}

//! Per-property member rendering.

use decl_parser::{DeclarationKind, Property};

use crate::types::TypeTable;

/// How a property is written in the C# class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberShape {
    /// `public T Name {get;set;}`
    AutoProperty,
    /// `public T Name;`
    Field,
}

/// Chooses the member shape for a property.
///
/// Interface members are always auto-properties. Class members are
/// auto-properties only when they are collections; scalar class members
/// are bare fields.
pub fn member_shape(kind: DeclarationKind, is_collection: bool) -> MemberShape {
    match (kind, is_collection) {
        (DeclarationKind::Interface, _) => MemberShape::AutoProperty,
        (DeclarationKind::Class, true) => MemberShape::AutoProperty,
        (DeclarationKind::Class, false) => MemberShape::Field,
    }
}

/// Upper-cases the first character of a field name. The rest is untouched.
pub fn member_name(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Renders one property as a C# member line, without indentation.
///
/// The optional marker of the property does not change the output.
pub fn render_member(property: &Property, kind: DeclarationKind, types: &TypeTable) -> String {
    let resolved = types.resolve(&property.type_text);
    let name = member_name(&property.name);
    match member_shape(kind, resolved.is_collection) {
        MemberShape::AutoProperty => format!("public {} {} {{get;set;}}", resolved, name),
        MemberShape::Field => format!("public {} {};", resolved, name),
    }
}

//! TypeScript declaration to C# class conversion.
//!
//! This crate renders the declarations found by `decl-parser` as C# classes:
//! - Mapping TypeScript primitives to C# types (`number` becomes `int`)
//! - Wrapping `T[]` collections in `IEnumerable<T>`
//! - Choosing auto-property or field syntax per member
//! - Prefixing and suffixing class names
//!
//! # Example
//!
//! ```
//! use csharp_emitter::{convert, ConvertOptions};
//!
//! let source = "interface Beans { propOne: string; propTwo?: number[]; }";
//! let output = convert(source, &ConvertOptions::default()).unwrap();
//! assert!(output.contains("public IEnumerable<int> PropTwo {get;set;}"));
//! ```

mod member;
mod render;
mod types;

pub use decl_parser::{extract_name, extract_properties, ParseError};
pub use member::{member_name, member_shape, render_member, MemberShape};
pub use render::{
    convert, render_class, render_class_with, render_declaration, ConvertOptions,
};
pub use types::{resolve_type, ResolvedType, TypeRef, TypeTable, PRIMITIVE_TYPES};

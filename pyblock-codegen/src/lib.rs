//! Python source rendering for GraphQL code generation.
//!
//! This crate turns declaration records into Python text:
//!
//! - [`comment`] - `#` comments and `"""` blocks from description text
//! - [`declaration`] - classes, enums, unions and scalars, plus the
//!   self-reference alias emitted after each one
//! - [`members`] - enum member lines
//! - [`indent`] - indentation units

pub mod comment;
pub mod declaration;
pub mod indent;
pub mod members;

pub use comment::{CommentValue, StringValueNode, transform_comment, transform_comment_with};
pub use declaration::{
    BlockTransformer, DeclarationBlock, DeclarationBlockConfig, DeclarationKind,
    SELF_REFERENCE_PREFIX, UnknownKind, render_declaration, self_reference,
};
pub use indent::{Indent, indent};
pub use members::{EnumMember, render_enum_members};

//! Enum member lines.

use serde::Deserialize;

use crate::{comment::transform_comment_with, declaration::DeclarationBlockConfig, indent::indent};

/// A member of a generated `Enum` class.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EnumMember {
    pub name: String,
    /// Python expression for the member's value, e.g. `"red"` with quotes.
    pub value: String,
    #[serde(default)]
    pub comment: Option<String>,
}

impl EnumMember {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            comment: None,
        }
    }

    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }
}

/// Render members as an enum block body, one level deep.
///
/// Each member is preceded by its comment, if any.
pub fn render_enum_members(members: &[EnumMember], config: &DeclarationBlockConfig) -> String {
    members
        .iter()
        .map(|member| {
            let comment = transform_comment_with(&member.comment, 1, config.indent);
            let line = format!(
                "{} {} {}",
                member.name, config.enum_name_value_separator, member.value
            );
            comment + &indent(&line, 1, config.indent)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

//! Python comment and docstring rendering.

use crate::indent::{Indent, indent};

/// A string literal node from a GraphQL document (e.g. a description).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StringValueNode {
    /// The literal's value with quotes removed.
    pub value: String,
    /// Whether the literal was written as a `"""` block string.
    pub block: bool,
}

impl StringValueNode {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            block: false,
        }
    }
}

/// Anything a comment can be taken from: raw text or a string value node.
///
/// `None` from [`comment_text`](CommentValue::comment_text) means the
/// comment is absent or empty.
pub trait CommentValue {
    fn comment_text(&self) -> Option<&str>;
}

impl CommentValue for str {
    fn comment_text(&self) -> Option<&str> {
        (!self.is_empty()).then_some(self)
    }
}

impl CommentValue for String {
    fn comment_text(&self) -> Option<&str> {
        self.as_str().comment_text()
    }
}

impl CommentValue for StringValueNode {
    fn comment_text(&self) -> Option<&str> {
        self.value.comment_text()
    }
}

impl<T: CommentValue + ?Sized> CommentValue for &T {
    fn comment_text(&self) -> Option<&str> {
        (**self).comment_text()
    }
}

impl<T: CommentValue> CommentValue for Option<T> {
    fn comment_text(&self) -> Option<&str> {
        self.as_ref().and_then(|c| c.comment_text())
    }
}

/// Render a comment as Python source, indented by `level` PEP 8 units.
///
/// The unit is 4 spaces, not the 2-space unit of the GraphQL codegen
/// visitors; pass [`Indent::GRAPHQL_CODEGEN`] to [`transform_comment_with`]
/// for that output.
pub fn transform_comment<C: CommentValue + ?Sized>(comment: &C, level: usize) -> String {
    transform_comment_with(comment, level, Indent::PYTHON)
}

/// Render a comment as Python source.
///
/// A single line becomes `# text\n`. Several lines become a `"""` block
/// followed by a blank line, each line indented on its own. Any `*/` in the
/// text is written as `*\/`. An empty or absent comment renders as `""`.
///
/// The escaping is not idempotent: call this once per raw comment.
pub fn transform_comment_with<C: CommentValue + ?Sized>(
    comment: &C,
    level: usize,
    unit: Indent,
) -> String {
    let Some(text) = comment.comment_text() else {
        return String::new();
    };

    let escaped = text.replace("*/", "*\\/");
    let lines: Vec<&str> = escaped.split('\n').collect();

    if let [line] = lines.as_slice() {
        return indent(&format!("# {line}\n"), level, unit);
    }

    std::iter::once("\"\"\"")
        .chain(lines.iter().copied())
        .chain(std::iter::once("\"\"\"\n"))
        .map(|line| indent(line, level, unit))
        .collect::<Vec<_>>()
        .join("\n")
}

//! Python declaration rendering.
//!
//! A [`DeclarationBlock`] is a plain record of the pieces of one generated
//! declaration: a class, an `Enum` subclass, a `Union[...]` alias or a scalar.
//! [`render_declaration`] turns it into source text.

use std::{fmt, str::FromStr, sync::Arc};

use serde::Deserialize;

use crate::{
    comment::{CommentValue, transform_comment_with},
    indent::Indent,
};

/// Prefix of the alias bound after every generated declaration.
pub const SELF_REFERENCE_PREFIX: &str = "__GQL_CODEGEN_";

/// The shape of a declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeclarationKind {
    /// A regular `class`.
    Plain,
    /// A `class X(Enum)`.
    Enum,
    /// A `X = Union[...]` type alias.
    Union,
    /// A custom scalar.
    Scalar,
}

impl DeclarationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Plain => "plain",
            Self::Enum => "enum",
            Self::Union => "union",
            Self::Scalar => "scalar",
        }
    }
}

impl fmt::Display for DeclarationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a kind name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownKind(pub String);

impl fmt::Display for UnknownKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown declaration kind '{}'", self.0)
    }
}

impl std::error::Error for UnknownKind {}

impl FromStr for DeclarationKind {
    type Err = UnknownKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "plain" | "class" => Ok(Self::Plain),
            "enum" => Ok(Self::Enum),
            "union" => Ok(Self::Union),
            "scalar" => Ok(Self::Scalar),
            other => Err(UnknownKind(other.to_string())),
        }
    }
}

/// Hook applied to a declaration's joined block text before it is emitted.
#[derive(Clone)]
pub struct BlockTransformer(Arc<dyn Fn(&str) -> String + Send + Sync>);

impl BlockTransformer {
    pub fn new(f: impl Fn(&str) -> String + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }

    /// A transformer that returns the block unchanged.
    pub fn identity() -> Self {
        Self::new(str::to_string)
    }

    pub fn apply(&self, block: &str) -> String {
        (self.0)(block)
    }
}

impl Default for BlockTransformer {
    fn default() -> Self {
        Self::identity()
    }
}

impl fmt::Debug for BlockTransformer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("BlockTransformer(..)")
    }
}

/// Settings shared by every declaration in a generation pass.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DeclarationBlockConfig {
    /// Text placed after the `:` that opens a block and before the alias line.
    pub block_wrapper: String,
    /// Applied to the assembled block text.
    #[serde(skip)]
    pub block_transformer: BlockTransformer,
    /// Written between an enum member's name and its value.
    pub enum_name_value_separator: String,
    /// Unit used for comments and enum members.
    pub indent: Indent,
}

impl Default for DeclarationBlockConfig {
    fn default() -> Self {
        Self {
            block_wrapper: String::new(),
            block_transformer: BlockTransformer::identity(),
            enum_name_value_separator: "=".to_string(),
            indent: Indent::PYTHON,
        }
    }
}

impl DeclarationBlockConfig {
    pub fn block_wrapper(mut self, wrapper: impl Into<String>) -> Self {
        self.block_wrapper = wrapper.into();
        self
    }

    pub fn block_transformer(mut self, transformer: BlockTransformer) -> Self {
        self.block_transformer = transformer;
        self
    }

    pub fn enum_name_value_separator(mut self, separator: impl Into<String>) -> Self {
        self.enum_name_value_separator = separator.into();
        self
    }

    pub fn indent(mut self, indent: Indent) -> Self {
        self.indent = indent;
        self
    }
}

/// One declaration to be rendered.
///
/// Empty strings count as absent everywhere, so `with_content("")` and
/// never calling `with_content` render the same way.
#[derive(Debug, Clone, Default)]
pub struct DeclarationBlock {
    pub config: DeclarationBlockConfig,
    pub kind: Option<DeclarationKind>,
    pub name: String,
    /// Appended verbatim to the name, e.g. `[T]`.
    pub generics: Option<String>,
    pub decorator: Option<String>,
    /// Inline payload such as a union's member list.
    pub content: Option<String>,
    /// Nested body, already indented by the caller.
    pub block: Option<String>,
    /// Wraps the rendered block in a call to this name.
    pub method_name: Option<String>,
    pub ignore_block_wrapper: bool,
    /// A comment already rendered by [`transform_comment_with`].
    pub comment: Option<String>,
}

impl DeclarationBlock {
    pub fn new(config: DeclarationBlockConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn as_kind(mut self, kind: DeclarationKind) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_generics(mut self, generics: impl Into<String>) -> Self {
        self.generics = Some(generics.into());
        self
    }

    pub fn with_decorator(mut self, decorator: impl Into<String>) -> Self {
        self.decorator = Some(decorator.into());
        self
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn with_block(mut self, block: impl Into<String>) -> Self {
        self.block = Some(block.into());
        self
    }

    pub fn with_method_call(
        mut self,
        method_name: impl Into<String>,
        ignore_block_wrapper: bool,
    ) -> Self {
        self.method_name = Some(method_name.into());
        self.ignore_block_wrapper = ignore_block_wrapper;
        self
    }

    /// Attach a comment, replacing any earlier one.
    ///
    /// An empty or absent comment leaves the current one in place.
    pub fn with_comment<C: CommentValue>(mut self, comment: C) -> Self {
        self.set_comment(comment);
        self
    }

    /// In-place form of [`with_comment`](Self::with_comment).
    pub fn set_comment<C: CommentValue>(&mut self, comment: C) -> &mut Self {
        if comment.comment_text().is_some() {
            self.comment = Some(transform_comment_with(&comment, 0, self.config.indent));
        }
        self
    }

    /// Name followed by its generic suffix.
    pub fn full_name(&self) -> String {
        let mut name = self.name.clone();
        if let Some(generics) = &self.generics {
            name.push_str(generics);
        }
        name
    }

    /// The rendered declaration.
    pub fn string(&self) -> String {
        render_declaration(self)
    }
}

impl fmt::Display for DeclarationBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_declaration(self))
    }
}

/// The `__GQL_CODEGEN_<name>__ = <name>` line that keeps a declared name
/// reachable from declarations emitted later in the same module.
pub fn self_reference(full_name: &str) -> String {
    format!("{SELF_REFERENCE_PREFIX}{full_name}__ = {full_name}")
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

/// Render a declaration to Python source, ending with a newline.
pub fn render_declaration(decl: &DeclarationBlock) -> String {
    let config = &decl.config;
    let mut result = String::new();

    if let Some(decorator) = present(&decl.decorator) {
        result.push_str(decorator);
        result.push('\n');
    }

    // Unions are aliases, not classes.
    if matches!(decl.kind, Some(kind) if kind != DeclarationKind::Union) {
        result.push_str("class ");
    }

    let name = decl.full_name();
    result.push_str(&name);

    match decl.kind {
        Some(DeclarationKind::Enum) => result.push_str("(Enum)"),
        Some(DeclarationKind::Union) => result.push_str(" = Union["),
        Some(DeclarationKind::Plain) | Some(DeclarationKind::Scalar) | None => {}
    }

    if let Some(block) = present(&decl.block) {
        if let Some(content) = present(&decl.content) {
            result.push_str(content);
        }

        let wrapper = if decl.ignore_block_wrapper {
            ""
        } else {
            config.block_wrapper.as_str()
        };

        let before = format!(":{wrapper}");
        let mut after = wrapper.to_string();
        // Scalars skip the alias only here; the inline branch below always emits it.
        if decl.kind != Some(DeclarationKind::Scalar) {
            after.push('\n');
            after.push_str(&self_reference(&name));
        }

        let joined = [before.as_str(), block, after.as_str()]
            .into_iter()
            .filter(|segment| !segment.is_empty())
            .collect::<Vec<_>>()
            .join("\n");
        let transformed = config.block_transformer.apply(&joined);

        match present(&decl.method_name) {
            Some(method) => {
                result.push_str(method);
                result.push('(');
                result.push_str(&transformed);
                result.push(')');
            }
            None => result.push_str(&transformed),
        }
    } else if let Some(content) = present(&decl.content) {
        result.push_str(content);
        if decl.kind == Some(DeclarationKind::Union) {
            result.push(']');
        }
        result.push('\n');
        result.push_str(&self_reference(&name));
    }

    let mut out = decl.comment.clone().unwrap_or_default();
    out.push_str(&result);
    out.push('\n');
    out
}

//! Manifest types and parsing for pyblock.toml files.

use std::str::FromStr;

use miette::SourceSpan;
use pyblock_codegen::{
    DeclarationBlock, DeclarationBlockConfig, DeclarationKind, EnumMember, UnknownKind,
    render_enum_members,
};
use serde::Deserialize;
use toml::Spanned;
use tracing::{debug, warn};

use crate::{Error, Result};

/// Root manifest for pyblock.toml
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    /// Settings shared by every declaration
    #[serde(default)]
    pub config: DeclarationBlockConfig,

    /// Declarations, rendered in order
    #[serde(default)]
    pub declarations: Vec<DeclarationEntry>,
}

/// One `[[declarations]]` table.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DeclarationEntry {
    /// `plain` (or `class`), `enum`, `union` or `scalar`
    #[serde(default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub name: Option<Spanned<String>>,
    #[serde(default)]
    pub generics: Option<String>,
    #[serde(default)]
    pub decorator: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub block: Option<String>,
    #[serde(default)]
    pub method: Option<String>,
    #[serde(default)]
    pub ignore_block_wrapper: bool,
    #[serde(default)]
    pub comment: Option<String>,
    /// Enum members, rendered into the block body
    #[serde(default)]
    pub members: Vec<EnumMember>,
}

impl DeclarationEntry {
    /// The declaration's name, empty for anonymous declarations.
    pub fn name(&self) -> &str {
        self.name.as_ref().map(|n| n.get_ref().as_str()).unwrap_or("")
    }

    fn name_span(&self) -> Option<SourceSpan> {
        self.name.as_ref().map(|n| n.span().into())
    }

    /// Parse the `kind` field. A missing kind is `Ok(None)`.
    pub fn parsed_kind(&self) -> std::result::Result<Option<DeclarationKind>, UnknownKind> {
        self.kind.as_deref().map(str::parse::<DeclarationKind>).transpose()
    }

    /// Build the declaration record. Unrecognized kinds render as if unset.
    pub fn to_declaration(&self, config: &DeclarationBlockConfig) -> DeclarationBlock {
        let mut decl = DeclarationBlock::new(config.clone()).with_name(self.name());

        match self.parsed_kind() {
            Ok(Some(kind)) => decl = decl.as_kind(kind),
            Ok(None) => {}
            Err(e) => warn!(declaration = self.name(), "{e}, rendering without a kind"),
        }

        if let Some(generics) = &self.generics {
            decl = decl.with_generics(generics);
        }
        if let Some(decorator) = &self.decorator {
            decl = decl.with_decorator(decorator);
        }
        if let Some(content) = &self.content {
            decl = decl.with_content(content);
        }
        if let Some(block) = &self.block {
            decl = decl.with_block(block);
        } else if !self.members.is_empty() {
            decl = decl.with_block(render_enum_members(&self.members, config));
        }
        if let Some(method) = &self.method {
            decl = decl.with_method_call(method, self.ignore_block_wrapper);
        } else {
            decl.ignore_block_wrapper = self.ignore_block_wrapper;
        }

        decl.with_comment(self.comment.as_deref())
    }

    fn validate(&self, src: &str, filename: &str) -> Result<()> {
        if self.members.is_empty() {
            return Ok(());
        }

        if !matches!(self.parsed_kind(), Ok(Some(DeclarationKind::Enum))) {
            return Err(Error::validation(
                format!("'{}' has members but is not an enum", self.name()),
                src,
                filename,
                self.name_span(),
            ));
        }

        if self.block.is_some() {
            return Err(Error::validation(
                format!("'{}' sets both `block` and `members`", self.name()),
                src,
                filename,
                self.name_span(),
            ));
        }

        Ok(())
    }
}

impl Manifest {
    /// Parse a manifest with a custom filename for error reporting
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        let manifest: Manifest =
            toml::from_str(content).map_err(|e| Error::parse(e, content, filename))?;
        manifest.validate(content, filename)?;

        debug!(
            filename,
            declarations = manifest.declarations.len(),
            "parsed manifest"
        );
        Ok(manifest)
    }

    /// Validate the manifest after parsing
    pub fn validate(&self, src: &str, filename: &str) -> Result<()> {
        self.declarations
            .iter()
            .try_for_each(|entry| entry.validate(src, filename))
    }

    /// Declaration records in manifest order
    pub fn to_declarations(&self) -> Vec<DeclarationBlock> {
        self.declarations
            .iter()
            .map(|entry| entry.to_declaration(&self.config))
            .collect()
    }

    /// Render every declaration, separated by a blank line
    pub fn render(&self) -> String {
        self.to_declarations()
            .iter()
            .map(DeclarationBlock::string)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl FromStr for Manifest {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_str_with_filename(s, "pyblock.toml")
    }
}

//! Indentation configuration for generated Python.

use serde::{Deserialize, Deserializer, de::Error as _};

/// Indentation style for generated code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indent {
    /// Spaces with the specified width (e.g., 2 or 4).
    Spaces(u8),
    /// Tab character.
    Tab,
}

impl Indent {
    /// 4-space indentation (PEP 8).
    pub const PYTHON: Self = Self::Spaces(4);

    /// 2-space indentation, the unit used by the GraphQL codegen visitors.
    pub const GRAPHQL_CODEGEN: Self = Self::Spaces(2);

    /// Convert to the string representation for one indent level.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Spaces(2) => "  ",
            Self::Spaces(4) => "    ",
            Self::Spaces(8) => "        ",
            // Fallback to 4 whitespaces
            Self::Spaces(_) => "    ",
            Self::Tab => "\t",
        }
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::PYTHON
    }
}

/// Manifests spell the indent as a width; `0` selects tabs.
///
/// Only widths [`Indent::as_str`] renders exactly are accepted.
impl<'de> Deserialize<'de> for Indent {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match u8::deserialize(deserializer)? {
            0 => Ok(Self::Tab),
            n @ (2 | 4 | 8) => Ok(Self::Spaces(n)),
            n => Err(D::Error::custom(format!(
                "unsupported indent width {n}, expected 0 (tab), 2, 4 or 8"
            ))),
        }
    }
}

/// Prefix `text` with `level` indentation units.
///
/// Only the start of `text` is prefixed; callers indent multi-line text
/// line by line.
pub fn indent(text: &str, level: usize, unit: Indent) -> String {
    let mut out = unit.as_str().repeat(level);
    out.push_str(text);
    out
}

//! Parsing and validation of `pyblock.toml` manifests.
//!
//! A manifest lists declarations to render, plus the shared
//! [`DeclarationBlockConfig`](pyblock_codegen::DeclarationBlockConfig).

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod file;
mod manifest;

pub use error::{Error, Result};
pub use file::PyblockToml;
pub use manifest::{DeclarationEntry, Manifest};

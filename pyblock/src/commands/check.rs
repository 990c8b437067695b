use std::{collections::BTreeMap, path::PathBuf};

use clap::Args;
use eyre::Result;
use pyblock_manifest::PyblockToml;

use super::UnwrapOrExit;

#[derive(Args)]
pub struct CheckCommand {
    /// Path to pyblock.toml (defaults to ./pyblock.toml)
    #[arg(short, long, default_value = "pyblock.toml")]
    pub config: PathBuf,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let file = PyblockToml::open(&self.config).unwrap_or_exit();
        let declarations = file.manifest().to_declarations();

        println!("✓ {} is valid\n", self.config.display());

        let count = declarations.len();
        println!(
            "  {} declaration{}",
            count,
            if count == 1 { "" } else { "s" }
        );

        let mut by_kind: BTreeMap<String, usize> = BTreeMap::new();
        for decl in &declarations {
            let kind = decl
                .kind
                .map(|k| k.to_string())
                .unwrap_or_else(|| "untyped".to_string());
            *by_kind.entry(kind).or_default() += 1;
        }
        for (kind, n) in by_kind {
            println!("    {kind}: {n}");
        }

        Ok(())
    }
}

use std::path::PathBuf;

use clap::Args;
use eyre::{Context, Result};
use pyblock_manifest::PyblockToml;
use tracing::info;

use super::UnwrapOrExit;

#[derive(Args)]
pub struct RenderCommand {
    /// Path to pyblock.toml (defaults to ./pyblock.toml)
    #[arg(short, long, default_value = "pyblock.toml")]
    pub config: PathBuf,

    /// Write the rendered module here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl RenderCommand {
    pub fn run(&self) -> Result<()> {
        let file = PyblockToml::open(&self.config).unwrap_or_exit();
        let manifest = file.manifest();
        let rendered = manifest.render();

        match &self.output {
            Some(path) => {
                std::fs::write(path, &rendered)
                    .wrap_err_with(|| format!("failed to write {}", path.display()))?;
                info!(
                    path = %path.display(),
                    declarations = manifest.declarations.len(),
                    "wrote module"
                );
            }
            None => print!("{rendered}"),
        }

        Ok(())
    }
}

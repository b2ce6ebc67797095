use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

/// Server configuration, populated from the command line.
#[derive(Parser, Debug, Clone)]
#[command(name = "tinyserve", about = "Minimal static file HTTP server")]
pub struct Config {
    /// Host to bind the listening socket to
    #[arg(long, default_value = "localhost")]
    pub host: String,

    /// Port to listen on
    #[arg(long, default_value_t = 8080)]
    pub port: u16,

    /// Directory below which all servable files must resolve
    #[arg(long, default_value = "./www")]
    pub docroot: PathBuf,
}

impl Config {
    /// Resolves the document root to its canonical absolute form.
    ///
    /// Containment checks compare resolved paths against this canonical
    /// prefix, so it must be computed once before serving. A missing
    /// document root is a startup error.
    pub fn canonicalize_docroot(&mut self) -> anyhow::Result<()> {
        self.docroot = self
            .docroot
            .canonicalize()
            .with_context(|| format!("invalid document root: {}", self.docroot.display()))?;
        Ok(())
    }
}

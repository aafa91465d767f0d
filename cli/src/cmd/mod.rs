pub mod abi;
pub mod check;
pub mod config;

use std::path::PathBuf;

use clap::Args;

pub use abi::Abi;
pub use check::Check;
pub use config::Config;

use crate::{
    resources::artifacts::LocalArtifactStore,
    settings::{Settings, SettingsError},
};

// Options shared by every command
#[derive(Args, Debug)]
pub struct GlobalArgs {
    /// Path to a TOML settings file
    #[arg(long, global = true, env = "DAO_CONFIG")]
    pub config: Option<PathBuf>,

    /// The hardhat artifacts directory.
    ///
    /// Defaults to the `artifacts` directory four levels above the
    /// artifact store's source directory.
    #[arg(long, global = true, env = "DAO_ARTIFACTS_DIR")]
    pub artifacts_dir: Option<PathBuf>,

    /// Timeout for reading a single artifact, in milliseconds
    #[arg(long, global = true, env = "DAO_READ_TIMEOUT_MS")]
    pub timeout_ms: Option<u64>,
}

impl GlobalArgs {
    /// Loads the settings file and applies the command line overrides.
    pub fn settings(&self) -> Result<Settings, SettingsError> {
        let mut settings = Settings::load_or_default(self.config.as_deref())?;
        if let Some(dir) = &self.artifacts_dir {
            settings.artifacts.dir = Some(dir.clone());
        }
        if let Some(timeout_ms) = self.timeout_ms {
            settings.artifacts.read_timeout_ms = Some(timeout_ms);
        }
        Ok(settings)
    }
}

/// Builds the local artifact store from the resolved settings.
pub fn artifact_store(settings: &Settings) -> LocalArtifactStore {
    let store = settings.artifact_store();
    log::debug!(
        "Reading artifacts from {} (timeout {:?})",
        store.root().display(),
        settings.read_timeout()
    );
    store
}

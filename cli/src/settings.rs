use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

use serde::Deserialize;
use thiserror::Error;

use crate::{
    core::wallet::{Chain, DataProvider, WalletConfig},
    resources::artifacts::{default_anchor, LocalArtifactStore, DEFAULT_READ_TIMEOUT},
};

/// The optional TOML settings file.
///
/// Relative `artifacts` paths are resolved against the directory holding
/// the settings file.
///
/// ```toml
/// strict = false
///
/// [artifacts]
/// dir = "../artifacts"
/// read_timeout_ms = 5000
///
/// [wallet]
/// app_name = "CryptoDevs DAO"
/// rpc_url = "https://rpc.sepolia.org"
/// ```
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub strict: bool,
    pub artifacts: ArtifactsSettings,
    pub wallet: WalletSettings,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ArtifactsSettings {
    /// The artifacts root itself. Takes precedence over `anchor`.
    pub dir: Option<PathBuf>,
    /// The directory the artifacts root is resolved from.
    pub anchor: Option<PathBuf>,
    pub read_timeout_ms: Option<u64>,
}

impl ArtifactsSettings {
    fn relative_to(&mut self, base: &Path) {
        for path in [&mut self.dir, &mut self.anchor].into_iter().flatten() {
            if path.is_relative() {
                *path = base.join(&*path);
            }
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WalletSettings {
    pub app_name: Option<String>,
    pub project_id: Option<String>,
    pub chain: Option<Chain>,
    pub rpc_url: Option<String>,
    pub auto_connect: Option<bool>,
}

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("ReadError: {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("ParseError: {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl Settings {
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let contents = fs::read_to_string(path).map_err(|source| SettingsError::Read {
            path: path.to_owned(),
            source,
        })?;
        let mut settings: Settings =
            toml::from_str(&contents).map_err(|source| SettingsError::Parse {
                path: path.to_owned(),
                source,
            })?;
        if let Some(base) = path.parent() {
            settings.artifacts.relative_to(base);
        }
        Ok(settings)
    }

    /// Loads the settings file if one is given, otherwise uses the defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, SettingsError> {
        match path {
            Some(path) => Settings::load(path),
            None => Ok(Settings::default()),
        }
    }

    pub fn read_timeout(&self) -> Duration {
        self.artifacts
            .read_timeout_ms
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_READ_TIMEOUT)
    }

    pub fn artifact_store(&self) -> LocalArtifactStore {
        match (&self.artifacts.dir, &self.artifacts.anchor) {
            (Some(dir), _) => LocalArtifactStore::new(dir.clone(), self.read_timeout()),
            (None, Some(anchor)) => LocalArtifactStore::from_anchor(anchor, self.read_timeout()),
            (None, None) => LocalArtifactStore::from_anchor(&default_anchor(), self.read_timeout()),
        }
    }

    pub fn wallet_config(&self) -> WalletConfig {
        let defaults = WalletConfig::default();
        let wallet = &self.wallet;
        WalletConfig {
            app_name: wallet.app_name.clone().unwrap_or(defaults.app_name),
            project_id: wallet.project_id.clone().unwrap_or(defaults.project_id),
            chain: wallet.chain.unwrap_or(defaults.chain),
            provider: match &wallet.rpc_url {
                Some(url) => DataProvider::JsonRpc { url: url.clone() },
                None => defaults.provider,
            },
            auto_connect: wallet.auto_connect.unwrap_or(defaults.auto_connect),
        }
    }
}

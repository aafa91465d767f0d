use std::{
    path::{Path, PathBuf},
    time::Duration,
};

use async_trait::async_trait;

use crate::core::{
    contracts::ContractName,
    resources::artifacts::{Artifact, ArtifactError, ArtifactsResource},
};

/// Number of directory levels between the anchor and the directory
/// holding `artifacts/`.
pub const ANCHOR_DEPTH: usize = 4;
pub const ARTIFACTS_DIR: &str = "artifacts";
pub const DEFAULT_READ_TIMEOUT: Duration = Duration::from_secs(5);

/// The directory the artifacts root is resolved from by default, which is
/// the directory holding this module.
pub fn default_anchor() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("src")
        .join("resources")
}

/// Ascends [`ANCHOR_DEPTH`] levels from `anchor` and enters `artifacts`.
pub fn root_from_anchor(anchor: &Path) -> PathBuf {
    let mut root = anchor.to_path_buf();
    for _ in 0..ANCHOR_DEPTH {
        root.push("..");
    }
    root.push(ARTIFACTS_DIR);
    root
}

/// The Artifacts resource implementation backed by a hardhat
/// `artifacts/` directory on the local file system.
#[derive(Clone, Debug)]
pub struct LocalArtifactStore {
    root: PathBuf,
    timeout: Duration,
}

impl LocalArtifactStore {
    pub fn new(root: PathBuf, timeout: Duration) -> Self {
        LocalArtifactStore { root, timeout }
    }

    pub fn from_anchor(anchor: &Path, timeout: Duration) -> Self {
        LocalArtifactStore::new(root_from_anchor(anchor), timeout)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn artifact_path(&self, contract: ContractName) -> PathBuf {
        self.root.join(contract.artifact_path())
    }
}

#[async_trait]
impl ArtifactsResource for LocalArtifactStore {
    async fn get_artifact(&self, contract: ContractName) -> Result<Artifact, ArtifactError> {
        let path = self.artifact_path(contract);
        let contents = match tokio::time::timeout(self.timeout, tokio::fs::read(&path)).await {
            Ok(read) => read.map_err(|source| ArtifactError::Read {
                path: path.clone(),
                source,
            })?,
            Err(_) => {
                return Err(ArtifactError::Timeout {
                    path,
                    timeout: self.timeout,
                })
            }
        };
        serde_json::from_slice(&contents).map_err(|source| ArtifactError::Parse { path, source })
    }
}

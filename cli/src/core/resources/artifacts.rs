use std::{path::PathBuf, time::Duration};

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;

use crate::core::{abi::Abi, contracts::ContractName};

/// A compiled contract artifact. Only the `abi` field is read, every other
/// field of the build output is ignored.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Artifact {
    pub abi: Abi,
}

/// Raised whenever an artifact cannot be located, read or parsed.
#[derive(Error, Debug)]
pub enum ArtifactError {
    /// The artifact file is missing or unreadable
    #[error("ReadError: {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The artifact file is not valid JSON, or has no `abi` field
    #[error("ParseError: {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// The read did not complete in time
    #[error("TimeoutError: {}: no response within {timeout:?}", .path.display())]
    Timeout { path: PathBuf, timeout: Duration },
}

/// The interface for interacting with a store of artifacts.
/// The Artifacts resource is responsible for fetching data from an artifacts store.
#[async_trait]
pub trait ArtifactsResource {
    /// Get the artifact for a given contract
    async fn get_artifact(&self, contract: ContractName) -> Result<Artifact, ArtifactError>;
}

/// Resolves the ABI of a contract, degrading to `None` when the artifact is
/// unavailable. Every failure is logged once.
pub async fn resolve_abi<A: ArtifactsResource + ?Sized>(
    artifacts_resource: &A,
    contract: ContractName,
) -> Option<Abi> {
    match artifacts_resource.get_artifact(contract).await {
        Ok(artifact) => {
            log::debug!("Resolved ABI for {}", contract);
            Some(artifact.abi)
        }
        Err(e) => {
            log::error!("Error reading ABI for {}: {}", contract, e);
            None
        }
    }
}

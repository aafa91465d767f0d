use std::sync::Arc;

use clap::Args;
use tokio::task::JoinSet;

pub use crate::core::actions::init::InitError;
use crate::core::{
    contracts::ContractName,
    resources::artifacts::{ArtifactError, ArtifactsResource},
};

use super::{artifact_store, GlobalArgs};

/// Check that every contract artifact can be read
///
/// Reports, per contract, where its artifact is expected and whether it
/// can be read. Fails if any artifact is unavailable.
#[derive(Args)]
pub struct Check {}

impl Check {
    pub async fn run(&self, global: &GlobalArgs) -> Result<(), InitError> {
        let settings = global.settings()?;
        let artifacts_resource = Arc::new(artifact_store(&settings));

        let mut lookups = JoinSet::new();
        for contract in ContractName::ALL {
            let artifacts_resource = artifacts_resource.clone();
            lookups.spawn(async move {
                let result = artifacts_resource.get_artifact(contract).await;
                (contract, result)
            });
        }

        let mut results: Vec<(ContractName, Result<_, ArtifactError>)> = Vec::new();
        while let Some(joined) = lookups.join_next().await {
            let result = joined.map_err(|e| {
                InitError::CustomError(format!("Artifact lookup did not complete: {}", e))
            })?;
            results.push(result);
        }
        results.sort_by_key(|(contract, _)| *contract);

        let mut missing = Vec::new();
        for (contract, result) in results {
            let path = artifacts_resource.artifact_path(contract);
            match result {
                Ok(_) => println!("ok       {} ({})", contract, path.display()),
                Err(e) => {
                    println!("missing  {}: {}", contract, e);
                    missing.push(contract);
                }
            }
        }

        if missing.is_empty() {
            Ok(())
        } else {
            Err(InitError::MissingArtifactsError(missing))
        }
    }
}

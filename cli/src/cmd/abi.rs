use clap::Args;

pub use crate::core::actions::init::InitError;
use crate::core::{
    abi,
    contracts::ContractName,
    resources::artifacts::{resolve_abi, ArtifactsResource},
};

use super::{artifact_store, config::to_pretty_json, GlobalArgs};

/// Print the ABI of a deployed contract
///
/// Only the requested contract's artifact is read.
#[derive(Args)]
pub struct Abi {
    /// The contract to print the ABI of.
    ///
    /// One of CryptoDevsNFT, FakeNFTMarketPlace or CryptoDevsDAO.
    pub contract: ContractName,

    /// Print function and event signatures instead of the raw JSON ABI
    #[arg(long)]
    pub signatures: bool,
}

impl Abi {
    pub async fn run(&self, global: &GlobalArgs) -> Result<(), InitError> {
        let settings = global.settings()?;
        let artifacts_resource = artifact_store(&settings);

        let abi = self.resolve(&artifacts_resource).await?;
        log::info!(
            "{} is deployed at {}",
            self.contract,
            self.contract.address()
        );

        if self.signatures {
            let signatures = abi.signatures().map_err(|e| {
                InitError::CustomError(format!("Error decoding ABI of {}: {}", self.contract, e))
            })?;
            for signature in signatures {
                println!("{}", signature);
            }
        } else {
            println!("{}", to_pretty_json(abi.as_value())?);
        }
        Ok(())
    }

    async fn resolve<A: ArtifactsResource + Sync>(
        &self,
        artifacts_resource: &A,
    ) -> Result<abi::Abi, InitError> {
        resolve_abi(artifacts_resource, self.contract)
            .await
            .ok_or_else(|| InitError::MissingArtifactsError(vec![self.contract]))
    }
}

#[cfg(test)]
mod tests {
    use super::{Abi, InitError};
    use crate::{
        core::{abi, contracts::ContractName},
        resources::artifacts::{LocalArtifactStore, DEFAULT_READ_TIMEOUT},
    };
    use log::Level;
    use serde_json::json;
    use std::fs;
    use tempfile::tempdir;

    fn store_with_dao() -> (tempfile::TempDir, LocalArtifactStore) {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir
            .path()
            .join(ContractName::CryptoDevsDAO.artifact_path());
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, r#"{"abi": [1, 2, 3]}"#).unwrap();
        let store = LocalArtifactStore::new(temp_dir.path().to_owned(), DEFAULT_READ_TIMEOUT);
        (temp_dir, store)
    }

    #[tokio::test]
    async fn reads_only_the_requested_contract() {
        testing_logger::setup();
        let (_temp_dir, store) = store_with_dao();
        let cmd = Abi {
            contract: ContractName::CryptoDevsDAO,
            signatures: false,
        };

        let resolved = cmd.resolve(&store).await.unwrap();
        assert_eq!(resolved, abi::Abi::new(json!([1, 2, 3])));
        testing_logger::validate(|captured_logs| {
            assert!(captured_logs
                .iter()
                .all(|log| log.level != Level::Error && log.level != Level::Warn));
        });
    }

    #[tokio::test]
    async fn fails_when_requested_abi_is_missing() {
        let (_temp_dir, store) = store_with_dao();
        let cmd = Abi {
            contract: ContractName::CryptoDevsNFT,
            signatures: false,
        };

        match cmd.resolve(&store).await.unwrap_err() {
            InitError::MissingArtifactsError(missing) => {
                assert_eq!(missing, vec![ContractName::CryptoDevsNFT])
            }
            e => panic!("unexpected error: {}", e),
        }
    }
}

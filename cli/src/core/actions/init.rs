use thiserror::Error;

use crate::{
    core::{
        contracts::ContractName,
        deployment::Deployment,
        resources::artifacts::{resolve_abi, ArtifactsResource},
    },
    settings::SettingsError,
};

/// Resolves the ABI of every deployed contract and binds it to the
/// contract's address.
///
/// This action is used by the `config` command, nothing reads the
/// contract configuration before it has completed.
pub struct Initialize<A: ArtifactsResource + Sync> {
    /// The Artifacts resource
    artifacts_resource: A,

    /// Fail instead of degrading when an ABI cannot be resolved
    strict: bool,
}

#[allow(clippy::enum_variant_names)]
#[derive(Error, Debug)]
pub enum InitError {
    /// Catch-all error
    #[error("CustomError: {0}")]
    CustomError(String),
    /// Error related to the settings file
    #[error("SettingsError: {0}")]
    SettingsError(#[from] SettingsError),
    /// One or more ABIs could not be resolved
    #[error("MissingArtifactsError: no ABI for {}", format_contracts(.0))]
    MissingArtifactsError(Vec<ContractName>),
}

fn format_contracts(contracts: &[ContractName]) -> String {
    contracts
        .iter()
        .map(ContractName::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

impl<A: ArtifactsResource + Sync> Initialize<A> {
    pub fn new(artifacts_resource: A, strict: bool) -> Self {
        Initialize {
            artifacts_resource,
            strict,
        }
    }

    pub async fn run(&self) -> Result<Deployment, InitError> {
        // The three lookups are independent, all of them must finish
        // before the deployment exists
        let (crypto_devs_nft, fake_nft_marketplace, crypto_devs_dao) = tokio::join!(
            resolve_abi(&self.artifacts_resource, ContractName::CryptoDevsNFT),
            resolve_abi(&self.artifacts_resource, ContractName::FakeNFTMarketPlace),
            resolve_abi(&self.artifacts_resource, ContractName::CryptoDevsDAO),
        );
        let deployment = Deployment::new(crypto_devs_nft, fake_nft_marketplace, crypto_devs_dao);

        let missing = deployment.missing();
        if !missing.is_empty() {
            if self.strict {
                return Err(InitError::MissingArtifactsError(missing));
            }
            log::warn!(
                "Continuing without ABI for {}",
                format_contracts(&missing)
            );
        }

        Ok(deployment)
    }
}

#[cfg(test)]
mod tests {
    use super::{InitError, Initialize};
    use crate::{
        core::{abi::Abi, contracts::ContractName},
        resources::artifacts::{LocalArtifactStore, DEFAULT_READ_TIMEOUT},
    };
    use serde_json::json;
    use std::fs;
    use tempfile::tempdir;

    fn store_with(contracts: &[ContractName]) -> (tempfile::TempDir, LocalArtifactStore) {
        let temp_dir = tempdir().unwrap();
        for (i, contract) in contracts.iter().enumerate() {
            let path = temp_dir.path().join(contract.artifact_path());
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(path, json!({ "abi": [i] }).to_string()).unwrap();
        }
        let store = LocalArtifactStore::new(temp_dir.path().to_owned(), DEFAULT_READ_TIMEOUT);
        (temp_dir, store)
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn resolves_every_contract() {
        let (_temp_dir, store) = store_with(&ContractName::ALL);

        let deployment = Initialize::new(store, true).run().await.unwrap();
        assert!(deployment.missing().is_empty());
        for (i, contract) in ContractName::ALL.iter().enumerate() {
            assert_eq!(deployment.abi(*contract), Some(&Abi::new(json!([i]))));
            assert_eq!(deployment.entry(*contract).address, contract.address());
        }
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn degrades_without_strict() {
        let (_temp_dir, store) = store_with(&[ContractName::CryptoDevsNFT]);

        let deployment = Initialize::new(store, false).run().await.unwrap();
        assert!(deployment.abi(ContractName::CryptoDevsNFT).is_some());
        assert_eq!(
            deployment.missing(),
            vec![ContractName::FakeNFTMarketPlace, ContractName::CryptoDevsDAO]
        );
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn strict_fails_on_missing_artifacts() {
        let (_temp_dir, store) = store_with(&[ContractName::CryptoDevsDAO]);

        let error = Initialize::new(store, true).run().await.unwrap_err();
        match error {
            InitError::MissingArtifactsError(missing) => assert_eq!(
                missing,
                vec![ContractName::CryptoDevsNFT, ContractName::FakeNFTMarketPlace]
            ),
            e => panic!("unexpected error: {}", e),
        }
    }
}

use std::{fmt, path::PathBuf, str::FromStr};

use alloy_primitives::{address, Address};
use serde::Serialize;
use thiserror::Error;

/// The contracts deployed for the DAO.
///
/// Contract names reach the artifact store only through this enum, so a
/// name can never carry path segments of its own.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum ContractName {
    CryptoDevsNFT,
    FakeNFTMarketPlace,
    CryptoDevsDAO,
}

#[derive(Error, Debug, PartialEq, Eq)]
#[error("UnknownContract: {0} (expected one of CryptoDevsNFT, FakeNFTMarketPlace, CryptoDevsDAO)")]
pub struct UnknownContract(pub String);

impl ContractName {
    pub const ALL: [ContractName; 3] = [
        ContractName::CryptoDevsNFT,
        ContractName::FakeNFTMarketPlace,
        ContractName::CryptoDevsDAO,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ContractName::CryptoDevsNFT => "CryptoDevsNFT",
            ContractName::FakeNFTMarketPlace => "FakeNFTMarketPlace",
            ContractName::CryptoDevsDAO => "CryptoDevsDAO",
        }
    }

    /// The address the contract is deployed at on Sepolia.
    pub fn address(&self) -> Address {
        match self {
            ContractName::CryptoDevsNFT => address!("311F86E2828151f66Ec9c7F8c5507573bC0Ca35d"),
            ContractName::FakeNFTMarketPlace => {
                address!("48bA8CD5Bf69ac7b03fc3FF78bDB866413FA4E10")
            }
            ContractName::CryptoDevsDAO => address!("3c40961F45CC37a456EE239F7B03d58D5A446358"),
        }
    }

    /// Path of the hardhat artifact relative to the artifacts root,
    /// i.e. `contracts/<Name>.sol/<Name>.json`.
    pub fn artifact_path(&self) -> PathBuf {
        let name = self.as_str();
        PathBuf::from("contracts")
            .join(format!("{}.sol", name))
            .join(format!("{}.json", name))
    }
}

impl fmt::Display for ContractName {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContractName {
    type Err = UnknownContract;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ContractName::ALL
            .into_iter()
            .find(|contract| contract.as_str() == s)
            .ok_or_else(|| UnknownContract(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::ContractName;
    use std::path::PathBuf;

    #[test]
    fn can_parse_known_names() {
        for contract in ContractName::ALL {
            let parsed: ContractName = contract.as_str().parse().unwrap();
            assert_eq!(parsed, contract);
        }
    }

    #[test]
    fn rejects_names_outside_allow_list() {
        assert!("cryptodevsnft".parse::<ContractName>().is_err());
        assert!("FakeNFTMarketplace".parse::<ContractName>().is_err());
        assert!("../../etc/passwd".parse::<ContractName>().is_err());
        assert!("CryptoDevsNFT.sol/../CryptoDevsDAO"
            .parse::<ContractName>()
            .is_err());
        assert!("".parse::<ContractName>().is_err());
    }

    #[test]
    fn builds_hardhat_artifact_path() {
        assert_eq!(
            ContractName::CryptoDevsNFT.artifact_path(),
            PathBuf::from("contracts/CryptoDevsNFT.sol/CryptoDevsNFT.json")
        );
        assert_eq!(
            ContractName::FakeNFTMarketPlace.artifact_path(),
            PathBuf::from("contracts/FakeNFTMarketPlace.sol/FakeNFTMarketPlace.json")
        );
    }

    #[test]
    fn addresses_match_deployment() {
        assert_eq!(
            ContractName::CryptoDevsNFT.address().to_string().to_lowercase(),
            "0x311f86e2828151f66ec9c7f8c5507573bc0ca35d"
        );
        assert_eq!(
            ContractName::FakeNFTMarketPlace
                .address()
                .to_string()
                .to_lowercase(),
            "0x48ba8cd5bf69ac7b03fc3ff78bdb866413fa4e10"
        );
        assert_eq!(
            ContractName::CryptoDevsDAO.address().to_string().to_lowercase(),
            "0x3c40961f45cc37a456ee239f7b03d58d5a446358"
        );
    }
}

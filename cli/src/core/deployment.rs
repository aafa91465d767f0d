use alloy_primitives::Address;
use serde::{ser::SerializeMap, Serialize, Serializer};

use crate::core::{abi::Abi, contracts::ContractName};

/// A deployed contract: its address and, when the artifact could be
/// resolved, its ABI.
#[derive(Clone, Debug, PartialEq)]
pub struct ContractEntry {
    pub address: Address,
    pub abi: Option<Abi>,
}

impl Serialize for ContractEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        struct Entry<'a> {
            address: String,
            abi: Option<&'a Abi>,
        }

        Entry {
            address: self.address.to_checksum(None),
            abi: self.abi.as_ref(),
        }
        .serialize(serializer)
    }
}

/// The resolved contract configuration of the DAO.
///
/// Built once by [`crate::core::actions::Initialize`] and never mutated
/// afterwards. Every known contract always has an entry.
#[derive(Clone, Debug, PartialEq)]
pub struct Deployment {
    crypto_devs_nft: ContractEntry,
    fake_nft_marketplace: ContractEntry,
    crypto_devs_dao: ContractEntry,
}

impl Deployment {
    pub fn new(
        crypto_devs_nft_abi: Option<Abi>,
        fake_nft_marketplace_abi: Option<Abi>,
        crypto_devs_dao_abi: Option<Abi>,
    ) -> Self {
        let entry = |contract: ContractName, abi| ContractEntry {
            address: contract.address(),
            abi,
        };
        Deployment {
            crypto_devs_nft: entry(ContractName::CryptoDevsNFT, crypto_devs_nft_abi),
            fake_nft_marketplace: entry(
                ContractName::FakeNFTMarketPlace,
                fake_nft_marketplace_abi,
            ),
            crypto_devs_dao: entry(ContractName::CryptoDevsDAO, crypto_devs_dao_abi),
        }
    }

    pub fn entry(&self, contract: ContractName) -> &ContractEntry {
        match contract {
            ContractName::CryptoDevsNFT => &self.crypto_devs_nft,
            ContractName::FakeNFTMarketPlace => &self.fake_nft_marketplace,
            ContractName::CryptoDevsDAO => &self.crypto_devs_dao,
        }
    }

    pub fn abi(&self, contract: ContractName) -> Option<&Abi> {
        self.entry(contract).abi.as_ref()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ContractName, &ContractEntry)> {
        ContractName::ALL
            .into_iter()
            .map(move |contract| (contract, self.entry(contract)))
    }

    /// Contracts whose ABI could not be resolved.
    pub fn missing(&self) -> Vec<ContractName> {
        self.iter()
            .filter(|(_, entry)| entry.abi.is_none())
            .map(|(contract, _)| contract)
            .collect()
    }
}

impl Serialize for Deployment {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(ContractName::ALL.len()))?;
        for (contract, entry) in self.iter() {
            map.serialize_entry(contract.as_str(), entry)?;
        }
        map.end()
    }
}

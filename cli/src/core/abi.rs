use alloy_json_abi::JsonAbi;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The `abi` field of a compiled contract artifact.
///
/// Kept as raw JSON; nothing about its entries is checked when an artifact
/// is resolved. Use [`Abi::typed`] to get a decoded view.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Abi(serde_json::Value);

#[derive(Error, Debug)]
pub enum AbiError {
    /// The raw ABI is not a valid Solidity JSON ABI
    #[error("InvalidAbi: {0}")]
    InvalidAbi(#[from] serde_json::Error),
}

impl Abi {
    pub fn new(value: serde_json::Value) -> Self {
        Abi(value)
    }

    pub fn as_value(&self) -> &serde_json::Value {
        &self.0
    }

    /// Decodes the ABI into alloy's typed representation.
    pub fn typed(&self) -> Result<JsonAbi, AbiError> {
        JsonAbi::deserialize(&self.0).map_err(AbiError::InvalidAbi)
    }

    /// Returns the signatures of every function and event in the ABI.
    pub fn signatures(&self) -> Result<Vec<String>, AbiError> {
        let abi = self.typed()?;
        let functions = abi.functions().map(|f| format!("function {}", f.signature()));
        let events = abi.events().map(|e| format!("event {}", e.signature()));
        Ok(functions.chain(events).collect())
    }
}

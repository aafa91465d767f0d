use serde::{Deserialize, Serialize};

pub const DEFAULT_APP_NAME: &str = "CryptoDevs DAO";
pub const DEFAULT_PROJECT_ID: &str = "ebdc5e933f6d66c03c71fed25598f60d";

/// The network the DAO is deployed to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Chain {
    #[default]
    Sepolia,
}

impl Chain {
    pub fn id(&self) -> u64 {
        match self {
            Chain::Sepolia => 11155111,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Chain::Sepolia => "sepolia",
        }
    }
}

/// Where the wallet connection reads chain data from.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "kind")]
pub enum DataProvider {
    /// The public RPC endpoints of the chain
    #[default]
    Public,
    /// A custom JSON-RPC endpoint
    JsonRpc { url: String },
}

/// Settings handed to the wallet-connection provider wrapping the
/// application.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletConfig {
    pub app_name: String,
    pub project_id: String,
    #[serde(serialize_with = "serialize_chain")]
    pub chain: Chain,
    pub provider: DataProvider,
    pub auto_connect: bool,
}

impl Default for WalletConfig {
    fn default() -> Self {
        WalletConfig {
            app_name: DEFAULT_APP_NAME.to_owned(),
            project_id: DEFAULT_PROJECT_ID.to_owned(),
            chain: Chain::default(),
            provider: DataProvider::default(),
            auto_connect: true,
        }
    }
}

fn serialize_chain<S: serde::Serializer>(chain: &Chain, serializer: S) -> Result<S::Ok, S::Error> {
    #[derive(Serialize)]
    struct ChainInfo {
        id: u64,
        name: &'static str,
    }

    ChainInfo {
        id: chain.id(),
        name: chain.name(),
    }
    .serialize(serializer)
}

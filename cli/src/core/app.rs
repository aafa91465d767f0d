use serde::Serialize;

use crate::core::{deployment::Deployment, wallet::WalletConfig};

/// Everything the application root is mounted with: the wallet-connection
/// settings and the resolved contracts.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AppConfig {
    pub wallet: WalletConfig,
    pub contracts: Deployment,
}

impl AppConfig {
    pub fn new(wallet: WalletConfig, contracts: Deployment) -> Self {
        AppConfig { wallet, contracts }
    }
}

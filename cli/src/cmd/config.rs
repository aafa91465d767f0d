use clap::Args;

pub use crate::core::actions::init::InitError;
use crate::core::{actions::Initialize, app::AppConfig};

use super::{artifact_store, GlobalArgs};

/// Print the resolved application configuration as JSON
///
/// The printed object is what the application root is mounted with:
/// the wallet-connection settings and every deployed contract.
#[derive(Args)]
pub struct Config {
    /// Fail if any contract's ABI cannot be resolved
    #[arg(long)]
    pub strict: bool,
}

impl Config {
    pub async fn run(&self, global: &GlobalArgs) -> Result<(), InitError> {
        // Build the resources
        let settings = global.settings()?;
        let artifacts_resource = artifact_store(&settings);

        // Resolve the contracts
        let deployment = Initialize::new(artifacts_resource, self.strict || settings.strict)
            .run()
            .await?;
        let app = AppConfig::new(settings.wallet_config(), deployment);

        let value = serde_json::to_value(&app).map_err(|e| {
            InitError::CustomError(format!("Error serializing configuration: {}", e))
        })?;
        println!("{}", to_pretty_json(&value)?);
        Ok(())
    }
}

pub(super) fn to_pretty_json(value: &serde_json::Value) -> Result<String, InitError> {
    colored_json::to_colored_json_auto(value)
        .map_err(|e| InitError::CustomError(format!("Error serializing JSON: {}", e)))
}

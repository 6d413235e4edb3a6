use serde::{Deserialize, Serialize};
use url::Url;

use super::ChainId;

const RPC_SCHEMES: [&str; 4] = ["http", "https", "ws", "wss"];
const EXPLORER_SCHEMES: [&str; 2] = ["http", "https"];

/// Replaces the endpoints of a known network, e.g. to point at a private RPC.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct NetworkOverride {
    pub chain_id: ChainId,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub rpc_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub block_explorer: Option<String>,
}

impl NetworkOverride {
    pub fn validate(&self) -> Result<(), String> {
        if self.rpc_url.is_none() && self.block_explorer.is_none() {
            return Err(format!(
                "Network {} override must set rpc_url or block_explorer",
                self.chain_id
            ));
        }

        if let Some(rpc_url) = &self.rpc_url {
            validate_endpoint(rpc_url, &RPC_SCHEMES).map_err(|e| {
                format!("Network {} rpc_url '{}' is not valid: {}", self.chain_id, rpc_url, e)
            })?;
        }

        if let Some(block_explorer) = &self.block_explorer {
            validate_endpoint(block_explorer, &EXPLORER_SCHEMES).map_err(|e| {
                format!(
                    "Network {} block_explorer '{}' is not valid: {}",
                    self.chain_id, block_explorer, e
                )
            })?;
        }

        Ok(())
    }
}

fn validate_endpoint(value: &str, schemes: &[&str]) -> Result<(), String> {
    let url = Url::parse(value).map_err(|e| e.to_string())?;

    if !schemes.contains(&url.scheme()) {
        return Err(format!("scheme must be one of {}", schemes.join(", ")));
    }

    if url.host_str().is_none_or(str::is_empty) {
        return Err("missing host".to_string());
    }

    Ok(())
}

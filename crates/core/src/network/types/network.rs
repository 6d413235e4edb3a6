use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

use super::{ChainId, GasCostLevel};

/// Static metadata about one supported network.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct NetworkInfo {
    #[serde(rename = "chainId")]
    pub chain_id: ChainId,
    pub name: String,
    /// Ticker of the native token, e.g. `MATIC`.
    pub currency: String,
    #[serde(rename = "rpcUrl")]
    pub rpc_url: String,
    #[serde(rename = "blockExplorer")]
    pub block_explorer: String,
    #[serde(rename = "gasCostLevel")]
    pub gas_cost_level: GasCostLevel,
    #[serde(default)]
    pub recommended: bool,
}

impl NetworkInfo {
    pub fn new(
        chain_id: ChainId,
        name: &str,
        currency: &str,
        rpc_url: &str,
        block_explorer: &str,
        gas_cost_level: GasCostLevel,
        recommended: bool,
    ) -> Self {
        Self {
            chain_id,
            name: name.to_string(),
            currency: currency.to_string(),
            rpc_url: rpc_url.to_string(),
            block_explorer: block_explorer.to_string(),
            gas_cost_level,
            recommended,
        }
    }

    pub fn is_expensive(&self) -> bool {
        self.gas_cost_level.is_expensive()
    }

    pub fn explorer_address_url(&self, address: &str) -> String {
        format!("{}/address/{}", self.block_explorer.trim_end_matches('/'), address)
    }

    pub fn explorer_tx_url(&self, tx_hash: &str) -> String {
        format!("{}/tx/{}", self.block_explorer.trim_end_matches('/'), tx_hash)
    }
}

/// Which curated source table a network belongs to.
#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum NetworkCategory {
    Production,
    Testnet,
}

impl Display for NetworkCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            NetworkCategory::Production => write!(f, "production"),
            NetworkCategory::Testnet => write!(f, "testnet"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn polygon() -> NetworkInfo {
        NetworkInfo::new(
            ChainId::POLYGON,
            "Polygon",
            "MATIC",
            "https://polygon-rpc.com",
            "https://polygonscan.com/",
            GasCostLevel::Low,
            true,
        )
    }

    #[test]
    fn test_serializes_with_camel_case_fields() {
        let value = serde_json::to_value(polygon()).unwrap();

        assert_eq!(value["chainId"], 137);
        assert_eq!(value["rpcUrl"], "https://polygon-rpc.com");
        assert_eq!(value["blockExplorer"], "https://polygonscan.com/");
        assert_eq!(value["gasCostLevel"], "low");
        assert_eq!(value["recommended"], true);
    }

    #[test]
    fn test_recommended_defaults_to_false() {
        let json = r#"{
            "chainId": 8453,
            "name": "Base",
            "currency": "ETH",
            "rpcUrl": "https://mainnet.base.org",
            "blockExplorer": "https://basescan.org",
            "gasCostLevel": "low"
        }"#;

        let network: NetworkInfo = serde_json::from_str(json).unwrap();
        assert_eq!(network.chain_id, ChainId::BASE);
        assert!(!network.recommended);
    }

    #[test]
    fn test_explorer_urls_do_not_double_slash() {
        let network = polygon();

        assert_eq!(network.explorer_tx_url("0xabc"), "https://polygonscan.com/tx/0xabc");
        assert_eq!(
            network.explorer_address_url("0xdef"),
            "https://polygonscan.com/address/0xdef"
        );
    }
}

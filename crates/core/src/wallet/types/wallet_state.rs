use alloy::primitives::U256;
use serde::{Deserialize, Serialize};

use crate::{
    network::{ChainId, NetworkRegistry},
    shared::{common_types::EvmAddress, utils::format_wei_to_eth},
};

/// Currency shown for balances on chains the registry does not know.
const FALLBACK_CURRENCY: &str = "ETH";

/// Snapshot of the wallet connection as the UI renders it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WalletState {
    /// `None` while no wallet is connected.
    pub account: Option<EvmAddress>,
    /// Balance with its currency, e.g. `1.234 MATIC`.
    pub balance: String,
    pub chain_id: Option<ChainId>,
    pub chain_name: Option<String>,
    pub is_expensive_network: bool,
    pub is_connecting: bool,
    pub error: Option<String>,
}

impl Default for WalletState {
    fn default() -> Self {
        Self {
            account: None,
            balance: "0".to_string(),
            chain_id: None,
            chain_name: None,
            is_expensive_network: false,
            is_connecting: false,
            error: None,
        }
    }
}

impl WalletState {
    pub fn connecting() -> Self {
        Self { is_connecting: true, ..Self::default() }
    }

    /// Builds the state of a connected wallet, resolving chain metadata from
    /// `registry`. Unsupported chains keep their id but get no name.
    pub fn connected(
        account: EvmAddress,
        balance_wei: U256,
        chain_id: ChainId,
        registry: &NetworkRegistry,
    ) -> Self {
        let network = registry.get_network(chain_id);
        let currency = network.map(|n| n.currency.as_str()).unwrap_or(FALLBACK_CURRENCY);

        Self {
            account: Some(account),
            balance: format!("{} {}", format_wei_to_eth(&balance_wei), currency),
            chain_id: Some(chain_id),
            chain_name: network.map(|n| n.name.clone()),
            is_expensive_network: network.is_some_and(|n| n.is_expensive()),
            is_connecting: false,
            error: None,
        }
    }

    pub fn with_error(self, error: impl Into<String>) -> Self {
        Self { is_connecting: false, error: Some(error.into()), ..self }
    }

    pub fn is_connected(&self) -> bool {
        self.account.is_some()
    }

    pub fn is_supported_network(&self, registry: &NetworkRegistry) -> bool {
        self.chain_id.is_some_and(|chain_id| registry.is_supported(chain_id))
    }
}

use std::collections::HashMap;

use once_cell::sync::Lazy;
use thiserror::Error;
use tracing::debug;

use super::shipped::{mainnet_networks, testnet_networks};
use super::types::{ChainId, NetworkCategory, NetworkInfo, NetworkOverride};
use crate::web3dapp_info;

static SHIPPED_REGISTRY: Lazy<NetworkRegistry> = Lazy::new(|| {
    NetworkRegistry::new(mainnet_networks(), testnet_networks())
        .expect("shipped network tables are consistent")
});

#[derive(Error, Debug, PartialEq, Eq)]
pub enum NetworkRegistryError {
    #[error("Network {0} has an invalid chain id, chain ids must be greater than 0")]
    InvalidChainId(String),

    #[error("Chain id {0} is registered more than once")]
    DuplicateChainId(ChainId),

    #[error("No production network is flagged as recommended")]
    NoRecommendedNetwork,

    #[error("More than one {0} network is flagged as recommended")]
    MultipleRecommended(NetworkCategory),

    #[error("Chain id {0} is not a supported network")]
    UnknownNetwork(ChainId),

    #[error("Invalid network override: {0}")]
    InvalidOverride(String),
}

/// Immutable lookup table of supported networks.
///
/// Production networks are stored first, then testnets, in one contiguous
/// list. The partition accessors are slices of that list so the merged view
/// always agrees with them.
#[derive(Debug, Clone)]
pub struct NetworkRegistry {
    networks: Vec<NetworkInfo>,
    production_len: usize,
    index: HashMap<ChainId, usize>,
    recommended: usize,
    recommended_testnet: Option<usize>,
}

impl NetworkRegistry {
    /// Builds a registry from the production and testnet source tables.
    ///
    /// # Errors
    /// Fails when a chain id is 0 or appears twice, when no production
    /// network is recommended, or when a partition recommends more than one.
    pub fn new(
        production: Vec<NetworkInfo>,
        testnet: Vec<NetworkInfo>,
    ) -> Result<Self, NetworkRegistryError> {
        let production_len = production.len();
        let networks: Vec<NetworkInfo> = production.into_iter().chain(testnet).collect();

        let mut index = HashMap::with_capacity(networks.len());
        for (position, network) in networks.iter().enumerate() {
            if !network.chain_id.is_valid() {
                return Err(NetworkRegistryError::InvalidChainId(network.name.clone()));
            }

            if index.insert(network.chain_id, position).is_some() {
                return Err(NetworkRegistryError::DuplicateChainId(network.chain_id));
            }
        }

        let recommended =
            find_recommended(&networks[..production_len], 0, NetworkCategory::Production)?
                .ok_or(NetworkRegistryError::NoRecommendedNetwork)?;

        let recommended_testnet = find_recommended(
            &networks[production_len..],
            production_len,
            NetworkCategory::Testnet,
        )?;

        debug!(
            "Built network registry with {} production and {} testnet networks",
            production_len,
            networks.len() - production_len
        );

        Ok(Self { networks, production_len, index, recommended, recommended_testnet })
    }

    /// The registry built from the networks this app ships with.
    pub fn shipped() -> &'static NetworkRegistry {
        &SHIPPED_REGISTRY
    }

    /// Returns the network registered under `chain_id`, or `None` when the
    /// chain is not supported.
    pub fn get_network(&self, chain_id: ChainId) -> Option<&NetworkInfo> {
        self.index.get(&chain_id).map(|position| &self.networks[*position])
    }

    pub fn is_supported(&self, chain_id: ChainId) -> bool {
        self.index.contains_key(&chain_id)
    }

    /// The production network users are pointed at by default.
    pub fn get_recommended(&self) -> &NetworkInfo {
        &self.networks[self.recommended]
    }

    pub fn get_recommended_testnet(&self) -> Option<&NetworkInfo> {
        self.recommended_testnet.map(|position| &self.networks[position])
    }

    pub fn get_all_networks(&self) -> &[NetworkInfo] {
        &self.networks
    }

    pub fn get_production_networks(&self) -> &[NetworkInfo] {
        &self.networks[..self.production_len]
    }

    pub fn get_testnet_networks(&self) -> &[NetworkInfo] {
        &self.networks[self.production_len..]
    }

    pub fn category_of(&self, chain_id: ChainId) -> Option<NetworkCategory> {
        self.index.get(&chain_id).map(|position| {
            if *position < self.production_len {
                NetworkCategory::Production
            } else {
                NetworkCategory::Testnet
            }
        })
    }

    /// Returns a new registry with endpoint overrides applied. `self` is left
    /// untouched.
    pub fn with_overrides(
        &self,
        overrides: &[NetworkOverride],
    ) -> Result<NetworkRegistry, NetworkRegistryError> {
        let mut registry = self.clone();

        for network_override in overrides {
            network_override.validate().map_err(NetworkRegistryError::InvalidOverride)?;

            let position = *registry
                .index
                .get(&network_override.chain_id)
                .ok_or(NetworkRegistryError::UnknownNetwork(network_override.chain_id))?;
            let network = &mut registry.networks[position];

            if let Some(rpc_url) = &network_override.rpc_url {
                web3dapp_info!("Using custom rpc url for {} ({})", network.name, network.chain_id);
                network.rpc_url = rpc_url.clone();
            }

            if let Some(block_explorer) = &network_override.block_explorer {
                web3dapp_info!(
                    "Using custom block explorer for {} ({})",
                    network.name,
                    network.chain_id
                );
                network.block_explorer = block_explorer.clone();
            }
        }

        Ok(registry)
    }
}

/// Position of the single recommended network in a partition, if any.
fn find_recommended(
    partition: &[NetworkInfo],
    offset: usize,
    category: NetworkCategory,
) -> Result<Option<usize>, NetworkRegistryError> {
    let mut flagged = partition
        .iter()
        .enumerate()
        .filter(|(_, network)| network.recommended)
        .map(|(position, _)| position + offset);

    let first = flagged.next();
    if flagged.next().is_some() {
        return Err(NetworkRegistryError::MultipleRecommended(category));
    }

    Ok(first)
}

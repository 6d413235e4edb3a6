mod registry;
pub use registry::{NetworkRegistry, NetworkRegistryError};

mod shipped;

mod types;
pub use types::*;

/// Looks up a shipped network by chain id.
pub fn get_network(chain_id: ChainId) -> Option<&'static NetworkInfo> {
    NetworkRegistry::shipped().get_network(chain_id)
}

pub fn is_supported(chain_id: ChainId) -> bool {
    NetworkRegistry::shipped().is_supported(chain_id)
}

/// Polygon, for the shipped networks.
pub fn get_recommended() -> &'static NetworkInfo {
    NetworkRegistry::shipped().get_recommended()
}

pub fn get_all_networks() -> &'static [NetworkInfo] {
    NetworkRegistry::shipped().get_all_networks()
}

pub fn get_production_networks() -> &'static [NetworkInfo] {
    NetworkRegistry::shipped().get_production_networks()
}

pub fn get_testnet_networks() -> &'static [NetworkInfo] {
    NetworkRegistry::shipped().get_testnet_networks()
}

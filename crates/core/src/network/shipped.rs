use super::types::{ChainId, GasCostLevel, NetworkInfo};

/// Production networks: Polygon, Base, Ethereum.
pub fn mainnet_networks() -> Vec<NetworkInfo> {
    vec![
        NetworkInfo::new(
            ChainId::POLYGON,
            "Polygon",
            "MATIC",
            "https://polygon-rpc.com",
            "https://polygonscan.com",
            GasCostLevel::Low,
            true,
        ),
        NetworkInfo::new(
            ChainId::BASE,
            "Base",
            "ETH",
            "https://mainnet.base.org",
            "https://basescan.org",
            GasCostLevel::Low,
            false,
        ),
        NetworkInfo::new(
            ChainId::ETHEREUM,
            "Ethereum",
            "ETH",
            "https://cloudflare-eth.com",
            "https://etherscan.io",
            GasCostLevel::High,
            false,
        ),
    ]
}

/// Testnet networks: Amoy, Sepolia.
pub fn testnet_networks() -> Vec<NetworkInfo> {
    vec![
        NetworkInfo::new(
            ChainId::AMOY,
            "Amoy",
            "MATIC",
            "https://rpc-amoy.polygon.technology",
            "https://amoy.polygonscan.com",
            GasCostLevel::Free,
            true,
        ),
        NetworkInfo::new(
            ChainId::SEPOLIA,
            "Sepolia",
            "ETH",
            "https://rpc.sepolia.org",
            "https://sepolia.etherscan.io",
            GasCostLevel::Free,
            false,
        ),
    ]
}

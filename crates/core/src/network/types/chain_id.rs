use std::{error::Error, fmt::Display, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Copy, Clone, Serialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ChainId(u64);

impl ChainId {
    // Production networks
    pub const ETHEREUM: ChainId = ChainId(1);
    pub const POLYGON: ChainId = ChainId(137);
    pub const BASE: ChainId = ChainId(8453);

    // Testnet networks
    pub const AMOY: ChainId = ChainId(80002);
    pub const SEPOLIA: ChainId = ChainId(11155111);

    pub const fn new(id: u64) -> Self {
        ChainId(id)
    }

    pub fn u64(&self) -> u64 {
        self.0
    }

    /// Chain id 0 is reserved and never names a real network.
    pub fn is_valid(&self) -> bool {
        self.0 > 0
    }
}

impl<'de> Deserialize<'de> for ChainId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let id = u64::deserialize(deserializer)?;

        Ok(ChainId(id))
    }
}

impl Display for ChainId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug)]
pub struct ParseChainIdError;

impl Display for ParseChainIdError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid chain id")
    }
}

impl Error for ParseChainIdError {}

impl FromStr for ChainId {
    type Err = ParseChainIdError;

    fn from_str(param: &str) -> Result<Self, Self::Err> {
        u64::from_str(param.trim()).map(ChainId).map_err(|_| ParseChainIdError)
    }
}

impl From<ChainId> for u64 {
    fn from(chain_id: ChainId) -> Self {
        chain_id.0
    }
}

impl From<u64> for ChainId {
    fn from(chain_id: u64) -> Self {
        ChainId(chain_id)
    }
}

mod chain_id;
pub use chain_id::{ChainId, ParseChainIdError};

mod gas_cost_level;
pub use gas_cost_level::{GasCostLevel, ParseGasCostLevelError};

mod network;
pub use network::{NetworkCategory, NetworkInfo};

mod network_override;
pub use network_override::NetworkOverride;

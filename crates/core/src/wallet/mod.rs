mod types;
pub use types::*;

pub use crate::shared::common_types::{EvmAddress, ParseEvmAddressError};

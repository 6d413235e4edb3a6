use std::{error::Error, fmt::Display, str::FromStr};

use alloy::primitives::Address;
use serde::{Deserialize, Serialize};

#[derive(Debug, Copy, Clone, Serialize, PartialEq, Eq, Hash, Deserialize)]
pub struct EvmAddress(Address);

impl EvmAddress {
    /// Returns the lowercase hex representation of the address with a 0x
    /// prefix.
    pub fn hex(&self) -> String {
        format!("{:#x}", self.0)
    }

    /// Returns the EIP-55 checksummed representation of the address.
    pub fn checksum(&self) -> String {
        self.0.to_checksum(None)
    }

    pub fn new(address: Address) -> Self {
        EvmAddress(address)
    }

    pub fn into_address(self) -> Address {
        self.0
    }

    pub fn zero() -> Self {
        Self(Address::ZERO)
    }

    pub fn is_zero(&self) -> bool {
        self.0 == Address::ZERO
    }
}

impl Display for EvmAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.checksum())
    }
}

#[derive(Debug)]
pub struct ParseEvmAddressError(String);

impl Display for ParseEvmAddressError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid EVM address: {}", self.0)
    }
}

impl Error for ParseEvmAddressError {}

impl FromStr for EvmAddress {
    type Err = ParseEvmAddressError;

    fn from_str(param: &str) -> Result<Self, Self::Err> {
        Address::from_str(param.trim())
            .map(EvmAddress)
            .map_err(|e| ParseEvmAddressError(e.to_string()))
    }
}

impl From<EvmAddress> for Address {
    fn from(address: EvmAddress) -> Self {
        address.0
    }
}

impl From<Address> for EvmAddress {
    fn from(address: Address) -> Self {
        EvmAddress(address)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::address;

    #[test]
    fn test_display_is_checksummed() {
        let parsed: EvmAddress = "0x5aaeb6053f3e94c9b9a09f33669435e7ef1beaed".parse().unwrap();

        assert_eq!(parsed.to_string(), "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed");
        assert_eq!(parsed.hex(), "0x5aaeb6053f3e94c9b9a09f33669435e7ef1beaed");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("0x1234".parse::<EvmAddress>().is_err());
        assert!("not an address".parse::<EvmAddress>().is_err());
    }

    #[test]
    fn test_zero() {
        assert!(EvmAddress::zero().is_zero());
        assert!(!EvmAddress::new(address!("742d35Cc6634C0532925a3b8D4C9db96C4b4d8b6")).is_zero());
    }
}

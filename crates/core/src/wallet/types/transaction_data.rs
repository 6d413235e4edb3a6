use alloy::primitives::{utils::parse_ether, U256};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::shared::common_types::EvmAddress;

#[derive(Error, Debug)]
pub enum TransactionDataError {
    #[error("Invalid recipient address: {0}")]
    InvalidRecipient(String),

    #[error("Invalid amount '{0}': {1}")]
    InvalidAmount(String, String),

    #[error("Amount must be greater than 0")]
    ZeroAmount,
}

/// A native token transfer as entered by the user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TransactionData {
    pub to: EvmAddress,
    /// Human readable amount in whole tokens, e.g. `0.1`.
    pub amount: String,
}

impl TransactionData {
    pub fn new(to: &str, amount: &str) -> Result<Self, TransactionDataError> {
        let to = to
            .parse::<EvmAddress>()
            .map_err(|e| TransactionDataError::InvalidRecipient(e.to_string()))?;

        let transaction = Self { to, amount: amount.trim().to_string() };
        transaction.amount_wei()?;

        Ok(transaction)
    }

    /// Converts the amount to wei, assuming 18 decimals like every shipped
    /// network's native token.
    pub fn amount_wei(&self) -> Result<U256, TransactionDataError> {
        let wei = parse_ether(&self.amount)
            .map_err(|e| TransactionDataError::InvalidAmount(self.amount.clone(), e.to_string()))?;

        if wei.is_zero() {
            return Err(TransactionDataError::ZeroAmount);
        }

        Ok(wei)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RECIPIENT: &str = "0x742d35Cc6634C0532925a3b8D4C9db96C4b4d8b6";

    #[test]
    fn test_amount_wei() {
        let tx = TransactionData::new(RECIPIENT, "0.1").unwrap();

        assert_eq!(tx.amount_wei().unwrap(), U256::from(100_000_000_000_000_000u64));
        assert_eq!(tx.to.hex(), RECIPIENT.to_lowercase());
    }

    #[test]
    fn test_rejects_bad_recipient() {
        assert!(matches!(
            TransactionData::new("0xdead", "1"),
            Err(TransactionDataError::InvalidRecipient(_))
        ));
    }

    #[test]
    fn test_rejects_bad_amounts() {
        assert!(matches!(
            TransactionData::new(RECIPIENT, "one"),
            Err(TransactionDataError::InvalidAmount(_, _))
        ));
        assert!(matches!(TransactionData::new(RECIPIENT, "0"), Err(TransactionDataError::ZeroAmount)));
    }
}

mod wallet_state;
pub use wallet_state::WalletState;

mod transaction_data;
pub use transaction_data::{TransactionData, TransactionDataError};

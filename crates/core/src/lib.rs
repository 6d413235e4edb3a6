mod logger;
pub use logger::{setup_info_logger, setup_logger};
pub mod network;
mod shared;
pub use shared::common_types;
pub mod wallet;
pub use yaml::{parse, read, ReadYamlError, SetupConfig, CONFIG_FILE_NAME};
mod environment;
mod file;
mod yaml;

pub use environment::load_env_from_project_path;
pub use file::{write_file, WriteFileError};
pub use tracing::level_filters::LevelFilter;
pub use tracing::{error as web3dapp_error, info as web3dapp_info, warn as web3dapp_warn};

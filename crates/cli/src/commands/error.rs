use thiserror::Error;

/// Errors that can occur during network operations
#[derive(Error, Debug)]
pub enum NetworkError {
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors that can occur during project initialization
#[derive(Error, Debug)]
pub enum InitError {
    #[error("Invalid project name: {0}")]
    InvalidName(String),

    #[error("Project already exists: {0}")]
    AlreadyExists(String),

    #[error("Configuration write error: {0}")]
    ConfigWrite(#[from] web3dapp_core::WriteFileError),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Terminal interaction failed: {0}")]
    Terminal(#[from] dialoguer::Error),
}

/// Errors that can occur while loading the project configuration
#[derive(Error, Debug)]
pub enum ProjectLocationError {
    #[error("Project config error: {0}")]
    ProjectConfig(#[from] web3dapp_core::ReadYamlError),

    #[error("Network registry error: {0}")]
    Registry(#[from] web3dapp_core::network::NetworkRegistryError),
}

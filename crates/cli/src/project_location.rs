use std::path::PathBuf;

use web3dapp_core::network::NetworkRegistry;
use web3dapp_core::{CONFIG_FILE_NAME, SetupConfig, read};

use crate::commands::error::ProjectLocationError;

#[derive(Debug, Clone)]
pub struct ProjectLocation {
    output_dir: PathBuf,
}

impl ProjectLocation {
    pub fn new(output_dir: PathBuf) -> Self {
        Self { output_dir }
    }

    pub fn config_path(&self) -> PathBuf {
        self.output_dir.join(CONFIG_FILE_NAME)
    }

    /// The project's config, or `None` when the directory has no
    /// web3dapp.yaml and the shipped defaults apply.
    pub fn setup_config(&self) -> Result<Option<SetupConfig>, ProjectLocationError> {
        let config_path = self.config_path();
        if !config_path.exists() {
            return Ok(None);
        }

        Ok(Some(read(&config_path, false)?))
    }

    pub fn registry(
        &self,
        setup_config: Option<&SetupConfig>,
    ) -> Result<NetworkRegistry, ProjectLocationError> {
        match setup_config {
            Some(config) => Ok(config.build_registry()?),
            None => Ok(NetworkRegistry::shipped().clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_config_uses_shipped_registry() {
        let location =
            ProjectLocation::new(std::env::temp_dir().join("web3dapp-cli-no-project-here"));

        let config = location.setup_config().unwrap();
        assert!(config.is_none());

        let registry = location.registry(config.as_ref()).unwrap();
        assert_eq!(registry.get_all_networks(), NetworkRegistry::shipped().get_all_networks());
    }
}

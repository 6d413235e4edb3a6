use std::{env, fs::File, io::Read, path::Path};

use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::level_filters::LevelFilter;

use crate::{
    network::{NetworkOverride, NetworkRegistry, NetworkRegistryError},
    web3dapp_error,
};

pub const CONFIG_FILE_NAME: &str = "web3dapp.yaml";

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct SetupConfig {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub description: Option<String>,
    /// One of trace, debug, info, warn, error or off.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub log_level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub networks: Option<Vec<NetworkOverride>>,
}

impl SetupConfig {
    pub fn new(name: &str) -> Self {
        Self { name: name.to_string(), description: None, log_level: None, networks: None }
    }

    /// Log level from the config, INFO when not set.
    pub fn level_filter(&self) -> Result<LevelFilter, ReadYamlError> {
        match &self.log_level {
            Some(level) => level
                .parse::<LevelFilter>()
                .map_err(|_| ReadYamlError::InvalidLogLevel(level.clone())),
            None => Ok(LevelFilter::INFO),
        }
    }

    /// The shipped registry with this config's network overrides applied.
    pub fn build_registry(&self) -> Result<NetworkRegistry, NetworkRegistryError> {
        match &self.networks {
            Some(overrides) if !overrides.is_empty() => {
                NetworkRegistry::shipped().with_overrides(overrides)
            }
            _ => Ok(NetworkRegistry::shipped().clone()),
        }
    }
}

#[derive(Error, Debug)]
pub enum ReadYamlError {
    #[error("Can not find yaml")]
    CanNotFindYaml,

    #[error("Can not read yaml")]
    CanNotReadYaml,

    #[error("Setup config is invalid yaml and does not match the struct - {0}")]
    SetupConfigInvalidYaml(String),

    #[error("Environment variable {0} not found")]
    EnvironmentVariableNotFound(String),

    #[error("Environment variable pattern is invalid: {0}")]
    InvalidEnvironmentPattern(#[from] regex::Error),

    #[error("Invalid log level: {0}")]
    InvalidLogLevel(String),

    #[error("Invalid network override: {0}")]
    InvalidNetworkOverride(#[from] NetworkRegistryError),
}

/// Substitutes `${VAR}` references with values from the environment.
/// Comment lines are left as written.
fn substitute_env_variables(contents: &str) -> Result<String, ReadYamlError> {
    let re = Regex::new(r"\$\{([^}]+)\}")?;

    let mut lines = Vec::new();
    for line in contents.lines() {
        if line.trim_start().starts_with('#') {
            lines.push(line.to_string());
            continue;
        }

        if let Some(missing) =
            re.captures_iter(line).map(|caps| caps[1].to_string()).find(|var| env::var(var).is_err())
        {
            web3dapp_error!("Environment variable {} not found", missing);
            return Err(ReadYamlError::EnvironmentVariableNotFound(missing));
        }

        let result =
            re.replace_all(line, |caps: &Captures| env::var(&caps[1]).unwrap_or_default());
        lines.push(result.into_owned());
    }

    Ok(lines.join("\n"))
}

/// Parses and validates config contents. With `raw_yaml` the `${VAR}`
/// references are kept as written.
pub fn parse(contents: &str, raw_yaml: bool) -> Result<SetupConfig, ReadYamlError> {
    let substituted_contents =
        if raw_yaml { contents.to_string() } else { substitute_env_variables(contents)? };

    let config: SetupConfig = serde_yaml::from_str(&substituted_contents)
        .map_err(|e| ReadYamlError::SetupConfigInvalidYaml(e.to_string()))?;

    config.level_filter()?;

    if !raw_yaml {
        config.build_registry()?;
    }

    Ok(config)
}

/// Reads and parses the web3dapp configuration YAML file.
pub fn read(file_path: &Path, raw_yaml: bool) -> Result<SetupConfig, ReadYamlError> {
    let mut file = File::open(file_path).map_err(|_| ReadYamlError::CanNotFindYaml)?;
    let mut contents = String::new();
    file.read_to_string(&mut contents).map_err(|_| ReadYamlError::CanNotReadYaml)?;

    parse(&contents, raw_yaml)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::ChainId;

    #[test]
    fn test_minimal_config() {
        let config = parse("name: my-dapp\n", false).unwrap();

        assert_eq!(config, SetupConfig::new("my-dapp"));
        assert_eq!(config.level_filter().unwrap(), LevelFilter::INFO);
        assert_eq!(config.build_registry().unwrap().get_all_networks().len(), 5);
    }

    #[test]
    fn test_network_overrides_are_applied() {
        let yaml = r#"
name: my-dapp
log_level: debug
networks:
  - chain_id: 137
    rpc_url: https://polygon.private.example.org
  - chain_id: 11155111
    block_explorer: https://sepolia.otterscan.io
"#;
        let config = parse(yaml, false).unwrap();
        let registry = config.build_registry().unwrap();

        assert_eq!(config.level_filter().unwrap(), LevelFilter::DEBUG);
        assert_eq!(
            registry.get_network(ChainId::POLYGON).unwrap().rpc_url,
            "https://polygon.private.example.org"
        );
        assert_eq!(
            registry.get_network(ChainId::SEPOLIA).unwrap().block_explorer,
            "https://sepolia.otterscan.io"
        );
        assert_eq!(registry.get_recommended().chain_id, ChainId::POLYGON);
    }

    #[test]
    fn test_override_for_unknown_chain_is_rejected() {
        let yaml = "name: my-dapp\nnetworks:\n  - chain_id: 56\n    rpc_url: https://bsc.example.org\n";

        assert!(matches!(
            parse(yaml, false),
            Err(ReadYamlError::InvalidNetworkOverride(NetworkRegistryError::UnknownNetwork(_)))
        ));
    }

    #[test]
    fn test_invalid_log_level() {
        assert!(matches!(
            parse("name: my-dapp\nlog_level: loud\n", false),
            Err(ReadYamlError::InvalidLogLevel(_))
        ));
    }

    #[test]
    fn test_invalid_yaml_shape() {
        assert!(matches!(
            parse("networks: 12\n", false),
            Err(ReadYamlError::SetupConfigInvalidYaml(_))
        ));
    }

    #[test]
    fn test_environment_substitution() {
        env::set_var("WEB3DAPP_TEST_POLYGON_RPC", "https://polygon.env.example.org");
        let yaml = "name: my-dapp\nnetworks:\n  - chain_id: 137\n    rpc_url: ${WEB3DAPP_TEST_POLYGON_RPC}\n";

        let config = parse(yaml, false).unwrap();
        let registry = config.build_registry().unwrap();
        assert_eq!(
            registry.get_network(ChainId::POLYGON).unwrap().rpc_url,
            "https://polygon.env.example.org"
        );

        let raw = parse(yaml, true).unwrap();
        let overrides = raw.networks.unwrap();
        assert_eq!(overrides[0].rpc_url.as_deref(), Some("${WEB3DAPP_TEST_POLYGON_RPC}"));
    }

    #[test]
    fn test_comment_lines_are_not_substituted() {
        let yaml = "name: my-dapp\n# rpc_url: ${WEB3DAPP_TEST_ONLY_IN_COMMENT}\n";

        assert_eq!(parse(yaml, false).unwrap().name, "my-dapp");
    }

    #[test]
    fn test_missing_environment_variable() {
        let yaml = "name: ${WEB3DAPP_TEST_DEFINITELY_NOT_SET}\n";

        match parse(yaml, false) {
            Err(ReadYamlError::EnvironmentVariableNotFound(name)) => {
                assert_eq!(name, "WEB3DAPP_TEST_DEFINITELY_NOT_SET")
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_read_missing_file() {
        let path = env::temp_dir().join("web3dapp-does-not-exist").join(CONFIG_FILE_NAME);

        assert!(matches!(read(&path, false), Err(ReadYamlError::CanNotFindYaml)));
    }
}

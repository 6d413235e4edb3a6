use std::path::Path;

use dialoguer::Input;
use web3dapp_core::{CONFIG_FILE_NAME, SetupConfig, WriteFileError, write_file};

use crate::{commands::error::InitError, print_success_message};

const NETWORK_OVERRIDE_EXAMPLE: &str = r#"
# Override endpoints of supported networks, ${VARS} are read from the environment
# networks:
#   - chain_id: 137
#     rpc_url: ${POLYGON_RPC_URL}
#   - chain_id: 11155111
#     block_explorer: https://sepolia.otterscan.io
"#;

fn write_gitignore(path: &Path) -> Result<(), WriteFileError> {
    write_file(&path.join(".gitignore"), ".env")
}

fn validate_project_name(name: &str) -> Result<(), InitError> {
    let valid = !name.is_empty()
        && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');

    if !valid {
        return Err(InitError::InvalidName(format!(
            "'{}' - use letters, numbers, '-' and '_' only",
            name
        )));
    }

    Ok(())
}

/// Renders the web3dapp.yaml written for a fresh project.
fn render_config(name: &str) -> Result<String, InitError> {
    let mut config = SetupConfig::new(name);
    config.log_level = Some("info".to_string());

    let mut yaml = serde_yaml::to_string(&config)?;
    yaml.push_str(NETWORK_OVERRIDE_EXAMPLE);
    Ok(yaml)
}

pub fn handle_init(path: &Path, name: Option<&str>) -> Result<(), InitError> {
    let project_name = match name {
        Some(name) => name.to_string(),
        None => Input::new().with_prompt("Enter project name").interact_text()?,
    };
    validate_project_name(&project_name)?;

    let project_path = path.join(&project_name);
    if project_path.exists() {
        return Err(InitError::AlreadyExists(project_path.display().to_string()));
    }

    write_file(&project_path.join(CONFIG_FILE_NAME), &render_config(&project_name)?)?;
    write_gitignore(&project_path)?;

    print_success_message(&format!(
        "Project {} created, run 'web3dapp network list --path {}' to see the supported networks",
        project_name,
        project_path.display()
    ));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rendered_config_parses() {
        let yaml = render_config("my-dapp").unwrap();
        let config = web3dapp_core::parse(&yaml, false).unwrap();

        assert_eq!(config.name, "my-dapp");
        assert_eq!(config.log_level.as_deref(), Some("info"));
        assert!(config.networks.is_none());
    }

    #[test]
    fn test_project_name_validation() {
        assert!(validate_project_name("my_dapp-2").is_ok());
        assert!(validate_project_name("").is_err());
        assert!(validate_project_name("../escape").is_err());
    }

    #[test]
    fn test_init_writes_project() {
        let dir = std::env::temp_dir().join(format!("web3dapp-init-{}", std::process::id()));

        handle_init(&dir, Some("demo")).unwrap();

        let config = web3dapp_core::read(&dir.join("demo").join(CONFIG_FILE_NAME), false).unwrap();
        assert_eq!(config.name, "demo");
        assert!(dir.join("demo").join(".gitignore").exists());
        assert!(matches!(handle_init(&dir, Some("demo")), Err(InitError::AlreadyExists(_))));

        std::fs::remove_dir_all(&dir).unwrap();
    }
}

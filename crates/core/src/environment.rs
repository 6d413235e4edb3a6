use std::path::Path;

use dotenvy::{dotenv, from_path};

/// Loads environment variables from a .env file in the project directory.
///
/// Falls back to a .env in the current working directory (or nothing) when
/// the project does not have one.
pub fn load_env_from_project_path(project_path: &Path) {
    if from_path(project_path.join(".env")).is_err() {
        dotenv().ok();
    }
}

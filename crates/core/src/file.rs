use std::{fs, fs::File, io::Write, path::Path};

#[derive(thiserror::Error, Debug)]
pub enum WriteFileError {
    #[error("Could not create dir: {0}")]
    CouldNotCreateDir(std::io::Error),

    #[error("Could not write to the file: {0}")]
    CouldNotWrite(std::io::Error),

    #[error("Could not create the file: {0}")]
    CouldNotCreateFile(std::io::Error),

    #[error("File already exists: {0}")]
    AlreadyExists(String),
}

/// Writes `contents` to `path`, creating parent directories and trimming
/// trailing whitespace from every line. Existing files are never replaced.
///
/// # Example
/// ```rust,no_run
/// use std::path::Path;
/// use web3dapp_core::write_file;
///
/// write_file(Path::new("my-dapp/web3dapp.yaml"), "name: my-dapp  \n")?;
/// # Ok::<(), web3dapp_core::WriteFileError>(())
/// ```
pub fn write_file(path: &Path, contents: &str) -> Result<(), WriteFileError> {
    if path.exists() {
        return Err(WriteFileError::AlreadyExists(path.display().to_string()));
    }

    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).map_err(WriteFileError::CouldNotCreateDir)?;
    }

    let mut cleaned_contents: String =
        contents.lines().map(|line| line.trim_end()).collect::<Vec<&str>>().join("\n");
    cleaned_contents.push('\n');

    let mut file = File::create(path).map_err(WriteFileError::CouldNotCreateFile)?;
    file.write_all(cleaned_contents.as_bytes()).map_err(WriteFileError::CouldNotWrite)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_file_trims_and_refuses_overwrite() {
        let dir = std::env::temp_dir().join(format!("web3dapp-write-file-{}", std::process::id()));
        let path = dir.join("nested").join("config.yaml");

        write_file(&path, "name: demo   \nnetworks: []  ").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "name: demo\nnetworks: []\n");

        assert!(matches!(write_file(&path, "name: other"), Err(WriteFileError::AlreadyExists(_))));

        fs::remove_dir_all(&dir).unwrap();
    }
}

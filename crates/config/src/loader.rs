use crate::{ConfigError, Result, TypesConfig};
use std::fs;
use std::path::{Path, PathBuf};

/// Config file names to search for, in order of preference
const CONFIG_FILES: &[&str] = &[
    ".graphql-types.yml",
    ".graphql-types.yaml",
    ".graphql-types.json",
];

/// Find a config file by walking up the directory tree from the given start directory.
/// Returns the path to the config file if found.
#[tracing::instrument(fields(start = %start_dir.display()))]
pub fn find_config(start_dir: &Path) -> Option<PathBuf> {
    let mut current_dir = start_dir.to_path_buf();
    let mut checked_dirs = 0;

    loop {
        tracing::trace!(dir = %current_dir.display(), "Checking directory for config files");
        for file_name in CONFIG_FILES {
            let config_path = current_dir.join(file_name);
            if config_path.is_file() {
                tracing::debug!(path = %config_path.display(), checked_dirs, "Found config file");
                return Some(config_path);
            }
        }

        checked_dirs += 1;
        if !current_dir.pop() {
            tracing::debug!(checked_dirs, "No config file found");
            return None;
        }
    }
}

/// Load a config from the specified path.
/// The format is detected from the file extension.
#[tracing::instrument(fields(path = %path.display()))]
pub fn load_config(path: &Path) -> Result<TypesConfig> {
    tracing::debug!("Reading config file");
    let contents = fs::read_to_string(path)?;
    let config = load_config_from_str(&contents, path)?;
    tracing::debug!(
        custom_policy = config.policy.is_some(),
        "Config loaded successfully"
    );
    Ok(config)
}

/// Load a config from a string.
/// The path is used for error messages and format detection.
#[tracing::instrument(skip(contents), fields(path = %path.display(), size = contents.len()))]
pub fn load_config_from_str(contents: &str, path: &Path) -> Result<TypesConfig> {
    let extension = path.extension().and_then(|ext| ext.to_str()).unwrap_or("");

    let config = match extension {
        "yml" | "yaml" if contents.trim().is_empty() => TypesConfig::default(),
        "yml" | "yaml" => {
            tracing::trace!("Parsing as YAML");
            serde_saphyr::from_str(contents)
                .map_err(|e| invalid(path, format!("YAML parse error: {e}")))?
        }
        "json" => {
            tracing::trace!("Parsing as JSON");
            serde_json::from_str(contents)
                .map_err(|e| invalid(path, format!("JSON parse error: {e}")))?
        }
        _ => return Err(ConfigError::UnsupportedFormat(path.to_path_buf())),
    };

    validate_config(&config, path)?;
    Ok(config)
}

fn invalid(path: &Path, message: String) -> ConfigError {
    ConfigError::Invalid {
        path: path.to_path_buf(),
        message,
    }
}

/// Reject entries that can never match anything.
fn validate_config(config: &TypesConfig, path: &Path) -> Result<()> {
    if let Some(policy) = &config.policy {
        let mut names = policy.denylist.iter().chain(&policy.forced_include);
        if names.any(|name| name.trim().is_empty()) {
            return Err(invalid(path, "policy contains an empty type name".to_string()));
        }
    }

    if let Some(extensions) = config
        .documents
        .as_ref()
        .and_then(|documents| documents.extensions.as_ref())
    {
        if extensions.is_empty() {
            return Err(invalid(path, "documents.extensions is empty".to_string()));
        }
        if extensions
            .iter()
            .any(|ext| ext.trim_start_matches('.').trim().is_empty())
        {
            return Err(invalid(
                path,
                "documents.extensions contains an empty extension".to_string(),
            ));
        }
    }

    Ok(())
}

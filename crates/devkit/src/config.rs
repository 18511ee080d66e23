use anyhow::{anyhow, Result};
use directories::BaseDirs;
use std::path::{Path, PathBuf};

const CONFIG_DIR_NAME: &str = ".devkit";
const CONFIG_FILE_NAME: &str = "config.toml";

/// Resolve the global config file: explicit path (flag or `DEVKIT_CONFIG`)
/// first, then `~/.devkit/config.toml`
pub fn resolve_config_path(explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path.to_path_buf());
    }

    default_config_path().ok_or_else(|| {
        anyhow!(
            "Could not determine home directory. Set the config path with --config or DEVKIT_CONFIG"
        )
    })
}

fn default_config_path() -> Option<PathBuf> {
    BaseDirs::new().map(|dirs| {
        dirs.home_dir()
            .join(CONFIG_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_path_wins() {
        let path = resolve_config_path(Some(Path::new("/tmp/custom.toml"))).unwrap();
        assert_eq!(path, PathBuf::from("/tmp/custom.toml"));
    }

    #[test]
    fn default_path_lives_under_home() {
        if let Some(path) = default_config_path() {
            assert!(path.ends_with(".devkit/config.toml"));
        }
    }
}

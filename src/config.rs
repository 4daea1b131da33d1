use std::{env, fs, path::Path, path::PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub database_url: String,
    pub database_pool_size: u32,
    pub uploads_dir: PathBuf,
    pub allowed_origins: Vec<String>,
    pub enable_cors: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: "reloc.sqlite".to_string(),
            database_pool_size: 8,
            uploads_dir: PathBuf::from("uploads"),
            allowed_origins: vec![],
            enable_cors: true,
        }
    }
}

/// Load the configuration from an optional TOML file.
///
/// Environment variables override values from the file so that
/// deployments can keep secrets out of it.
pub fn load(path: Option<&Path>) -> Result<Config> {
    let mut cfg = match path {
        Some(path) => {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Unable to read configuration file {}", path.display()))?;
            toml::from_str(&contents)
                .with_context(|| format!("Malformed configuration file {}", path.display()))?
        }
        None => Config::default(),
    };
    if let Ok(url) = env::var("DATABASE_URL") {
        cfg.database_url = url;
    }
    if let Ok(origins) = env::var("ALLOWED_ORIGINS") {
        cfg.allowed_origins = origins
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(ToOwned::to_owned)
            .collect();
    }
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_config_file() {
        let cfg: Config = toml::from_str(
            r#"
            database_url = "/var/lib/reloc/reloc.sqlite"
            database_pool_size = 4
            uploads_dir = "/var/lib/reloc/uploads"
            allowed_origins = ["https://reloc.community"]
            enable_cors = true
            "#,
        )
        .unwrap();
        assert_eq!(cfg.database_url, "/var/lib/reloc/reloc.sqlite");
        assert_eq!(cfg.database_pool_size, 4);
        assert_eq!(cfg.allowed_origins, vec!["https://reloc.community"]);
    }

    #[test]
    fn default_config_is_complete() {
        let cfg = Config::default();
        assert!(!cfg.database_url.is_empty());
        assert!(cfg.database_pool_size > 0);
    }
}

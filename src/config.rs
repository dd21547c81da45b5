use serde::Deserialize;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

const DEFAULT_CONFIG: &str = include_str!("default_config.toml");

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub paths: PathsConfig,
    pub site: SiteConfig,
}

/// Where the site sources live and where the output goes.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    pub content: PathBuf,
    #[serde(rename = "static")]
    pub static_dir: PathBuf,
    pub template: PathBuf,
    pub output: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            content: PathBuf::from("content"),
            static_dir: PathBuf::from("static"),
            template: PathBuf::from("template.html"),
            output: PathBuf::from("public"),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Prefix for root-relative `href` and `src` attributes.
    pub base_path: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_path: "/".to_string(),
        }
    }
}

impl Config {
    /// The config bundled with the binary. Validated by the build script.
    pub fn compiled_default() -> Self {
        toml::from_str(DEFAULT_CONFIG).unwrap_or_default()
    }

    /// Load config from a TOML file, or return the compiled default if the
    /// file does not exist.
    pub fn load(path: &Path) -> Result<Self> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::debug!("no config at {}, using defaults", path.display());
                return Ok(Self::compiled_default());
            }
            Err(e) => return Err(Error::io(path)(e)),
        };

        toml::from_str(&content).map_err(|source| Error::Config {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compiled_default_matches_struct_default() {
        let config = Config::compiled_default();
        let fallback = Config::default();
        assert_eq!(config.paths.content, fallback.paths.content);
        assert_eq!(config.paths.static_dir, fallback.paths.static_dir);
        assert_eq!(config.paths.template, fallback.paths.template);
        assert_eq!(config.paths.output, fallback.paths.output);
        assert_eq!(config.site.base_path, fallback.site.base_path);
    }

    #[test]
    fn partial_config_keeps_defaults() {
        let config: Config = toml::from_str("[site]\nbase_path = \"/docs/\"\n").unwrap();
        assert_eq!(config.site.base_path, "/docs/");
        assert_eq!(config.paths.output, PathBuf::from("public"));
    }

    #[test]
    fn static_key_is_renamed() {
        let config: Config = toml::from_str("[paths]\nstatic = \"assets\"\n").unwrap();
        assert_eq!(config.paths.static_dir, PathBuf::from("assets"));
    }

    #[test]
    fn missing_file_falls_back_to_default() {
        let config = Config::load(Path::new("does/not/exist.toml")).unwrap();
        assert_eq!(config.paths.content, PathBuf::from("content"));
    }
}

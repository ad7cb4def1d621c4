use crate::errors::InputError;
use crate::extract::DEFAULT_LANG;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Config file names looked up in the working directory, in order
pub const CONFIG_CANDIDATES: &[&str] = &["md2r.yml", "md2r.yaml"];

/// Optional YAML config (`md2r.yml` / `md2r.yaml`)
#[derive(Debug, Default, Deserialize)]
pub struct Md2rConfig {
    /// Fence language tag to look for.
    #[serde(default)]
    pub lang: Option<String>,

    /// Base directory for relative `FILE:` paths.
    #[serde(default)]
    pub output_dir: Option<PathBuf>,

    /// Substrings; a block whose path contains one of them is skipped.
    #[serde(default)]
    pub ignore_patterns: Vec<String>,
}

/// Flags from the command line that may override the config file
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub lang: Option<String>,
    pub output_dir: Option<PathBuf>,
    pub dry_run: bool,
}

/// Effective settings for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub lang: String,
    pub output_dir: PathBuf,
    pub dry_run: bool,
    pub ignore_patterns: Vec<String>,
}

/// Look for a config file in `dir`, returning None if there is none.
pub fn load_config_file(dir: &Path) -> Result<Option<Md2rConfig>, InputError> {
    for candidate in CONFIG_CANDIDATES {
        let path = dir.join(candidate);
        if !path.is_file() {
            continue;
        }
        let text = fs::read_to_string(&path).map_err(|source| InputError::ConfigRead {
            path: path.clone(),
            source,
        })?;
        // An empty file deserializes to unit, not a mapping.
        if text.trim().is_empty() {
            return Ok(Some(Md2rConfig::default()));
        }
        let config = serde_yaml::from_str(&text)
            .map_err(|source| InputError::Config { path: path.clone(), source })?;
        tracing::debug!("Loaded config from {}", path.display());
        return Ok(Some(config));
    }
    Ok(None)
}

impl Settings {
    /// Flags beat the config file, the config file beats defaults. A relative
    /// output dir is taken against `cwd`.
    pub fn resolve(cli: CliOverrides, config: Option<Md2rConfig>, cwd: &Path) -> Self {
        let config = config.unwrap_or_default();
        let lang = cli
            .lang
            .or(config.lang)
            .unwrap_or_else(|| DEFAULT_LANG.to_string());
        let output_dir = match cli.output_dir.or(config.output_dir) {
            Some(dir) => cwd.join(dir),
            None => cwd.to_path_buf(),
        };
        Settings {
            lang,
            output_dir,
            dry_run: cli.dry_run,
            ignore_patterns: config.ignore_patterns,
        }
    }

    /// The first ignore pattern contained in `rel_path`, if any
    pub fn ignored_by(&self, rel_path: &str) -> Option<&str> {
        self.ignore_patterns
            .iter()
            .find(|pat| !pat.is_empty() && rel_path.contains(pat.as_str()))
            .map(String::as_str)
    }
}

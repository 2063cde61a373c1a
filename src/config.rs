//! Configuration loading.
//!
//! The set of required fields and the accepted `status` values are plain
//! data on [`Config`], which is passed to the validator explicitly.  Nothing
//! is held in module-level state, so every call can use its own rules.
//!
//! # Configuration file
//!
//! The default configuration file is `oxidized-frontmatter.toml` in the
//! current working directory.  Every key is optional:
//!
//! ```toml
//! [fields]
//! required = ["id", "title", "version", "status", "last_updated"]
//!
//! [status]
//! valid = ["draft", "active", "approved", "deprecated", "superseded", "accepted"]
//! ```

use std::path::Path;

/// Name of the config file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "oxidized-frontmatter.toml";

/// Main configuration for a frontmatter check.
///
/// # Examples
///
/// ```
/// use oxidized_frontmatter::config::Config;
///
/// let config = Config::default();
/// assert!(config.fields.required.iter().any(|f| f == "last_updated"));
/// assert!(config.is_valid_status("approved"));
/// ```
#[derive(Debug, Clone, Default, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct Config {
    /// Fields every governed document must carry.
    pub fields: FieldsConfig,
    /// Accepted values for the `status` field.
    pub status: StatusConfig,
}

/// Required frontmatter fields, reported in declaration order when missing.
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct FieldsConfig {
    pub required: Vec<String>,
}

/// Accepted `status` values.
///
/// Entries are normalized to lowercase at load time via
/// [`StatusConfig::normalize`].  Matching lowercases both sides, so a config
/// built in code with mixed-case entries behaves the same.
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct StatusConfig {
    pub valid: Vec<String>,
}

impl Default for FieldsConfig {
    fn default() -> Self {
        FieldsConfig {
            required: ["id", "title", "version", "status", "last_updated"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

impl Default for StatusConfig {
    fn default() -> Self {
        StatusConfig {
            valid: [
                "draft",
                "active",
                "approved",
                "deprecated",
                "superseded",
                "accepted",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        }
    }
}

impl StatusConfig {
    /// Lowercases every entry in place.
    pub fn normalize(&mut self) {
        for s in &mut self.valid {
            *s = s.trim().to_lowercase();
        }
    }

    /// Accepted values lowercased, sorted and de-duplicated, for error messages.
    pub fn sorted(&self) -> Vec<String> {
        let mut valid: Vec<String> = self.valid.iter().map(|s| s.trim().to_lowercase()).collect();
        valid.sort_unstable();
        valid.dedup();
        valid
    }
}

impl Config {
    /// Loads configuration from a TOML file.
    ///
    /// Resolution order:
    /// 1. If `path` is `Some`, load from that file (error if missing).
    /// 2. If `path` is `None`, try [`DEFAULT_CONFIG_FILE`] in the current directory.
    /// 3. If that file does not exist either, return [`Config::default()`].
    ///
    /// # Errors
    ///
    /// Returns `Err(String)` when the explicit path does not exist, the file
    /// cannot be read, or the TOML content fails to parse.
    pub fn load(path: Option<&Path>) -> Result<Config, String> {
        let config_path = if let Some(p) = path {
            if p.exists() {
                Some(p.to_path_buf())
            } else {
                return Err(format!("Config file not found: {}", p.display()));
            }
        } else {
            let default_path = Path::new(DEFAULT_CONFIG_FILE);
            default_path.exists().then(|| default_path.to_path_buf())
        };

        match config_path {
            Some(path) => {
                let content = std::fs::read_to_string(&path)
                    .map_err(|e| format!("Failed to read config {}: {}", path.display(), e))?;
                Config::from_toml(&content)
                    .map_err(|e| format!("Failed to parse config {}: {}", path.display(), e))
            }
            None => Ok(Config::default()),
        }
    }

    /// Parses configuration from a TOML string and normalizes it.
    pub fn from_toml(content: &str) -> Result<Config, String> {
        let mut config: Config = toml::from_str(content).map_err(|e| e.to_string())?;
        config.status.normalize();
        Ok(config)
    }

    /// Returns `true` if `status` (already unquoted) is accepted,
    /// ignoring case on both sides.
    pub fn is_valid_status(&self, status: &str) -> bool {
        let status = status.to_lowercase();
        self.status
            .valid
            .iter()
            .any(|s| s.trim().to_lowercase() == status)
    }
}

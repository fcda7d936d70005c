// Configuration module

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::constants::{
    DEFAULT_FOLDER, DEFAULT_SERVER_ADDRESS, DEFAULT_SERVER_PORT, ENV_API_KEY, ENV_API_SECRET,
};
use crate::error::SiteError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    pub site: SiteConfig,
    pub cloudinary: CloudinaryConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_address")]
    pub address: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_address() -> String {
    DEFAULT_SERVER_ADDRESS.to_string()
}

fn default_port() -> u16 {
    DEFAULT_SERVER_PORT
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            address: default_address(),
            port: default_port(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Canonical site origin used in the sitemap and SEO metadata
    pub base_url: String,

    /// Folder prefix applied to resource listings when the caller omits one
    #[serde(default = "default_folder")]
    pub default_folder: String,
}

fn default_folder() -> String {
    DEFAULT_FOLDER.to_string()
}

/// Cloudinary account settings
///
/// Only the cloud name is public and belongs in the config file. The API
/// key/secret pair is read from the environment at load time and may be
/// absent: the URL builder, sitemap, and brand endpoints work without it,
/// and the Admin API proxy reports a configuration error per request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CloudinaryConfig {
    pub cloud_name: String,

    #[serde(skip)]
    pub api_key: Option<String>,

    #[serde(skip)]
    pub api_secret: Option<String>,
}

impl CloudinaryConfig {
    /// All three values required by the signed Admin API proxy
    ///
    /// Short-circuits with a configuration error naming the missing pieces
    /// before any outbound call is attempted.
    pub fn credentials(&self) -> Result<(&str, &str, &str), SiteError> {
        let mut missing = Vec::new();
        if self.cloud_name.is_empty() {
            missing.push("cloud name");
        }
        if self.api_key.is_none() {
            missing.push(ENV_API_KEY);
        }
        if self.api_secret.is_none() {
            missing.push(ENV_API_SECRET);
        }
        if !missing.is_empty() {
            return Err(SiteError::config(format!(
                "Missing Cloudinary credentials: {}",
                missing.join(", ")
            )));
        }
        Ok((
            &self.cloud_name,
            self.api_key.as_deref().unwrap(),
            self.api_secret.as_deref().unwrap(),
        ))
    }
}

impl Config {
    pub fn from_yaml_with_env(yaml: &str) -> Result<Self, String> {
        // Replace ${VAR_NAME} with environment variable values
        let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}").map_err(|e| e.to_string())?;

        // First, check that all referenced environment variables exist
        for caps in re.captures_iter(yaml) {
            let var_name = &caps[1];
            std::env::var(var_name).map_err(|_| {
                format!(
                    "Environment variable '{}' is referenced but not set",
                    var_name
                )
            })?;
        }

        // Now perform the substitution (we know all vars exist)
        let substituted = re.replace_all(yaml, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap() // Safe because we checked above
        });

        let mut config: Config = serde_yaml::from_str(&substituted).map_err(|e| e.to_string())?;

        // Secrets come straight from the environment, never from the file
        config.cloudinary.api_key = std::env::var(ENV_API_KEY).ok();
        config.cloudinary.api_secret = std::env::var(ENV_API_SECRET).ok();

        // Trailing slash would double up in generated URLs
        while config.site.base_url.ends_with('/') {
            config.site.base_url.pop();
        }

        Ok(config)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let yaml = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file: {}", e))?;
        Self::from_yaml_with_env(&yaml)
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.cloudinary.cloud_name.is_empty() {
            return Err("cloudinary.cloud_name cannot be empty".to_string());
        }

        if self.site.base_url.is_empty() {
            return Err("site.base_url cannot be empty".to_string());
        }

        if !self.site.base_url.starts_with("http://") && !self.site.base_url.starts_with("https://")
        {
            return Err(format!(
                "site.base_url '{}' must start with http:// or https://",
                self.site.base_url
            ));
        }

        if self.site.default_folder.is_empty() {
            return Err("site.default_folder cannot be empty".to_string());
        }

        Ok(())
    }
}

use crate::domain::error::MoodError;
use crate::infrastructure::network::{google, huggingface};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: Logging,
    #[serde(default)]
    pub translator: TranslatorConfig,
    #[serde(default)]
    pub classifier: ClassifierConfig,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Logging {
    #[serde(default = "default_enable")]
    pub enable: bool,
    pub path: Option<String>,
    #[serde(default = "default_log_level")]
    pub level: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct TranslatorConfig {
    #[serde(default = "default_translator_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_translator_timeout")]
    pub timeout_secs: u64,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ClassifierConfig {
    #[serde(default = "default_classifier_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_model")]
    pub model: String,
    pub api_token: Option<String>,
    #[serde(default = "default_classifier_timeout")]
    pub timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for Logging {
    fn default() -> Self {
        Self {
            enable: true,
            path: None,
            level: default_log_level(),
        }
    }
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            endpoint: default_translator_endpoint(),
            timeout_secs: default_translator_timeout(),
        }
    }
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            endpoint: default_classifier_endpoint(),
            model: default_model(),
            api_token: None,
            timeout_secs: default_classifier_timeout(),
        }
    }
}

// Defaults
fn default_host() -> String {
    "0.0.0.0".to_string()
}
fn default_port() -> u16 {
    5000
}
fn default_enable() -> bool {
    true
}
fn default_log_level() -> String {
    "INFO".to_string()
}
fn default_translator_endpoint() -> String {
    google::DEFAULT_ENDPOINT.to_string()
}
fn default_translator_timeout() -> u64 {
    10
}
fn default_classifier_endpoint() -> String {
    huggingface::DEFAULT_ENDPOINT.to_string()
}
fn default_model() -> String {
    huggingface::DEFAULT_MODEL.to_string()
}
fn default_classifier_timeout() -> u64 {
    30
}

pub fn get_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("sentimood").join("config.toml"))
}

/// Load the config file, falling back to defaults when it is missing or broken.
///
/// An explicit `path` must exist; the default location is optional.
pub fn load_config(path: Option<&Path>) -> Result<Config, MoodError> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(MoodError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            Some(p.to_path_buf())
        }
        None => get_config_path(),
    };

    if let Some(path) = config_path {
        if path.exists() {
            let content = fs::read_to_string(&path)?;
            match parse_config(&content) {
                Ok(config) => return Ok(config),
                Err(e) => {
                    eprintln!(
                        "Warning: Failed to parse config file: {}. Using defaults.",
                        e
                    );
                }
            }
        }
    }

    Ok(Config::default())
}

pub fn parse_config(content: &str) -> Result<Config, MoodError> {
    Ok(toml::from_str::<Config>(content)?)
}

impl Config {
    /// Apply `PORT` and `HF_TOKEN` on top of the file values.
    pub fn apply_env(&mut self) -> Result<(), MoodError> {
        self.apply_overrides(
            std::env::var("PORT").ok().as_deref(),
            std::env::var("HF_TOKEN").ok().as_deref(),
        )
    }

    pub fn apply_overrides(&mut self, port: Option<&str>, hf_token: Option<&str>) -> Result<(), MoodError> {
        if let Some(port) = port {
            self.server.port = port
                .trim()
                .parse()
                .map_err(|e| MoodError::Config(format!("Invalid PORT {:?}: {}", port, e)))?;
        }

        if let Some(token) = hf_token.filter(|t| !t.is_empty()) {
            self.classifier.api_token = Some(token.to_string());
        }

        Ok(())
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

pub fn generate_config_sample() -> Result<(), MoodError> {
    let config_path = get_config_path();

    if let Some(path) = config_path {
        if path.exists() {
            eprintln!("Config file already exists at: {}", path.display());
            return Ok(());
        }

        // Create directory if needed
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let sample = Config::default();
        let toml_content = toml::to_string_pretty(&sample)
            .map_err(|e| MoodError::Config(format!("Failed to serialize config: {}", e)))?;
        fs::write(&path, toml_content)
            .map_err(|e| MoodError::Config(format!("Failed to write config file: {}", e)))?;
        println!("Generated config file at: {}", path.display());
    } else {
        return Err(MoodError::Config(
            "Cannot determine config directory".to_string(),
        ));
    }

    Ok(())
}

//! Application settings for the fetcher
//!
//! Loads configuration from config.yml file. All filesystem locations are
//! resolved here and passed into operations explicitly.

use std::path::{Path, PathBuf};
use std::{env, fs};

use serde::Deserialize;

/// Default constants (fallback if config.yml not found)
pub const TOOL_COMMAND: &str = "gallery-dl";
pub const INSTALL_COMMAND: &str = "python3 -m pip install gallery-dl";
pub const LOCK_FILE: &str = "twitter_fetcher.lock";
pub const DEFAULT_RETRIES: u32 = 3;
pub const DEFAULT_TIMEOUT_SECS: u32 = 30;
pub const DEFAULT_RATE_LIMIT: &str = "1M";
pub const DEFAULT_PROMPT_ATTEMPTS: usize = 5;

/// YAML config structures
#[derive(Debug, Deserialize)]
struct YamlSettings {
    paths: Option<PathsSection>,
    tool: Option<ToolSection>,
    downloader: Option<DownloaderSection>,
    prompt: Option<PromptSection>,
}

#[derive(Debug, Deserialize)]
struct PathsSection {
    netrc: Option<String>,
    gallery_config: Option<String>,
    output_dir: Option<String>,
    lock_file: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ToolSection {
    command: Option<String>,
    install_command: Option<String>,
}

#[derive(Debug, Deserialize)]
struct DownloaderSection {
    #[serde(default, deserialize_with = "deserialize_string_or_number")]
    retries: Option<String>,
    #[serde(default, deserialize_with = "deserialize_string_or_number")]
    timeout: Option<String>,
    rate: Option<String>,
}

#[derive(Debug, Deserialize)]
struct PromptSection {
    max_attempts: Option<usize>,
}

/// Deserialize a value that can be either a string or a number
fn deserialize_string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;
    let value: Option<serde_yaml::Value> = Option::deserialize(deserializer)?;
    match value {
        None => Ok(None),
        Some(serde_yaml::Value::String(s)) => Ok(Some(s)),
        Some(serde_yaml::Value::Number(n)) => Ok(Some(n.to_string())),
        Some(other) => Err(D::Error::custom(format!(
            "expected string or number, got {:?}",
            other
        ))),
    }
}

/// Main settings struct
#[derive(Debug, Clone)]
pub struct Settings {
    pub netrc_path: PathBuf,
    pub gallery_config_path: PathBuf,
    pub output_dir: PathBuf,
    pub lock_file: PathBuf,
    pub tool_command: String,
    pub install_command: String,
    pub retries: u32,
    pub timeout_secs: u32,
    pub rate_limit: String,
    pub prompt_attempts: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self::new()
    }
}

impl Settings {
    /// Load settings from config.yml or use defaults.
    /// Environment variables take precedence over config.yml values.
    pub fn new() -> Self {
        Self::load_from_file("config.yml")
            .or_else(|_| Self::load_from_file("../config.yml"))
            .unwrap_or_else(|_| Self::defaults())
    }

    /// Resolve a value: prefer env var if config value looks like ${VAR}
    fn resolve_env_string(value: Option<String>, env_key: &str) -> Option<String> {
        if let Some(ref v) = value {
            if v.starts_with("${") && v.ends_with('}') {
                let var_name = &v[2..v.len() - 1];
                if let Ok(env_val) = env::var(var_name) {
                    return Some(env_val);
                }
            }
        }
        if let Ok(env_val) = env::var(env_key) {
            return Some(env_val);
        }
        value
    }

    /// Resolve an integer value from string config or env var
    fn resolve_env_u32(value: Option<String>, env_key: &str, default: u32) -> u32 {
        if let Some(ref v) = value {
            if v.starts_with("${") && v.ends_with('}') {
                let var_name = &v[2..v.len() - 1];
                if let Ok(env_val) = env::var(var_name) {
                    if let Ok(parsed) = env_val.parse::<u32>() {
                        return parsed;
                    }
                }
            }
            if let Ok(parsed) = v.parse::<u32>() {
                return parsed;
            }
        }
        if let Ok(env_val) = env::var(env_key) {
            if let Ok(parsed) = env_val.parse::<u32>() {
                return parsed;
            }
        }
        default
    }

    /// Load .env file into environment variables using dotenvy
    fn load_dotenv() {
        if dotenvy::dotenv().is_err() {
            let _ = dotenvy::from_filename("../.env");
        }
    }

    /// Load settings from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        Self::load_dotenv();

        let content = fs::read_to_string(path.as_ref())
            .map_err(|e| format!("Failed to read config file: {}", e))?;

        let yaml: YamlSettings = serde_yaml::from_str(&content)
            .map_err(|e| format!("Failed to parse config file: {}", e))?;

        let paths = yaml.paths.unwrap_or(PathsSection {
            netrc: None,
            gallery_config: None,
            output_dir: None,
            lock_file: None,
        });

        let tool = yaml.tool.unwrap_or(ToolSection {
            command: None,
            install_command: None,
        });

        let downloader = yaml.downloader.unwrap_or(DownloaderSection {
            retries: None,
            timeout: None,
            rate: None,
        });

        let prompt = yaml.prompt.unwrap_or(PromptSection { max_attempts: None });

        let netrc_path = Self::resolve_env_string(paths.netrc, "TWITTER_FETCHER_NETRC")
            .map(PathBuf::from)
            .unwrap_or_else(default_netrc_path);
        let gallery_config_path =
            Self::resolve_env_string(paths.gallery_config, "TWITTER_FETCHER_GALLERY_CONFIG")
                .map(PathBuf::from)
                .unwrap_or_else(default_gallery_config_path);
        let output_dir = Self::resolve_env_string(paths.output_dir, "TWITTER_FETCHER_OUTPUT_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."));

        Ok(Self {
            netrc_path,
            gallery_config_path,
            output_dir,
            lock_file: paths
                .lock_file
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(LOCK_FILE)),
            tool_command: Self::resolve_env_string(tool.command, "TWITTER_FETCHER_TOOL")
                .unwrap_or_else(|| TOOL_COMMAND.to_string()),
            install_command: tool
                .install_command
                .unwrap_or_else(|| INSTALL_COMMAND.to_string()),
            retries: Self::resolve_env_u32(
                downloader.retries,
                "TWITTER_FETCHER_RETRIES",
                DEFAULT_RETRIES,
            ),
            timeout_secs: Self::resolve_env_u32(
                downloader.timeout,
                "TWITTER_FETCHER_TIMEOUT",
                DEFAULT_TIMEOUT_SECS,
            ),
            rate_limit: downloader
                .rate
                .unwrap_or_else(|| DEFAULT_RATE_LIMIT.to_string()),
            prompt_attempts: prompt.max_attempts.unwrap_or(DEFAULT_PROMPT_ATTEMPTS),
        })
    }

    /// Create settings with home-derived defaults (fallback)
    pub fn defaults() -> Self {
        Self {
            netrc_path: default_netrc_path(),
            gallery_config_path: default_gallery_config_path(),
            output_dir: PathBuf::from("."),
            lock_file: PathBuf::from(LOCK_FILE),
            tool_command: TOOL_COMMAND.to_string(),
            install_command: INSTALL_COMMAND.to_string(),
            retries: DEFAULT_RETRIES,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            rate_limit: DEFAULT_RATE_LIMIT.to_string(),
            prompt_attempts: DEFAULT_PROMPT_ATTEMPTS,
        }
    }
}

fn home_dir() -> PathBuf {
    env::var_os("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."))
}

fn default_netrc_path() -> PathBuf {
    home_dir().join(".netrc")
}

fn default_gallery_config_path() -> PathBuf {
    home_dir().join(".config").join("gallery-dl").join("config.json")
}

use once_cell::sync::OnceCell;
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    #[serde(default)]
    pub content: ContentConfig,
    #[serde(default)]
    pub forms: FormsConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Directory with the built frontend (trunk `dist`)
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            static_dir: default_static_dir(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_static_dir() -> String {
    "dist".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub path: String,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct ContentConfig {
    /// JSON file replacing the embedded site content
    pub path: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct FormsConfig {
    #[serde(default = "default_max_resume_bytes")]
    pub max_resume_bytes: u64,
}

impl Default for FormsConfig {
    fn default() -> Self {
        Self {
            max_resume_bytes: default_max_resume_bytes(),
        }
    }
}

fn default_max_resume_bytes() -> u64 {
    contracts::usecases::common::rules::MAX_RESUME_BYTES
}

impl FormsConfig {
    /// Request body limit: base64 grows the file by a third, plus the JSON around it
    pub fn body_limit_bytes(&self) -> usize {
        (self.max_resume_bytes as usize / 3 + 1) * 4 + 64 * 1024
    }
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
host = "0.0.0.0"
port = 3000
static_dir = "dist"

[database]
path = "target/db/app.db"

[forms]
max_resume_bytes = 5242880
"#;

static FORMS: OnceCell<FormsConfig> = OnceCell::new();

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    // Try to find config.toml next to the executable
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                let config: Config = toml::from_str(&contents)?;
                return Ok(config);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    // Fall back to default config
    tracing::info!("Using default embedded configuration");
    default_config()
}

pub fn default_config() -> anyhow::Result<Config> {
    let config: Config = toml::from_str(DEFAULT_CONFIG)?;
    Ok(config)
}

/// Make the form limits available to the submission services
pub fn install_forms(forms: FormsConfig) {
    if FORMS.set(forms).is_err() {
        tracing::warn!("Forms configuration already installed, keeping the first one");
    }
}

/// Installed form limits, defaults when not installed (tests)
pub fn forms() -> FormsConfig {
    FORMS.get().cloned().unwrap_or_default()
}

/// Resolve a configured path: absolute as is, relative to the executable directory
pub fn resolve_path(path_str: &str) -> PathBuf {
    let path = Path::new(path_str);

    // If absolute path, use as is
    if path.is_absolute() {
        return path.to_path_buf();
    }

    // If relative path, resolve it relative to the executable directory
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            return exe_dir.join(path);
        }
    }

    // Fallback: use relative to current directory
    PathBuf::from(path_str)
}

/// Get the database file path from configuration
pub fn get_database_path(config: &Config) -> PathBuf {
    resolve_path(&config.database.path)
}

/// Directory with the built frontend, resolved like the database path
pub fn get_static_dir(config: &Config) -> PathBuf {
    resolve_path(&config.server.static_dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = default_config().unwrap();
        assert_eq!(config.database.path, "target/db/app.db");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.forms.max_resume_bytes, 5 * 1024 * 1024);
        assert!(config.content.path.is_none());
    }

    #[test]
    fn test_minimal_config_uses_defaults() {
        let config: Config = toml::from_str("[database]\npath = \"site.db\"\n").unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.static_dir, "dist");
        assert_eq!(config.forms.max_resume_bytes, 5 * 1024 * 1024);
    }

    #[test]
    fn test_body_limit_covers_base64_resume() {
        let forms = FormsConfig {
            max_resume_bytes: 3 * 1024,
        };
        // 3 KiB of file -> 4 KiB of base64
        assert!(forms.body_limit_bytes() >= 4 * 1024);
    }

    #[test]
    fn test_static_dir_resolved_like_database() {
        let config: Config = toml::from_str(
            "[server]\nstatic_dir = \"web/dist\"\n[database]\npath = \"db/site.db\"\n",
        )
        .unwrap();
        let static_dir = get_static_dir(&config);
        let db_path = get_database_path(&config);
        assert!(static_dir.ends_with("web/dist"));
        // both relative to the executable directory
        assert_eq!(
            static_dir.parent().and_then(Path::parent),
            db_path.parent().and_then(Path::parent)
        );
    }

    #[test]
    fn test_resolve_absolute_path() {
        let abs = if cfg!(windows) { "C:\\data\\app.db" } else { "/var/lib/site/app.db" };
        assert_eq!(resolve_path(abs), PathBuf::from(abs));
    }
}

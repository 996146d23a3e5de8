use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use serde::Deserialize;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://data/remont.db?mode=rwc";
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";
/// URL path the static directory is served under.
pub const STATIC_MOUNT: &str = "/static";

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub media: MediaConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    #[serde(default)]
    pub worker_threads: Option<usize>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: "127.0.0.1".into(), port: 8000, worker_threads: Some(4) }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    #[serde(default)]
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,
    #[serde(default = "default_idle_timeout")]
    pub idle_timeout_secs: u64,
    #[serde(default = "default_max_lifetime")]
    pub max_lifetime_secs: u64,
    #[serde(default = "default_acquire_timeout")]
    pub acquire_timeout_secs: u64,
    #[serde(default)]
    pub sqlx_logging: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            max_connections: default_max_connections(),
            min_connections: default_min_connections(),
            connect_timeout_secs: default_connect_timeout(),
            idle_timeout_secs: default_idle_timeout(),
            max_lifetime_secs: default_max_lifetime(),
            acquire_timeout_secs: default_acquire_timeout(),
            sqlx_logging: false,
        }
    }
}

fn default_max_connections() -> u32 { 10 }
fn default_min_connections() -> u32 { 1 }
fn default_connect_timeout() -> u64 { 30 }
fn default_idle_timeout() -> u64 { 600 }
fn default_max_lifetime() -> u64 { 3600 }
fn default_acquire_timeout() -> u64 { 30 }

/// Where uploaded media lands on disk and how it is addressed publicly.
#[derive(Debug, Clone, Deserialize)]
pub struct MediaConfig {
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
    #[serde(default = "default_upload_dir")]
    pub upload_dir: String,
    #[serde(default = "default_public_prefix")]
    pub public_prefix: String,
    #[serde(default = "default_max_upload_bytes")]
    pub max_upload_bytes: usize,
}

impl Default for MediaConfig {
    fn default() -> Self {
        Self {
            static_dir: default_static_dir(),
            upload_dir: default_upload_dir(),
            public_prefix: default_public_prefix(),
            max_upload_bytes: default_max_upload_bytes(),
        }
    }
}

fn default_static_dir() -> String { "static".into() }
fn default_upload_dir() -> String { "static/uploads".into() }
fn default_public_prefix() -> String { "/static/uploads".into() }
fn default_max_upload_bytes() -> usize { 100 * 1024 * 1024 }

pub fn load_from_file(path: &str) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    let cfg: AppConfig = toml::from_str(&content).with_context(|| format!("invalid config file {path}"))?;
    Ok(cfg)
}

/// `explicit` (from `CONFIG_PATH`) must load. Without it only a missing `fallback`
/// file drops to defaults plus environment; a broken one is an error.
fn load_file_or_env(explicit: Option<&str>, fallback: &str) -> Result<AppConfig> {
    if let Some(path) = explicit {
        return load_from_file(path).with_context(|| format!("cannot load CONFIG_PATH={path}"));
    }
    match load_from_file(fallback) {
        Ok(cfg) => Ok(cfg),
        Err(e) if is_not_found(&e) => Ok(AppConfig::from_env()),
        Err(e) => Err(e.context(format!("cannot load {fallback}"))),
    }
}

fn is_not_found(e: &anyhow::Error) -> bool {
    e.downcast_ref::<std::io::Error>()
        .is_some_and(|io| io.kind() == std::io::ErrorKind::NotFound)
}

impl AppConfig {
    /// `CONFIG_PATH` or `config.toml` if present, otherwise defaults plus environment variables.
    pub fn load_or_env() -> Result<Self> {
        let explicit = std::env::var("CONFIG_PATH").ok();
        let mut cfg = load_file_or_env(explicit.as_deref(), DEFAULT_CONFIG_PATH)?;
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    pub fn from_env() -> Self {
        let mut cfg = Self::default();
        if let Ok(host) = std::env::var("SERVER_HOST") {
            cfg.server.host = host;
        }
        if let Some(port) = std::env::var("SERVER_PORT").ok().and_then(|p| p.parse::<u16>().ok()) {
            cfg.server.port = port;
        }
        cfg.server.worker_threads = std::env::var("TOKIO_WORKER_THREADS")
            .ok()
            .and_then(|v| v.parse::<usize>().ok());
        cfg
    }

    pub fn normalize_and_validate(&mut self) -> Result<()> {
        // 归一化 server
        self.server.normalize()?;
        // database：TOML 未给 URL 时从环境变量 DATABASE_URL 填充，最后回落到本地 SQLite
        self.database.normalize_from_env();
        self.database.validate()?;
        self.media.validate()?;
        Ok(())
    }
}

impl ServerConfig {
    fn normalize(&mut self) -> Result<()> {
        if self.host.trim().is_empty() {
            self.host = "127.0.0.1".to_string();
        }
        if self.port == 0 {
            return Err(anyhow!("server.port must be in 1..=65535"));
        }
        match self.worker_threads {
            Some(w) if w > 0 => {}
            _ => self.worker_threads = Some(4),
        }
        Ok(())
    }
}

impl DatabaseConfig {
    pub fn normalize_from_env(&mut self) {
        if self.url.trim().is_empty() {
            self.url = std::env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.url.trim().is_empty() {
            return Err(anyhow!("database.url is empty; set it in config.toml or DATABASE_URL"));
        }
        let lower = self.url.to_lowercase();
        if !(lower.starts_with("postgresql://") || lower.starts_with("postgres://") || lower.starts_with("sqlite:")) {
            return Err(anyhow!("database.url must start with postgres://, postgresql:// or sqlite:"));
        }
        if self.min_connections == 0 {
            return Err(anyhow!("database.min_connections must be >= 1"));
        }
        if self.max_connections < self.min_connections {
            return Err(anyhow!("database.max_connections must be >= min_connections"));
        }
        if self.connect_timeout_secs == 0 || self.acquire_timeout_secs == 0 {
            return Err(anyhow!("database timeouts must be positive seconds"));
        }
        Ok(())
    }

    /// Parent directory of a file-backed SQLite database; `None` for Postgres and in-memory URLs.
    pub fn sqlite_data_dir(&self) -> Option<PathBuf> {
        let rest = self.url.strip_prefix("sqlite://").or_else(|| self.url.strip_prefix("sqlite:"))?;
        let file = rest.split('?').next().unwrap_or_default();
        if file.is_empty() || file == ":memory:" {
            return None;
        }
        let parent = Path::new(file).parent()?;
        if parent.as_os_str().is_empty() {
            return None;
        }
        Some(parent.to_path_buf())
    }
}

impl MediaConfig {
    pub fn validate(&self) -> Result<()> {
        if self.upload_dir.trim().is_empty() {
            return Err(anyhow!("media.upload_dir is empty"));
        }
        if !self.public_prefix.starts_with('/') {
            return Err(anyhow!("media.public_prefix must start with '/'"));
        }
        if self.max_upload_bytes == 0 {
            return Err(anyhow!("media.max_upload_bytes must be > 0"));
        }
        // 上传文件经 STATIC_MOUNT 对外提供，返回的 URL 必须能取回文件
        let relative = Path::new(&self.upload_dir)
            .strip_prefix(&self.static_dir)
            .map_err(|_| anyhow!("media.upload_dir must be inside media.static_dir"))?;
        let expected = relative.components().fold(STATIC_MOUNT.to_string(), |mut url, part| {
            url.push('/');
            url.push_str(&part.as_os_str().to_string_lossy());
            url
        });
        if self.public_prefix.trim_end_matches('/') != expected {
            return Err(anyhow!("media.public_prefix must be {expected} for upload_dir {}", self.upload_dir));
        }
        Ok(())
    }
}

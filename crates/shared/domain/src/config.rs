use crate::verticals::VerticalSet;
use serde::Deserialize;
use std::net::{IpAddr, Ipv4Addr};
use std::ops::{Deref, DerefMut};
use std::path::PathBuf;
use std::sync::Arc;

/// Top-level API configuration shared across services.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfigInner {
    pub server: ServerConfig,
    pub unification: UnificationConfig,
    pub logging: LoggingConfig,
    pub runtime: RuntimeSettings,
}

/// Thin Arc-wrapped config for inexpensive cloning into subsystems.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(flatten, default)]
    inner: Arc<ApiConfigInner>,
}

impl Deref for ApiConfig {
    type Target = ApiConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for ApiConfig {
    fn deref_mut(&mut self) -> &mut ApiConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// HTTP server configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub address: IpAddr,
    pub port: u16,
    pub ssl: Option<SslConfig>,
}

/// TLS certificate/key paths.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SslConfig {
    pub cert: PathBuf,
    pub key: PathBuf,
}

/// Which mappers end up in the registry.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UnificationConfig {
    /// Verticals whose mappers are registered at startup.
    pub verticals: VerticalSet,
    /// Provider names excluded from the registry, whatever the vertical.
    pub disabled_providers: Vec<String>,
}

impl UnificationConfig {
    /// Case-insensitive check against [`UnificationConfig::disabled_providers`].
    #[must_use]
    pub fn is_disabled(&self, provider: &str) -> bool {
        let provider = provider.trim();
        self.disabled_providers.iter().any(|p| p.trim().eq_ignore_ascii_case(provider))
    }
}

/// Logging output settings, mapped onto the logger builder by the binaries.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub console: bool,
    pub json: bool,
    pub path: Option<PathBuf>,
    pub env_filter: Option<String>,
}

/// Async runtime preset and overrides.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RuntimeSettings {
    pub profile: RuntimeProfile,
    pub worker_threads: Option<usize>,
    pub thread_name: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuntimeProfile {
    #[default]
    Default,
    HighPerformance,
    MemoryEfficient,
}

// --- Default ---

impl Default for ServerConfig {
    fn default() -> Self {
        Self { address: IpAddr::V4(Ipv4Addr::UNSPECIFIED), port: 4583, ssl: None }
    }
}

impl Default for SslConfig {
    fn default() -> Self {
        Self { cert: PathBuf::from("cert.pem"), key: PathBuf::from("key.pem") }
    }
}

impl Default for UnificationConfig {
    fn default() -> Self {
        Self { verticals: VerticalSet::ALL, disabled_providers: Vec::new() }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".to_owned(), console: true, json: false, path: None, env_filter: None }
    }
}

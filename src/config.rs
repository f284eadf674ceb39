//! Dashboard configuration loaded from environment variables.
//!
//! All settings come from environment variables (or a `.env` file via
//! `dotenvy`). Missing or unparsable values fall back to defaults, except
//! `LISTEN_ADDR`, which must parse when set.

use std::net::SocketAddr;
use std::time::Duration;

use crate::domain::UserId;

/// How the creation workflow performs its create action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitMode {
    /// Wait the configured latency and accept without storing anything.
    Simulated,
    /// Wait the configured latency, then store the booking as `pending`.
    Repository,
}

impl SubmitMode {
    fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "simulated" => Some(Self::Simulated),
            "repository" => Some(Self::Repository),
            _ => None,
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable lines.
    Text,
    /// One JSON object per event.
    Json,
}

/// Top-level dashboard configuration.
///
/// Loaded once at startup via [`DashboardConfig::from_env`].
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    /// Socket address to bind the HTTP server to (e.g. `0.0.0.0:3000`).
    pub listen_addr: SocketAddr,

    /// User whose bookings the dashboard shows and creates.
    pub user_id: UserId,

    /// Fixed delay of a booking submission.
    pub submit_latency: Duration,

    /// Create action used by the booking workflow.
    pub submit_mode: SubmitMode,

    /// Whether to load demo bookings and notifications at startup.
    pub seed_demo_data: bool,

    /// Log output format.
    pub log_format: LogFormat,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from(([0, 0, 0, 0], 3000)),
            user_id: default_user_id(),
            submit_latency: Duration::from_millis(1500),
            submit_mode: SubmitMode::Simulated,
            seed_demo_data: true,
            log_format: LogFormat::Text,
        }
    }
}

impl DashboardConfig {
    /// Loads configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv().ok()` to optionally load a `.env` file.
    ///
    /// # Errors
    ///
    /// Returns an error if `LISTEN_ADDR` is set but cannot be parsed as
    /// a [`SocketAddr`].
    pub fn from_env() -> Result<Self, std::net::AddrParseError> {
        dotenvy::dotenv().ok();
        let defaults = Self::default();

        let listen_addr = match std::env::var("LISTEN_ADDR") {
            Ok(addr) => addr.parse::<SocketAddr>()?,
            Err(_) => defaults.listen_addr,
        };

        let user_id = std::env::var("DASHBOARD_USER_ID")
            .ok()
            .and_then(|v| v.parse::<uuid::Uuid>().ok())
            .map_or(defaults.user_id, UserId::from_uuid);

        let submit_latency = Duration::from_millis(parse_env("SUBMIT_LATENCY_MS", 1500));

        let submit_mode = std::env::var("SUBMIT_MODE")
            .ok()
            .and_then(|v| SubmitMode::parse(&v))
            .unwrap_or(defaults.submit_mode);

        let seed_demo_data = parse_env_bool("SEED_DEMO_DATA", defaults.seed_demo_data);

        let log_format = match std::env::var("LOG_FORMAT").ok().as_deref() {
            Some("json") | Some("JSON") => LogFormat::Json,
            _ => LogFormat::Text,
        };

        Ok(Self {
            listen_addr,
            user_id,
            submit_latency,
            submit_mode,
            seed_demo_data,
            log_format,
        })
    }
}

/// Fixed id of the demo user.
fn default_user_id() -> UserId {
    UserId::from_uuid(uuid::Uuid::from_u128(1))
}

/// Parses an environment variable as `T`, returning `default` on missing
/// or invalid values.
fn parse_env<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

/// Parses an environment variable as a boolean. Accepts `"true"`, `"1"`,
/// `"false"`, `"0"` (case-insensitive). Returns `default` otherwise.
fn parse_env_bool(key: &str, default: bool) -> bool {
    match std::env::var(key)
        .ok()
        .map(|v| v.to_ascii_lowercase())
        .as_deref()
    {
        Some("true") | Some("1") => true,
        Some("false") | Some("0") => false,
        _ => default,
    }
}

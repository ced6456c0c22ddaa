//! Server configuration from the environment

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::time::Duration;

/// Sender used when `CONTACT_FROM_EMAIL` is not set
pub const DEFAULT_FROM_EMAIL: &str = "Folio Contact <onboarding@resend.dev>";

/// Errors parsing configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A variable is set but cannot be parsed.
    #[error("invalid value for {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

/// Runtime configuration.
///
/// Secrets are optional at boot; a contact request arriving without them is
/// answered with a 500 instead of refusing to start the whole site.
#[derive(Clone, Debug)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    /// Static site root, served as the fallback
    pub web_root: PathBuf,
    /// Directory of audio files, served under `/songs`
    pub songs_dir: PathBuf,
    /// Files smaller than this are skipped by the song listing
    pub min_song_bytes: u64,
    pub rate_limit_max: usize,
    pub rate_limit_window: Duration,
    /// Key rate limits on `X-Forwarded-For` / `X-Real-IP` instead of the
    /// peer address. Only safe behind a proxy that overwrites them.
    pub trust_proxy_headers: bool,
    pub resend_api_key: Option<String>,
    pub turnstile_secret_key: Option<String>,
    pub contact_to_email: Option<String>,
    pub contact_from_email: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 8080,
            web_root: PathBuf::from("web"),
            songs_dir: PathBuf::from("web/songs"),
            min_song_bytes: 16 * 1024,
            rate_limit_max: 5,
            rate_limit_window: Duration::from_secs(10 * 60),
            trust_proxy_headers: false,
            resend_api_key: None,
            turnstile_secret_key: None,
            contact_to_email: None,
            contact_from_email: DEFAULT_FROM_EMAIL.to_string(),
        }
    }
}

impl Config {
    /// Read configuration from process environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`, falling back to defaults for
    /// unset or empty variables
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let defaults = Self::default();

        Ok(Self {
            host: parse_var("HOST", get("HOST"), defaults.host)?,
            port: parse_var("PORT", get("PORT"), defaults.port)?,
            web_root: get("WEB_ROOT").map(PathBuf::from).unwrap_or(defaults.web_root),
            songs_dir: get("SONGS_DIR").map(PathBuf::from).unwrap_or(defaults.songs_dir),
            min_song_bytes: parse_var("MIN_SONG_BYTES", get("MIN_SONG_BYTES"), defaults.min_song_bytes)?,
            rate_limit_max: parse_var("RATE_LIMIT_MAX", get("RATE_LIMIT_MAX"), defaults.rate_limit_max)?,
            rate_limit_window: parse_var(
                "RATE_LIMIT_WINDOW_SECS",
                get("RATE_LIMIT_WINDOW_SECS"),
                defaults.rate_limit_window.as_secs(),
            )
            .map(Duration::from_secs)?,
            trust_proxy_headers: parse_flag(
                "TRUST_PROXY_HEADERS",
                get("TRUST_PROXY_HEADERS"),
                defaults.trust_proxy_headers,
            )?,
            resend_api_key: get("RESEND_API_KEY"),
            turnstile_secret_key: get("TURNSTILE_SECRET_KEY"),
            contact_to_email: get("CONTACT_TO_EMAIL"),
            contact_from_email: get("CONTACT_FROM_EMAIL").unwrap_or(defaults.contact_from_email),
        })
    }

    #[inline]
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse_var<T: std::str::FromStr>(var: &'static str, value: Option<String>, default: T) -> Result<T, ConfigError> {
    match value {
        Some(value) => value.parse().map_err(|_| ConfigError::Invalid { var, value }),
        None => Ok(default),
    }
}

fn parse_flag(var: &'static str, value: Option<String>, default: bool) -> Result<bool, ConfigError> {
    match value.as_deref().map(str::to_ascii_lowercase).as_deref() {
        None => Ok(default),
        Some("1" | "true" | "yes" | "on") => Ok(true),
        Some("0" | "false" | "no" | "off") => Ok(false),
        Some(_) => Err(ConfigError::Invalid {
            var,
            value: value.unwrap_or_default(),
        }),
    }
}

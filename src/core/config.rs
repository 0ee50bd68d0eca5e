//! Server configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.

/// Log filter used when neither `LOG_FILTER` nor `RUST_LOG` is set
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// `tracing` filter directive
    /// Example: info,tripwise=debug
    pub log_filter: Option<String>,

    /// Serve `.br`/`.gz` siblings of static assets when present
    /// Disable with PRECOMPRESSED_ASSETS=false
    pub precompressed_assets: bool,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// `LOG_FILTER` takes precedence over `RUST_LOG`.
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            log_filter: non_empty("LOG_FILTER").or_else(|| non_empty("RUST_LOG")),
            precompressed_assets: non_empty("PRECOMPRESSED_ASSETS")
                .map(|v| parse_flag(&v))
                .unwrap_or(true),
        }
    }

    /// Filter directive to hand to `tracing_subscriber::EnvFilter`
    pub fn log_filter(&self) -> &str {
        self.log_filter.as_deref().unwrap_or(DEFAULT_LOG_FILTER)
    }
}

fn parse_flag(value: &str) -> bool {
    !matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "0" | "false" | "no" | "off"
    )
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

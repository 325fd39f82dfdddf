use std::time::Duration;

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Simulated import step delays.
    pub import_delays: ImportDelays,
}

/// Delays between the import engine's staged status transitions.
///
/// The defaults reproduce the canonical simulation timing: 1s to start
/// cloning, then 2s each for the remaining two stages.
#[derive(Debug, Clone, Copy)]
pub struct ImportDelays {
    /// Wait before `pending -> cloning`.
    pub to_cloning: Duration,
    /// Wait before `cloning -> setting_up`.
    pub to_setting_up: Duration,
    /// Wait before `setting_up -> ready`.
    pub to_ready: Duration,
}

impl Default for ImportDelays {
    fn default() -> Self {
        Self {
            to_cloning: Duration::from_millis(1000),
            to_setting_up: Duration::from_millis(2000),
            to_ready: Duration::from_millis(2000),
        }
    }
}

impl ImportDelays {
    /// Uniform delays, mainly for tests that want millisecond pipelines.
    pub fn uniform(delay: Duration) -> Self {
        Self {
            to_cloning: delay,
            to_setting_up: delay,
            to_ready: delay,
        }
    }

    /// Load delays from environment variables, falling back to the defaults.
    ///
    /// | Env Var                      | Default (ms) |
    /// |------------------------------|--------------|
    /// | `IMPORT_DELAY_CLONING_MS`    | `1000`       |
    /// | `IMPORT_DELAY_SETTING_UP_MS` | `2000`       |
    /// | `IMPORT_DELAY_READY_MS`      | `2000`       |
    pub fn from_env() -> Self {
        let ms = |var: &str, default: u64| {
            std::env::var(var)
                .ok()
                .and_then(|v| v.parse().ok())
                .map(Duration::from_millis)
                .unwrap_or(Duration::from_millis(default))
        };
        Self {
            to_cloning: ms("IMPORT_DELAY_CLONING_MS", 1000),
            to_setting_up: ms("IMPORT_DELAY_SETTING_UP_MS", 2000),
            to_ready: ms("IMPORT_DELAY_READY_MS", 2000),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            import_delays: ImportDelays::from_env(),
        }
    }
}

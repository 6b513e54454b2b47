/// Server configuration loaded from environment variables.
///
/// Constructed once in `main` and carried in [`crate::state::AppState`];
/// handlers never read the environment directly.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `8000`).
    pub port: u16,
    /// Whether `RUNNING_IN_PRODUCTION` is set to a non-empty value.
    /// Consumed only by the presentation layer.
    pub prod: bool,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                 | Default   |
    /// |-------------------------|-----------|
    /// | `HOST`                  | `0.0.0.0` |
    /// | `PORT`                  | `8000`    |
    /// | `RUNNING_IN_PRODUCTION` | unset     |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "8000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let prod = std::env::var("RUNNING_IN_PRODUCTION")
            .map(|v| !v.is_empty())
            .unwrap_or(false);

        Self { host, port, prod }
    }
}

use figment::providers::{Env, Serialized};
use figment::Figment;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use url::Url;

/// Runtime configuration, extracted from `PAYBOARD_*` environment variables
/// on top of built-in defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// SQLite database URL, e.g. `sqlite:payboard.sqlite`.
    pub database_url: String,
    /// Address the HTTP server binds to.
    pub listen_addr: String,
    /// Default log level when `RUST_LOG` is unset.
    pub loglevel: String,
    /// Base URL the console client talks to.
    pub base_url: Url,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: "sqlite:payboard.sqlite".to_string(),
            listen_addr: "0.0.0.0:3000".to_string(),
            loglevel: "info".to_string(),
            base_url: Url::parse("http://localhost:3000")
                .expect("default base_url is a valid URL"),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, figment::Error> {
        Figment::from(Serialized::defaults(Config::default()))
            .merge(Env::prefixed("PAYBOARD_"))
            .extract()
    }
}

pub static CONFIG: LazyLock<Config> = LazyLock::new(|| {
    Config::from_env().unwrap_or_else(|e| {
        eprintln!("invalid PAYBOARD_* configuration, falling back to defaults: {e}");
        Config::default()
    })
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_usable() {
        let cfg = Config::default();
        assert_eq!(cfg.listen_addr, "0.0.0.0:3000");
        assert_eq!(cfg.base_url.as_str(), "http://localhost:3000/");
    }
}

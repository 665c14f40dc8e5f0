//! Server Configuration
//!
//! Command-line flags, each with an environment variable fallback. A `.env`
//! file in the working directory is loaded before parsing (see `main.rs`).

use clap::Parser;
use std::path::PathBuf;

/// Default upload size cap: 10 MiB.
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

#[derive(Debug, Clone, Parser)]
#[command(name = "submission-search", version, about)]
pub struct ServerConfig {
    /// Interface to bind the HTTP server to
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to bind the HTTP server to
    #[arg(long, env = "PORT", default_value_t = 3000)]
    pub port: u16,

    /// Directory of the bundled front end, served for every unmatched path
    #[arg(long, env = "STATIC_DIR", default_value = "dist")]
    pub static_dir: PathBuf,

    /// Largest accepted request body for uploads, in bytes
    #[arg(long, env = "MAX_UPLOAD_BYTES", default_value_t = DEFAULT_MAX_UPLOAD_BYTES)]
    pub max_upload_bytes: usize,

    /// Allowed CORS origins; none means any origin
    #[arg(long = "cors-origin", env = "CORS_ORIGINS", value_delimiter = ',')]
    pub cors_origins: Vec<String>,

    /// Start with an empty store instead of the two sample records
    #[arg(long)]
    pub no_seed: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            static_dir: PathBuf::from("dist"),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            cors_origins: Vec::new(),
            no_seed: false,
        }
    }
}

impl ServerConfig {
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.port, 3000);
        assert_eq!(config.max_upload_bytes, 10 * 1024 * 1024);
        assert!(config.cors_origins.is_empty());
        assert!(!config.no_seed);
    }

    #[test]
    fn test_socket_addr() {
        let config = ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 8080,
            ..Default::default()
        };
        assert_eq!(config.socket_addr(), "127.0.0.1:8080");
    }

    #[test]
    fn test_parse_flags() {
        let config = ServerConfig::try_parse_from([
            "submission-search",
            "--port",
            "4000",
            "--cors-origin",
            "http://localhost:5173,http://localhost:3000",
            "--no-seed",
        ])
        .unwrap();

        assert_eq!(config.port, 4000);
        assert_eq!(config.cors_origins.len(), 2);
        assert!(config.no_seed);
    }
}

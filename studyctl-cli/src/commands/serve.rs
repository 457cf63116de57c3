//! HTTP server command
//!
//! Runs the study scheduler API. Settings come from the environment (see
//! `ServerConfig::from_env`) and are overridden by flags.

use anyhow::{Context, Result};
use clap::Parser;

use studyctl_server::ServerConfig;

/// Arguments for the serve command
#[derive(Parser, Debug, Default)]
pub struct ServeArgs {
    /// Host to bind to (overrides HOST)
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on (overrides PORT)
    #[arg(long, short = 'p')]
    pub port: Option<u16>,

    /// Database URL (overrides DATABASE_URL)
    #[arg(long)]
    pub database_url: Option<String>,

    /// Extra CORS origin, repeatable
    #[arg(long = "allowed-origin", value_name = "ORIGIN")]
    pub allowed_origins: Vec<String>,

    /// Keep records in memory instead of PostgreSQL (lost on exit)
    #[arg(long)]
    pub memory: bool,
}

impl ServeArgs {
    fn apply(&self, config: &mut ServerConfig) {
        if let Some(host) = &self.host {
            config.host = host.clone();
        }
        if let Some(port) = self.port {
            config.port = port;
        }
        if let Some(url) = &self.database_url {
            config.database_url = url.clone();
        }
        for origin in &self.allowed_origins {
            config.add_origin(origin);
        }
    }
}

/// Run the HTTP server (blocks until shutdown)
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let mut config = ServerConfig::from_env().context("Invalid server configuration")?;
    args.apply(&mut config);

    if args.memory {
        studyctl_server::serve_in_memory(config)
            .await
            .context("Server error")?;
    } else {
        studyctl_server::serve(config).await.context("Server error")?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_config() {
        let args = ServeArgs {
            host: Some("0.0.0.0".into()),
            port: Some(9000),
            database_url: Some("postgres://db/plans".into()),
            allowed_origins: vec!["https://planner.example.org".into()],
            memory: false,
        };
        let mut config = ServerConfig::default();
        args.apply(&mut config);

        assert_eq!(config.bind_addr(), "0.0.0.0:9000");
        assert_eq!(config.database_url, "postgres://db/plans");
        assert_eq!(
            config.allowed_origins,
            vec!["http://localhost:3000", "https://planner.example.org"]
        );
    }

    #[test]
    fn no_flags_leave_config_alone() {
        let mut config = ServerConfig::default();
        ServeArgs::default().apply(&mut config);
        assert_eq!(config, ServerConfig::default());
    }
}

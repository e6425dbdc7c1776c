use std::net::{IpAddr, SocketAddr};

use axum::http::HeaderValue;
use clap::Parser;
use color_eyre::{eyre::eyre, Result};

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 5000;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "utility-hub",
    version,
    about = "Calculator, abbreviation and credentials API"
)]
pub struct CliArgs {
    /// Address to listen on
    #[arg(long, env = "HOST", default_value = DEFAULT_HOST)]
    pub host: String,

    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Comma separated list of allowed CORS origins. Every origin is allowed when unset
    #[arg(long, env = "CORS_ORIGINS", value_delimiter = ',')]
    pub cors_origins: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorsPolicy {
    Permissive,
    AllowList(Vec<HeaderValue>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_address: SocketAddr,
    pub cors: CorsPolicy,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: SocketAddr::from(([0, 0, 0, 0], DEFAULT_PORT)),
            cors: CorsPolicy::Permissive,
        }
    }
}

impl ServerConfig {
    pub fn from_args(args: CliArgs) -> Result<Self> {
        let CliArgs {
            host,
            port,
            cors_origins,
        } = args;

        let ip: IpAddr = host
            .trim()
            .parse()
            .map_err(|e| eyre!("Invalid host address {host:?}: {e}"))?;

        let cors = match cors_origins {
            Some(origins) => {
                let origins = origins
                    .iter()
                    .map(|origin| origin.trim().trim_end_matches('/'))
                    .filter(|origin| !origin.is_empty())
                    .map(|origin| {
                        HeaderValue::from_str(origin)
                            .map_err(|e| eyre!("Invalid CORS origin {origin:?}: {e}"))
                    })
                    .collect::<Result<Vec<_>>>()?;
                if origins.is_empty() {
                    CorsPolicy::Permissive
                } else {
                    CorsPolicy::AllowList(origins)
                }
            }
            None => CorsPolicy::Permissive,
        };

        Ok(Self {
            bind_address: SocketAddr::new(ip, port),
            cors,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> ServerConfig {
        let argv = std::iter::once("utility-hub").chain(args.iter().copied());
        let args = CliArgs::try_parse_from(argv).unwrap();
        ServerConfig::from_args(args).unwrap()
    }

    #[test]
    fn test_explicit_args() {
        let config = parse(&["--host", "127.0.0.1", "--port", "8080"]);
        assert_eq!(config.bind_address, "127.0.0.1:8080".parse().unwrap());
        assert_eq!(config.cors, CorsPolicy::Permissive);
    }

    #[test]
    fn test_cors_allow_list() {
        let config = parse(&[
            "--host",
            "::1",
            "--cors-origins",
            "http://localhost:3000/, https://example.com",
        ]);
        assert_eq!(
            config.cors,
            CorsPolicy::AllowList(vec![
                HeaderValue::from_static("http://localhost:3000"),
                HeaderValue::from_static("https://example.com")
            ])
        );
    }

    #[test]
    fn test_invalid_host() {
        let args = CliArgs {
            host: "not an ip".to_string(),
            port: 5000,
            cors_origins: None,
        };
        assert!(ServerConfig::from_args(args).is_err());
    }
}

//! Centralized configuration (environment variables + defaults).
//!
//! Values may come from the process environment or a `.env` file loaded by the
//! server binary before any of these are read.

use anyhow::Context;
use std::net::SocketAddr;
use std::path::PathBuf;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_LOG_FILTER: &str = "product_lookup_api=info,api_server=info,tower_http=info";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

/// Interface to bind (`HOST`, default `0.0.0.0`).
pub fn host() -> String {
    non_empty_var("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string())
}

/// Listening port (`PORT`, default `8080`).
pub fn port() -> anyhow::Result<u16> {
    parse_port(non_empty_var("PORT").as_deref())
}

fn parse_port(value: Option<&str>) -> anyhow::Result<u16> {
    match value {
        Some(v) => v
            .parse::<u16>()
            .with_context(|| format!("PORT must be a valid port number, got '{}'", v)),
        None => Ok(DEFAULT_PORT),
    }
}

pub fn bind_addr() -> anyhow::Result<SocketAddr> {
    let addr = format!("{}:{}", host(), port()?);
    addr.parse::<SocketAddr>()
        .with_context(|| format!("invalid bind address '{}'", addr))
}

/// Optional JSON file that replaces the embedded datasets (`CATALOG_PATH`).
pub fn catalog_path() -> Option<PathBuf> {
    non_empty_var("CATALOG_PATH").map(PathBuf::from)
}

/// Tracing filter used when `RUST_LOG` is not set.
pub fn log_filter() -> String {
    non_empty_var("RUST_LOG").unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string())
}

/// `LOG_FORMAT=json` switches to structured JSON logs; anything else is text.
pub fn log_format() -> LogFormat {
    parse_log_format(non_empty_var("LOG_FORMAT").as_deref())
}

fn parse_log_format(value: Option<&str>) -> LogFormat {
    match value {
        Some(v) if v.eq_ignore_ascii_case("json") => LogFormat::Json,
        _ => LogFormat::Text,
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn port_defaults_when_unset() {
        assert_eq!(parse_port(None).unwrap(), DEFAULT_PORT);
        assert_eq!(parse_port(Some("3000")).unwrap(), 3000);
    }

    #[test]
    fn invalid_port_names_the_variable_and_value() {
        for bad in ["eighty", "70000", "-1"] {
            let err = parse_port(Some(bad)).unwrap_err();
            assert_eq!(
                err.to_string(),
                format!("PORT must be a valid port number, got '{}'", bad)
            );
        }
    }

    #[test]
    fn log_format_switch_is_case_insensitive() {
        assert_eq!(parse_log_format(Some("json")), LogFormat::Json);
        assert_eq!(parse_log_format(Some("JSON")), LogFormat::Json);
        assert_eq!(parse_log_format(Some("Json")), LogFormat::Json);
        assert_eq!(parse_log_format(Some("text")), LogFormat::Text);
        assert_eq!(parse_log_format(Some("yaml")), LogFormat::Text);
        assert_eq!(parse_log_format(None), LogFormat::Text);
    }
}

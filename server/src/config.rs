//! Host configuration parsed from environment variables.
//!
//! - `PORT`: listen port, default 3000
//! - `BIND_ADDR`: listen address, default `0.0.0.0`
//! - `SITE_ROOT`: overrides the Leptos `site-root` holding `pkg/`
//! - `COMPRESSION`: gzip responses, default on
//!
//! Blank values count as unset.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::path::PathBuf;

use crate::error::HostError;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    pub port: u16,
    pub bind_addr: String,
    pub site_root: Option<PathBuf>,
    pub compression: bool,
}

impl HostConfig {
    /// # Errors
    ///
    /// Returns `HostError::InvalidPort` when `PORT` is set but not a port number.
    pub fn from_env() -> Result<Self, HostError> {
        Ok(Self {
            port: parse_port(env_value("PORT").as_deref())?,
            bind_addr: env_value("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_owned()),
            site_root: env_value("SITE_ROOT").map(PathBuf::from),
            compression: env_bool("COMPRESSION").unwrap_or(true),
        })
    }

    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }
}

fn env_value(key: &str) -> Option<String> {
    std::env::var(key).ok().map(|v| v.trim().to_owned()).filter(|v| !v.is_empty())
}

pub(crate) fn parse_port(raw: Option<&str>) -> Result<u16, HostError> {
    match raw {
        None => Ok(DEFAULT_PORT),
        Some(value) => value.trim().parse().map_err(|_| HostError::InvalidPort(value.to_owned())),
    }
}

pub(crate) fn env_bool(key: &str) -> Option<bool> {
    env_value(key).and_then(|raw| match raw.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    })
}

//! Runtime configuration for the combined server.
//!
//! Environment variables are read once at startup and resolved into a [`ServerConfig`] that is
//! passed to the servers. Parsing works on plain optional values so it can be tested without
//! touching the process environment.

use std::net::SocketAddr;

const DEFAULT_GRPC_ADDR: &str = "0.0.0.0:50051";
const DEFAULT_REST_ADDR: &str = "0.0.0.0:3000";

/// Server configuration resolved at startup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub grpc_addr: SocketAddr,
    pub rest_addr: String,
    pub enable_reflection: bool,
}

impl ServerConfig {
    /// Reads `MCDONALD_ADDR`, `MCDONALD_REST_ADDR` and `MCDONALD_ENABLE_REFLECTION`.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_values(
            std::env::var("MCDONALD_ADDR").ok(),
            std::env::var("MCDONALD_REST_ADDR").ok(),
            std::env::var("MCDONALD_ENABLE_REFLECTION").ok(),
        )
    }

    /// Builds a configuration from optional raw values, applying defaults for missing ones.
    ///
    /// # Errors
    ///
    /// Returns an error if the gRPC address is not a valid socket address.
    pub fn from_values(
        grpc_addr: Option<String>,
        rest_addr: Option<String>,
        enable_reflection: Option<String>,
    ) -> anyhow::Result<Self> {
        let grpc_addr = grpc_addr
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_GRPC_ADDR.into());
        let grpc_addr: SocketAddr = grpc_addr
            .trim()
            .parse()
            .map_err(|e| anyhow::anyhow!("invalid MCDONALD_ADDR {grpc_addr:?}: {e}"))?;

        let rest_addr = rest_addr
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_REST_ADDR.into());

        Ok(Self {
            grpc_addr,
            rest_addr,
            enable_reflection: enable_reflection.as_deref().map(str::trim) == Some("true"),
        })
    }
}

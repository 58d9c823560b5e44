use std::net::SocketAddr;

use anyhow::{Context, Result};

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    /// Start with the five fixture todos instead of an empty store.
    pub seed_todos: bool,
}

impl AppConfig {
    /// Reads `BIND_ADDR` and `SEED_TODOS` from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let raw_addr = lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = raw_addr.parse::<SocketAddr>().with_context(|| format!("invalid BIND_ADDR {raw_addr:?}"))?;
        let seed_todos = match lookup("SEED_TODOS").as_deref().map(str::trim) {
            None | Some("") => true,
            Some(v) if v.eq_ignore_ascii_case("true") || v == "1" => true,
            Some(v) if v.eq_ignore_ascii_case("false") || v == "0" => false,
            Some(v) => anyhow::bail!("invalid SEED_TODOS {v:?}, expected true or false"),
        };
        Ok(Self { bind_addr, seed_todos })
    }
}

use std::env;
use std::net::SocketAddr;

use zentrack_core::models::trend::DEFAULT_TREND_CAPACITY;
use zentrack_instruments::engine::UnsetPolicy;

pub const BIND_ADDR_VAR: &str = "ZENTRACK_BIND_ADDR";
pub const UNSET_POLICY_VAR: &str = "ZENTRACK_UNSET_POLICY";
pub const TREND_CAPACITY_VAR: &str = "ZENTRACK_TREND_CAPACITY";
pub const SESSION_IDLE_SECS_VAR: &str = "ZENTRACK_SESSION_IDLE_SECS";

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";
const DEFAULT_SESSION_IDLE_SECS: u64 = 60 * 60;

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub bind_addr: SocketAddr,
    pub unset_policy: UnsetPolicy,
    pub trend_capacity: usize,
    /// Sessions untouched for longer than this are dropped.
    pub session_idle_secs: u64,
}

impl ApiConfig {
    pub fn from_env() -> eyre::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from any key lookup. Missing keys take defaults;
    /// present but unparseable values are an error.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> eyre::Result<Self> {
        let bind_addr = lookup(BIND_ADDR_VAR)
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse::<SocketAddr>()
            .map_err(|e| eyre::eyre!("invalid {BIND_ADDR_VAR}: {e}"))?;

        let unset_policy = match lookup(UNSET_POLICY_VAR) {
            Some(raw) => raw.parse::<UnsetPolicy>()?,
            None => UnsetPolicy::default(),
        };

        let trend_capacity = match lookup(TREND_CAPACITY_VAR) {
            Some(raw) => raw
                .parse::<usize>()
                .map_err(|e| eyre::eyre!("invalid {TREND_CAPACITY_VAR} '{raw}': {e}"))?,
            None => DEFAULT_TREND_CAPACITY,
        };

        let session_idle_secs = match lookup(SESSION_IDLE_SECS_VAR) {
            Some(raw) => raw
                .parse::<u64>()
                .map_err(|e| eyre::eyre!("invalid {SESSION_IDLE_SECS_VAR} '{raw}': {e}"))?,
            None => DEFAULT_SESSION_IDLE_SECS,
        };

        Ok(Self {
            bind_addr,
            unset_policy,
            trend_capacity,
            session_idle_secs,
        })
    }
}

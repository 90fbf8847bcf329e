//! Redis version probe.
//!
//! Issues a single `INFO` command and extracts the `redis_version` field
//! from the reply.

use std::sync::LazyLock;

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use regex::Regex;
use tracing::debug;

use super::{ProbeOutcome, ServiceProbe};
use crate::config::RedisConfig;

/// Matches the `redis_version:` line of an INFO reply.
static RE_REDIS_VERSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^redis_version:([^\r\n]+)").unwrap());

/// Probes a Redis server for its version.
pub struct RedisProbe {
    config: RedisConfig,
}

impl RedisProbe {
    pub fn new(config: RedisConfig) -> Self {
        Self { config }
    }

    async fn server_version(&self) -> Result<String> {
        let url = format!("redis://{}:{}/", self.config.host, self.config.port);
        let client = redis::Client::open(url)?;
        // Connection and client are dropped (and released) at the end of
        // this scope, success or failure.
        let mut conn = client.get_multiplexed_async_connection().await?;
        let info: String = redis::cmd("INFO").query_async(&mut conn).await?;
        extract_version(&info).ok_or_else(|| anyhow!("no redis_version field in INFO reply"))
    }
}

/// Extract the `redis_version` field from an INFO reply.
fn extract_version(info: &str) -> Option<String> {
    RE_REDIS_VERSION
        .captures(info)
        .map(|caps| caps[1].trim().to_string())
}

#[async_trait]
impl ServiceProbe for RedisProbe {
    fn service(&self) -> &str {
        "Redis"
    }

    async fn probe(&self) -> ProbeOutcome {
        match self.server_version().await {
            Ok(version) => ProbeOutcome::Version(version),
            Err(e) => {
                debug!("Redis probe against {} failed: {e}", self.config.host);
                ProbeOutcome::Unavailable(e.to_string())
            }
        }
    }
}

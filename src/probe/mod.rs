//! Version probes for the backing services of the container.
//!
//! Each probe owns its endpoint settings and performs exactly one connection
//! attempt and one version query per invocation. Failures never escape a
//! probe: every outcome is folded into [`ProbeOutcome`], so one unreachable
//! service cannot keep the rest of the page from rendering.

#[cfg(feature = "mongodb")]
pub mod mongo;
#[cfg(feature = "mysql")]
pub mod mysql;
#[cfg(feature = "redis")]
pub mod redis;

use async_trait::async_trait;

use crate::config::Config;

/// The result of probing a single backing service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// The service answered; holds its self-reported version string.
    Version(String),
    /// The service could not be queried; holds the text shown in its place.
    Unavailable(String),
}

impl ProbeOutcome {
    /// The text rendered in the version list for this outcome.
    pub fn display_text(&self) -> &str {
        match self {
            ProbeOutcome::Version(version) => version,
            ProbeOutcome::Unavailable(reason) => reason,
        }
    }

    /// Whether the probe reached the service and read a version.
    pub fn is_available(&self) -> bool {
        matches!(self, ProbeOutcome::Version(_))
    }
}

/// A version probe against one backing service.
#[async_trait]
pub trait ServiceProbe: Send + Sync {
    /// Service name used in the rendered version list (e.g. "MySQL").
    fn service(&self) -> &str;

    /// Open one connection, issue one version query, classify the outcome.
    async fn probe(&self) -> ProbeOutcome;
}

/// Stand-in probe registered when a driver is not compiled into the binary.
///
/// Reports the localized "extension not installed" line without touching
/// the network.
pub struct MissingDriver {
    service: &'static str,
}

impl MissingDriver {
    pub fn new(service: &'static str) -> Self {
        Self { service }
    }
}

#[async_trait]
impl ServiceProbe for MissingDriver {
    fn service(&self) -> &str {
        self.service
    }

    async fn probe(&self) -> ProbeOutcome {
        ProbeOutcome::Unavailable(format!("{} 扩展未安装 ×", self.service))
    }
}

/// Assemble the probe set for this build, in page order.
///
/// A driver compiled out via cargo features is replaced by [`MissingDriver`],
/// so the page still carries a line for the service.
pub fn build_probes(config: &Config) -> Vec<Box<dyn ServiceProbe>> {
    let mut probes: Vec<Box<dyn ServiceProbe>> = Vec::with_capacity(3);

    #[cfg(feature = "mysql")]
    probes.push(Box::new(mysql::MySqlProbe::new(config.mysql.clone())));
    #[cfg(not(feature = "mysql"))]
    probes.push(Box::new(MissingDriver::new("MySQL")));

    #[cfg(feature = "redis")]
    probes.push(Box::new(redis::RedisProbe::new(config.redis.clone())));
    #[cfg(not(feature = "redis"))]
    probes.push(Box::new(MissingDriver::new("Redis")));

    #[cfg(feature = "mongodb")]
    probes.push(Box::new(mongo::MongoProbe::new(config.mongo.clone())));
    #[cfg(not(feature = "mongodb"))]
    probes.push(Box::new(MissingDriver::new("MongoDB")));

    // `config` goes unused only when every driver is compiled out.
    let _ = config;
    probes
}

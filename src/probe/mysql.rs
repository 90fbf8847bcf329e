//! MySQL version probe.
//!
//! One short-lived connection, one `SELECT VERSION()`, explicit close on
//! the way out.

use async_trait::async_trait;
use sqlx::mysql::{MySqlConnectOptions, MySqlSslMode};
use sqlx::{ConnectOptions, Connection};
use tracing::debug;

use super::{ProbeOutcome, ServiceProbe};
use crate::config::MySqlConfig;

/// Probes a MySQL server for its version.
pub struct MySqlProbe {
    config: MySqlConfig,
}

impl MySqlProbe {
    pub fn new(config: MySqlConfig) -> Self {
        Self { config }
    }

    async fn server_version(&self) -> Result<String, sqlx::Error> {
        let options = MySqlConnectOptions::new()
            .host(&self.config.host)
            .port(self.config.port)
            .username(&self.config.user)
            .password(&self.config.password)
            .database(&self.config.database)
            // The container fixture speaks plaintext.
            .ssl_mode(MySqlSslMode::Disabled);

        let mut conn = options.connect().await?;
        let version: Result<String, sqlx::Error> = sqlx::query_scalar("SELECT VERSION()")
            .fetch_one(&mut conn)
            .await;
        // Release the connection before reporting the query outcome.
        conn.close().await?;
        version
    }
}

#[async_trait]
impl ServiceProbe for MySqlProbe {
    fn service(&self) -> &str {
        "MySQL"
    }

    async fn probe(&self) -> ProbeOutcome {
        match self.server_version().await {
            Ok(version) => ProbeOutcome::Version(version),
            Err(e) => {
                debug!("MySQL probe against {} failed: {e}", self.config.host);
                ProbeOutcome::Unavailable(e.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Debug, Parser)]
    struct Wrapper {
        #[command(flatten)]
        mysql: MySqlConfig,
    }

    #[test]
    fn probe_reports_its_service_name() {
        let wrapper = Wrapper::parse_from(["test"]);
        let probe = MySqlProbe::new(wrapper.mysql);
        assert_eq!(probe.service(), "MySQL");
    }
}

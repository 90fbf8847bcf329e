//! MongoDB version probe.
//!
//! Runs the `serverStatus` administrative command and reads its `version`
//! field.

use anyhow::Result;
use async_trait::async_trait;
use mongodb::bson::doc;
use mongodb::Client;
use tracing::debug;

use super::{ProbeOutcome, ServiceProbe};
use crate::config::MongoConfig;

/// Probes a MongoDB server for its version.
pub struct MongoProbe {
    config: MongoConfig,
}

impl MongoProbe {
    pub fn new(config: MongoConfig) -> Self {
        Self { config }
    }

    async fn server_version(&self) -> Result<String> {
        let client = Client::with_uri_str(&self.config.uri).await?;
        let reply = client
            .database("admin")
            .run_command(doc! { "serverStatus": 1 })
            .await;
        // Shut the client down before reporting the command outcome.
        client.shutdown().await;
        Ok(reply?.get_str("version")?.to_string())
    }
}

#[async_trait]
impl ServiceProbe for MongoProbe {
    fn service(&self) -> &str {
        "MongoDB"
    }

    async fn probe(&self) -> ProbeOutcome {
        match self.server_version().await {
            Ok(version) => ProbeOutcome::Version(version),
            Err(e) => {
                debug!("MongoDB probe failed: {e}");
                ProbeOutcome::Unavailable(e.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn probe_reports_its_service_name() {
        let probe = MongoProbe::new(MongoConfig {
            uri: "mongodb://localhost:27017".to_string(),
        });
        assert_eq!(probe.service(), "MongoDB");
    }
}

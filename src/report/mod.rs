//! Report assembly.
//!
//! The [`Reporter`] runs the configured probes strictly in registration
//! order and bundles their outcomes with the build metadata and the
//! extension table into a [`StatusReport`] ready for rendering.

pub mod extensions;

use tracing::debug;

use self::extensions::ExtensionInfo;
use crate::probe::{ProbeOutcome, ServiceProbe};

/// Rust compiler version the binary was built with.
pub fn runtime_version() -> &'static str {
    env!("VERGEN_RUSTC_SEMVER")
}

/// One service line of the version list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceReport {
    /// Service name (e.g. "MySQL").
    pub service: String,
    /// What the probe found.
    pub outcome: ProbeOutcome,
}

/// Everything the status page displays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusReport {
    /// Compiler version captured at build time.
    pub runtime_version: String,
    /// Fronting server identity, untrusted until escaped by the renderer.
    pub server_software: String,
    /// Probe outcomes, in probe registration order.
    pub services: Vec<ServiceReport>,
    /// Modules linked into the binary.
    pub extensions: Vec<ExtensionInfo>,
}

/// Gathers one [`StatusReport`] per invocation.
///
/// Probes are injected, so tests substitute fakes without a network. The
/// reporter holds no mutable state: two runs against unchanged services
/// produce identical reports.
pub struct Reporter {
    server_software: String,
    probes: Vec<Box<dyn ServiceProbe>>,
}

impl Reporter {
    pub fn new(server_software: impl Into<String>, probes: Vec<Box<dyn ServiceProbe>>) -> Self {
        Self {
            server_software: server_software.into(),
            probes,
        }
    }

    /// Run every probe once, strictly in registration order.
    ///
    /// A failing probe contributes its failure text and the sequence moves
    /// on; nothing here returns an error.
    pub async fn run(&self) -> StatusReport {
        let mut services = Vec::with_capacity(self.probes.len());
        for probe in &self.probes {
            let outcome = probe.probe().await;
            debug!(service = probe.service(), ?outcome, "probe finished");
            services.push(ServiceReport {
                service: probe.service().to_string(),
                outcome,
            });
        }

        StatusReport {
            runtime_version: runtime_version().to_string(),
            server_software: self.server_software.clone(),
            services,
            extensions: extensions::loaded_extensions(),
        }
    }
}

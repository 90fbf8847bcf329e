//! The extension table: modules linked into the binary.
//!
//! The closest thing a compiled binary has to a loaded-module table is its
//! dependency set. The crate's lockfile is embedded at build time and parsed
//! on demand; each package becomes one [`ExtensionInfo`] entry, in lockfile
//! order, first occurrence winning when a name appears twice.

use std::collections::HashSet;

use anyhow::{Context, Result};
use serde::Deserialize;

/// The lockfile the binary was built from.
const LOCKFILE: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/Cargo.lock"));

/// One module linked into the binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionInfo {
    /// Package name.
    pub name: String,
    /// Package version as recorded in the lockfile.
    pub version: String,
}

#[derive(Debug, Deserialize)]
struct Lockfile {
    #[serde(default)]
    package: Vec<LockedPackage>,
}

#[derive(Debug, Deserialize)]
struct LockedPackage {
    name: String,
    version: String,
}

/// Enumerate the modules linked into this binary.
///
/// Never fails: a malformed embedded table is logged and reported as empty,
/// like every other fault on the page.
pub fn loaded_extensions() -> Vec<ExtensionInfo> {
    match parse_lockfile(LOCKFILE) {
        Ok(extensions) => extensions,
        Err(e) => {
            tracing::warn!("failed to parse the embedded dependency table: {e}");
            Vec::new()
        }
    }
}

/// Parse a lockfile into extension entries.
///
/// The binary's own package is excluded; duplicate names (a lockfile may pin
/// two versions of one package) keep their first occurrence.
fn parse_lockfile(input: &str) -> Result<Vec<ExtensionInfo>> {
    let lockfile: Lockfile = toml::from_str(input).context("invalid lockfile")?;

    let mut seen = HashSet::new();
    let mut extensions = Vec::with_capacity(lockfile.package.len());
    for package in lockfile.package {
        if package.name == env!("CARGO_PKG_NAME") {
            continue;
        }
        if seen.insert(package.name.clone()) {
            extensions.push(ExtensionInfo {
                name: package.name,
                version: package.version,
            });
        }
    }
    Ok(extensions)
}

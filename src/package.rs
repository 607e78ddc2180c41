//! Installed package records, one per line of the queue file.
//!
//! A record line reads `NAME ARCH VERSION REPO`, e.g.
//! `bash x86_64 0:5.2.26-3.fc40 updates`.

use anyhow::{Result, bail};
use regex::Regex;
use std::str::FromStr;
use std::sync::LazyLock;

use crate::repo_map::URL_SEP;

/// Leading `digits:` epoch (ASCII digits only), followed by the version proper.
static VERSION_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:[0-9]+:)?(.+)").unwrap());

const NAME_VER_SEP: char = '-';
const VER_ARCH_SEP: char = '.';
const FILE_EXT: &str = ".rpm";

/// Drop an `N:` epoch prefix from a version string.
///
/// A version consisting of nothing but an epoch (`"3:"`) is returned as is.
pub fn strip_epoch(version: &str) -> &str {
    VERSION_REGEX
        .captures(version)
        .and_then(|caps| caps.get(1))
        .map_or(version, |m| m.as_str())
}

/// An installed package, as listed in the queue file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageRecord {
    pub name: String,
    pub arch: String,
    /// Version with any epoch already stripped.
    pub version: String,
    pub repo: String,
}

impl PackageRecord {
    /// `NAME-VERSION.ARCH.rpm`
    pub fn file_name(&self) -> String {
        format!(
            "{}{}{}{}{}{}",
            self.name, NAME_VER_SEP, self.version, VER_ARCH_SEP, self.arch, FILE_EXT
        )
    }

    /// Download URL of this package under `base_url`.
    pub fn url(&self, base_url: &str) -> String {
        format!("{}{}{}", base_url, URL_SEP, self.file_name())
    }
}

impl FromStr for PackageRecord {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fields: Vec<&str> = s.split_ascii_whitespace().collect();
        let [name, arch, version, repo] = fields.as_slice() else {
            bail!(
                "Invalid package line {:?}: expected 'NAME ARCH VERSION REPO', found {} field(s)",
                s,
                fields.len()
            );
        };

        Ok(PackageRecord {
            name: name.to_string(),
            arch: arch.to_string(),
            version: strip_epoch(version).to_string(),
            repo: repo.to_string(),
        })
    }
}

//! Turns a package queue into a URL list.

use anyhow::{Context, Result, anyhow};
use log::debug;
use std::io::{BufRead, Write};

use crate::package::PackageRecord;
use crate::repo_map::RepoMap;

/// Separator between the URLs of a single package.
pub const LINK_SEP: char = '\t';

/// URL list generator bound to a repository mapping.
pub struct Recipe<'a> {
    repos: &'a RepoMap,
}

impl<'a> Recipe<'a> {
    pub fn new(repos: &'a RepoMap) -> Self {
        Self { repos }
    }

    /// All download URLs of `record`, tab-joined, without a line terminator.
    pub fn line_for(&self, record: &PackageRecord) -> Result<String> {
        let urls = self.repos.urls(&record.repo).ok_or_else(|| {
            anyhow!(
                "Unknown repository '{}' for package {}",
                record.repo,
                record.name
            )
        })?;

        Ok(urls
            .iter()
            .map(|base| record.url(base))
            .collect::<Vec<_>>()
            .join(&LINK_SEP.to_string()))
    }

    /// Transform every package line of `reader` into a URL line on `writer`.
    ///
    /// Blank lines are skipped. Processing stops at the first bad line;
    /// whatever was written before it stays written. Returns the number of
    /// packages written.
    pub fn write<Rd: BufRead, W: Write>(&self, reader: Rd, writer: &mut W) -> Result<usize> {
        let mut written = 0;

        for (idx, line) in reader.lines().enumerate() {
            let line_no = idx + 1;
            let line = line.with_context(|| format!("Failed to read line {}", line_no))?;

            if line.trim_ascii().is_empty() {
                debug!("Empty line encountered!");
                continue;
            }

            let record: PackageRecord = line
                .parse()
                .with_context(|| format!("Line {}", line_no))?;
            let urls = self
                .line_for(&record)
                .with_context(|| format!("Line {}", line_no))?;

            writeln!(writer, "{}", urls)
                .with_context(|| format!("Failed to write URLs for line {}", line_no))?;
            written += 1;
        }

        Ok(written)
    }
}

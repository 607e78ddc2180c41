use anyhow::{Context, Result};
use log::info;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::Path;

use crate::{recipe::Recipe, repo_map::RepoMap, runtime::Runtime};

/// Generate the URL list for `queue_file`.
///
/// The repository mapping in `repo_file` is loaded first, then every package
/// in the queue is resolved against it. URLs go to `out_file` when given,
/// otherwise to stdout. Returns the number of packages written.
#[tracing::instrument(skip(runtime))]
pub fn run<R: Runtime>(
    runtime: &R,
    queue_file: &Path,
    repo_file: &Path,
    out_file: Option<&Path>,
) -> Result<usize> {
    info!("Reading repository mapping file {:?}...", repo_file);
    let repos = RepoMap::load(runtime, repo_file)?;

    info!(
        "Finished reading repository mapping file {:?}, generating URL list from RPM list file {:?}...",
        repo_file, queue_file
    );

    let sink: Box<dyn Write + Send> = match out_file {
        Some(path) => runtime
            .create_file(path)
            .with_context(|| format!("Failed to create output file {:?}", path))?,
        None => Box::new(io::stdout()),
    };
    let mut writer = BufWriter::new(sink);

    let queue = runtime
        .open(queue_file)
        .with_context(|| format!("Failed to open RPM list file {:?}", queue_file))?;

    let written = Recipe::new(&repos)
        .write(BufReader::new(queue), &mut writer)
        .with_context(|| format!("Failed to process RPM list file {:?}", queue_file))?;
    writer.flush().context("Failed to flush URL list")?;

    info!("Done!");
    Ok(written)
}

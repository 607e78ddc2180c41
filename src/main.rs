use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

/// rpm-recipe - RPM download URL list generator
///
/// Resolves every package of an RPM queue file against a repository mapping
/// and prints one line of download URLs per package.
///
/// The queue file lists one package per line as `NAME ARCH VERSION REPO`.
/// The repository file lists `REPO URL [URL ...]` per line.
///
/// Examples:
///   rpm-recipe -r repos.txt queue.txt              # Print URLs to stdout
///   rpm-recipe -r repos.txt -o urls.txt queue.txt  # Save URLs into urls.txt
#[derive(Parser, Debug)]
#[command(author, version = env!("RPM_RECIPE_VERSION"), about)]
struct Cli {
    /// Use this file to resolve a repository into a base URL
    #[arg(
        long = "repo-file",
        short = 'r',
        env = "RPM_RECIPE_REPO_FILE",
        value_name = "REPOFILE"
    )]
    pub repo_file: PathBuf,

    /// Save the URL list into this file
    #[arg(long = "output", short = 'o', value_name = "URLFILE")]
    pub output: Option<PathBuf>,

    /// The RPM queue file
    #[arg(value_name = "QUEUEFILE")]
    pub queue_file: PathBuf,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();
    let runtime = rpm_recipe::runtime::RealRuntime;

    rpm_recipe::commands::run(
        &runtime,
        &cli.queue_file,
        &cli.repo_file,
        cli.output.as_deref(),
    )?;
    Ok(())
}

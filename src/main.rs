//! This program prepares a dataset of Spanish verb conjugations for use by a
//! conjugation practice app: unused categories are stripped, pronoun labels are
//! shortened, redundant formal forms are dropped, and verbs are sorted by usage
//! frequency then split into fixed-size batch files.

mod batch;
mod config;
mod duplicates;
mod error;
mod frequency;
mod pipeline;
mod progress;
mod pronouns;
mod record;

use crate::{config::Config, progress::ProgressReport};
use anyhow::Context;
use clap::Parser;
use log::LevelFilter;
use std::{
    num::NonZeroUsize,
    path::{Path, PathBuf},
};

/// Clean up a JSON dataset of Spanish verb conjugations
///
/// The cleaned up dataset is written both as one consolidated file and as a
/// series of batch files named `<output stem>_batch_<NNN><.ext>`, next to the
/// consolidated file.
#[derive(Parser, Debug)]
#[command(version, author)]
struct Args {
    /// JSON file containing an array of verb records
    input: PathBuf,

    /// Consolidated output file
    ///
    /// Defaults to the input file name with a "_cleaned" suffix inserted
    /// before the extension, e.g. "verbos.json" becomes
    /// "verbos_cleaned.json".
    output: Option<PathBuf>,

    /// Maximal number of verbs per batch file
    ///
    /// Apps that consume this dataset load one batch at a time, so this is a
    /// tradeoff between download granularity and number of files.
    #[arg(short, long, default_value_t = DEFAULT_BATCH_SIZE)]
    batch_size: NonZeroUsize,

    /// Custom verb frequency ranking
    ///
    /// JSON object mapping verb infinitives to positive ranks, where lower
    /// ranks come first. Verbs missing from the table come after all ranked
    /// ones, in their original order. By default, a built-in ranking of the
    /// 100 most common Spanish verbs is used.
    #[arg(short, long)]
    frequency_table: Option<PathBuf>,

    /// Clean up verbs on a single thread
    ///
    /// The output is the same either way, this only affects performance.
    #[arg(long, default_value_t = false)]
    sequential: bool,
}
//
impl Args {
    /// Decode and validate CLI arguments
    pub fn parse_and_check() -> Result<Self> {
        Args::parse().check()
    }

    /// Check CLI arguments for basic sanity
    fn check(self) -> Result<Self> {
        if let Some(output) = &self.output {
            anyhow::ensure!(
                !same_file(output, &self.input),
                "output file {} would overwrite the input file",
                output.display()
            );
        }
        Ok(self)
    }
}
//
fn main() -> Result<()> {
    // Set up logging
    if let Err(e) = setup_logging() {
        eprintln!("warning: logging is disabled because syslog is unavailable ({e})");
    }

    // Decode CLI arguments
    let args = Args::parse_and_check()?;
    log::debug!("Starting with {args:?}");

    // Digest them into the final configuration
    let config = Config::new(args).context("setting up the verb frequency ranking")?;

    // Run the cleanup pipeline
    let report = ProgressReport::new();
    let summary = pipeline::run(&config, &report)
        .with_context(|| format!("cleaning up {}", config.input.display()))?;
    log::info!(
        "Wrote {} verbs in {} batches to {}",
        summary.records,
        summary.batches,
        config.output.display()
    );
    Ok(())
}

/// Use anyhow for Result type erasure
pub use anyhow::Result;

/// Number of verbs per batch file, unless configured otherwise
pub const DEFAULT_BATCH_SIZE: NonZeroUsize = match NonZeroUsize::new(100) {
    Some(size) => size,
    None => panic!("batch size should be nonzero"),
};

/// Set up logging
fn setup_logging() -> syslog::Result<()> {
    syslog::init(
        syslog::Facility::LOG_USER,
        if cfg!(feature = "log-trace") {
            LevelFilter::Trace
        } else if cfg!(debug_assertions) {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        },
        None,
    )
}

/// Truth that two paths designate the same file
///
/// Paths are resolved through the filesystem where possible, so that
/// `./in.json` and `in.json` are recognized as the same file. A file that does
/// not exist yet is resolved through its parent directory.
fn same_file(a: &Path, b: &Path) -> bool {
    fn resolve(path: &Path) -> Option<PathBuf> {
        if let Ok(path) = path.canonicalize() {
            return Some(path);
        }
        let parent = path.parent().filter(|dir| !dir.as_os_str().is_empty());
        let parent = parent.unwrap_or(Path::new(".")).canonicalize().ok()?;
        Some(parent.join(path.file_name()?))
    }
    match (resolve(a), resolve(b)) {
        (Some(a), Some(b)) => a == b,
        _ => a == b,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn args<'a>(paths: impl IntoIterator<Item = &'a Path>) -> Args {
        let cli = std::iter::once(Path::new("verb-tidy")).chain(paths);
        Args::try_parse_from(cli).unwrap()
    }

    #[test]
    fn output_may_not_overwrite_input() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.json");
        fs::write(&input, "[]").unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();

        for output in [
            input.clone(),
            dir.path().join(".").join("in.json"),
            dir.path().join("sub").join("..").join("in.json"),
        ] {
            assert!(
                args([input.as_path(), output.as_path()]).check().is_err(),
                "{} should be rejected",
                output.display()
            );
        }
    }

    #[test]
    fn distinct_output_is_accepted() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.json");
        fs::write(&input, "[]").unwrap();

        let output = dir.path().join("out").join("in.json");
        let checked = args([input.as_path(), output.as_path()]).check().unwrap();
        assert_eq!(checked.output, Some(output));
        assert!(args([input.as_path()]).check().is_ok());
        let sibling = dir.path().join("in_cleaned.json");
        assert!(args([input.as_path(), sibling.as_path()]).check().is_ok());
    }
}

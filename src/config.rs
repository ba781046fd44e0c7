//! Processing pipeline configuration

use crate::{batch, error::PipelineError, frequency::FrequencyTable, Args};
use std::{borrow::Cow, num::NonZeroUsize, path::PathBuf};

/// Final process configuration
///
/// This is the result of digesting [`Args`] into the settings which the
/// pipeline actually needs. Please refer to [`Args`] to know more about
/// individual fields.
#[allow(missing_docs)]
#[derive(Clone, Debug)]
pub struct Config {
    /// JSON file containing the raw verb records
    pub input: PathBuf,

    /// Consolidated output file, next to which batch files are written
    pub output: PathBuf,

    /// Maximal number of records per batch file
    pub batch_size: NonZeroUsize,

    /// Ranking used to order verbs
    pub frequencies: Cow<'static, FrequencyTable>,

    // Other fields have the same meaning as in Args
    pub sequential: bool,
}
//
impl Config {
    /// Determine process configuration from CLI arguments
    pub(crate) fn new(args: Args) -> Result<Self, PipelineError> {
        let Args {
            input,
            output,
            batch_size,
            frequency_table,
            sequential,
        } = args;
        let frequencies = match frequency_table {
            Some(path) => Cow::Owned(FrequencyTable::load(&path)?),
            None => Cow::Borrowed(FrequencyTable::builtin()),
        };
        Ok(Self {
            output: output.unwrap_or_else(|| batch::default_output_path(&input)),
            input,
            batch_size,
            frequencies,
            sequential,
        })
    }

    /// Configuration with default settings for a given input and output
    #[cfg(test)]
    pub fn with_paths(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            batch_size: crate::DEFAULT_BATCH_SIZE,
            frequencies: Cow::Borrowed(FrequencyTable::builtin()),
            sequential: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn args(input: &str) -> Args {
        Args {
            input: input.into(),
            output: None,
            batch_size: crate::DEFAULT_BATCH_SIZE,
            frequency_table: None,
            sequential: false,
        }
    }

    #[test]
    fn output_defaults_next_to_input() {
        let config = Config::new(args("data/esp_verbos.json")).unwrap();
        assert_eq!(config.output, Path::new("data/esp_verbos_cleaned.json"));
        assert_eq!(config.batch_size.get(), 100);
        assert_eq!(config.frequencies.rank("ser"), 1);
    }

    #[test]
    fn explicit_output_is_kept() {
        let config = Config::new(Args {
            output: Some("elsewhere/out.json".into()),
            ..args("in.json")
        })
        .unwrap();
        assert_eq!(config.output, Path::new("elsewhere/out.json"));
    }

    #[test]
    fn missing_frequency_table_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = Config::new(Args {
            frequency_table: Some(dir.path().join("nope.json")),
            ..args("in.json")
        });
        assert!(matches!(result, Err(PipelineError::Io { .. })));
    }
}

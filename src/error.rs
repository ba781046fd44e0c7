//! Failure modes of the cleanup pipeline

use std::{io, path::Path};

/// Everything that can go wrong while cleaning up a verb dataset
///
/// None of these are recovered from locally: the job is all-or-nothing, so
/// the first error aborts the run and is reported to the user.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// A file could not be read or written
    #[error("I/O error on {path}: {source}")]
    Io {
        /// File or directory that was being accessed
        path: Box<str>,
        source: io::Error,
    },

    /// A file does not contain well-formed JSON
    #[error("failed to parse {path} as JSON: {source}")]
    Parse {
        /// File that was being parsed
        path: Box<str>,
        source: serde_json::Error,
    },

    /// Well-formed JSON that does not have the expected shape
    #[error("unexpected data layout in {path}{}: {reason}", DisplayIndex(.index))]
    Schema {
        /// File that was being parsed
        path: Box<str>,

        /// Position of the offending record within the input array, if any
        index: Option<usize>,

        /// What was expected and wasn't found
        reason: Box<str>,
    },
}
//
impl PipelineError {
    pub fn io(path: &Path, source: io::Error) -> Self {
        Self::Io {
            path: path.display().to_string().into(),
            source,
        }
    }

    pub fn parse(path: &Path, source: serde_json::Error) -> Self {
        Self::Parse {
            path: path.display().to_string().into(),
            source,
        }
    }

    pub fn schema(path: &Path, index: Option<usize>, reason: impl Into<Box<str>>) -> Self {
        Self::Schema {
            path: path.display().to_string().into(),
            index,
            reason: reason.into(),
        }
    }
}

/// Display helper for the optional record index of schema errors
struct DisplayIndex<'a>(&'a Option<usize>);
//
impl std::fmt::Display for DisplayIndex<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self.0 {
            Some(index) => write!(f, " (record #{index})"),
            None => Ok(()),
        }
    }
}

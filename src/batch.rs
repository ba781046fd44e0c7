//! Splitting of the sorted dataset into fixed-size batch files

use std::{
    ffi::OsString,
    num::NonZeroUsize,
    path::{Path, PathBuf},
};

/// Minimal number of digits of batch numbers in file names
const BATCH_NUMBER_DIGITS: usize = 3;

/// Split records into contiguous batches of at most `batch_size` records
///
/// Only the last batch may be shorter than `batch_size`. Concatenating the
/// batches in order yields the input back.
pub fn partition<T>(records: &[T], batch_size: NonZeroUsize) -> impl Iterator<Item = &[T]> {
    records.chunks(batch_size.get())
}

/// Location of a batch file, given the consolidated output path
///
/// Batches are numbered from 1 and saved next to the consolidated output as
/// `<stem>_batch_<NNN><.ext>`.
pub fn batch_path(output: &Path, batch_number: usize) -> PathBuf {
    let mut file_name = OsString::from(file_stem(output));
    file_name.push(format!("_batch_{batch_number:0width$}", width = BATCH_NUMBER_DIGITS));
    if let Some(extension) = output.extension() {
        file_name.push(".");
        file_name.push(extension);
    }
    output.with_file_name(file_name)
}

/// Default consolidated output path, given the input path
///
/// `<dir>/<stem>.<ext>` becomes `<dir>/<stem>_cleaned.<ext>`.
pub fn default_output_path(input: &Path) -> PathBuf {
    let mut file_name = OsString::from(file_stem(input));
    file_name.push("_cleaned");
    if let Some(extension) = input.extension() {
        file_name.push(".");
        file_name.push(extension);
    }
    input.with_file_name(file_name)
}

/// File name of a path without its extension
fn file_stem(path: &Path) -> &std::ffi::OsStr {
    path.file_stem().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nz(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    #[test]
    fn partition_sizes() {
        let records = (0..250).collect::<Vec<_>>();
        let sizes = partition(&records, nz(100)).map(<[_]>::len).collect::<Vec<_>>();
        assert_eq!(sizes, [100, 100, 50]);

        let records = (0..200).collect::<Vec<_>>();
        let sizes = partition(&records, nz(100)).map(<[_]>::len).collect::<Vec<_>>();
        assert_eq!(sizes, [100, 100]);

        assert_eq!(partition::<u8>(&[], nz(100)).count(), 0);
    }

    #[test]
    fn partition_is_exact() {
        let records = (0..37).collect::<Vec<_>>();
        for batch_size in [1, 5, 36, 37, 38] {
            let rebuilt = partition(&records, nz(batch_size))
                .flatten()
                .copied()
                .collect::<Vec<_>>();
            assert_eq!(rebuilt, records);
        }
    }

    #[test]
    fn batch_file_names() {
        let output = Path::new("out/esp_verbos_cleaned.json");
        assert_eq!(
            batch_path(output, 1),
            Path::new("out/esp_verbos_cleaned_batch_001.json")
        );
        assert_eq!(
            batch_path(output, 42),
            Path::new("out/esp_verbos_cleaned_batch_042.json")
        );
        assert_eq!(
            batch_path(output, 1234),
            Path::new("out/esp_verbos_cleaned_batch_1234.json")
        );
        assert_eq!(batch_path(Path::new("verbs"), 7), Path::new("verbs_batch_007"));
    }

    #[test]
    fn default_output_names() {
        assert_eq!(
            default_output_path(Path::new("data/esp_verbos.json")),
            Path::new("data/esp_verbos_cleaned.json")
        );
        assert_eq!(
            default_output_path(Path::new("verbs")),
            Path::new("verbs_cleaned")
        );
        assert_eq!(
            default_output_path(Path::new("archive.tar.json")),
            Path::new("archive.tar_cleaned.json")
        );
    }
}

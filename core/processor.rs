use crate::CoreError;
use crate::file_finder::{DecommentArgs, find_files};
use crate::stripper::{Strategy, strip_with};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ProcessSummary {
    pub processed: usize,
    pub changed: usize,
}

/// Reads `path` as UTF-8, strips it and writes the result straight back over
/// the original. Returns whether the content changed.
pub fn process_single_file(path: &Path, strategy: Strategy) -> Result<bool, CoreError> {
    let original = fs::read_to_string(path).map_err(|source| CoreError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let stripped = strip_with(&original, strategy);
    let changed = stripped != original;

    fs::write(path, &stripped).map_err(|source| CoreError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!(
        path = %path.display(),
        before = original.len(),
        after = stripped.len(),
        changed,
        "rewrote file"
    );
    Ok(changed)
}

/// Processes `files` one after another. `on_file` sees each path before it is
/// touched. The first failure stops the run; files already rewritten stay
/// rewritten.
pub fn process_files<F>(
    files: &[PathBuf],
    strategy: Strategy,
    mut on_file: F,
) -> Result<ProcessSummary, CoreError>
where
    F: FnMut(&Path),
{
    let mut summary = ProcessSummary::default();
    for path in files {
        on_file(path);
        if process_single_file(path, strategy)? {
            summary.changed += 1;
        }
        summary.processed += 1;
    }
    Ok(summary)
}

/// Finds every matching file under `args.path` and strips it in place.
pub fn process_directory<F>(args: &DecommentArgs, on_file: F) -> Result<ProcessSummary, CoreError>
where
    F: FnMut(&Path),
{
    let files = find_files(args)?;
    process_files(&files, args.strategy, on_file)
}

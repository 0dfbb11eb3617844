//! Normalizing load files on disk.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use log::{info, warn};

use crate::error::Error;
use crate::normalize::normalize;
use crate::options::Options;

/// What to do with a file once it has been normalized.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Mode {
    /// Overwrite the file with its normalized contents.
    InPlace,
    /// Leave the file alone; only report whether it would change.
    Check,
    /// Write the normalized contents to the given output instead of the file.
    Stdout,
}

/// Outcome of a batch run.
#[derive(Debug, Default, PartialEq)]
pub struct Summary {
    pub missing: Vec<PathBuf>,
    /// Files whose normalized contents differ from what was on disk.
    pub changed: Vec<PathBuf>,
    pub unchanged: Vec<PathBuf>,
}

/// A file's contents before and after normalization.
#[derive(Debug, Clone, PartialEq)]
pub struct Normalized {
    pub original: String,
    pub text: String,
}

impl Normalized {
    pub fn changed(&self) -> bool {
        self.original != self.text
    }
}

/// Reads `path` and normalizes its contents without writing anything.
pub fn normalize_file(path: &Path, options: &Options) -> Result<Normalized, Error> {
    if !path.exists() {
        return Err(Error::MissingFile(path.to_path_buf()));
    }

    let original = fs::read_to_string(path).map_err(|source| Error::Io { path: path.to_path_buf(), source })?;
    let text = normalize(&original, options).map_err(|error| Error::InFile {
        path: path.to_path_buf(),
        source: Box::new(error),
    })?;
    Ok(Normalized { original, text })
}

/// Normalizes each path in turn.
///
/// Missing files are reported on stderr and skipped. Any other error stops the
/// batch; the failing file and every file after it are left untouched, since a
/// file is only written once its whole contents normalized successfully.
pub fn run<'a>(
    paths: impl IntoIterator<Item = &'a Path>,
    options: &Options,
    mode: Mode,
    out: &mut dyn Write,
) -> Result<Summary, Error> {
    let mut summary = Summary::default();

    for path in paths {
        let normalized = match normalize_file(path, options) {
            Ok(normalized) => normalized,
            Err(error) if error.is_recoverable() => {
                warn!("skipping {}", path.display());
                eprintln!("{}", error);
                summary.missing.push(path.to_path_buf());
                continue;
            }
            Err(error) => return Err(error),
        };

        let io_error = |source: io::Error| Error::Io { path: path.to_path_buf(), source };
        let changed = normalized.changed();

        match mode {
            Mode::InPlace => {
                if changed {
                    fs::write(path, &normalized.text).map_err(io_error)?;
                    info!("normalized {}", path.display());
                } else {
                    info!("{} already normalized", path.display());
                }
            }
            Mode::Check => {
                if changed {
                    writeln!(out, "{}", path.display()).map_err(io_error)?;
                }
            }
            Mode::Stdout => {
                out.write_all(normalized.text.as_bytes()).map_err(io_error)?;
            }
        }

        if changed {
            summary.changed.push(path.to_path_buf());
        } else {
            summary.unchanged.push(path.to_path_buf());
        }
    }

    Ok(summary)
}

/// Shorthand for running over string paths, writing any output to stdout.
pub fn run_paths<S: AsRef<str>>(paths: &[S], options: &Options, mode: Mode) -> Result<Summary, Error> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    run(paths.iter().map(|path| Path::new(path.as_ref())), options, mode, &mut handle)
}

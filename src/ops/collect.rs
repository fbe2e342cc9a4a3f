//! Parse and check the schemes of a set of headers.

use std::path::{Path, PathBuf};

use anyhow::Result;
use thiserror::Error;

use crate::annotation::{AnnotationParser, SchemeError};
use crate::core::Scheme;
use crate::util::diagnostic::{scheme_diagnostic, Diagnostic};
use crate::util::fs::read_lossy;

/// A scheme that was dropped from the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    /// Header the scheme was declared in
    pub path: PathBuf,
    pub error: SchemeError,
}

impl Rejection {
    pub fn to_diagnostic(&self) -> Diagnostic {
        scheme_diagnostic(&self.path, &self.error)
    }
}

/// A scheme error that makes the rest of the run meaningless.
#[derive(Debug, Clone, Error)]
#[error("{}: {error}", .path.display())]
pub struct FatalSchemeError {
    pub path: PathBuf,
    #[source]
    pub error: SchemeError,
    /// Rejections recorded before the run was aborted
    pub rejections: Vec<Rejection>,
}

impl FatalSchemeError {
    pub fn to_diagnostic(&self) -> Diagnostic {
        scheme_diagnostic(&self.path, &self.error)
    }
}

/// Accepted schemes, in file-then-declaration order, plus every rejection.
#[derive(Debug, Clone, Default)]
pub struct Collection {
    pub schemes: Vec<(PathBuf, Scheme)>,
    pub rejections: Vec<Rejection>,
    pub files_scanned: usize,
}

impl Collection {
    /// The accepted schemes alone.
    pub fn accepted(&self) -> Vec<Scheme> {
        self.schemes.iter().map(|(_, s)| s.clone()).collect()
    }

    /// Parse one header's content into this collection.
    ///
    /// Scheme-level failures are recorded and parsing goes on; a fatal one
    /// is returned as [`FatalSchemeError`].
    pub fn add_content(
        &mut self,
        parser: &AnnotationParser,
        path: &Path,
        content: &str,
    ) -> Result<(), FatalSchemeError> {
        self.files_scanned += 1;

        for result in parser.parse(content) {
            match result {
                Ok(scheme) if scheme.entries.is_empty() => {
                    tracing::warn!(
                        "{}: scheme `{}` documents no entries, skipping",
                        path.display(),
                        scheme.name
                    );
                }
                Ok(scheme) => {
                    tracing::debug!("{}: found {}", path.display(), scheme);
                    self.schemes.push((path.to_path_buf(), scheme));
                }
                Err(error) if error.is_fatal() => {
                    return Err(FatalSchemeError {
                        path: path.to_path_buf(),
                        error,
                        rejections: std::mem::take(&mut self.rejections),
                    });
                }
                Err(error) => {
                    tracing::debug!("{}: rejected `{}`", path.display(), error.scheme());
                    self.rejections.push(Rejection {
                        path: path.to_path_buf(),
                        error,
                    });
                }
            }
        }

        Ok(())
    }
}

/// Read and parse every file, in order.
///
/// Each file is read completely and released before the next one is
/// opened. I/O errors and fatal scheme errors abort the collection; a
/// fatal error carries every rejection found up to that point.
pub fn collect_schemes(files: &[PathBuf], parser: &AnnotationParser) -> Result<Collection> {
    let mut collection = Collection::default();

    for path in files {
        tracing::debug!("scanning {}", path.display());
        let content = read_lossy(path)?;
        collection.add_content(parser, path, &content)?;
    }

    Ok(collection)
}

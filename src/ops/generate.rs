//! Implementation of `schemegen generate`.
//!
//! Discovery, parsing and rendering all happen before anything is written:
//! every artifact is rendered in memory first, then each is written in one
//! shot. A run that fails anywhere leaves the previous outputs untouched.

use std::fmt;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::collect::{collect_schemes, Rejection};
use crate::annotation::AnnotationParser;
use crate::emit::Artifacts;
use crate::util::config::Config;
use crate::util::fs::{discover_files, normalize_path, read_to_string, write_atomic};

/// What to do with the rendered artifacts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WriteMode {
    /// Write artifacts whose content changed
    #[default]
    Write,
    /// Compare against the files on disk, write nothing
    Check,
    /// Report what would be written, write nothing
    DryRun,
}

/// Options for a generation run.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Directory scanned for headers
    pub root: PathBuf,

    /// Directory the output paths are relative to
    pub out_dir: PathBuf,

    /// Merged configuration
    pub config: Config,

    pub mode: WriteMode,
}

impl GenerateOptions {
    pub fn new(root: impl Into<PathBuf>, config: Config) -> Self {
        let root = root.into();
        GenerateOptions {
            out_dir: root.clone(),
            root,
            config,
            mode: WriteMode::Write,
        }
    }

    pub fn with_out_dir(mut self, out_dir: impl Into<PathBuf>) -> Self {
        self.out_dir = out_dir.into();
        self
    }

    pub fn with_mode(mut self, mode: WriteMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn native_path(&self) -> PathBuf {
        self.out_dir.join(self.config.native_output())
    }

    pub fn binding_path(&self) -> PathBuf {
        self.out_dir.join(self.config.binding_output())
    }

    pub fn license_path(&self) -> PathBuf {
        self.root.join(self.config.license())
    }
}

/// State of one output artifact after a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputStatus {
    Written,
    Unchanged,
    /// Content differs from the file on disk (check and dry-run modes)
    Stale,
}

impl fmt::Display for OutputStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputStatus::Written => write!(f, "written"),
            OutputStatus::Unchanged => write!(f, "unchanged"),
            OutputStatus::Stale => write!(f, "out of date"),
        }
    }
}

/// Outcome of a generation run.
#[derive(Debug, Clone)]
pub struct GenerateReport {
    pub files_scanned: usize,
    /// Names of the emitted schemes, in output order
    pub generated: Vec<String>,
    pub rejections: Vec<Rejection>,
    pub outputs: Vec<(PathBuf, OutputStatus)>,
}

impl GenerateReport {
    /// Whether any output differs from what is on disk.
    pub fn has_stale(&self) -> bool {
        self.outputs
            .iter()
            .any(|(_, status)| *status == OutputStatus::Stale)
    }
}

/// Discover, parse, check and render everything under `opts.root`.
pub fn render(opts: &GenerateOptions) -> Result<(Artifacts, GenerateReport)> {
    let native_path = opts.native_path();
    let binding_path = opts.binding_path();

    let files = discover_files(
        &opts.root,
        opts.config.pattern(),
        &[native_path.clone(), binding_path.clone()],
    )?;
    tracing::debug!(
        "found {} candidate header(s) matching `{}` in {}",
        files.len(),
        opts.config.pattern(),
        opts.root.display()
    );

    let parser = AnnotationParser::new().with_checker(opts.config.checker());
    let collection = collect_schemes(&files, &parser)?;

    let license_path = opts.license_path();
    let license = read_to_string(&license_path)
        .with_context(|| format!("failed to load license banner: {}", license_path.display()))?;

    let schemes = collection.accepted();
    let artifacts = Artifacts::assemble(
        &schemes,
        &opts.config.artifact_options(license),
        &opts.config.binding_emitter(),
    )
    .context("internal error: an unchecked scheme reached the emitters")?;

    for scheme in &schemes {
        tracing::info!("generated {}", scheme.name);
    }

    let report = GenerateReport {
        files_scanned: collection.files_scanned,
        generated: schemes.into_iter().map(|s| s.name).collect(),
        rejections: collection.rejections,
        outputs: Vec::new(),
    };
    Ok((artifacts, report))
}

/// Run a full generation.
pub fn generate(opts: &GenerateOptions) -> Result<GenerateReport> {
    let (artifacts, mut report) = render(opts)?;

    let outputs = [
        (opts.native_path(), artifacts.native),
        (opts.binding_path(), artifacts.binding),
    ];

    // Compare everything first so a failure cannot leave one file written.
    let mut statuses = Vec::with_capacity(outputs.len());
    for (path, contents) in &outputs {
        let current = if path.exists() {
            Some(read_to_string(path)?)
        } else {
            None
        };
        let unchanged = current.as_deref() == Some(contents.as_str());
        statuses.push(unchanged);
    }

    for ((path, contents), unchanged) in outputs.iter().zip(statuses) {
        let status = match (opts.mode, unchanged) {
            (_, true) => OutputStatus::Unchanged,
            (WriteMode::Write, false) => {
                write_atomic(path, contents)?;
                OutputStatus::Written
            }
            (WriteMode::Check | WriteMode::DryRun, false) => OutputStatus::Stale,
        };
        tracing::debug!("{}: {}", path.display(), status);
        report.outputs.push((path.clone(), status));
    }

    Ok(report)
}

/// Shorten an output path for display, relative to the current directory.
pub fn display_path(path: &Path) -> String {
    let cwd = std::env::current_dir().map(|c| normalize_path(&c)).ok();
    let path_norm = normalize_path(path);
    match cwd {
        Some(cwd) => crate::util::fs::relative_path(&cwd, &path_norm)
            .display()
            .to_string(),
        None => path.display().to_string(),
    }
}

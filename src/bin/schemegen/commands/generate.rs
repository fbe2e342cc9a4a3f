//! `schemegen generate` command

use anyhow::{bail, Result};

use super::load_scan_config;
use crate::cli::GenerateArgs;
use schemegen::ops::{display_path, generate, GenerateOptions, OutputStatus, WriteMode};
use schemegen::util::diagnostic;

pub fn execute(args: GenerateArgs, color: bool) -> Result<()> {
    let (root, mut config) = load_scan_config(&args.scan)?;

    if let Some(license) = args.license {
        config.emit.license = Some(license);
    }
    if let Some(namespace) = args.namespace {
        config.emit.namespace = Some(namespace);
    }

    let mode = if args.check {
        WriteMode::Check
    } else if args.dry_run {
        WriteMode::DryRun
    } else {
        WriteMode::Write
    };

    let mut opts = GenerateOptions::new(&root, config).with_mode(mode);
    if let Some(out_dir) = args.out_dir {
        opts = opts.with_out_dir(out_dir);
    }

    let report = generate(&opts)?;

    for rejection in &report.rejections {
        diagnostic::emit(&rejection.to_diagnostic(), color);
    }

    for (path, status) in &report.outputs {
        match (mode, status) {
            (WriteMode::DryRun, OutputStatus::Stale) => {
                println!("[dry-run] Would write {}", display_path(path))
            }
            (_, status) => println!("{:>10} {}", status.to_string(), display_path(path)),
        }
    }

    println!(
        "Generated {} scheme(s) from {} header(s)",
        report.generated.len(),
        report.files_scanned
    );
    if !report.rejections.is_empty() {
        tracing::warn!("{} scheme(s) rejected", report.rejections.len());
    }

    if mode == WriteMode::Check && report.has_stale() {
        bail!("generated files are out of date\nhelp: Run `schemegen generate` to refresh them");
    }

    Ok(())
}

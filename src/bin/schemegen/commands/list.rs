//! `schemegen list` command

use anyhow::{Context, Result};
use serde::Serialize;

use super::load_scan_config;
use crate::cli::ListArgs;
use schemegen::annotation::AnnotationParser;
use schemegen::ops::{collect_schemes, display_path, GenerateOptions};
use schemegen::util::diagnostic;
use schemegen::util::fs::discover_files;
use schemegen::Scheme;

#[derive(Serialize)]
struct ListedScheme<'a> {
    file: String,
    #[serde(flatten)]
    scheme: &'a Scheme,
}

#[derive(Serialize)]
struct ListedRejection {
    file: String,
    scheme: String,
    error: String,
}

#[derive(Serialize)]
struct Listing<'a> {
    schemes: Vec<ListedScheme<'a>>,
    rejected: Vec<ListedRejection>,
}

pub fn execute(args: ListArgs, color: bool) -> Result<()> {
    let (root, config) = load_scan_config(&args.scan)?;

    let outputs = GenerateOptions::new(&root, config.clone());
    let files = discover_files(
        &root,
        config.pattern(),
        &[outputs.native_path(), outputs.binding_path()],
    )?;
    let parser = AnnotationParser::new().with_checker(config.checker());
    let collection = collect_schemes(&files, &parser)?;

    if args.json {
        let listing = Listing {
            schemes: collection
                .schemes
                .iter()
                .map(|(path, scheme)| ListedScheme {
                    file: display_path(path),
                    scheme,
                })
                .collect(),
            rejected: collection
                .rejections
                .iter()
                .map(|r| ListedRejection {
                    file: display_path(&r.path),
                    scheme: r.error.scheme().to_string(),
                    error: r.error.to_string(),
                })
                .collect(),
        };
        let json =
            serde_json::to_string_pretty(&listing).context("failed to serialize scheme listing")?;
        println!("{}", json);
        return Ok(());
    }

    for (path, scheme) in &collection.schemes {
        println!("{} ({})", scheme, display_path(path));
        let width = scheme.widest_arg_name();
        for entry in &scheme.entries {
            println!(
                "  {:<width$}  {}  {}",
                entry.arg_name,
                entry.enum_constant,
                entry.doc,
                width = width
            );
        }
    }

    for rejection in &collection.rejections {
        diagnostic::emit(&rejection.to_diagnostic(), color);
    }

    println!(
        "{} scheme(s), {} rejected, in {} header(s)",
        collection.schemes.len(),
        collection.rejections.len(),
        collection.files_scanned
    );

    Ok(())
}

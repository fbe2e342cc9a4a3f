//! Scheme error types and diagnostics.

use miette::Diagnostic as MietteDiagnostic;
use thiserror::Error;

use crate::core::Role;
use crate::util::diagnostic::Diagnostic;

/// Field of an entry, named in incomplete-entry reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryField {
    ArgName,
    Doc,
    EnumConstant,
}

impl EntryField {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryField::ArgName => "argument name",
            EntryField::Doc => "documentation",
            EntryField::EnumConstant => "enum constant",
        }
    }
}

/// Error raised while parsing, checking or emitting a scheme.
#[derive(Debug, Clone, PartialEq, Eq, Error, MietteDiagnostic)]
pub enum SchemeError {
    #[error("scheme `{scheme}` opened on line {line} is never terminated")]
    #[diagnostic(
        code(schemegen::parse::unterminated),
        help("close the enum with `}};` before the end of the file")
    )]
    UnterminatedScheme { scheme: String, line: usize },

    #[error("entry #{index} of scheme `{scheme}` has no {}", .missing.as_str())]
    #[diagnostic(code(schemegen::check::incomplete_entry))]
    IncompleteEntry {
        scheme: String,
        index: usize,
        /// Whatever identifies the entry (arg name or constant), if anything
        label: Option<String>,
        missing: EntryField,
    },

    #[error("enum group `{enum_group}` of scheme `{scheme}` does not match role {role}")]
    #[diagnostic(code(schemegen::check::malformed_enum_group))]
    MalformedEnumGroup {
        scheme: String,
        enum_group: String,
        role: Role,
        reason: String,
    },

    #[error("enum constant `{constant}` of scheme `{scheme}` contains reserved marker `{marker}`")]
    #[diagnostic(
        code(schemegen::check::reserved_name),
        help("count sentinels must stay outside the documented entries")
    )]
    ReservedNameCollision {
        scheme: String,
        constant: String,
        marker: String,
    },

    #[error("enum constant for entry `{entry}` of scheme `{scheme}` already given")]
    #[diagnostic(code(schemegen::parse::duplicate_enum))]
    DuplicateEnumAssignment {
        scheme: String,
        entry: String,
        existing: String,
        constant: String,
        line: usize,
    },

    #[error("scheme `{scheme}` has no entries")]
    #[diagnostic(code(schemegen::emit::empty_scheme))]
    EmptySchemeRejected { scheme: String },
}

impl SchemeError {
    /// Name of the scheme the error belongs to.
    pub fn scheme(&self) -> &str {
        match self {
            SchemeError::UnterminatedScheme { scheme, .. }
            | SchemeError::IncompleteEntry { scheme, .. }
            | SchemeError::MalformedEnumGroup { scheme, .. }
            | SchemeError::ReservedNameCollision { scheme, .. }
            | SchemeError::DuplicateEnumAssignment { scheme, .. }
            | SchemeError::EmptySchemeRejected { scheme } => scheme,
        }
    }

    /// Fatal errors abort the whole run; the others only drop their scheme.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            SchemeError::UnterminatedScheme { .. } | SchemeError::EmptySchemeRejected { .. }
        )
    }

    /// Convert to a user-friendly diagnostic.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = Diagnostic::error(self.to_string());

        match self {
            SchemeError::UnterminatedScheme { line, .. } => diag
                .with_context(format!("scheme starts on line {}", line))
                .with_suggestion("Add the closing `};` of the scheme's enum"),

            SchemeError::IncompleteEntry {
                label, missing, ..
            } => {
                let diag = match label {
                    Some(label) => diag.with_context(format!("entry: `{}`", label)),
                    None => diag,
                };
                let hint = match missing {
                    EntryField::EnumConstant => {
                        "Follow the entry's `/// doc [name]` line with an `ENUM_CONSTANT,` line"
                    }
                    EntryField::ArgName | EntryField::Doc => {
                        "Precede the enum constant with a `/// doc [name]` line"
                    }
                };
                diag.with_context(format!("failing field: {}", missing.as_str()))
                    .with_suggestion(hint)
            }

            SchemeError::MalformedEnumGroup { role, reason, .. } => {
                let suffixes = role.info().suffixes.join("` or `");
                diag.with_context(reason.clone())
                    .with_context("failing field: enum group")
                    .with_suggestion(format!(
                        "Name the enum so that it ends in `{}`",
                        suffixes
                    ))
            }

            SchemeError::ReservedNameCollision {
                constant, marker, ..
            } => diag
                .with_context(format!("failing field: enum constant `{}`", constant))
                .with_suggestion(format!(
                    "Leave constants containing `{}` undocumented",
                    marker
                )),

            SchemeError::DuplicateEnumAssignment {
                existing,
                constant,
                line,
                ..
            } => diag
                .with_context(format!(
                    "`{}` on line {} but the entry is already bound to `{}`",
                    constant, line, existing
                ))
                .with_context("failing field: enum constant")
                .with_suggestion("Give every `ENUM_CONSTANT,` line its own `/// doc [name]` line"),

            SchemeError::EmptySchemeRejected { .. } => diag
                .with_context("a helper without arguments is never emitted")
                .with_suggestion("Document at least one enum entry"),
        }
    }
}

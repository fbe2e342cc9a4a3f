//! The scheme model.
//!
//! A [`Scheme`] is one documented family of positional helper arguments,
//! each backed by a constant of an external enum. Schemes are only ever
//! built by the consistency checker, so every value of this type is
//! complete: all entries carry a name, a doc line and an enum constant.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::role::Role;

/// One named, documented argument bound to an enum constant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Argument name in the generated helpers
    pub arg_name: String,
    /// One-line description
    pub doc: String,
    /// Enum constant this argument corresponds to
    pub enum_constant: String,
}

impl Entry {
    pub fn new(
        arg_name: impl Into<String>,
        doc: impl Into<String>,
        enum_constant: impl Into<String>,
    ) -> Self {
        Entry {
            arg_name: arg_name.into(),
            doc: doc.into(),
            enum_constant: enum_constant.into(),
        }
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -- {} [{}]", self.arg_name, self.doc, self.enum_constant)
    }
}

/// A validated scheme, ready for emission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scheme {
    /// Input or output
    pub role: Role,
    /// Helper name, taken from the scheme-start line
    pub name: String,
    /// Scheme-start fragment, e.g. `Input arguments of an integrator`
    pub title: String,
    /// Documentation lines joined with `\n`
    pub summary: String,
    /// Name of the enum this scheme mirrors
    pub enum_group: String,
    /// Entries in declaration order
    pub entries: Vec<Entry>,
}

impl Scheme {
    /// Number of entries (the helper's arity).
    pub fn arity(&self) -> usize {
        self.entries.len()
    }

    /// Summary split back into its documentation lines.
    pub fn summary_lines(&self) -> impl Iterator<Item = &str> {
        self.summary.lines()
    }

    /// Argument names in declaration order.
    pub fn arg_names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.arg_name.as_str())
    }

    /// Length of the longest argument name.
    pub fn widest_arg_name(&self) -> usize {
        self.arg_names().map(str::len).max().unwrap_or(0)
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}) [{}]: {} entries",
            self.name,
            self.role,
            self.enum_group,
            self.entries.len()
        )
    }
}

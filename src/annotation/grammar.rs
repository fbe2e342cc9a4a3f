//! Line grammar for scheme annotations.
//!
//! Every header line is classified on its own; the parser decides what a
//! classification means in its current state.

use std::sync::LazyLock;

use regex::Regex;

use crate::core::Role;

static RE_SCHEME_START: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*///\s*((Input|Output) arguments\b.*?)\s*\[(\w+)\]\s*$")
        .expect("scheme-start pattern is valid")
});

static RE_ENTRY_DOC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*///\s*(.*?)\s*\[(\w+)\]\s*$").expect("entry-doc pattern is valid")
});

static RE_DOC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*///(.*)$").expect("doc pattern is valid"));

static RE_ENUM_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*enum\s+(\w+)\s*\{").expect("enum-header pattern is valid")
});

static RE_ENUM_ENTRY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(\w+)\s*,").expect("enum-entry pattern is valid"));

static RE_TERMINATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*\}\s*;").expect("terminator pattern is valid"));

// `name -- doc`, the shape used in generated keyword listings
static RE_NAMED_DOC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\w+)\s+--\s+(.*)$").expect("named-doc pattern is valid")
});

/// A classified header line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line<'a> {
    /// `/// Input arguments of f [fIn]`
    SchemeStart {
        role: Role,
        title: &'a str,
        name: &'a str,
    },
    /// `/// some text [tag]`
    EntryDoc { text: &'a str, tag: &'a str },
    /// `/// some text` without a bracketed suffix
    Doc(&'a str),
    /// `enum Name {`
    EnumHeader(&'a str),
    /// `IDENT,`
    EnumEntry(&'a str),
    /// `};`
    Terminator,
    /// Anything else
    Other,
}

impl<'a> Line<'a> {
    /// Classify one line of header text.
    pub fn classify(line: &'a str) -> Line<'a> {
        if let Some(cap) = RE_SCHEME_START.captures(line) {
            if let Some(role) = Role::from_name(&cap[2]) {
                return Line::SchemeStart {
                    role,
                    title: cap.get(1).map_or("", |m| m.as_str()),
                    name: cap.get(3).map_or("", |m| m.as_str()),
                };
            }
        }

        if let Some(cap) = RE_ENTRY_DOC.captures(line) {
            return Line::EntryDoc {
                text: cap.get(1).map_or("", |m| m.as_str()),
                tag: cap.get(2).map_or("", |m| m.as_str()),
            };
        }

        if let Some(cap) = RE_DOC.captures(line) {
            return Line::Doc(cap.get(1).map_or("", |m| m.as_str()).trim());
        }

        if RE_TERMINATOR.is_match(line) {
            return Line::Terminator;
        }

        if let Some(cap) = RE_ENUM_HEADER.captures(line) {
            return Line::EnumHeader(cap.get(1).map_or("", |m| m.as_str()));
        }

        if let Some(cap) = RE_ENUM_ENTRY.captures(line) {
            return Line::EnumEntry(cap.get(1).map_or("", |m| m.as_str()));
        }

        Line::Other
    }
}

/// Split entry-doc text of the form `name -- doc` into its parts.
pub fn split_named_doc(text: &str) -> Option<(&str, &str)> {
    let cap = RE_NAMED_DOC.captures(text)?;
    Some((cap.get(1)?.as_str(), cap.get(2)?.as_str().trim()))
}

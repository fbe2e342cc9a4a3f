//! Annotation parser.
//!
//! A per-file finite-state machine over header lines:
//!
//! ```text
//!            scheme-start              non-doc line
//!   Idle ----------------> InSummary ---------------> InBody
//!    ^                                                  |
//!    +----------------------- `};` ---------------------+
//! ```
//!
//! [`ParseState::feed`] consumes exactly one line. Completed drafts are
//! handed to the [`Checker`], so [`Schemes`] yields validated schemes (or
//! the reason a scheme was rejected) lazily, in file order.

use std::iter::Enumerate;
use std::str::Lines;

use super::check::Checker;
use super::errors::SchemeError;
use super::grammar::{split_named_doc, Line};
use crate::core::{Role, Scheme};

/// An entry as collected from the annotation, before checking.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryDraft {
    pub arg_name: Option<String>,
    pub doc: Option<String>,
    /// Constant named in a `name -- doc [CONSTANT]` doc line
    pub declared_constant: Option<String>,
    /// Constant bound by the enum entry line
    pub enum_constant: Option<String>,
}

impl EntryDraft {
    /// Build an entry from an entry-doc line.
    fn from_doc(text: &str, tag: &str) -> Self {
        match split_named_doc(text) {
            Some((name, doc)) => EntryDraft {
                arg_name: Some(name.to_string()),
                doc: non_empty(doc),
                declared_constant: Some(tag.to_string()),
                enum_constant: None,
            },
            None => EntryDraft {
                arg_name: Some(tag.to_string()),
                doc: non_empty(text),
                declared_constant: None,
                enum_constant: None,
            },
        }
    }

    /// Something to call the entry by in diagnostics.
    pub fn label(&self) -> Option<&str> {
        self.arg_name
            .as_deref()
            .or(self.enum_constant.as_deref())
            .or(self.declared_constant.as_deref())
    }
}

/// A scheme as collected from the annotation, before checking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemeDraft {
    pub role: Role,
    pub name: String,
    pub title: String,
    /// 1-based line of the scheme-start marker
    pub start_line: usize,
    pub summary: Vec<String>,
    pub enum_group: Option<String>,
    pub entries: Vec<EntryDraft>,
    /// First structural failure seen while parsing the body
    pub failure: Option<SchemeError>,
}

impl SchemeDraft {
    fn new(role: Role, name: &str, title: &str, start_line: usize) -> Self {
        SchemeDraft {
            role,
            name: name.to_string(),
            title: title.trim().to_string(),
            start_line,
            summary: Vec::new(),
            enum_group: None,
            entries: Vec::new(),
            failure: None,
        }
    }

    fn fail(&mut self, err: SchemeError) {
        if self.failure.is_none() {
            self.failure = Some(err);
        }
    }

    fn set_enum_group(&mut self, group: &str) {
        match &self.enum_group {
            None => self.enum_group = Some(group.to_string()),
            Some(existing) => {
                let err = SchemeError::MalformedEnumGroup {
                    scheme: self.name.clone(),
                    enum_group: group.to_string(),
                    role: self.role,
                    reason: format!("enum group already set to `{}`", existing),
                };
                self.fail(err);
            }
        }
    }

    fn bind_constant(&mut self, constant: &str, line_no: usize) {
        let Some(entry) = self.entries.last_mut() else {
            // Caught by the checker as an entry without name or doc.
            self.entries.push(EntryDraft {
                enum_constant: Some(constant.to_string()),
                ..Default::default()
            });
            return;
        };

        let existing = entry
            .enum_constant
            .clone()
            .or_else(|| entry.declared_constant.clone().filter(|c| c != constant));

        match existing {
            Some(existing) => {
                let err = SchemeError::DuplicateEnumAssignment {
                    scheme: self.name.clone(),
                    entry: entry.label().unwrap_or(constant).to_string(),
                    existing,
                    constant: constant.to_string(),
                    line: line_no,
                };
                self.fail(err);
            }
            None => entry.enum_constant = Some(constant.to_string()),
        }
    }

    /// Apply one body line.
    fn absorb(&mut self, line: &Line<'_>, line_no: usize) {
        match line {
            // A start marker inside an open scheme reads as one more entry.
            Line::EntryDoc { text, tag }
            | Line::SchemeStart {
                title: text,
                name: tag,
                ..
            } => self.entries.push(EntryDraft::from_doc(text, tag)),
            Line::EnumHeader(group) => self.set_enum_group(group),
            Line::EnumEntry(constant) => self.bind_constant(constant, line_no),
            _ => {}
        }
    }
}

fn non_empty(s: &str) -> Option<String> {
    let s = s.trim();
    (!s.is_empty()).then(|| s.to_string())
}

/// Parser state between lines.
#[derive(Debug, Default)]
pub enum ParseState {
    /// Looking for a scheme-start marker
    #[default]
    Idle,
    /// Collecting documentation lines right after the marker
    InSummary(SchemeDraft),
    /// Collecting the enum header and entries
    InBody(SchemeDraft),
}

/// Outcome of feeding one line.
#[derive(Debug)]
pub enum Step {
    /// Stay in (or move between) scanning states
    Continue,
    /// A terminator closed a scheme; the state is back to idle
    Complete(SchemeDraft),
}

impl ParseState {
    /// Consume one line (`line_no` is 1-based).
    pub fn feed(&mut self, line_no: usize, raw: &str) -> Step {
        let line = Line::classify(raw);

        match std::mem::take(self) {
            ParseState::Idle => {
                if let Line::SchemeStart { role, title, name } = line {
                    *self = ParseState::InSummary(SchemeDraft::new(role, name, title, line_no));
                }
                Step::Continue
            }

            ParseState::InSummary(mut draft) => match line {
                Line::Doc(text) => {
                    draft.summary.push(text.to_string());
                    *self = ParseState::InSummary(draft);
                    Step::Continue
                }
                other => Self::body_step(self, draft, &other, line_no),
            },

            ParseState::InBody(draft) => Self::body_step(self, draft, &line, line_no),
        }
    }

    fn body_step(&mut self, mut draft: SchemeDraft, line: &Line<'_>, line_no: usize) -> Step {
        match line {
            Line::Terminator => Step::Complete(draft),
            other => {
                draft.absorb(other, line_no);
                *self = ParseState::InBody(draft);
                Step::Continue
            }
        }
    }

    /// Close the input. An open scheme at end of file is unterminated.
    pub fn finish(self) -> Result<(), SchemeError> {
        match self {
            ParseState::Idle => Ok(()),
            ParseState::InSummary(draft) | ParseState::InBody(draft) => {
                Err(SchemeError::UnterminatedScheme {
                    scheme: draft.name,
                    line: draft.start_line,
                })
            }
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, ParseState::Idle)
    }
}

/// Parser for scheme annotations in header text.
#[derive(Debug, Clone, Default)]
pub struct AnnotationParser {
    checker: Checker,
}

impl AnnotationParser {
    /// Create a parser with the default checker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a specific checker for completed schemes.
    pub fn with_checker(mut self, checker: Checker) -> Self {
        self.checker = checker;
        self
    }

    /// Lazily parse header content into checked schemes.
    pub fn parse<'a>(&'a self, content: &'a str) -> Schemes<'a> {
        Schemes {
            checker: &self.checker,
            lines: content.lines().enumerate(),
            state: ParseState::Idle,
            done: false,
        }
    }
}

/// Iterator over the schemes of one file.
///
/// Yields `Err` for rejected schemes and keeps going. An unterminated
/// scheme at end of file is the last item.
pub struct Schemes<'a> {
    checker: &'a Checker,
    lines: Enumerate<Lines<'a>>,
    state: ParseState,
    done: bool,
}

impl Iterator for Schemes<'_> {
    type Item = Result<Scheme, SchemeError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        for (idx, raw) in self.lines.by_ref() {
            match self.state.feed(idx + 1, raw) {
                Step::Continue => {}
                Step::Complete(draft) => return Some(self.checker.check(draft)),
            }
        }

        self.done = true;
        std::mem::take(&mut self.state).finish().err().map(Err)
    }
}

impl std::iter::FusedIterator for Schemes<'_> {}

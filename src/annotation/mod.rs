//! Scheme annotations in header comments.
//!
//! Parses the fixed `/// Input arguments ... [name]` comment grammar into
//! validated [`Scheme`](crate::core::Scheme)s.

pub mod check;
pub mod errors;
pub mod grammar;
pub mod parser;

pub use check::{Checker, DEFAULT_RESERVED_MARKER};
pub use errors::{EntryField, SchemeError};
pub use grammar::Line;
pub use parser::{AnnotationParser, EntryDraft, ParseState, SchemeDraft, Schemes, Step};

//! schemegen - helper generation from annotated header schemes
//!
//! This crate provides the core library functionality for schemegen:
//! annotation parsing, consistency checking, and rendering of the native
//! helpers, SWIG glue and Python wrappers.

pub mod annotation;
pub mod core;
pub mod emit;
pub mod ops;
pub mod util;

/// Header fixtures for unit tests.
#[cfg(test)]
pub mod test_support;

pub use annotation::{AnnotationParser, Checker, SchemeError};
pub use core::{Entry, Role, Scheme};
pub use emit::{Artifacts, Emitter};
pub use util::config::Config;

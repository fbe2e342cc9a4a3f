//! High-level operations.
//!
//! This module contains the implementation of schemegen commands.

pub mod collect;
pub mod generate;

pub use collect::{collect_schemes, Collection, FatalSchemeError, Rejection};
pub use generate::{
    display_path, generate, render, GenerateOptions, GenerateReport, OutputStatus, WriteMode,
};

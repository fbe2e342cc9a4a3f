//! Core data structures for schemegen.
//!
//! - Roles and their role-dependent strings
//! - Validated schemes and their entries

pub mod role;
pub mod scheme;

pub use role::{Role, RoleInfo};
pub use scheme::{Entry, Scheme};

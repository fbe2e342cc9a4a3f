//! Scheme roles and the strings that depend on them.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Whether a scheme describes the inputs or the outputs of a function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Input arguments
    Input,
    /// Output arguments
    Output,
}

/// Role-dependent strings, looked up by [`Role::info`].
#[derive(Debug)]
pub struct RoleInfo {
    /// Role name as it appears in diagnostics.
    pub name: &'static str,
    /// Text following `///` on a scheme-start line.
    pub marker: &'static str,
    /// Suffixes an enum group name may end with.
    pub suffixes: &'static [&'static str],
}

static INPUT: RoleInfo = RoleInfo {
    name: "Input",
    marker: "Input arguments",
    suffixes: &["Input", "In"],
};

static OUTPUT: RoleInfo = RoleInfo {
    name: "Output",
    marker: "Output arguments",
    suffixes: &["Output", "Out"],
};

impl Role {
    /// All roles.
    pub const ALL: [Role; 2] = [Role::Input, Role::Output];

    /// Look up the strings for this role.
    pub fn info(&self) -> &'static RoleInfo {
        match self {
            Role::Input => &INPUT,
            Role::Output => &OUTPUT,
        }
    }

    /// Get the role name (`Input` or `Output`).
    pub fn as_str(&self) -> &'static str {
        self.info().name
    }

    /// Resolve a role from its name as written on a scheme-start line.
    pub fn from_name(name: &str) -> Option<Role> {
        Role::ALL.into_iter().find(|role| role.as_str() == name)
    }

    /// Check whether an enum group name carries one of this role's suffixes.
    pub fn accepts_group(&self, group: &str) -> bool {
        self.info()
            .suffixes
            .iter()
            .any(|suffix| group.len() > suffix.len() && group.ends_with(suffix))
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

//! Test fixtures for annotated headers.
//!
//! [`SchemeFixture`] renders one annotated scheme as header text;
//! [`ProjectFixture`] lays out a source tree of such headers on disk.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::core::Role;

/// One annotated scheme, rendered in the header comment grammar.
#[derive(Debug, Clone)]
pub struct SchemeFixture {
    pub role: Role,
    pub name: String,
    pub title_suffix: String,
    pub summary: Vec<String>,
    pub enum_group: String,
    /// (doc, arg name, enum constant), written as `/// doc [arg]` + `CONST,`
    pub entries: Vec<(String, String, String)>,
    pub terminated: bool,
}

impl SchemeFixture {
    /// An input scheme named `name` mirroring `enum_group`.
    pub fn input(name: impl Into<String>, enum_group: impl Into<String>) -> Self {
        SchemeFixture {
            role: Role::Input,
            name: name.into(),
            title_suffix: "of a function".to_string(),
            summary: Vec::new(),
            enum_group: enum_group.into(),
            entries: Vec::new(),
            terminated: true,
        }
    }

    /// An output scheme named `name` mirroring `enum_group`.
    pub fn output(name: impl Into<String>, enum_group: impl Into<String>) -> Self {
        SchemeFixture {
            role: Role::Output,
            ..Self::input(name, enum_group)
        }
    }

    /// Add a summary line.
    pub fn with_summary(mut self, line: impl Into<String>) -> Self {
        self.summary.push(line.into());
        self
    }

    /// Add an entry.
    pub fn with_entry(mut self, doc: &str, arg: &str, constant: &str) -> Self {
        self.entries
            .push((doc.to_string(), arg.to_string(), constant.to_string()));
        self
    }

    /// Drop the closing `};`.
    pub fn unterminated(mut self) -> Self {
        self.terminated = false;
        self
    }

    /// Render as header text.
    pub fn to_header(&self) -> String {
        let mut out = format!(
            "/// {} {} [{}]\n",
            self.role.info().marker,
            self.title_suffix,
            self.name
        );
        for line in &self.summary {
            out.push_str(&format!("/// {}\n", line));
        }
        out.push_str(&format!("enum {} {{\n", self.enum_group));
        for (doc, arg, constant) in &self.entries {
            out.push_str(&format!("  /// {} [{}]\n", doc, arg));
            out.push_str(&format!("  {},\n", constant));
        }
        if self.terminated {
            out.push_str("};\n");
        }
        out
    }
}

/// Fixture for a source tree of annotated headers.
#[derive(Debug, Clone, Default)]
pub struct ProjectFixture {
    /// Files (path relative to the root -> content).
    pub files: BTreeMap<PathBuf, String>,
}

impl ProjectFixture {
    /// Create an empty tree with the default license banner.
    pub fn new() -> Self {
        ProjectFixture::default().with_file(
            Path::new("misc").join("license_header.txt"),
            "/* license */\n",
        )
    }

    /// Add a file.
    pub fn with_file(mut self, path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        self.files.insert(path.into(), content.into());
        self
    }

    /// Add a header built from schemes, wrapped in unrelated C++.
    pub fn with_header(self, path: impl Into<PathBuf>, schemes: &[SchemeFixture]) -> Self {
        let mut content = String::from("#include <vector>\n\nnamespace CasADi {\n\n");
        for scheme in schemes {
            content.push_str(&scheme.to_header());
            content.push('\n');
        }
        content.push_str("} // namespace CasADi\n");
        self.with_file(path, content)
    }

    /// Write this fixture below `root`.
    pub fn write_to(&self, root: &Path) -> std::io::Result<()> {
        for (rel, content) in &self.files {
            let path = root.join(rel);
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(path, content)?;
        }
        Ok(())
    }
}

/// Common schemes.
pub mod schemes {
    use super::SchemeFixture;

    /// Integrator inputs, documented in the `doc [arg]` style.
    pub fn integrator_in() -> SchemeFixture {
        SchemeFixture::input("integratorIn", "IntegratorInput")
            .with_summary("Input arguments of an ODE/DAE integrator")
            .with_entry("Differential state at the initial time", "x0", "INTEGRATOR_X0")
            .with_entry("Parameters", "p", "INTEGRATOR_P")
    }

    /// Integrator outputs.
    pub fn integrator_out() -> SchemeFixture {
        SchemeFixture::output("integratorOut", "IntegratorOutput")
            .with_entry("Differential state at the final time", "xf", "INTEGRATOR_XF")
    }
}

//! Configuration file support for schemegen.
//!
//! schemegen reads two configuration files:
//! - Global: `~/.schemegen/config.toml` - User-wide defaults
//! - Project: `schemegen.toml` in the scanned root - Project-specific overrides
//!
//! Project config takes precedence over global config, and command-line
//! flags take precedence over both.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::annotation::{Checker, DEFAULT_RESERVED_MARKER};
use crate::emit::artifact::{include_guard, ArtifactOptions};
use crate::emit::binding::{DEFAULT_NAMESPACE, DEFAULT_VALUE_TYPES};
use crate::emit::BindingEmitter;

/// File name of the project configuration.
pub const PROJECT_CONFIG_NAME: &str = "schemegen.toml";

/// schemegen configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Header discovery settings
    pub discover: DiscoverConfig,

    /// Output settings
    pub emit: EmitConfig,
}

/// Header discovery configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DiscoverConfig {
    /// File-name glob for candidate headers (default `*.hpp`)
    pub pattern: Option<String>,
}

/// Output configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EmitConfig {
    /// Library namespace (default `CasADi`)
    pub namespace: Option<String>,

    /// Value types the SWIG templates are instantiated for
    #[serde(default)]
    pub value_types: Vec<String>,

    /// Native header path, relative to the output directory
    pub native_output: Option<PathBuf>,

    /// SWIG interface path, relative to the output directory
    pub binding_output: Option<PathBuf>,

    /// Path the SWIG interface includes the native header by
    pub native_include: Option<String>,

    /// License banner file, relative to the scanned root
    pub license: Option<PathBuf>,

    /// Count-sentinel marker that documented constants must not contain
    pub reserved_marker: Option<String>,

    /// Tool name in the generated-file warning
    pub generator: Option<String>,
}

impl Config {
    /// Load configuration from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file: {}", path.display()))
    }

    /// Load configuration, or defaults if the file doesn't exist.
    ///
    /// A file that exists but cannot be read or parsed is an error.
    pub fn load_if_exists(path: &Path) -> Result<Self> {
        if path.exists() {
            tracing::debug!("loading config from {}", path.display());
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Merge another config into this one (other takes precedence).
    pub fn merge(&mut self, other: Config) {
        if other.discover.pattern.is_some() {
            self.discover.pattern = other.discover.pattern;
        }

        if other.emit.namespace.is_some() {
            self.emit.namespace = other.emit.namespace;
        }
        if !other.emit.value_types.is_empty() {
            self.emit.value_types = other.emit.value_types;
        }
        if other.emit.native_output.is_some() {
            self.emit.native_output = other.emit.native_output;
        }
        if other.emit.binding_output.is_some() {
            self.emit.binding_output = other.emit.binding_output;
        }
        if other.emit.native_include.is_some() {
            self.emit.native_include = other.emit.native_include;
        }
        if other.emit.license.is_some() {
            self.emit.license = other.emit.license;
        }
        if other.emit.reserved_marker.is_some() {
            self.emit.reserved_marker = other.emit.reserved_marker;
        }
        if other.emit.generator.is_some() {
            self.emit.generator = other.emit.generator;
        }
    }

    /// Header glob.
    pub fn pattern(&self) -> &str {
        self.discover.pattern.as_deref().unwrap_or("*.hpp")
    }

    pub fn namespace(&self) -> &str {
        self.emit.namespace.as_deref().unwrap_or(DEFAULT_NAMESPACE)
    }

    pub fn value_types(&self) -> Vec<String> {
        if self.emit.value_types.is_empty() {
            DEFAULT_VALUE_TYPES.iter().map(|t| t.to_string()).collect()
        } else {
            self.emit.value_types.clone()
        }
    }

    pub fn native_output(&self) -> PathBuf {
        self.emit
            .native_output
            .clone()
            .unwrap_or_else(|| PathBuf::from("casadi").join("autogenerated.hpp"))
    }

    pub fn binding_output(&self) -> PathBuf {
        self.emit
            .binding_output
            .clone()
            .unwrap_or_else(|| PathBuf::from("swig").join("autogenerated.i"))
    }

    /// Include path of the native header; defaults to its output path.
    pub fn native_include(&self) -> String {
        self.emit.native_include.clone().unwrap_or_else(|| {
            self.native_output()
                .components()
                .map(|c| c.as_os_str().to_string_lossy().into_owned())
                .collect::<Vec<_>>()
                .join("/")
        })
    }

    pub fn license(&self) -> PathBuf {
        self.emit
            .license
            .clone()
            .unwrap_or_else(|| PathBuf::from("misc").join("license_header.txt"))
    }

    pub fn reserved_marker(&self) -> &str {
        self.emit
            .reserved_marker
            .as_deref()
            .unwrap_or(DEFAULT_RESERVED_MARKER)
    }

    pub fn generator(&self) -> &str {
        self.emit.generator.as_deref().unwrap_or("schemegen")
    }

    /// Build the consistency checker these settings describe.
    pub fn checker(&self) -> Checker {
        Checker::new().with_reserved_marker(self.reserved_marker())
    }

    /// Build the SWIG emitter these settings describe.
    pub fn binding_emitter(&self) -> BindingEmitter {
        BindingEmitter::new()
            .with_namespace(self.namespace())
            .with_value_types(self.value_types())
    }

    /// Artifact options, given the license banner text.
    pub fn artifact_options(&self, license: String) -> ArtifactOptions {
        let native_output = self.native_output();
        let guard_source = native_output
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "autogenerated.hpp".to_string());

        ArtifactOptions {
            license,
            generator: self.generator().to_string(),
            namespace: self.namespace().to_string(),
            native_include: self.native_include(),
            include_guard: include_guard(&guard_source),
        }
    }
}

/// Load merged configuration from global and project locations.
///
/// Order of precedence (highest to lowest):
/// 1. Project config (schemegen.toml)
/// 2. Global config (~/.schemegen/config.toml)
/// 3. Defaults
pub fn load_config(global_path: Option<&Path>, project_path: &Path) -> Result<Config> {
    let mut config = Config::default();

    if let Some(global_path) = global_path {
        config.merge(Config::load_if_exists(global_path)?);
    }
    config.merge(Config::load_if_exists(project_path)?);

    Ok(config)
}

/// Get the global schemegen config directory (~/.schemegen).
pub fn global_config_dir() -> Option<PathBuf> {
    directories::BaseDirs::new().map(|b| b.home_dir().join(".schemegen"))
}

/// Get the global config path (~/.schemegen/config.toml).
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("config.toml"))
}

/// Get the project config path (<root>/schemegen.toml).
pub fn project_config_path(root: &Path) -> PathBuf {
    root.join(PROJECT_CONFIG_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.pattern(), "*.hpp");
        assert_eq!(config.namespace(), "CasADi");
        assert_eq!(config.value_types(), vec!["SXMatrix", "MX"]);
        assert_eq!(config.native_include(), "casadi/autogenerated.hpp");
        assert_eq!(config.reserved_marker(), "_NUM_");
        assert_eq!(
            config.binding_output(),
            PathBuf::from("swig").join("autogenerated.i")
        );
    }

    #[test]
    fn test_config_load() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("schemegen.toml");

        std::fs::write(
            &config_path,
            r#"
[discover]
pattern = "*.h"

[emit]
namespace = "casadi"
value_types = ["DM", "SX", "MX"]
native_output = "include/helpers.hpp"
reserved_marker = "_COUNT"
"#,
        )
        .unwrap();

        let config = Config::load(&config_path).unwrap();
        assert_eq!(config.pattern(), "*.h");
        assert_eq!(config.namespace(), "casadi");
        assert_eq!(config.value_types(), vec!["DM", "SX", "MX"]);
        assert_eq!(config.native_include(), "include/helpers.hpp");
        assert_eq!(config.reserved_marker(), "_COUNT");

        let options = config.artifact_options(String::new());
        assert_eq!(options.include_guard, "HELPERS_HPP");
        assert_eq!(options.namespace, "casadi");
    }

    #[test]
    fn test_config_load_rejects_bad_toml() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("schemegen.toml");
        std::fs::write(&config_path, "[emit\nnamespace = 1").unwrap();

        assert!(Config::load(&config_path).is_err());
        assert!(Config::load_if_exists(&config_path).is_err());
        assert!(Config::load_if_exists(&tmp.path().join("missing.toml")).is_ok());
    }

    #[test]
    fn test_load_config_fails_on_bad_project_config() {
        let tmp = TempDir::new().unwrap();
        let project_path = tmp.path().join("schemegen.toml");
        std::fs::write(
            &project_path,
            "[emit]\nnamespace = \"casadi\"\nvalue_types = \"DM\"\n",
        )
        .unwrap();

        let err = load_config(None, &project_path).unwrap_err();
        assert!(format!("{:#}", err).contains("failed to parse config file"));
    }

    #[test]
    fn test_load_config_fails_on_bad_global_config() {
        let tmp = TempDir::new().unwrap();
        let global_path = tmp.path().join("config.toml");
        std::fs::write(&global_path, "[discover]\npattern = 3\n").unwrap();

        assert!(load_config(Some(&global_path), &tmp.path().join("schemegen.toml")).is_err());
    }

    #[test]
    fn test_config_merge() {
        let mut base = Config::default();
        base.emit.namespace = Some("casadi".to_string());
        base.emit.value_types = vec!["DM".to_string()];

        let mut override_cfg = Config::default();
        override_cfg.emit.namespace = Some("other".to_string());

        base.merge(override_cfg);

        assert_eq!(base.namespace(), "other");
        assert_eq!(base.value_types(), vec!["DM"]); // Not overridden
    }

    #[test]
    fn test_load_config_precedence() {
        let tmp = TempDir::new().unwrap();
        let global_path = tmp.path().join("global.toml");
        let project_path = tmp.path().join("project.toml");

        std::fs::write(
            &global_path,
            r#"
[discover]
pattern = "*.hh"

[emit]
namespace = "global_ns"
generator = "misc/autogencode"
"#,
        )
        .unwrap();

        std::fs::write(
            &project_path,
            r#"
[emit]
namespace = "project_ns"
"#,
        )
        .unwrap();

        let config = load_config(Some(&global_path), &project_path).unwrap();

        assert_eq!(config.namespace(), "project_ns");
        assert_eq!(config.pattern(), "*.hh");
        assert_eq!(config.generator(), "misc/autogencode");
    }

    #[test]
    fn test_checker_uses_marker() {
        let mut config = Config::default();
        config.emit.reserved_marker = Some("_LAST".to_string());
        assert_eq!(config.checker().reserved_marker(), "_LAST");
    }
}

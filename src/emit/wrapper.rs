//! Python convenience functions.

use super::{ensure_entries, Emitter};
use crate::annotation::SchemeError;
use crate::core::Scheme;

const INDENT: &str = "  ";

/// Emits `def name(a=[], ...)` with a docstring listing every keyword.
#[derive(Debug, Clone, Default)]
pub struct WrapperEmitter;

impl WrapperEmitter {
    pub fn new() -> Self {
        WrapperEmitter
    }

    fn docstring(scheme: &Scheme) -> String {
        let mut out = format!("{INDENT}\"\"\"\n");
        out.push_str(&format!(
            "{INDENT}Helper function for '{}'\n\n",
            scheme.enum_group
        ));

        // Doxygen line breaks mean nothing in a docstring.
        let lines = std::iter::once(scheme.title.as_str()).chain(scheme.summary_lines());
        for line in lines {
            let line = line.replace("\\n", "");
            out.push_str(format!("{INDENT}{}", line).trim_end());
            out.push('\n');
        }
        out.push('\n');

        out.push_str(&format!("{INDENT}Keyword arguments:\n"));
        let width = scheme.widest_arg_name();
        for entry in &scheme.entries {
            out.push_str(&format!(
                "{INDENT}{INDENT}{:<width$} -- {} [{}]\n",
                entry.arg_name,
                entry.doc,
                entry.enum_constant,
                width = width
            ));
        }
        out.push_str(&format!("{INDENT}\"\"\"\n"));
        out
    }
}

impl Emitter for WrapperEmitter {
    fn target(&self) -> &'static str {
        "wrapper"
    }

    fn render(&self, scheme: &Scheme) -> Result<String, SchemeError> {
        ensure_entries(scheme)?;

        let params: Vec<String> = scheme.arg_names().map(|n| format!("{}=[]", n)).collect();
        let args: Vec<&str> = scheme.arg_names().collect();

        let mut out = format!("def {}({}):\n", scheme.name, params.join(","));
        out.push_str(&Self::docstring(scheme));
        out.push_str(&format!("{INDENT}return [{}]\n", args.join(",")));
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emit::test_schemes::{foo_in, integrator_in};

    #[test]
    fn test_one_keyword_function() {
        let out = WrapperEmitter::new().render(&foo_in()).unwrap();
        assert_eq!(
            out,
            "def fooIn(a=[]):\n  \
             \"\"\"\n  \
             Helper function for 'fooIn'\n\
             \n  \
             Input arguments of f\n  \
             does foo\n\
             \n  \
             Keyword arguments:\n    \
             a -- the a [F_A]\n  \
             \"\"\"\n  \
             return [a]\n"
        );
    }

    #[test]
    fn test_listing_aligned_to_longest_name() {
        let out = WrapperEmitter::new().render(&integrator_in()).unwrap();
        assert!(out.starts_with("def integratorIn(x0=[],p=[]):\n"));
        assert!(out.contains(
            "    x0 -- Differential state at the initial time [INTEGRATOR_X0]\n"
        ));
        assert!(out.contains("    p  -- Parameters [INTEGRATOR_P]\n"));
        assert!(out.ends_with("  return [x0,p]\n"));
    }

    #[test]
    fn test_doxygen_breaks_removed() {
        let out = WrapperEmitter::new().render(&integrator_in()).unwrap();
        assert!(!out.contains("\\n"));
        assert!(out.contains("  Integrates a DAE.\n\n  Second paragraph.\n"));
    }
}

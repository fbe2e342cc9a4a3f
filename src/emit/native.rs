//! C++ helper templates.

use super::{ensure_entries, Emitter};
use crate::annotation::SchemeError;
use crate::core::Scheme;

/// Emits `template<class M> std::vector<M> name(const M& a=M(), ...)`.
#[derive(Debug, Clone, Default)]
pub struct NativeEmitter;

impl NativeEmitter {
    pub fn new() -> Self {
        NativeEmitter
    }

    fn doc_block(scheme: &Scheme) -> String {
        let mut out = format!("/// Helper function for '{}'\n", scheme.enum_group);
        out.push_str(&doc_line(&scheme.title));
        for line in scheme.summary_lines() {
            out.push_str(&doc_line(line));
        }
        out.push_str("///\n");
        out.push_str(&format!("/// \\copydoc scheme_{}\n", scheme.enum_group));
        out
    }
}

fn doc_line(text: &str) -> String {
    format!("{}\n", format!("/// {}", text).trim_end())
}

impl Emitter for NativeEmitter {
    fn target(&self) -> &'static str {
        "native"
    }

    fn render(&self, scheme: &Scheme) -> Result<String, SchemeError> {
        ensure_entries(scheme)?;

        let params: Vec<String> = scheme
            .arg_names()
            .map(|name| format!("const M& {}=M()", name))
            .collect();
        let args: Vec<&str> = scheme.arg_names().collect();
        let n = scheme.arity();

        let mut out = Self::doc_block(scheme);
        out.push_str("template<class M>\n");
        out.push_str(&format!(
            "std::vector<M> {}({}){{\n",
            scheme.name,
            params.join(",")
        ));
        out.push_str(&format!("  M ret[{}] = {{{}}};\n", n, args.join(",")));
        out.push_str(&format!("  return std::vector<M>(ret,ret+{});\n", n));
        out.push_str("}\n");
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emit::test_schemes::{foo_in, integrator_in};

    #[test]
    fn test_single_parameter_helper() {
        let out = NativeEmitter::new().render(&foo_in()).unwrap();
        assert_eq!(
            out,
            "/// Helper function for 'fooIn'\n\
             /// Input arguments of f\n\
             /// does foo\n\
             ///\n\
             /// \\copydoc scheme_fooIn\n\
             template<class M>\n\
             std::vector<M> fooIn(const M& a=M()){\n  \
             M ret[1] = {a};\n  \
             return std::vector<M>(ret,ret+1);\n\
             }\n"
        );
    }

    #[test]
    fn test_parameters_follow_entry_order() {
        let out = NativeEmitter::new().render(&integrator_in()).unwrap();
        assert!(out.contains("std::vector<M> integratorIn(const M& x0=M(),const M& p=M()){"));
        assert!(out.contains("  M ret[2] = {x0,p};"));
        assert!(out.contains("ret+2);"));
        assert!(out.contains("/// \\n\n"));
    }
}

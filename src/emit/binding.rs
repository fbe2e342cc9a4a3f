//! SWIG template instantiations.

use super::{ensure_entries, Emitter};
use crate::annotation::SchemeError;
use crate::core::Scheme;

/// Namespace the generated helpers live in.
pub const DEFAULT_NAMESPACE: &str = "CasADi";

/// Matrix types every helper is instantiated for.
pub const DEFAULT_VALUE_TYPES: [&str; 2] = ["SXMatrix", "MX"];

/// Emits one `%template` per value type inside the library namespace.
#[derive(Debug, Clone)]
pub struct BindingEmitter {
    namespace: String,
    value_types: Vec<String>,
}

impl Default for BindingEmitter {
    fn default() -> Self {
        BindingEmitter {
            namespace: DEFAULT_NAMESPACE.to_string(),
            value_types: DEFAULT_VALUE_TYPES.iter().map(|t| t.to_string()).collect(),
        }
    }
}

impl BindingEmitter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    pub fn with_value_types(mut self, types: Vec<String>) -> Self {
        self.value_types = types;
        self
    }
}

impl Emitter for BindingEmitter {
    fn target(&self) -> &'static str {
        "binding"
    }

    fn render(&self, scheme: &Scheme) -> Result<String, SchemeError> {
        ensure_entries(scheme)?;

        let mut out = format!("namespace {} {{\n", self.namespace);
        for ty in &self.value_types {
            out.push_str(&format!(
                "%template({name}) {name}<{ty}>;\n",
                name = scheme.name,
                ty = ty
            ));
        }
        out.push_str("}\n");
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emit::test_schemes::foo_in;

    #[test]
    fn test_default_instantiations() {
        let out = BindingEmitter::new().render(&foo_in()).unwrap();
        assert_eq!(
            out,
            "namespace CasADi {\n\
             %template(fooIn) fooIn<SXMatrix>;\n\
             %template(fooIn) fooIn<MX>;\n\
             }\n"
        );
    }

    #[test]
    fn test_custom_namespace_and_types() {
        let out = BindingEmitter::new()
            .with_namespace("casadi")
            .with_value_types(vec!["DM".to_string()])
            .render(&foo_in())
            .unwrap();
        assert_eq!(out, "namespace casadi {\n%template(fooIn) fooIn<DM>;\n}\n");
    }
}

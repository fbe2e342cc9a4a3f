//! Complete output files.
//!
//! Two artifacts are produced from the full list of accepted schemes:
//!
//! - the native header, holding every C++ helper inside an include guard
//!   and the library namespace;
//! - the SWIG interface, holding every Python wrapper in a `%pythoncode`
//!   block followed by its `%template` instantiations for non-Python
//!   targets.
//!
//! Both start with the license banner and a generated-file warning. Text is
//! built in memory only; writing is the caller's business.

use super::{BindingEmitter, Emitter, NativeEmitter, WrapperEmitter};
use crate::annotation::SchemeError;
use crate::core::Scheme;

/// Fixed text wrapped around the rendered schemes.
#[derive(Debug, Clone)]
pub struct ArtifactOptions {
    /// License banner, copied verbatim to the top of both files
    pub license: String,
    /// Tool name in the generated-file warning
    pub generator: String,
    /// Namespace the helpers are declared in
    pub namespace: String,
    /// Path the SWIG interface `%include`s the native header by
    pub native_include: String,
    /// Include guard macro of the native header
    pub include_guard: String,
}

impl Default for ArtifactOptions {
    fn default() -> Self {
        ArtifactOptions {
            license: String::new(),
            generator: "schemegen".to_string(),
            namespace: super::binding::DEFAULT_NAMESPACE.to_string(),
            native_include: "casadi/autogenerated.hpp".to_string(),
            include_guard: include_guard("autogenerated.hpp"),
        }
    }
}

/// Derive an include guard macro from a header file name.
///
/// `autogenerated.hpp` becomes `AUTOGENERATED_HPP`.
pub fn include_guard(file_name: &str) -> String {
    file_name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_uppercase()
            } else {
                '_'
            }
        })
        .collect()
}

/// The rendered contents of both output files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifacts {
    /// C++ header with the helper templates
    pub native: String,
    /// SWIG interface with wrappers and instantiations
    pub binding: String,
}

impl Artifacts {
    /// Render all schemes, in order, into both artifacts.
    pub fn assemble(
        schemes: &[Scheme],
        options: &ArtifactOptions,
        binding: &BindingEmitter,
    ) -> Result<Self, SchemeError> {
        let native_emitter = NativeEmitter::new();
        let wrapper_emitter = WrapperEmitter::new();

        let mut native = preamble(options);
        native.push_str(&format!("#ifndef {}\n", options.include_guard));
        native.push_str(&format!("#define {}\n", options.include_guard));
        native.push_str("#include <vector>\n");
        native.push_str(&format!("namespace {}{{\n", options.namespace));

        let mut swig = preamble(options);
        swig.push_str(&format!("%include \"{}\"\n", options.native_include));

        for scheme in schemes {
            native.push_str(&native_emitter.render(scheme)?);

            swig.push_str("%pythoncode %{\n");
            swig.push_str(&wrapper_emitter.render(scheme)?);
            swig.push_str("%}\n");
            swig.push_str("#ifndef SWIGPYTHON\n");
            swig.push_str(&binding.render(scheme)?);
            swig.push_str("#endif //SWIGPYTHON\n");
        }

        native.push_str("}\n");
        native.push_str(&format!("#endif //{}\n", options.include_guard));
        tracing::debug!(
            "rendered {} scheme(s) through {}, {} and {}",
            schemes.len(),
            native_emitter.target(),
            wrapper_emitter.target(),
            binding.target()
        );

        Ok(Artifacts {
            native,
            binding: swig,
        })
    }
}

fn preamble(options: &ArtifactOptions) -> String {
    let mut out = options.license.clone();
    if !out.is_empty() && !out.ends_with('\n') {
        out.push('\n');
    }
    out.push_str(&format!(
        "/** All edits to this file will be lost - autogenerated by {} */\n",
        options.generator
    ));
    out
}

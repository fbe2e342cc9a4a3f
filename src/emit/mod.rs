//! Code generation for validated schemes.
//!
//! Each scheme is rendered three ways: a C++ helper template, SWIG
//! instantiations of that template, and a Python convenience function.
//! [`artifact`] wraps the rendered fragments into complete output files.

pub mod artifact;
pub mod binding;
pub mod native;
pub mod wrapper;

pub use artifact::{ArtifactOptions, Artifacts};
pub use binding::BindingEmitter;
pub use native::NativeEmitter;
pub use wrapper::WrapperEmitter;

use crate::annotation::SchemeError;
use crate::core::Scheme;

/// Renders one scheme into a fragment of a target artifact.
///
/// Rendering is pure: the same scheme always produces the same text.
pub trait Emitter {
    /// Short name of the target, used in logs.
    fn target(&self) -> &'static str;

    /// Render a scheme. Schemes without entries are refused.
    fn render(&self, scheme: &Scheme) -> Result<String, SchemeError>;
}

/// Refuse schemes that would produce a zero-argument helper.
pub(crate) fn ensure_entries(scheme: &Scheme) -> Result<(), SchemeError> {
    if scheme.entries.is_empty() {
        return Err(SchemeError::EmptySchemeRejected {
            scheme: scheme.name.clone(),
        });
    }
    Ok(())
}

/// Render a scheme as a C++ helper with default settings.
pub fn render_native(scheme: &Scheme) -> Result<String, SchemeError> {
    NativeEmitter::new().render(scheme)
}

/// Render a scheme's SWIG instantiations with default settings.
pub fn render_binding(scheme: &Scheme) -> Result<String, SchemeError> {
    BindingEmitter::new().render(scheme)
}

/// Render a scheme as a Python function with default settings.
pub fn render_script_wrapper(scheme: &Scheme) -> Result<String, SchemeError> {
    WrapperEmitter::new().render(scheme)
}

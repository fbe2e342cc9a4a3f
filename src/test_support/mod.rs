//! Test utilities for schemegen unit tests.
//!
//! Provides builders for annotated header text and for source trees of
//! annotated headers.
//!
//! # Example
//!
//! ```rust,ignore
//! use schemegen::test_support::{ProjectFixture, SchemeFixture};
//!
//! let header = SchemeFixture::input("fooIn", "FooInput")
//!     .with_entry("the a", "a", "FOO_A")
//!     .to_header();
//! ```

pub mod fixtures;

pub use fixtures::*;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotation::AnnotationParser;

    #[test]
    fn test_fixture_parses_back() {
        let header = schemes::integrator_in().to_header();
        let results: Vec<_> = AnnotationParser::new().parse(&header).collect();
        assert_eq!(results.len(), 1);

        let scheme = results[0].as_ref().unwrap();
        assert_eq!(scheme.title, "Input arguments of a function");
        assert_eq!(scheme.arg_names().collect::<Vec<_>>(), vec!["x0", "p"]);
    }

    #[test]
    fn test_project_fixture_writes_tree() {
        let tmp = tempfile::TempDir::new().unwrap();
        ProjectFixture::new()
            .with_header("casadi/fx/integrator.hpp", &[schemes::integrator_in()])
            .write_to(tmp.path())
            .unwrap();

        assert!(tmp.path().join("misc/license_header.txt").exists());
        let header =
            std::fs::read_to_string(tmp.path().join("casadi/fx/integrator.hpp")).unwrap();
        assert!(header.contains("enum IntegratorInput {"));
    }
}

//! Consistency checks for parsed schemes.

use super::errors::{EntryField, SchemeError};
use super::parser::{EntryDraft, SchemeDraft};
use crate::core::{Entry, Scheme};

/// Substring that marks an enum's count sentinel (e.g. `INTEGRATOR_NUM_IN`).
pub const DEFAULT_RESERVED_MARKER: &str = "_NUM_";

/// Validates drafts and turns them into [`Scheme`]s.
#[derive(Debug, Clone)]
pub struct Checker {
    reserved_marker: String,
}

impl Default for Checker {
    fn default() -> Self {
        Checker {
            reserved_marker: DEFAULT_RESERVED_MARKER.to_string(),
        }
    }
}

impl Checker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the count-sentinel marker no documented constant may contain.
    pub fn with_reserved_marker(mut self, marker: impl Into<String>) -> Self {
        self.reserved_marker = marker.into();
        self
    }

    pub fn reserved_marker(&self) -> &str {
        &self.reserved_marker
    }

    /// Check a completed draft.
    ///
    /// Failures recorded while parsing come first, then entry completeness,
    /// the enum group's role suffix, and finally reserved constants. A
    /// scheme without entries passes; emitters refuse it on their own.
    pub fn check(&self, draft: SchemeDraft) -> Result<Scheme, SchemeError> {
        if let Some(err) = draft.failure {
            return Err(err);
        }

        let mut entries = Vec::with_capacity(draft.entries.len());
        for (idx, entry) in draft.entries.into_iter().enumerate() {
            entries.push(complete_entry(&draft.name, idx + 1, entry)?);
        }

        let enum_group = draft.enum_group.unwrap_or_default();
        if enum_group.is_empty() || !draft.role.accepts_group(&enum_group) {
            let reason = if enum_group.is_empty() {
                "no `enum <name> {` line before the terminator".to_string()
            } else {
                format!(
                    "`{}` does not end in an {} suffix",
                    enum_group, draft.role
                )
            };
            return Err(SchemeError::MalformedEnumGroup {
                scheme: draft.name,
                enum_group,
                role: draft.role,
                reason,
            });
        }

        if !self.reserved_marker.is_empty() {
            if let Some(entry) = entries
                .iter()
                .find(|e| e.enum_constant.contains(&self.reserved_marker))
            {
                return Err(SchemeError::ReservedNameCollision {
                    scheme: draft.name,
                    constant: entry.enum_constant.clone(),
                    marker: self.reserved_marker.clone(),
                });
            }
        }

        Ok(Scheme {
            role: draft.role,
            name: draft.name,
            title: draft.title,
            summary: draft.summary.join("\n"),
            enum_group,
            entries,
        })
    }
}

fn complete_entry(scheme: &str, index: usize, entry: EntryDraft) -> Result<Entry, SchemeError> {
    let incomplete = |missing| SchemeError::IncompleteEntry {
        scheme: scheme.to_string(),
        index,
        label: entry.label().map(str::to_string),
        missing,
    };

    let arg_name = entry.arg_name.clone().ok_or_else(|| incomplete(EntryField::ArgName))?;
    let doc = entry.doc.clone().ok_or_else(|| incomplete(EntryField::Doc))?;
    let enum_constant = entry
        .enum_constant
        .clone()
        .ok_or_else(|| incomplete(EntryField::EnumConstant))?;

    Ok(Entry {
        arg_name,
        doc,
        enum_constant,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Role;

    fn entry(name: &str, doc: &str, constant: &str) -> EntryDraft {
        EntryDraft {
            arg_name: Some(name.to_string()),
            doc: Some(doc.to_string()),
            declared_constant: None,
            enum_constant: Some(constant.to_string()),
        }
    }

    fn draft(role: Role, group: Option<&str>, entries: Vec<EntryDraft>) -> SchemeDraft {
        SchemeDraft {
            role,
            name: "helper".to_string(),
            title: "Input arguments of a helper".to_string(),
            start_line: 1,
            summary: vec!["one".to_string(), "two".to_string()],
            enum_group: group.map(str::to_string),
            entries,
            failure: None,
        }
    }

    #[test]
    fn test_check_accepts_consistent_scheme() {
        let scheme = Checker::new()
            .check(draft(
                Role::Input,
                Some("HelperInput"),
                vec![entry("x", "the x", "HELPER_X"), entry("y", "the y", "HELPER_Y")],
            ))
            .unwrap();
        assert_eq!(scheme.summary, "one\ntwo");
        assert_eq!(scheme.entries[1], Entry::new("y", "the y", "HELPER_Y"));
    }

    #[test]
    fn test_incomplete_entry_reports_field() {
        let mut missing_doc = entry("x", "", "HELPER_X");
        missing_doc.doc = None;
        let err = Checker::new()
            .check(draft(Role::Input, Some("HelperInput"), vec![missing_doc]))
            .unwrap_err();
        assert_eq!(
            err,
            SchemeError::IncompleteEntry {
                scheme: "helper".to_string(),
                index: 1,
                label: Some("x".to_string()),
                missing: EntryField::Doc,
            }
        );
    }

    #[test]
    fn test_completeness_checked_before_group() {
        let orphan = EntryDraft {
            enum_constant: Some("HELPER_X".to_string()),
            ..Default::default()
        };
        let err = Checker::new()
            .check(draft(Role::Input, Some("HelperOutput"), vec![orphan]))
            .unwrap_err();
        assert!(matches!(
            err,
            SchemeError::IncompleteEntry {
                missing: EntryField::ArgName,
                ..
            }
        ));
    }

    #[test]
    fn test_group_must_match_role_regardless_of_entries() {
        for n in 0..4 {
            let entries = (0..n)
                .map(|i| entry(&format!("a{}", i), "doc", &format!("H_A{}", i)))
                .collect();
            let err = Checker::new()
                .check(draft(Role::Output, Some("HelperInput"), entries))
                .unwrap_err();
            assert!(matches!(err, SchemeError::MalformedEnumGroup { .. }));
        }
    }

    #[test]
    fn test_missing_group_is_malformed() {
        let err = Checker::new()
            .check(draft(Role::Input, None, vec![entry("x", "d", "H_X")]))
            .unwrap_err();
        match err {
            SchemeError::MalformedEnumGroup {
                enum_group, reason, ..
            } => {
                assert!(enum_group.is_empty());
                assert!(reason.contains("no `enum"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_reserved_marker() {
        let entries = vec![entry("x", "d", "H_X"), entry("n", "count", "HELPER_NUM_IN")];
        let err = Checker::new()
            .check(draft(Role::Input, Some("HelperInput"), entries.clone()))
            .unwrap_err();
        assert!(matches!(err, SchemeError::ReservedNameCollision { .. }));

        let scheme = Checker::new()
            .with_reserved_marker("_COUNT_")
            .check(draft(Role::Input, Some("HelperInput"), entries))
            .unwrap();
        assert_eq!(scheme.arity(), 2);
    }

    #[test]
    fn test_empty_scheme_passes_checker() {
        let scheme = Checker::new()
            .check(draft(Role::Input, Some("HelperInput"), Vec::new()))
            .unwrap();
        assert_eq!(scheme.arity(), 0);
    }
}

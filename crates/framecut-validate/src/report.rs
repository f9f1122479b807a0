use std::collections::BTreeMap;

use serde::Serialize;

use framecut_model::FieldName;

use crate::issue::{Issue, Severity};

/// At most one issue per field, from a single validation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    issues: BTreeMap<FieldName, Issue>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `issue` unless its field already has one; the first issue wins.
    pub fn add(&mut self, issue: Issue) -> bool {
        let field = issue.field();
        if self.issues.contains_key(&field) {
            return false;
        }
        self.issues.insert(field, issue);
        true
    }

    pub fn issue(&self, field: FieldName) -> Option<&Issue> {
        self.issues.get(&field)
    }

    pub fn has_issue(&self, field: FieldName) -> bool {
        self.issues.contains_key(&field)
    }

    /// Message displayed next to `field`, if any.
    pub fn message(&self, field: FieldName) -> Option<String> {
        self.issue(field).map(Issue::message)
    }

    pub fn issues(&self) -> impl Iterator<Item = &Issue> {
        self.issues.values()
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn error_count(&self) -> usize {
        self.issues()
            .filter(|issue| issue.severity() == Severity::Error)
            .count()
    }

    pub fn warning_count(&self) -> usize {
        self.issues()
            .filter(|issue| issue.severity() == Severity::Warning)
            .count()
    }
}

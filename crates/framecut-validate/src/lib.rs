//! Validation and result gating.
//!
//! [`validate`] is a pure function of a [`FieldStore`] snapshot. It always
//! builds a fresh [`ValidationReport`]; nothing is merged with earlier runs.
//! [`gate`] then decides which outputs may be shown.

mod checks;
mod issue;
mod report;

pub use checks::Bound;
pub use issue::{Issue, Severity};
pub use report::ValidationReport;

use framecut_model::{FieldName, FieldStore};
use serde::Serialize;
use tracing::trace;

/// Validate every field of `store`.
pub fn validate(store: &FieldStore) -> ValidationReport {
    let mut report = ValidationReport::new();
    checks::parse_errors(store, &mut report);
    checks::bounds(store, &mut report);
    checks::rabbet_within_face(store, &mut report);
    trace!(
        errors = report.error_count(),
        warnings = report.warning_count(),
        "validation complete"
    );
    report
}

/// Which outputs the current inputs allow.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct GatingDecision {
    /// Every required field has a value and none carries an issue.
    pub results_valid: bool,
    /// Material thickness and cost rate both have values without issues.
    pub material_available: bool,
}

fn fields_ready(store: &FieldStore, report: &ValidationReport, fields: &[FieldName]) -> bool {
    fields
        .iter()
        .all(|field| store.value(*field).is_some() && !report.has_issue(*field))
}

/// The required-field gate.
pub fn required_fields_ready(store: &FieldStore, report: &ValidationReport) -> bool {
    fields_ready(store, report, &FieldName::REQUIRED)
}

/// The optional-output gate for board feet and cost.
pub fn optional_fields_ready(store: &FieldStore, report: &ValidationReport) -> bool {
    fields_ready(store, report, &FieldName::OPTIONAL)
}

pub fn gate(store: &FieldStore, report: &ValidationReport) -> GatingDecision {
    GatingDecision {
        results_valid: required_fields_ready(store, report),
        material_available: optional_fields_ready(store, report),
    }
}

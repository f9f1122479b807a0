//! Validation checks, run in a fixed order so the first issue per field wins.

use framecut_model::{FieldName, FieldStore};

use crate::issue::Issue;
use crate::report::ValidationReport;

/// Lower bound a field's value must respect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    /// `value > 0`
    Positive,
    /// `value >= 0`
    NonNegative,
}

impl Bound {
    pub fn for_field(field: FieldName) -> Self {
        match field {
            FieldName::ArtworkWidth
            | FieldName::ArtworkHeight
            | FieldName::MouldingFaceWidth
            | FieldName::MaterialThickness => Bound::Positive,
            FieldName::RabbetDepth | FieldName::Clearance | FieldName::CostPerBoardFoot => {
                Bound::NonNegative
            }
        }
    }

    fn check(self, field: FieldName, value: f64) -> Option<Issue> {
        match self {
            Bound::Positive if value <= 0.0 => Some(Issue::NotPositive { field }),
            Bound::NonNegative if value < 0.0 => Some(Issue::Negative { field }),
            _ => None,
        }
    }
}

/// 1. Parse errors.
pub(crate) fn parse_errors(store: &FieldStore, report: &mut ValidationReport) {
    for (field, state) in store.iter() {
        if state.parse_error().is_some() {
            report.add(Issue::NotANumber { field });
        }
    }
}

/// 2. Per-field bounds, skipped for fields that already have an issue.
pub(crate) fn bounds(store: &FieldStore, report: &mut ValidationReport) {
    for field in FieldName::ALL {
        if report.has_issue(field) {
            continue;
        }
        let Some(value) = store.value(field) else {
            continue;
        };
        if let Some(issue) = Bound::for_field(field).check(field, value) {
            report.add(issue);
        }
    }
}

/// 3. Rabbet depth may equal, but not exceed, the moulding face width.
pub(crate) fn rabbet_within_face(store: &FieldStore, report: &mut ValidationReport) {
    if report.has_issue(FieldName::RabbetDepth) || report.has_issue(FieldName::MouldingFaceWidth)
    {
        return;
    }
    let (Some(rabbet), Some(face)) = (
        store.value(FieldName::RabbetDepth),
        store.value(FieldName::MouldingFaceWidth),
    ) else {
        return;
    };
    if rabbet > face {
        report.add(Issue::RabbetExceedsFace);
    }
}

//! Validation issue types.
//!
//! Each variant carries only the data it needs; the displayed message is
//! derived from the variant.

use serde::{Deserialize, Serialize};

use framecut_model::{FieldName, PARSE_ERROR_MESSAGE};

/// Issue severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Blocks every result.
    Error,
    /// Blocks the material estimate only.
    Warning,
}

/// A single problem with one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Issue {
    /// Raw text is not a finite number.
    NotANumber { field: FieldName },
    /// Value must be strictly greater than zero.
    NotPositive { field: FieldName },
    /// Value must be zero or greater.
    Negative { field: FieldName },
    /// Rabbet depth is larger than the moulding face width.
    RabbetExceedsFace,
}

impl Issue {
    /// Stable issue code.
    pub fn code(&self) -> &'static str {
        match self {
            Issue::NotANumber { .. } => "FC001",
            Issue::NotPositive { .. } => "FC002",
            Issue::Negative { .. } => "FC003",
            Issue::RabbetExceedsFace => "FC004",
        }
    }

    /// Field the message is shown next to.
    pub fn field(&self) -> FieldName {
        match self {
            Issue::NotANumber { field }
            | Issue::NotPositive { field }
            | Issue::Negative { field } => *field,
            Issue::RabbetExceedsFace => FieldName::RabbetDepth,
        }
    }

    pub fn severity(&self) -> Severity {
        if self.field().is_required() {
            Severity::Error
        } else {
            Severity::Warning
        }
    }

    pub fn message(&self) -> String {
        match self {
            Issue::NotANumber { .. } => PARSE_ERROR_MESSAGE.to_string(),
            Issue::NotPositive { field } => format!("{} must be greater than 0.", field.label()),
            Issue::Negative { field } => format!("{} must be 0 or greater.", field.label()),
            Issue::RabbetExceedsFace => {
                "Rabbet depth cannot exceed moulding face width.".to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_field() {
        assert_eq!(
            Issue::NotPositive {
                field: FieldName::ArtworkWidth
            }
            .message(),
            "Artwork width must be greater than 0."
        );
        assert_eq!(
            Issue::Negative {
                field: FieldName::Clearance
            }
            .message(),
            "Clearance must be 0 or greater."
        );
        assert_eq!(Issue::RabbetExceedsFace.field(), FieldName::RabbetDepth);
    }

    #[test]
    fn optional_fields_only_warn() {
        let issue = Issue::Negative {
            field: FieldName::CostPerBoardFoot,
        };
        assert_eq!(issue.severity(), Severity::Warning);
        assert_eq!(Issue::RabbetExceedsFace.severity(), Severity::Error);
    }
}

//! Field identifiers and per-field parse state.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Message stored on a field whose raw text is not a finite number.
pub const PARSE_ERROR_MESSAGE: &str = "Enter a valid number.";

/// One configurable measurement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldName {
    ArtworkWidth,
    ArtworkHeight,
    MouldingFaceWidth,
    RabbetDepth,
    Clearance,
    MaterialThickness,
    CostPerBoardFoot,
}

impl FieldName {
    pub const COUNT: usize = 7;

    /// Every field, in display order.
    pub const ALL: [FieldName; Self::COUNT] = [
        Self::ArtworkWidth,
        Self::ArtworkHeight,
        Self::MouldingFaceWidth,
        Self::RabbetDepth,
        Self::Clearance,
        Self::MaterialThickness,
        Self::CostPerBoardFoot,
    ];

    /// Fields that must hold valid values before any result is shown.
    pub const REQUIRED: [FieldName; 5] = [
        Self::ArtworkWidth,
        Self::ArtworkHeight,
        Self::MouldingFaceWidth,
        Self::RabbetDepth,
        Self::Clearance,
    ];

    /// Fields feeding the material estimate only.
    pub const OPTIONAL: [FieldName; 2] = [Self::MaterialThickness, Self::CostPerBoardFoot];

    /// External identifier used by input events.
    pub fn id(self) -> &'static str {
        match self {
            Self::ArtworkWidth => "artworkWidth",
            Self::ArtworkHeight => "artworkHeight",
            Self::MouldingFaceWidth => "mouldingFaceWidth",
            Self::RabbetDepth => "rabbetDepth",
            Self::Clearance => "clearance",
            Self::MaterialThickness => "materialThickness",
            Self::CostPerBoardFoot => "costPerBoardFoot",
        }
    }

    /// Short alias accepted by the command line.
    pub fn alias(self) -> &'static str {
        match self {
            Self::ArtworkWidth => "width",
            Self::ArtworkHeight => "height",
            Self::MouldingFaceWidth => "face",
            Self::RabbetDepth => "rabbet",
            Self::Clearance => "clearance",
            Self::MaterialThickness => "thickness",
            Self::CostPerBoardFoot => "cost",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::ArtworkWidth => "Artwork width",
            Self::ArtworkHeight => "Artwork height",
            Self::MouldingFaceWidth => "Moulding face width",
            Self::RabbetDepth => "Rabbet depth",
            Self::Clearance => "Clearance",
            Self::MaterialThickness => "Material thickness",
            Self::CostPerBoardFoot => "Cost per board foot",
        }
    }

    pub fn is_required(self) -> bool {
        Self::REQUIRED.contains(&self)
    }

    /// Monetary rates are not lengths and survive a unit switch untouched.
    pub fn is_unit_independent(self) -> bool {
        matches!(self, Self::CostPerBoardFoot)
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }

    /// Resolve an identifier, ignoring case, `_` and `-`; short aliases are accepted.
    pub fn parse(s: &str) -> Option<Self> {
        let key: String = s
            .trim()
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .flat_map(char::to_lowercase)
            .collect();
        Self::ALL
            .into_iter()
            .find(|name| name.id().eq_ignore_ascii_case(&key) || name.alias() == key)
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for FieldName {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| ModelError::UnknownField(s.trim().to_string()))
    }
}

/// Outcome of parsing raw field text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParsedInput {
    /// Blank text. Not an error.
    Blank,
    Invalid,
    Number(f64),
}

/// Parse raw text strictly: the whole trimmed text must be a finite number.
pub fn parse_numeric_input(raw: &str) -> ParsedInput {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return ParsedInput::Blank;
    }
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => ParsedInput::Number(value),
        _ => ParsedInput::Invalid,
    }
}

/// Latest raw text of a field plus its parsed value or parse error.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Field {
    raw: String,
    value: Option<f64>,
    parse_error: Option<String>,
}

impl Field {
    /// Build a field from raw text, parsing it.
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let (value, parse_error) = match parse_numeric_input(&raw) {
            ParsedInput::Blank => (None, None),
            ParsedInput::Invalid => (None, Some(PARSE_ERROR_MESSAGE.to_string())),
            ParsedInput::Number(value) => (Some(value), None),
        };
        Self {
            raw,
            value,
            parse_error,
        }
    }

    /// Build a field holding `value` exactly, with raw text rendered separately.
    pub(crate) fn with_rendered(value: f64, raw: String) -> Self {
        Self {
            raw,
            value: Some(value),
            parse_error: None,
        }
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn value(&self) -> Option<f64> {
        self.value
    }

    pub fn parse_error(&self) -> Option<&str> {
        self.parse_error.as_deref()
    }

    pub fn is_blank(&self) -> bool {
        self.raw.trim().is_empty()
    }
}

use thiserror::Error;

use crate::units::UnitSystem;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("unknown field: {0}")]
    UnknownField(String),
    #[error("unknown unit system: {0} (expected imperial or metric)")]
    UnknownUnit(String),
    #[error("store holds {store} values, not {from}")]
    UnitMismatch { store: UnitSystem, from: UnitSystem },
}

pub type Result<T> = std::result::Result<T, ModelError>;

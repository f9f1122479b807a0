//! Field, unit and formatting model shared by the framecut crates.

pub mod error;
pub mod field;
pub mod format;
pub mod store;
pub mod units;

pub use error::{ModelError, Result};
pub use field::{Field, FieldName, PARSE_ERROR_MESSAGE, ParsedInput, parse_numeric_input};
pub use format::UNAVAILABLE;
pub use store::{DEFAULT_CLEARANCE_IN, FieldStore};
pub use units::{MM_PER_INCH, UnitSystem};

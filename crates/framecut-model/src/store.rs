//! The field store: one [`Field`] per [`FieldName`] plus the active unit system.
//!
//! The store never clamps or rejects values; range checks belong to validation.
//! Every mutation has a consuming counterpart (`with_field`, `converted`) so
//! callers can treat a store as an immutable snapshot.

use crate::error::{ModelError, Result};
use crate::field::{Field, FieldName};
use crate::format::format_trimmed;
use crate::units::UnitSystem;

/// Default clearance in inches (1/8").
pub const DEFAULT_CLEARANCE_IN: f64 = 0.125;

#[derive(Debug, Clone, PartialEq)]
pub struct FieldStore {
    unit: UnitSystem,
    fields: [Field; FieldName::COUNT],
}

impl Default for FieldStore {
    fn default() -> Self {
        Self::new(UnitSystem::default())
    }
}

impl FieldStore {
    /// Create a store with default raw text expressed in `unit`.
    pub fn new(unit: UnitSystem) -> Self {
        Self::with_default_clearance(unit, DEFAULT_CLEARANCE_IN)
    }

    /// Create a store whose clearance defaults to `clearance_in` inches.
    pub fn with_default_clearance(unit: UnitSystem, clearance_in: f64) -> Self {
        let mut store = Self {
            unit,
            fields: Default::default(),
        };
        let clearance = unit.from_inches(clearance_in);
        store.set_field(
            FieldName::Clearance,
            format_trimmed(clearance, unit.input_decimals()),
        );
        store
    }

    pub fn unit(&self) -> UnitSystem {
        self.unit
    }

    pub fn get(&self, name: FieldName) -> &Field {
        &self.fields[name.index()]
    }

    pub fn value(&self, name: FieldName) -> Option<f64> {
        self.get(name).value()
    }

    pub fn raw(&self, name: FieldName) -> &str {
        self.get(name).raw()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldName, &Field)> {
        FieldName::ALL.into_iter().zip(self.fields.iter())
    }

    /// Store `raw` verbatim and re-parse it.
    pub fn set_field(&mut self, name: FieldName, raw: impl Into<String>) {
        self.fields[name.index()] = Field::new(raw);
    }

    pub fn with_field(mut self, name: FieldName, raw: impl Into<String>) -> Self {
        self.set_field(name, raw);
        self
    }

    /// Re-express every present length value from `from` into `to`.
    ///
    /// Values are converted exactly; raw text is re-rendered at the target's
    /// input precision with trailing zeros trimmed. Fields without a value keep
    /// their raw text (and parse error) untouched, as do unit-independent fields.
    ///
    /// # Errors
    ///
    /// [`ModelError::UnitMismatch`] when `from` is not the store's unit; the
    /// store is left unchanged.
    pub fn convert_units(&mut self, from: UnitSystem, to: UnitSystem) -> Result<()> {
        if from != self.unit {
            return Err(ModelError::UnitMismatch {
                store: self.unit,
                from,
            });
        }
        self.switch_units(to);
        Ok(())
    }

    /// Switch the active unit system, converting from the current one.
    pub fn switch_units(&mut self, to: UnitSystem) {
        let from = self.unit;
        self.unit = to;
        if from == to {
            return;
        }
        for name in FieldName::ALL {
            if name.is_unit_independent() {
                continue;
            }
            let Some(value) = self.value(name) else {
                continue;
            };
            let converted = from.convert(value, to);
            let raw = format_trimmed(converted, to.input_decimals());
            self.fields[name.index()] = Field::with_rendered(converted, raw);
        }
    }

    pub fn converted(mut self, to: UnitSystem) -> Self {
        self.switch_units(to);
        self
    }
}

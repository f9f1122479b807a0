//! Event pipeline for a calculator session.
//!
//! A [`Session`] is an immutable snapshot. Applying an [`Event`] produces a
//! new snapshot: edits and unit switches re-run validate → gate → calculate,
//! while a resize only refits the board geometry to the new drawing area.

use serde::Serialize;
use tracing::debug;

use framecut_model::{FieldName, FieldStore, UnitSystem};
use framecut_validate::{GatingDecision, ValidationReport, gate, validate};

use crate::export::build_export_text;
use crate::layout::{DrawingArea, ScaledLayout};
use crate::options::EngineOptions;
use crate::results::{DerivedSet, FormattedResults};

/// Something the user did.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// A field's text changed. Unknown field identifiers are ignored.
    Edit { field: String, raw: String },
    SwitchUnits(UnitSystem),
    Resize(DrawingArea),
}

impl Event {
    pub fn edit(field: impl Into<String>, raw: impl Into<String>) -> Self {
        Self::Edit {
            field: field.into(),
            raw: raw.into(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Session {
    options: EngineOptions,
    store: FieldStore,
    report: ValidationReport,
    gating: GatingDecision,
    derived: Option<DerivedSet>,
    area: Option<DrawingArea>,
    geometry: Option<ScaledLayout>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(EngineOptions::default())
    }
}

impl Session {
    /// Start a session with default field text and run the pipeline once.
    pub fn new(options: EngineOptions) -> Self {
        let store = FieldStore::with_default_clearance(options.unit, options.default_clearance_in);
        Self::from_store(options, store)
    }

    /// Start a session from an existing field store.
    pub fn from_store(options: EngineOptions, store: FieldStore) -> Self {
        let mut session = Self {
            options,
            store,
            report: ValidationReport::new(),
            gating: GatingDecision::default(),
            derived: None,
            area: None,
            geometry: None,
        };
        session.recompute();
        session
    }

    pub fn apply(&self, event: &Event) -> Session {
        match event {
            Event::Edit { field, raw } => self.edit(field, raw),
            Event::SwitchUnits(unit) => self.switch_units(*unit),
            Event::Resize(area) => self.resize(*area),
        }
    }

    pub fn edit(&self, field: &str, raw: &str) -> Session {
        let Some(name) = FieldName::parse(field) else {
            debug!(field, "ignoring edit for unknown field");
            return self.clone();
        };
        let mut next = self.clone();
        next.store.set_field(name, raw);
        debug!(field = name.id(), "field edited");
        next.recompute();
        next
    }

    pub fn switch_units(&self, unit: UnitSystem) -> Session {
        let mut next = self.clone();
        debug!(from = %self.store.unit(), to = %unit, "switching units");
        next.store.switch_units(unit);
        next.recompute();
        next
    }

    pub fn resize(&self, area: DrawingArea) -> Session {
        let mut next = self.clone();
        next.area = Some(area);
        next.refit();
        next
    }

    fn recompute(&mut self) {
        self.report = validate(&self.store);
        self.gating = gate(&self.store, &self.report);
        self.derived = DerivedSet::derive(&self.store, self.gating, self.options.layout_gap_in);
        debug!(
            results_valid = self.gating.results_valid,
            material_available = self.gating.material_available,
            issues = self.report.issues().count(),
            "pipeline complete"
        );
        self.refit();
    }

    fn refit(&mut self) {
        self.geometry = match (&self.derived, &self.area) {
            (Some(derived), Some(area)) => ScaledLayout::fit(&derived.board, area),
            _ => None,
        };
    }

    pub fn options(&self) -> &EngineOptions {
        &self.options
    }

    pub fn store(&self) -> &FieldStore {
        &self.store
    }

    pub fn unit(&self) -> UnitSystem {
        self.store.unit()
    }

    pub fn report(&self) -> &ValidationReport {
        &self.report
    }

    pub fn gating(&self) -> GatingDecision {
        self.gating
    }

    /// The result validity flag.
    pub fn results_valid(&self) -> bool {
        self.gating.results_valid
    }

    /// Derived values; only exposed while results are valid.
    pub fn derived(&self) -> Option<&DerivedSet> {
        self.derived.as_ref()
    }

    pub fn drawing_area(&self) -> Option<DrawingArea> {
        self.area
    }

    pub fn geometry(&self) -> Option<&ScaledLayout> {
        self.geometry.as_ref()
    }

    /// Export block, or `None` while export is disabled.
    pub fn export_text(&self) -> Option<String> {
        self.derived.as_ref().map(build_export_text)
    }

    /// Plain data for a [`Renderer`].
    pub fn frame(&self) -> RenderFrame {
        RenderFrame {
            unit: self.unit(),
            fields: self
                .store
                .iter()
                .map(|(name, field)| FieldView {
                    id: name.id(),
                    label: name.label(),
                    required: name.is_required(),
                    raw: field.raw().to_string(),
                    message: self.report.message(name),
                })
                .collect(),
            results_visible: self.results_valid(),
            results: self.derived.as_ref().map(DerivedSet::formatted),
            board: self.geometry.clone(),
            status: None,
        }
    }
}

/// One field as shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldView {
    pub id: &'static str,
    pub label: &'static str,
    pub required: bool,
    pub raw: String,
    /// Message displayed next to the field.
    pub message: Option<String>,
}

/// Everything a renderer needs to draw the current state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderFrame {
    pub unit: UnitSystem,
    pub fields: Vec<FieldView>,
    /// Gates both the results panel and the export control.
    pub results_visible: bool,
    pub results: Option<FormattedResults>,
    pub board: Option<ScaledLayout>,
    pub status: Option<String>,
}

impl RenderFrame {
    pub fn with_status(mut self, status: Option<&str>) -> Self {
        self.status = status.map(str::to_string);
        self
    }
}

/// Presentation surface receiving plain data.
pub trait Renderer {
    type Error;

    fn render(&mut self, frame: &RenderFrame) -> Result<(), Self::Error>;
}

//! The derived measurement set and its display strings.

use serde::Serialize;
use tracing::trace;

use framecut_model::format::{
    UNAVAILABLE, format_board_feet, format_length, format_money, format_optional,
    format_thickness,
};
use framecut_model::{FieldName, FieldStore, UnitSystem};
use framecut_validate::GatingDecision;

use crate::calc::{CutList, FrameInputs, calculate};
use crate::layout::BoardLayout;
use crate::material::{MaterialEstimate, estimate};

/// Everything derived from a valid set of inputs, in the store's unit.
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedSet {
    pub unit: UnitSystem,
    pub inputs: FrameInputs,
    pub cuts: CutList,
    pub board: BoardLayout,
    /// `None` when material thickness or cost rate is missing or invalid.
    pub material: Option<MaterialEstimate>,
}

impl DerivedSet {
    /// Derive all outputs, or `None` when the required gate is closed.
    ///
    /// `layout_gap_in` is the board layout gap in inches; it is converted to
    /// the store's unit.
    pub fn derive(store: &FieldStore, gating: GatingDecision, layout_gap_in: f64) -> Option<Self> {
        if !gating.results_valid {
            return None;
        }
        let unit = store.unit();
        let inputs = FrameInputs::from_store(store)?;
        let cuts = calculate(&inputs);
        let board = BoardLayout::new(inputs.face_width, &cuts, unit.from_inches(layout_gap_in));
        let material = if gating.material_available {
            match (
                store.value(FieldName::MaterialThickness),
                store.value(FieldName::CostPerBoardFoot),
            ) {
                (Some(thickness), Some(rate)) => Some(estimate(
                    board.width,
                    board.height,
                    thickness,
                    rate,
                    unit,
                )),
                _ => None,
            }
        } else {
            None
        };
        trace!(
            rail = cuts.rail_cut_length,
            stile = cuts.stile_cut_length,
            board_width = board.width,
            board_height = board.height,
            material = material.is_some(),
            "derived measurements"
        );
        Some(Self {
            unit,
            inputs,
            cuts,
            board,
            material,
        })
    }

    pub fn formatted(&self) -> FormattedResults {
        FormattedResults::new(self)
    }
}

/// Display strings for every derived value, pre-rounded for the active unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormattedResults {
    pub unit: String,
    pub inside_opening_width: String,
    pub inside_opening_height: String,
    pub outside_frame_width: String,
    pub outside_frame_height: String,
    pub rail_cut_length: String,
    pub stile_cut_length: String,
    pub total_linear_length: String,
    pub board_width: String,
    pub board_height: String,
    pub material_thickness: String,
    pub board_feet: String,
    pub material_cost: String,
}

impl FormattedResults {
    pub fn new(derived: &DerivedSet) -> Self {
        let unit = derived.unit;
        let length = |value: f64| format_length(value, unit);
        let cuts = &derived.cuts;
        let material = derived.material.as_ref();
        Self {
            unit: unit.suffix().to_string(),
            inside_opening_width: length(cuts.inside_opening_width),
            inside_opening_height: length(cuts.inside_opening_height),
            outside_frame_width: length(cuts.outside_frame_width),
            outside_frame_height: length(cuts.outside_frame_height),
            rail_cut_length: length(cuts.rail_cut_length),
            stile_cut_length: length(cuts.stile_cut_length),
            total_linear_length: length(cuts.total_linear_length),
            board_width: length(derived.board.width),
            board_height: length(derived.board.height),
            material_thickness: format_optional(material.map(|m| m.thickness), |thickness| {
                format_thickness(thickness, unit)
            }),
            board_feet: format_optional(material.map(|m| m.board_feet), format_board_feet),
            material_cost: format_optional(material.map(|m| m.cost), format_money),
        }
    }

    /// Cost with its currency sign, e.g. `$2.05`, or [`UNAVAILABLE`].
    pub fn cost_display(&self) -> String {
        if self.material_cost == UNAVAILABLE {
            UNAVAILABLE.to_string()
        } else {
            format!("${}", self.material_cost)
        }
    }
}

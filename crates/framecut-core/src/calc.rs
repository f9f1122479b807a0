//! Cut-list arithmetic.
//!
//! Cut lengths are measured along the frame's outer edge, long point to long
//! point. The rabbet recesses into that edge at both ends of every piece, so
//! twice the rabbet depth comes off each cut.

use serde::Serialize;

use framecut_model::{FieldName, FieldStore};

/// The five required measurements, all in the same unit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FrameInputs {
    pub artwork_width: f64,
    pub artwork_height: f64,
    pub face_width: f64,
    pub rabbet_depth: f64,
    pub clearance: f64,
}

impl FrameInputs {
    /// Read the required values from `store`; `None` if any is absent.
    pub fn from_store(store: &FieldStore) -> Option<Self> {
        Some(Self {
            artwork_width: store.value(FieldName::ArtworkWidth)?,
            artwork_height: store.value(FieldName::ArtworkHeight)?,
            face_width: store.value(FieldName::MouldingFaceWidth)?,
            rabbet_depth: store.value(FieldName::RabbetDepth)?,
            clearance: store.value(FieldName::Clearance)?,
        })
    }
}

/// Dimensions derived from [`FrameInputs`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CutList {
    pub inside_opening_width: f64,
    pub inside_opening_height: f64,
    pub outside_frame_width: f64,
    pub outside_frame_height: f64,
    /// Top and bottom pieces.
    pub rail_cut_length: f64,
    /// Left and right pieces.
    pub stile_cut_length: f64,
    pub total_linear_length: f64,
}

pub fn calculate(inputs: &FrameInputs) -> CutList {
    let FrameInputs {
        artwork_width,
        artwork_height,
        face_width,
        rabbet_depth,
        clearance,
    } = *inputs;

    let inside_opening_width = artwork_width + clearance;
    let inside_opening_height = artwork_height + clearance;
    let outside_frame_width = inside_opening_width + 2.0 * face_width;
    let outside_frame_height = inside_opening_height + 2.0 * face_width;
    let rail_cut_length = inside_opening_width + 2.0 * face_width - 2.0 * rabbet_depth;
    let stile_cut_length = inside_opening_height + 2.0 * face_width - 2.0 * rabbet_depth;

    CutList {
        inside_opening_width,
        inside_opening_height,
        outside_frame_width,
        outside_frame_height,
        rail_cut_length,
        stile_cut_length,
        total_linear_length: 2.0 * rail_cut_length + 2.0 * stile_cut_length,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs() -> FrameInputs {
        FrameInputs {
            artwork_width: 8.0,
            artwork_height: 10.0,
            face_width: 1.0,
            rabbet_depth: 0.25,
            clearance: 0.125,
        }
    }

    #[test]
    fn eight_by_ten_frame() {
        let cuts = calculate(&inputs());
        assert_eq!(cuts.inside_opening_width, 8.125);
        assert_eq!(cuts.inside_opening_height, 10.125);
        assert_eq!(cuts.outside_frame_width, 10.125);
        assert_eq!(cuts.outside_frame_height, 12.125);
        assert_eq!(cuts.rail_cut_length, 9.625);
        assert_eq!(cuts.stile_cut_length, 11.625);
        assert_eq!(cuts.total_linear_length, 42.5);
    }

    #[test]
    fn zero_rabbet_cuts_match_outside_size() {
        let cuts = calculate(&FrameInputs {
            rabbet_depth: 0.0,
            ..inputs()
        });
        assert_eq!(cuts.rail_cut_length, cuts.outside_frame_width);
        assert_eq!(cuts.stile_cut_length, cuts.outside_frame_height);
    }

    #[test]
    fn missing_value_yields_no_inputs() {
        let store = FieldStore::default()
            .with_field(FieldName::ArtworkWidth, "8")
            .with_field(FieldName::ArtworkHeight, "10")
            .with_field(FieldName::MouldingFaceWidth, "1");
        assert_eq!(FrameInputs::from_store(&store), None);
        let store = store.with_field(FieldName::RabbetDepth, "0.25");
        assert_eq!(FrameInputs::from_store(&store), Some(inputs()));
    }
}

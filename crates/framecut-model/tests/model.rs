//! Tests for the field store and unit conversion.

use framecut_model::{
    FieldName, FieldStore, MM_PER_INCH, ModelError, PARSE_ERROR_MESSAGE, UnitSystem,
};
use proptest::prelude::*;

fn imperial_store() -> FieldStore {
    FieldStore::new(UnitSystem::Imperial)
        .with_field(FieldName::ArtworkWidth, "8")
        .with_field(FieldName::ArtworkHeight, "10")
        .with_field(FieldName::MouldingFaceWidth, "1")
        .with_field(FieldName::RabbetDepth, "0.25")
        .with_field(FieldName::MaterialThickness, "0.75")
        .with_field(FieldName::CostPerBoardFoot, "6.5")
}

#[test]
fn switch_to_metric_converts_every_length() {
    let store = imperial_store().converted(UnitSystem::Metric);

    assert_eq!(store.unit(), UnitSystem::Metric);
    assert_eq!(store.raw(FieldName::ArtworkWidth), "203.2");
    assert_eq!(store.raw(FieldName::ArtworkHeight), "254");
    assert_eq!(store.raw(FieldName::MouldingFaceWidth), "25.4");
    assert_eq!(store.raw(FieldName::RabbetDepth), "6.35");
    assert_eq!(store.raw(FieldName::Clearance), "3.18");
    assert_eq!(store.raw(FieldName::MaterialThickness), "19.05");
    assert_eq!(store.value(FieldName::ArtworkWidth), Some(8.0 * MM_PER_INCH));
    assert_eq!(store.value(FieldName::Clearance), Some(0.125 * MM_PER_INCH));
    for (_, field) in store.iter() {
        assert_eq!(field.parse_error(), None);
    }
}

#[test]
fn conversion_starts_from_the_store_unit() {
    let mut store = imperial_store();
    assert_eq!(
        store.convert_units(UnitSystem::Metric, UnitSystem::Imperial),
        Err(ModelError::UnitMismatch {
            store: UnitSystem::Imperial,
            from: UnitSystem::Metric,
        })
    );
    assert_eq!(store, imperial_store());

    assert_eq!(
        store.convert_units(UnitSystem::Imperial, UnitSystem::Metric),
        Ok(())
    );
    assert_eq!(store.raw(FieldName::ArtworkWidth), "203.2");
}

#[test]
fn switching_to_the_active_unit_changes_nothing() {
    let mut store = imperial_store().converted(UnitSystem::Metric);
    let before = store.clone();
    store.switch_units(UnitSystem::Metric);
    assert_eq!(store, before);
    assert_eq!(store.value(FieldName::ArtworkWidth), Some(8.0 * MM_PER_INCH));
}

#[test]
fn cost_rate_is_not_converted() {
    let store = imperial_store().converted(UnitSystem::Metric);
    assert_eq!(store.raw(FieldName::CostPerBoardFoot), "6.5");
    assert_eq!(store.value(FieldName::CostPerBoardFoot), Some(6.5));
}

#[test]
fn blank_fields_stay_blank_across_a_switch() {
    let store = FieldStore::new(UnitSystem::Imperial).converted(UnitSystem::Metric);
    assert_eq!(store.raw(FieldName::ArtworkWidth), "");
    assert_eq!(store.value(FieldName::ArtworkWidth), None);
    assert_eq!(store.get(FieldName::ArtworkWidth).parse_error(), None);
}

#[test]
fn editing_replaces_the_previous_state() {
    let mut store = FieldStore::default();
    store.set_field(FieldName::RabbetDepth, "x");
    assert_eq!(
        store.get(FieldName::RabbetDepth).parse_error(),
        Some(PARSE_ERROR_MESSAGE)
    );
    store.set_field(FieldName::RabbetDepth, "0.5");
    assert_eq!(store.get(FieldName::RabbetDepth).parse_error(), None);
    assert_eq!(store.value(FieldName::RabbetDepth), Some(0.5));
    store.set_field(FieldName::RabbetDepth, " ");
    assert_eq!(store.value(FieldName::RabbetDepth), None);
    assert_eq!(store.get(FieldName::RabbetDepth).parse_error(), None);
}

proptest! {
    #[test]
    fn unit_round_trip_keeps_values(inches in 0.001f64..2000.0) {
        let start = FieldStore::new(UnitSystem::Imperial)
            .with_field(FieldName::ArtworkWidth, format!("{inches}"));
        let back = start
            .clone()
            .converted(UnitSystem::Metric)
            .converted(UnitSystem::Imperial);

        let value = back.value(FieldName::ArtworkWidth).unwrap();
        prop_assert!((value - inches).abs() <= 1e-9 * inches.max(1.0));

        // Raw text loses at most half a unit in its last rendered decimal.
        let reparsed: f64 = back.raw(FieldName::ArtworkWidth).parse().unwrap();
        prop_assert!((reparsed - inches).abs() <= 0.0005 + 1e-9);
        prop_assert!(back.get(FieldName::ArtworkWidth).parse_error().is_none());
    }

    #[test]
    fn metric_round_trip_keeps_values(mm in 0.01f64..50_000.0) {
        let start = FieldStore::new(UnitSystem::Metric)
            .with_field(FieldName::MouldingFaceWidth, format!("{mm}"));
        let back = start
            .converted(UnitSystem::Imperial)
            .converted(UnitSystem::Metric);

        let value = back.value(FieldName::MouldingFaceWidth).unwrap();
        prop_assert!((value - mm).abs() <= 1e-9 * mm.max(1.0));
        let reparsed: f64 = back.raw(FieldName::MouldingFaceWidth).parse().unwrap();
        prop_assert!((reparsed - mm).abs() <= 0.005 + 1e-9 * mm.max(1.0));
    }

    #[test]
    fn unparseable_text_never_yields_a_value(raw in "[a-zA-Z ,/]*[a-zA-Z,/][a-zA-Z ,/]*") {
        let store = FieldStore::default().with_field(FieldName::ArtworkHeight, raw.clone());
        let field = store.get(FieldName::ArtworkHeight);
        prop_assert_eq!(field.value(), None);
        prop_assert_eq!(field.raw(), raw.as_str());
    }
}

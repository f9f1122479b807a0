//! Export text assembly.

use framecut_core::{Event, Session};

fn eight_by_ten() -> Session {
    [
        ("artworkWidth", "8"),
        ("artworkHeight", "10"),
        ("mouldingFaceWidth", "1"),
        ("rabbetDepth", "0.25"),
    ]
    .into_iter()
    .fold(Session::default(), |session, (field, raw)| {
        session.apply(&Event::edit(field, raw))
    })
}

#[test]
fn imperial_export_without_material() {
    let text = eight_by_ten().export_text().expect("results are valid");
    let expected = "\
Cut List — Outside Edge (Long Point to Long Point)
Rails (Top & Bottom, Qty 2): 9.625 in
Stiles (Left & Right, Qty 2): 11.625 in
Total Linear Length: 42.500 in

Inside Opening (fits artwork, glass, backing):
8.125 in × 10.125 in

Outside Frame Size (overall frame size):
10.125 in × 12.125 in";
    assert_eq!(text, expected);
}

#[test]
fn imperial_export_with_material() {
    let session = eight_by_ten()
        .edit("materialThickness", "0.75")
        .edit("costPerBoardFoot", "6.5");
    let text = session.export_text().expect("results are valid");
    insta::assert_snapshot!("imperial_with_material", text);
}

#[test]
fn metric_export_rounds_every_length_up() {
    let session = eight_by_ten().apply(&Event::SwitchUnits(framecut_model::UnitSystem::Metric));
    let text = session.export_text().expect("results are valid");
    let expected = "\
Cut List — Outside Edge (Long Point to Long Point)
Rails (Top & Bottom, Qty 2): 245 mm
Stiles (Left & Right, Qty 2): 296 mm
Total Linear Length: 1080 mm

Inside Opening (fits artwork, glass, backing):
207 mm × 258 mm

Outside Frame Size (overall frame size):
258 mm × 308 mm";
    assert_eq!(text, expected);
}

#[test]
fn metric_thickness_reads_back_as_entered() {
    let session = eight_by_ten()
        .apply(&Event::SwitchUnits(framecut_model::UnitSystem::Metric))
        .edit("materialThickness", "19.05")
        .edit("costPerBoardFoot", "6.5");
    let text = session.export_text().expect("results are valid");
    assert!(
        text.contains("\nBoard: 70 mm × 559 mm × 19.05 mm\n"),
        "{text}"
    );
    assert!(text.contains("\nCost: $"), "{text}");
}

#[test]
fn export_is_disabled_while_results_are_invalid() {
    let session = eight_by_ten().edit("rabbetDepth", "1.5");
    assert_eq!(session.export_text(), None);
}

//! Terminal rendering of session frames.

use framecut_cli::render::{
    MAX_DIAGRAM_CELLS, OutputFormat, RESULTS_HIDDEN, TerminalRenderer, board_diagram, field_reference_table,
    fields_table, plain_text, results_table, terminal_area,
};
use framecut_core::{DrawingArea, Renderer, Session};

fn session(fields: &[(&str, &str)]) -> Session {
    fields
        .iter()
        .fold(Session::default(), |session, (field, raw)| {
            session.edit(field, raw)
        })
}

fn eight_by_ten() -> Session {
    session(&[
        ("width", "8"),
        ("height", "10"),
        ("face", "1"),
        ("rabbet", "0.25"),
    ])
}

#[test]
fn plain_text_with_material() {
    let session = eight_by_ten()
        .edit("thickness", "0.75")
        .edit("cost", "6.5");
    insta::assert_snapshot!("plain_text_with_material", plain_text(&session.frame()));
}

#[test]
fn plain_text_with_a_range_error() {
    let frame = eight_by_ten().edit("rabbet", "1.5").frame();
    let expected = format!(
        "\
units: imperial
artworkWidth = 8
artworkHeight = 10
mouldingFaceWidth = 1
rabbetDepth = 1.5
  ! Rabbet depth cannot exceed moulding face width.
clearance = 0.125
materialThickness =
costPerBoardFoot =

{RESULTS_HIDDEN}
"
    );
    assert_eq!(plain_text(&frame), expected);
}

#[test]
fn plain_text_shows_the_copy_status() {
    let frame = eight_by_ten().frame().with_status(Some("Copied!"));
    assert!(plain_text(&frame).ends_with("Cost: —\nstatus: Copied!\n"));
}

#[test]
fn tables_carry_every_value() {
    let frame = eight_by_ten().frame();
    let fields = fields_table(&frame.fields).to_string();
    assert!(fields.contains("Artwork width"));
    assert!(fields.contains("0.125"));
    assert!(fields.contains("(optional)"));

    let results = results_table(frame.results.as_ref().unwrap()).to_string();
    for value in ["9.625 in", "11.625 in", "42.500 in", "2.750 × 22.000 in"] {
        assert!(results.contains(value), "missing {value} in\n{results}");
    }
}

#[test]
fn field_reference_lists_ids_and_aliases() {
    let table = field_reference_table().to_string();
    for text in ["artworkWidth", "costPerBoardFoot", "rabbet", "Cost per board foot"] {
        assert!(table.contains(text), "missing {text}");
    }
}

#[test]
fn json_renderer_writes_the_frame() {
    let mut renderer = TerminalRenderer::new(Vec::new(), OutputFormat::Json);
    renderer.render(&eight_by_ten().frame()).unwrap();
    let json: serde_json::Value = serde_json::from_slice(&renderer.into_inner()).unwrap();
    assert_eq!(json["results"]["stile_cut_length"], "11.625");
    assert_eq!(json["fields"][3]["raw"], "0.25");
}

#[test]
fn table_renderer_hides_invalid_results() {
    let mut renderer = TerminalRenderer::new(Vec::new(), OutputFormat::Table);
    renderer.render(&Session::default().frame()).unwrap();
    let text = String::from_utf8(renderer.into_inner()).unwrap();
    assert!(text.contains(RESULTS_HIDDEN));
}

#[test]
fn board_diagram_draws_both_columns() {
    let session = eight_by_ten().resize(terminal_area(DrawingArea::new(220.0, 44.0), 0.0));
    let lines = board_diagram(session.geometry().expect("geometry"));
    assert_eq!(lines.len(), 44);
    for line in &lines {
        let (margin, body) = line.split_at(104);
        assert!(margin.chars().all(|c| c == ' '));
        assert!(body.chars().all(|c| ".SR".contains(c)), "{body}");
    }
    assert!(lines.iter().any(|line| line.contains("SSSS")));
    assert!(lines.iter().any(|line| line.contains("RRRR")));
    assert!(lines.iter().any(|line| line.contains("SSSS.RRRR")));
}

#[test]
fn board_diagram_is_cropped_to_the_cell_limit() {
    let session = eight_by_ten().resize(DrawingArea::new(1_375.0, 11_000.0));
    let lines = board_diagram(session.geometry().expect("geometry"));
    assert_eq!(lines.len(), MAX_DIAGRAM_CELLS);
    assert!(lines.iter().all(|line| line.chars().count() <= MAX_DIAGRAM_CELLS));
    assert!(lines.iter().any(|line| line.contains('S')));
}

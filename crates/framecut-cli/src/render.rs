//! Terminal rendering of session frames.

use std::io::{self, Write};

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use framecut_core::layout::{PieceKind, ScaledLayout};
use framecut_core::{DrawingArea, FieldView, FormattedResults, RenderFrame, Renderer};
use framecut_model::FieldName;

/// Terminal columns per layout unit; character cells are about twice as tall as wide.
pub const CELL_ASPECT: f64 = 2.0;

/// Largest board diagram, in columns and in rows.
pub const MAX_DIAGRAM_CELLS: usize = 1000;

pub const RESULTS_HIDDEN: &str = "Results appear once every required field is valid.";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Text,
}

/// Writes each frame to a stream in one [`OutputFormat`].
#[derive(Debug)]
pub struct TerminalRenderer<W> {
    out: W,
    format: OutputFormat,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W, format: OutputFormat) -> Self {
        Self { out, format }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    type Error = io::Error;

    fn render(&mut self, frame: &RenderFrame) -> io::Result<()> {
        match self.format {
            OutputFormat::Json => {
                serde_json::to_writer_pretty(&mut self.out, frame)?;
                writeln!(self.out)?;
            }
            OutputFormat::Text => write!(self.out, "{}", plain_text(frame))?,
            OutputFormat::Table => {
                writeln!(self.out, "{}", fields_table(&frame.fields))?;
                match &frame.results {
                    Some(results) if frame.results_visible => {
                        writeln!(self.out, "{}", results_table(results))?;
                    }
                    _ => writeln!(self.out, "{RESULTS_HIDDEN}")?,
                }
                if let Some(board) = &frame.board {
                    for line in board_diagram(board) {
                        writeln!(self.out, "{line}")?;
                    }
                }
                if let Some(status) = &frame.status {
                    writeln!(self.out, "{status}")?;
                }
            }
        }
        self.out.flush()
    }
}

/// Plain, uncoloured rendering.
pub fn plain_text(frame: &RenderFrame) -> String {
    let mut lines = vec![format!("units: {}", frame.unit)];
    for field in &frame.fields {
        lines.push(format!("{} = {}", field.id, field.raw).trim_end().to_string());
        if let Some(message) = &field.message {
            lines.push(format!("  ! {message}"));
        }
    }
    lines.push(String::new());
    match &frame.results {
        Some(results) if frame.results_visible => lines.extend(result_rows(results).into_iter().map(
            |(label, value)| format!("{label}: {value}"),
        )),
        _ => lines.push(RESULTS_HIDDEN.to_string()),
    }
    if let Some(status) = &frame.status {
        lines.push(format!("status: {status}"));
    }
    let mut text = lines.join("\n");
    text.push('\n');
    text
}

/// Label and display value for every result, units attached.
pub fn result_rows(results: &FormattedResults) -> Vec<(&'static str, String)> {
    let unit = &results.unit;
    let pair = |a: &str, b: &str| format!("{a} × {b} {unit}");
    let length = |value: &str| format!("{value} {unit}");
    vec![
        (
            "Inside opening",
            pair(&results.inside_opening_width, &results.inside_opening_height),
        ),
        (
            "Outside frame",
            pair(&results.outside_frame_width, &results.outside_frame_height),
        ),
        ("Rails (Qty 2)", length(&results.rail_cut_length)),
        ("Stiles (Qty 2)", length(&results.stile_cut_length)),
        ("Total linear length", length(&results.total_linear_length)),
        ("Board", pair(&results.board_width, &results.board_height)),
        ("Board feet", results.board_feet.clone()),
        ("Cost", results.cost_display()),
    ]
}

pub fn fields_table(fields: &[FieldView]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Field"),
        header_cell("Value"),
        header_cell("Message"),
    ]);
    apply_table_style(&mut table);
    for field in fields {
        let label = if field.required {
            Cell::new(field.label)
        } else {
            dim_cell(format!("{} (optional)", field.label))
        };
        let message = match &field.message {
            Some(message) if field.required => Cell::new(message).fg(Color::Red),
            Some(message) => Cell::new(message).fg(Color::Yellow),
            None => dim_cell("-"),
        };
        table.add_row(vec![label, Cell::new(&field.raw), message]);
    }
    align_column(&mut table, 1, CellAlignment::Right);
    table
}

pub fn results_table(results: &FormattedResults) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Measurement"), header_cell("Value")]);
    apply_results_style(&mut table);
    for (label, value) in result_rows(results) {
        table.add_row(vec![Cell::new(label), Cell::new(value)]);
    }
    align_column(&mut table, 1, CellAlignment::Right);
    table
}

/// Every field identifier with its alias and label.
pub fn field_reference_table() -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Identifier"),
        header_cell("Alias"),
        header_cell("Label"),
        header_cell("Required"),
    ]);
    apply_table_style(&mut table);
    for name in FieldName::ALL {
        table.add_row(vec![
            Cell::new(name.id())
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(name.alias()),
            Cell::new(name.label()),
            if name.is_required() {
                Cell::new("yes")
            } else {
                dim_cell("no")
            },
        ]);
    }
    table
}

/// Drawing area for a terminal region of `cells` (columns × rows).
pub fn terminal_area(cells: DrawingArea, padding: f64) -> DrawingArea {
    DrawingArea::new(cells.width / CELL_ASPECT, cells.height).with_padding(padding)
}

/// Character drawing of a fitted board: `S` stiles, `R` rails, `.` waste.
/// Cropped to [`MAX_DIAGRAM_CELLS`] in each direction.
pub fn board_diagram(layout: &ScaledLayout) -> Vec<String> {
    let extent = |end: f64| (end.ceil().max(0.0) as usize).min(MAX_DIAGRAM_CELLS);
    let columns = extent((layout.board.x + layout.board.width) * CELL_ASPECT);
    let rows = extent(layout.board.y + layout.board.height);
    (0..rows)
        .map(|row| {
            let y = row as f64 + 0.5;
            let line: String = (0..columns)
                .map(|column| {
                    let x = (column as f64 + 0.5) / CELL_ASPECT;
                    let piece = layout
                        .pieces
                        .iter()
                        .find(|piece| contains(&piece.rect, x, y));
                    match piece.map(|piece| piece.kind) {
                        Some(PieceKind::Stile) => 'S',
                        Some(PieceKind::Rail) => 'R',
                        None if contains(&layout.board, x, y) => '.',
                        None => ' ',
                    }
                })
                .collect();
            line.trim_end().to_string()
        })
        .collect()
}

fn contains(rect: &framecut_core::LayoutRect, x: f64, y: f64) -> bool {
    x >= rect.x && x < rect.x + rect.width && y >= rect.y && y < rect.y + rect.height
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn apply_results_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(80);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

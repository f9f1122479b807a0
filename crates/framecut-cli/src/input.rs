//! Line commands for the interactive session.

use framecut_core::{DrawingArea, Event};
use framecut_model::{FieldName, ModelError, UnitSystem};

use crate::render::MAX_DIAGRAM_CELLS;

/// One parsed line of session input.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionCommand {
    Event(Event),
    Copy,
    Show,
    Fields,
    Help,
    Quit,
    /// Blank line or comment.
    Nothing,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InputError {
    #[error("unknown command or field `{0}` (try `help`)")]
    Unknown(String),

    #[error("`{0}` needs a value, e.g. `{0} 8` or `{0}=` to clear it")]
    MissingValue(String),

    #[error(transparent)]
    Unit(#[from] ModelError),

    #[error("expected a size like `80x24`, got `{0}`")]
    InvalidSize(String),

    #[error("size `{0}` is too large (at most {MAX_DIAGRAM_CELLS} cells each way)")]
    SizeTooLarge(String),
}

pub const HELP: &str = "\
Commands:
  <field> <value>     set a field (e.g. `width 8`, `rabbet 0.25`)
  <field>=<value>     same; `<field>=` clears the field
  units <system>      switch to imperial or metric
  resize <W>x<H>      set the board drawing area
  copy                copy the cut list
  show                print the current state again
  fields              list field names
  help                this text
  quit                leave the session";

/// Parse a session line.
pub fn parse_command(line: &str) -> Result<SessionCommand, InputError> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(SessionCommand::Nothing);
    }
    if let Some((field, raw)) = line.split_once('=') {
        return edit(field.trim(), raw.trim());
    }
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };
    match word.to_lowercase().as_str() {
        "quit" | "exit" | "q" => Ok(SessionCommand::Quit),
        "help" | "?" => Ok(SessionCommand::Help),
        "show" => Ok(SessionCommand::Show),
        "fields" => Ok(SessionCommand::Fields),
        "copy" => Ok(SessionCommand::Copy),
        "units" | "unit" => {
            let unit: UnitSystem = rest.parse()?;
            Ok(SessionCommand::Event(Event::SwitchUnits(unit)))
        }
        "resize" => parse_size(rest).map(|area| SessionCommand::Event(Event::Resize(area))),
        _ if rest.is_empty() => match FieldName::parse(word) {
            Some(_) => Err(InputError::MissingValue(word.to_string())),
            None => Err(InputError::Unknown(word.to_string())),
        },
        _ => edit(word, rest),
    }
}

fn edit(field: &str, raw: &str) -> Result<SessionCommand, InputError> {
    match FieldName::parse(field) {
        Some(name) => Ok(SessionCommand::Event(Event::edit(name.id(), raw))),
        None => Err(InputError::Unknown(field.to_string())),
    }
}

/// Parse `WxH` into a drawing area of at most [`MAX_DIAGRAM_CELLS`] each way.
pub fn parse_size(text: &str) -> Result<DrawingArea, InputError> {
    let invalid = || InputError::InvalidSize(text.to_string());
    let (width, height) = text
        .split_once(['x', 'X', '×'])
        .ok_or_else(invalid)?;
    let width: f64 = width.trim().parse().map_err(|_| invalid())?;
    let height: f64 = height.trim().parse().map_err(|_| invalid())?;
    if !(width.is_finite() && height.is_finite() && width >= 0.0 && height >= 0.0) {
        return Err(invalid());
    }
    let limit = MAX_DIAGRAM_CELLS as f64;
    if width > limit || height > limit {
        return Err(InputError::SizeTooLarge(text.to_string()));
    }
    Ok(DrawingArea::new(width, height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_edits_accept_both_forms() {
        let expected = SessionCommand::Event(Event::edit("artworkWidth", "8"));
        assert_eq!(parse_command("width 8"), Ok(expected.clone()));
        assert_eq!(parse_command("  artworkWidth=8 "), Ok(expected.clone()));
        assert_eq!(parse_command("artwork-width = 8"), Ok(expected));
    }

    #[test]
    fn equals_with_nothing_clears() {
        assert_eq!(
            parse_command("rabbet="),
            Ok(SessionCommand::Event(Event::edit("rabbetDepth", "")))
        );
    }

    #[test]
    fn raw_text_is_passed_through_unparsed() {
        assert_eq!(
            parse_command("face one inch"),
            Ok(SessionCommand::Event(Event::edit(
                "mouldingFaceWidth",
                "one inch"
            )))
        );
    }

    #[test]
    fn keywords() {
        assert_eq!(parse_command(""), Ok(SessionCommand::Nothing));
        assert_eq!(parse_command("# note"), Ok(SessionCommand::Nothing));
        assert_eq!(parse_command("QUIT"), Ok(SessionCommand::Quit));
        assert_eq!(parse_command("copy"), Ok(SessionCommand::Copy));
        assert_eq!(parse_command("help"), Ok(SessionCommand::Help));
        assert_eq!(parse_command("fields"), Ok(SessionCommand::Fields));
        assert_eq!(
            parse_command("units mm"),
            Ok(SessionCommand::Event(Event::SwitchUnits(UnitSystem::Metric)))
        );
    }

    #[test]
    fn resize_parses_dimensions() {
        assert_eq!(
            parse_command("resize 80x24"),
            Ok(SessionCommand::Event(Event::Resize(DrawingArea::new(
                80.0, 24.0
            ))))
        );
        assert_eq!(
            parse_command("resize wide"),
            Err(InputError::InvalidSize("wide".to_string()))
        );
    }

    #[test]
    fn oversized_drawing_areas_are_rejected() {
        assert_eq!(
            parse_size("40000x40000"),
            Err(InputError::SizeTooLarge("40000x40000".to_string()))
        );
        assert_eq!(
            parse_command("resize 80x1001"),
            Err(InputError::SizeTooLarge("80x1001".to_string()))
        );
        assert_eq!(parse_size("1000x1000"), Ok(DrawingArea::new(1000.0, 1000.0)));
        assert_eq!(
            parse_size("inf x 10"),
            Err(InputError::InvalidSize("inf x 10".to_string()))
        );
    }

    #[test]
    fn errors() {
        assert_eq!(
            parse_command("colour red"),
            Err(InputError::Unknown("colour".to_string()))
        );
        assert_eq!(
            parse_command("width"),
            Err(InputError::MissingValue("width".to_string()))
        );
        assert!(matches!(
            parse_command("units cubits"),
            Err(InputError::Unit(ModelError::UnknownUnit(_)))
        ));
    }
}

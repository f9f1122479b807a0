//! Derivation engine for the framecut cut-list calculator.
//!
//! The pipeline for every event is validate → gate → calculate → format:
//!
//! - [`calc`]: opening, frame and cut lengths from the five required inputs
//! - [`layout`]: 2×2 board layout of the four blanks and its fit into a drawing area
//! - [`material`]: board feet and cost, when thickness and rate are known
//! - [`results`]: the derived set and its display strings
//! - [`export`]: the plain-text cut list and the copy controller
//! - [`session`]: immutable session snapshots driven by [`Event`]s

pub mod calc;
pub mod clipboard;
pub mod export;
pub mod layout;
pub mod material;
pub mod options;
pub mod results;
pub mod session;
pub mod status;

pub use calc::{CutList, FrameInputs, calculate};
pub use clipboard::{
    Clipboard, ClipboardError, CopyOutcome, FallbackClipboard, MemoryClipboard, copy_in_background,
    copy_text,
};
pub use export::{ExportController, build_export_text};
pub use layout::{BoardLayout, DrawingArea, LayoutRect, PieceKind, ScaledLayout};
pub use material::{MaterialEstimate, estimate};
pub use options::EngineOptions;
pub use results::{DerivedSet, FormattedResults};
pub use session::{Event, FieldView, RenderFrame, Renderer, Session};
pub use status::CopyStatus;

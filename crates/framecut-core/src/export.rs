//! Plain-text cut list handed to the clipboard.

use std::sync::Arc;
use std::sync::mpsc::{Receiver, TryRecvError};
use std::time::Instant;

use crate::clipboard::{Clipboard, CopyOutcome, copy_in_background};
use crate::results::{DerivedSet, FormattedResults};
use crate::session::Session;
use crate::status::CopyStatus;

pub const CUT_LIST_HEADING: &str = "Cut List — Outside Edge (Long Point to Long Point)";

/// Assemble the export block. Sections are separated by a blank line; the
/// material section is present only when an estimate is available.
pub fn build_export_text(derived: &DerivedSet) -> String {
    let text = derived.formatted();
    let FormattedResults { unit, .. } = &text;
    let mut sections = vec![
        vec![
            CUT_LIST_HEADING.to_string(),
            format!("Rails (Top & Bottom, Qty 2): {} {unit}", text.rail_cut_length),
            format!("Stiles (Left & Right, Qty 2): {} {unit}", text.stile_cut_length),
            format!("Total Linear Length: {} {unit}", text.total_linear_length),
        ],
        vec![
            "Inside Opening (fits artwork, glass, backing):".to_string(),
            format!(
                "{} {unit} × {} {unit}",
                text.inside_opening_width, text.inside_opening_height
            ),
        ],
        vec![
            "Outside Frame Size (overall frame size):".to_string(),
            format!(
                "{} {unit} × {} {unit}",
                text.outside_frame_width, text.outside_frame_height
            ),
        ],
    ];
    if derived.material.is_some() {
        sections.push(vec![
            "Material Estimate:".to_string(),
            format!(
                "Board: {} {unit} × {} {unit} × {} {unit}",
                text.board_width, text.board_height, text.material_thickness
            ),
            format!("Board Feet: {}", text.board_feet),
            format!("Cost: {}", text.cost_display()),
        ]);
    }
    sections
        .into_iter()
        .map(|lines| lines.join("\n"))
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Runs export requests through a clipboard on a worker thread and keeps the
/// transient status. Requests return at once; [`ExportController::tick`]
/// picks up the outcome.
#[derive(Debug)]
pub struct ExportController<C> {
    clipboard: Arc<C>,
    status: CopyStatus,
    pending: Option<Receiver<CopyOutcome>>,
}

impl<C> ExportController<C>
where
    C: Clipboard + Send + Sync + 'static,
{
    pub fn new(clipboard: C, status: CopyStatus) -> Self {
        Self {
            clipboard: Arc::new(clipboard),
            status,
            pending: None,
        }
    }

    /// Start copying the session's export text. Returns `false` while export
    /// is disabled. A newer request supersedes one still in flight.
    pub fn request(&mut self, session: &Session) -> bool {
        let Some(text) = session.export_text() else {
            return false;
        };
        self.pending = Some(copy_in_background(Arc::clone(&self.clipboard), text));
        true
    }

    /// Collect a finished copy and clear an expired status. Returns `true`
    /// when the visible status changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let finished = match self.pending.as_ref().map(Receiver::try_recv) {
            Some(Ok(outcome)) => Some(outcome),
            Some(Err(TryRecvError::Disconnected)) => Some(CopyOutcome::Failed),
            Some(Err(TryRecvError::Empty)) | None => None,
        };
        let cleared = self.status.tick(now);
        match finished {
            Some(outcome) => {
                self.pending = None;
                self.status.show(outcome, now);
                true
            }
            None => cleared,
        }
    }

    /// Whether a copy is still running.
    pub fn is_copying(&self) -> bool {
        self.pending.is_some()
    }

    pub fn status(&self) -> &CopyStatus {
        &self.status
    }

    pub fn clipboard(&self) -> &C {
        &self.clipboard
    }
}

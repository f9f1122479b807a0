//! Board layout for material estimation and drawing.
//!
//! The four pieces are laid out as a 2×2 grid of blanks: two columns, each one
//! moulding face wide, with a gap between and around every piece. The columns
//! nest crosswise (stile over rail on the left, rail over stile on the right)
//! so the board is only `rail + stile + 3·gap` tall.

use kurbo::{Affine, Rect};
use serde::Serialize;

use crate::calc::CutList;

/// Which frame member a blank is cut into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceKind {
    /// Top or bottom.
    Rail,
    /// Left or right.
    Stile,
}

/// A blank positioned on the board.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Piece {
    pub kind: PieceKind,
    pub rect: Rect,
}

/// Minimum rectangular board holding all four blanks, in input units.
#[derive(Debug, Clone, PartialEq)]
pub struct BoardLayout {
    pub gap: f64,
    pub width: f64,
    pub height: f64,
    pub pieces: [Piece; 4],
}

impl BoardLayout {
    pub fn new(face_width: f64, cuts: &CutList, gap: f64) -> Self {
        let rail = cuts.rail_cut_length;
        let stile = cuts.stile_cut_length;
        let left = gap;
        let right = 2.0 * gap + face_width;
        let blank = |kind: PieceKind, x: f64, y: f64| {
            let length = match kind {
                PieceKind::Rail => rail,
                PieceKind::Stile => stile,
            };
            Piece {
                kind,
                rect: Rect::new(x, y, x + face_width, y + length),
            }
        };

        Self {
            gap,
            width: 2.0 * face_width + 3.0 * gap,
            height: (rail + stile + gap) + 2.0 * gap,
            pieces: [
                blank(PieceKind::Stile, left, gap),
                blank(PieceKind::Rail, left, 2.0 * gap + stile),
                blank(PieceKind::Rail, right, gap),
                blank(PieceKind::Stile, right, 2.0 * gap + rail),
            ],
        }
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.height)
    }
}

/// Space the renderer has available for the board drawing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DrawingArea {
    pub width: f64,
    pub height: f64,
    /// Inset applied on every side before fitting.
    pub padding: f64,
}

impl DrawingArea {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            padding: 0.0,
        }
    }

    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = padding;
        self
    }

    /// Usable rectangle, or `None` when padding leaves nothing to draw in.
    pub fn content_rect(&self) -> Option<Rect> {
        let rect = Rect::new(0.0, 0.0, self.width, self.height).inset(-self.padding);
        (rect.width() > 0.0 && rect.height() > 0.0).then_some(rect)
    }
}

/// Axis-aligned rectangle in drawing-area coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LayoutRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl From<Rect> for LayoutRect {
    fn from(rect: Rect) -> Self {
        Self {
            x: rect.x0,
            y: rect.y0,
            width: rect.width(),
            height: rect.height(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScaledPiece {
    pub kind: PieceKind,
    pub rect: LayoutRect,
}

/// A [`BoardLayout`] fitted into a [`DrawingArea`], aspect ratio preserved and centered.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScaledLayout {
    /// Drawing units per input unit.
    pub scale: f64,
    pub board: LayoutRect,
    pub pieces: Vec<ScaledPiece>,
}

impl ScaledLayout {
    /// Fit `layout` into `area`. Returns `None` for degenerate boards or areas.
    pub fn fit(layout: &BoardLayout, area: &DrawingArea) -> Option<Self> {
        let bounds = layout.bounds();
        if bounds.width() <= 0.0 || bounds.height() <= 0.0 {
            return None;
        }
        let view = area.content_rect()?;

        let sx = view.width() / bounds.width();
        let sy = view.height() / bounds.height();
        let scale = sx.min(sy);
        let pan = view.center().to_vec2() - bounds.center().to_vec2() * scale;
        let transform = Affine::translate(pan) * Affine::scale(scale);

        Some(Self {
            scale,
            board: transform.transform_rect_bbox(bounds).into(),
            pieces: layout
                .pieces
                .iter()
                .map(|piece| ScaledPiece {
                    kind: piece.kind,
                    rect: transform.transform_rect_bbox(piece.rect).into(),
                })
                .collect(),
        })
    }
}

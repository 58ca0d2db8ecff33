use std::{fmt, str::FromStr};

use crate::foundation::{
    core::{Canvas, Rect},
    error::{BoothError, BoothResult},
};

/// Print layout variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutKind {
    /// Single column of three 16:9 photos.
    Postcard,
    /// Two identical side-by-side strips of four 4:3 photos.
    Strips,
}

impl LayoutKind {
    /// Every registered layout, in selection-screen order.
    pub const ALL: [LayoutKind; 2] = [LayoutKind::Postcard, LayoutKind::Strips];

    /// Stable identifier used in scenes.
    pub fn id(self) -> &'static str {
        match self {
            LayoutKind::Postcard => "postcard",
            LayoutKind::Strips => "strips",
        }
    }

    /// The template for this layout.
    pub fn template(self) -> &'static LayoutTemplate {
        match self {
            LayoutKind::Postcard => &POSTCARD,
            LayoutKind::Strips => &STRIPS,
        }
    }
}

impl fmt::Display for LayoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for LayoutKind {
    type Err = BoothError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "postcard" => Ok(LayoutKind::Postcard),
            "strips" => Ok(LayoutKind::Strips),
            other => Err(BoothError::unknown_layout(other)),
        }
    }
}

/// Static configuration of one print layout.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutTemplate {
    /// Layout variant.
    pub kind: LayoutKind,
    /// Output raster size (4x6 inch at 300dpi for both variants).
    pub canvas: Canvas,
    /// Number of photos captured for this layout.
    pub photo_count: usize,
    /// Width / height of each photo slot.
    pub slot_aspect: f64,
    /// Human-readable name.
    pub name: &'static str,
    /// One-line description for layout pickers.
    pub description: &'static str,
}

const POSTCARD_TOP_MARGIN: f64 = 40.0;
const POSTCARD_BOTTOM_MARGIN: f64 = 40.0;
const POSTCARD_SIDE_MARGIN: f64 = 20.0;
const POSTCARD_SPACING: f64 = 20.0;

const STRIP_COUNT: usize = 2;
const STRIP_PADDING_X: f64 = 20.0;
const STRIP_GAP_Y: f64 = 15.0;

static POSTCARD: LayoutTemplate = LayoutTemplate {
    kind: LayoutKind::Postcard,
    canvas: Canvas {
        width: 1200,
        height: 1800,
    },
    photo_count: 3,
    slot_aspect: 16.0 / 9.0,
    name: "The Portrait",
    description: "A classic 4x6 vertical layout showcasing 3 cinematic portraits.",
};

static STRIPS: LayoutTemplate = LayoutTemplate {
    kind: LayoutKind::Strips,
    canvas: Canvas {
        width: 1200,
        height: 1800,
    },
    photo_count: 4,
    slot_aspect: 4.0 / 3.0,
    name: "Twin Strips",
    description: "Capture 4 moments, printed as two classic photo strips.",
};

/// Look up a layout template by id.
pub fn resolve_layout(id: &str) -> BoothResult<&'static LayoutTemplate> {
    Ok(id.parse::<LayoutKind>()?.template())
}

impl LayoutTemplate {
    /// Stable identifier of this template.
    pub fn id(&self) -> &'static str {
        self.kind.id()
    }

    /// Vertical strip regions. Empty for layouts that are not split into strips.
    pub fn strips(&self) -> Vec<Rect> {
        match self.kind {
            LayoutKind::Postcard => Vec::new(),
            LayoutKind::Strips => {
                let canvas = self.canvas.rect();
                let strip_w = canvas.width() / STRIP_COUNT as f64;
                (0..STRIP_COUNT)
                    .map(|i| {
                        let x0 = i as f64 * strip_w;
                        Rect::new(x0, 0.0, x0 + strip_w, canvas.height())
                    })
                    .collect()
            }
        }
    }

    /// Photo slot rectangles in capture order for one copy of the photo column.
    ///
    /// For strips these are relative to the canvas origin, i.e. they describe the
    /// leftmost strip; the other strips repeat them shifted by the strip origin.
    pub fn photo_slots(&self) -> Vec<Rect> {
        match self.kind {
            LayoutKind::Postcard => self.postcard_slots(),
            LayoutKind::Strips => self.strip_slots(),
        }
    }

    fn postcard_slots(&self) -> Vec<Rect> {
        let canvas = self.canvas.rect();
        let n = self.photo_count as f64;
        let available = canvas.height()
            - POSTCARD_TOP_MARGIN
            - POSTCARD_BOTTOM_MARGIN
            - POSTCARD_SPACING * (n - 1.0);
        let slot_h = available / n;
        let slot_w = (slot_h * self.slot_aspect).min(canvas.width() - 2.0 * POSTCARD_SIDE_MARGIN);
        let x0 = canvas.width() / 2.0 - slot_w / 2.0;

        (0..self.photo_count)
            .map(|i| {
                let y0 = POSTCARD_TOP_MARGIN + i as f64 * (slot_h + POSTCARD_SPACING);
                Rect::new(x0, y0, x0 + slot_w, y0 + slot_h)
            })
            .collect()
    }

    fn strip_slots(&self) -> Vec<Rect> {
        let strip_h = f64::from(self.canvas.height);
        let strip_w = f64::from(self.canvas.width) / STRIP_COUNT as f64;
        let n = self.photo_count as f64;

        let slot_w = strip_w - 2.0 * STRIP_PADDING_X;
        let slot_h = slot_w / self.slot_aspect;
        let content_h = slot_h * n + STRIP_GAP_Y * (n - 1.0);
        let start_y = (strip_h - content_h) / 2.0;

        (0..self.photo_count)
            .map(|i| {
                let y0 = start_y + i as f64 * (slot_h + STRIP_GAP_Y);
                Rect::new(STRIP_PADDING_X, y0, STRIP_PADDING_X + slot_w, y0 + slot_h)
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/template.rs"]
mod tests;

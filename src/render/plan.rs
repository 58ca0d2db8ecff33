use crate::{
    assets::{library::StickerKind, svg_raster::raster_side_px},
    foundation::{
        color::FrameColor,
        core::{Affine, Canvas, Point, Rect, Vec2},
        error::BoothResult,
    },
    layout::template::LayoutTemplate,
    scene::model::Placement,
};

/// Drop shadow drawn beneath a subject, as a canvas-style shadow state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShadowStyle {
    /// Shadow alpha applied to the subject's coverage.
    pub opacity: f32,
    /// Blur length in pixels; the Gaussian sigma is half of it.
    pub blur_px: f64,
    /// Device-space offset of the shadow.
    pub offset: Vec2,
}

impl ShadowStyle {
    /// Gaussian standard deviation in pixels.
    pub fn sigma(&self) -> f64 {
        self.blur_px / 2.0
    }

    /// Pixels the shadow can extend past the subject on each side (3 sigma).
    pub fn spread_px(&self) -> u32 {
        (3.0 * self.sigma()).ceil().max(0.0) as u32
    }
}

/// Shadow behind postcard photos.
pub const PHOTO_SHADOW: ShadowStyle = ShadowStyle {
    opacity: 0.1,
    blur_px: 25.0,
    offset: Vec2::new(0.0, 10.0),
};

/// Shadow behind every decoration.
pub const STICKER_SHADOW: ShadowStyle = ShadowStyle {
    opacity: 0.1,
    blur_px: 5.0,
    offset: Vec2::new(0.0, 0.0),
};

/// A placement with its kind resolved and its geometry in canvas pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResolvedPlacement {
    /// Decoration kind.
    pub kind: StickerKind,
    /// Center in canvas pixels.
    pub center: Point,
    /// Edge length of the square draw box in canvas pixels.
    pub side: f64,
    /// Clockwise rotation in radians.
    pub rotation_rad: f64,
    /// Edge length of the raster the decoration is rendered at.
    pub raster_px: u32,
}

impl ResolvedPlacement {
    /// Resolve `p` against `canvas`.
    pub fn resolve(p: &Placement, canvas: Canvas) -> BoothResult<Self> {
        let kind = p.sticker_kind()?;
        p.validate()?;
        let side = p.box_side_px();
        Ok(Self {
            kind,
            center: canvas.point_from_percent(p.x, p.y),
            side,
            rotation_rad: p.rotation.to_radians(),
            raster_px: raster_side_px(side, canvas.diagonal_px())?,
        })
    }

    /// Maps the box-local square `[0, side]^2` onto the canvas: translate to the center,
    /// rotate, then offset by half the box so the artwork is centered on the origin.
    pub fn box_transform(&self) -> Affine {
        Affine::translate(self.center.to_vec2())
            * Affine::rotate(self.rotation_rad)
            * Affine::translate(Vec2::new(-self.side / 2.0, -self.side / 2.0))
    }

    /// Maps raster pixel space `[0, raster_px]^2` onto the canvas.
    pub fn raster_transform(&self) -> Affine {
        self.box_transform() * Affine::scale(self.side / f64::from(self.raster_px))
    }
}

/// One draw in painter's order.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DrawOp {
    /// Solid fill of a rectangle.
    Fill {
        /// Target rectangle.
        rect: Rect,
        /// Fill color.
        color: FrameColor,
    },
    /// Blurred shadow of an axis-aligned rectangle.
    RectShadow {
        /// Subject rectangle (before the shadow offset).
        rect: Rect,
        /// Shadow parameters.
        style: ShadowStyle,
    },
    /// A decoded photo scaled into `dest`.
    Photo {
        /// Index into the scene's photo list.
        photo: usize,
        /// Destination rectangle.
        dest: Rect,
    },
    /// Blurred shadow of a decoration's coverage.
    StickerShadow {
        /// Index into [`DrawPlan::placements`].
        placement: usize,
        /// Shadow parameters.
        style: ShadowStyle,
    },
    /// A decoration drawn centered, scaled and rotated.
    Sticker {
        /// Index into [`DrawPlan::placements`].
        placement: usize,
    },
}

/// Backend-agnostic draw list for one composite.
#[derive(Clone, Debug, PartialEq)]
pub struct DrawPlan {
    /// Output size.
    pub canvas: Canvas,
    /// Draws in order; later draws occlude earlier ones.
    pub ops: Vec<DrawOp>,
    /// Resolved placements referenced by sticker ops.
    pub placements: Vec<ResolvedPlacement>,
}

impl DrawPlan {
    /// Distinct `(kind, raster_px)` pairs the plan needs rasterized, in first-use order.
    pub fn sticker_rasters(&self) -> Vec<(StickerKind, u32)> {
        let mut out: Vec<(StickerKind, u32)> = Vec::new();
        for p in &self.placements {
            let key = (p.kind, p.raster_px);
            if !out.contains(&key) {
                out.push(key);
            }
        }
        out
    }
}

/// Build the draw list for a scene.
///
/// `photo_present[i]` says whether capture `i` exists; slots past the end of the slice (or
/// marked absent) are skipped and show the background.
pub fn plan_scene(
    template: &LayoutTemplate,
    color: FrameColor,
    photo_present: &[bool],
    placements: &[Placement],
    shadows: bool,
) -> BoothResult<DrawPlan> {
    let canvas = template.canvas;
    let resolved = placements
        .iter()
        .map(|p| ResolvedPlacement::resolve(p, canvas))
        .collect::<BoothResult<Vec<_>>>()?;

    let mut ops = vec![DrawOp::Fill {
        rect: canvas.rect(),
        color,
    }];

    let strips = template.strips();
    let present = |i: usize| photo_present.get(i).copied().unwrap_or(false);

    if strips.is_empty() {
        for (i, slot) in template.photo_slots().into_iter().enumerate() {
            if !present(i) {
                continue;
            }
            if shadows {
                ops.push(DrawOp::RectShadow {
                    rect: slot,
                    style: PHOTO_SHADOW,
                });
            }
            ops.push(DrawOp::Photo {
                photo: i,
                dest: slot,
            });
        }
    } else {
        for strip in &strips {
            ops.push(DrawOp::Fill { rect: *strip, color });
        }
        for (i, slot) in template.photo_slots().into_iter().enumerate() {
            if !present(i) {
                continue;
            }
            for strip in &strips {
                ops.push(DrawOp::Photo {
                    photo: i,
                    dest: slot + strip.origin().to_vec2(),
                });
            }
        }
    }

    for placement in 0..resolved.len() {
        if shadows {
            ops.push(DrawOp::StickerShadow {
                placement,
                style: STICKER_SHADOW,
            });
        }
        ops.push(DrawOp::Sticker { placement });
    }

    Ok(DrawPlan {
        canvas,
        ops,
        placements: resolved,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/render/plan.rs"]
mod tests;

use std::sync::Arc;

use crate::{
    assets::{
        decode::{PreparedImage, parse_svg},
        library::StickerKind,
    },
    foundation::error::{BoothError, BoothResult},
};

/// Pixel side of the square raster used to draw a decoration box of `side` pixels.
///
/// The raster matches the box (rounded up) until it reaches `max_px`; larger boxes reuse a
/// `max_px` raster scaled up at draw time, so huge scales stay cheap and never fail.
pub fn raster_side_px(side: f64, max_px: u32) -> BoothResult<u32> {
    if !side.is_finite() || side <= 0.0 {
        return Err(BoothError::validation(format!(
            "decoration size must be finite and > 0, got {side}"
        )));
    }
    let px = side.ceil().clamp(1.0, f64::from(max_px.max(1)));
    Ok(px as u32)
}

/// Rasterize `tree` into a `side x side` premultiplied RGBA8 buffer.
///
/// The viewbox is scaled uniformly to fit the square and centered on the free axis, so
/// non-square artwork keeps its native aspect ratio.
pub fn rasterize_svg_fit(tree: &usvg::Tree, side: u32) -> BoothResult<Vec<u8>> {
    let size = tree.size();
    let (vw, vh) = (size.width(), size.height());
    if !vw.is_finite() || !vh.is_finite() || vw <= 0.0 || vh <= 0.0 {
        return Err(BoothError::decode("svg has invalid width/height"));
    }

    let mut pixmap = resvg::tiny_skia::Pixmap::new(side, side)
        .ok_or_else(|| BoothError::decode("failed to allocate svg pixmap"))?;

    let target = side as f32;
    let scale = (target / vw).min(target / vh);
    let tx = (target - vw * scale) / 2.0;
    let ty = (target - vh * scale) / 2.0;
    let xform = resvg::tiny_skia::Transform::from_row(scale, 0.0, 0.0, scale, tx, ty);

    resvg::render(tree, xform, &mut pixmap.as_mut());
    Ok(pixmap.data().to_vec())
}

/// Render a library decoration at `side x side` pixels.
pub fn rasterize_sticker(kind: StickerKind, side: u32) -> BoothResult<PreparedImage> {
    let tree = parse_svg(kind.svg_source().as_bytes())?;
    let rgba8_premul = rasterize_svg_fit(&tree, side)?;
    Ok(PreparedImage {
        width: side,
        height: side,
        rgba8_premul: Arc::new(rgba8_premul),
    })
}

#[cfg(test)]
#[path = "../../tests/unit/assets/svg_raster.rs"]
mod tests;

use crate::{
    foundation::{color::FrameColor, core::Rect, error::BoothResult},
    render::{
        backend::Surface,
        plan::{DrawOp, DrawPlan, ResolvedPlacement, ShadowStyle},
    },
};

/// Executes the individual draws of a [`DrawPlan`].
pub trait DrawBackend {
    /// Fill `rect` with a flat color.
    fn fill(&mut self, rect: Rect, color: FrameColor) -> BoothResult<()>;

    /// Draw the blurred shadow of an opaque rectangle.
    fn rect_shadow(&mut self, rect: Rect, style: &ShadowStyle) -> BoothResult<()>;

    /// Draw decoded photo `photo` scaled into `dest`.
    fn photo(&mut self, photo: usize, dest: Rect) -> BoothResult<()>;

    /// Draw the blurred shadow of a decoration.
    fn sticker_shadow(
        &mut self,
        placement: &ResolvedPlacement,
        style: &ShadowStyle,
    ) -> BoothResult<()>;

    /// Draw a decoration.
    fn sticker(&mut self, placement: &ResolvedPlacement) -> BoothResult<()>;

    /// Rasterize everything drawn so far into the final surface.
    fn finish(&mut self, plan: &DrawPlan) -> BoothResult<Surface>;
}

/// Run every op of `plan` in order and read back the result.
pub fn execute_plan<B: DrawBackend + ?Sized>(
    backend: &mut B,
    plan: &DrawPlan,
) -> BoothResult<Surface> {
    for op in &plan.ops {
        match *op {
            DrawOp::Fill { rect, color } => backend.fill(rect, color)?,
            DrawOp::RectShadow { rect, style } => backend.rect_shadow(rect, &style)?,
            DrawOp::Photo { photo, dest } => backend.photo(photo, dest)?,
            DrawOp::StickerShadow { placement, style } => {
                backend.sticker_shadow(placement_at(plan, placement)?, &style)?
            }
            DrawOp::Sticker { placement } => backend.sticker(placement_at(plan, placement)?)?,
        }
    }

    backend.finish(plan)
}

fn placement_at(plan: &DrawPlan, i: usize) -> BoothResult<&ResolvedPlacement> {
    plan.placements.get(i).ok_or_else(|| {
        crate::foundation::error::BoothError::validation(format!(
            "draw op references placement {i} of {}",
            plan.placements.len()
        ))
    })
}

#[cfg(test)]
#[path = "../../tests/unit/render/passes.rs"]
mod tests;

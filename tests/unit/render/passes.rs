use super::*;
use crate::{
    assets::library::StickerKind,
    foundation::{core::Point, error::BoothError},
    layout::template::LayoutKind,
    render::plan::{PHOTO_SHADOW, STICKER_SHADOW, plan_scene},
    scene::model::Placement,
};

#[derive(Default)]
struct MockBackend {
    calls: Vec<String>,
}

impl DrawBackend for MockBackend {
    fn fill(&mut self, _rect: Rect, color: FrameColor) -> BoothResult<()> {
        self.calls.push(format!("fill {}", color.to_hex()));
        Ok(())
    }

    fn rect_shadow(&mut self, _rect: Rect, style: &ShadowStyle) -> BoothResult<()> {
        assert_eq!(*style, PHOTO_SHADOW);
        self.calls.push("rect_shadow".into());
        Ok(())
    }

    fn photo(&mut self, photo: usize, _dest: Rect) -> BoothResult<()> {
        self.calls.push(format!("photo {photo}"));
        Ok(())
    }

    fn sticker_shadow(
        &mut self,
        placement: &ResolvedPlacement,
        style: &ShadowStyle,
    ) -> BoothResult<()> {
        assert_eq!(*style, STICKER_SHADOW);
        self.calls.push(format!("sticker_shadow {}", placement.kind));
        Ok(())
    }

    fn sticker(&mut self, placement: &ResolvedPlacement) -> BoothResult<()> {
        self.calls.push(format!("sticker {}", placement.kind));
        Ok(())
    }

    fn finish(&mut self, plan: &DrawPlan) -> BoothResult<Surface> {
        self.calls.push("finish".into());
        Ok(Surface {
            width: plan.canvas.width,
            height: plan.canvas.height,
            data: Vec::new(),
            premultiplied: true,
        })
    }
}

#[test]
fn execute_plan_calls_in_expected_order() {
    let t = LayoutKind::Postcard.template();
    let placements = vec![
        Placement::new("a", StickerKind::Heart, 50.0, 50.0),
        Placement::new("b", StickerKind::Crab, 50.0, 50.0),
    ];
    let plan = plan_scene(
        t,
        FrameColor::rgb(0, 0, 255),
        &[true, false, true],
        &placements,
        true,
    )
    .unwrap();

    let mut backend = MockBackend::default();
    let out = execute_plan(&mut backend, &plan).unwrap();
    assert_eq!((out.width, out.height), (1200, 1800));
    assert!(out.premultiplied);
    assert_eq!(
        backend.calls,
        vec![
            "fill #0000ff",
            "rect_shadow",
            "photo 0",
            "rect_shadow",
            "photo 2",
            "sticker_shadow heart",
            "sticker heart",
            "sticker_shadow crab",
            "sticker crab",
            "finish",
        ]
    );
}

#[test]
fn dangling_placement_reference_is_rejected() {
    let plan = DrawPlan {
        canvas: LayoutKind::Strips.template().canvas,
        ops: vec![DrawOp::Sticker { placement: 3 }],
        placements: vec![ResolvedPlacement {
            kind: StickerKind::Bow,
            center: Point::ZERO,
            side: 150.0,
            rotation_rad: 0.0,
            raster_px: 150,
        }],
    };
    let mut backend = MockBackend::default();
    assert!(matches!(
        execute_plan(&mut backend, &plan),
        Err(BoothError::Validation(_))
    ));
    assert!(backend.calls.is_empty());
}

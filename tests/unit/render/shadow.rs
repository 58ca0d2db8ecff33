use std::sync::Arc;

use super::*;
use crate::{
    foundation::core::Vec2,
    render::plan::{PHOTO_SHADOW, STICKER_SHADOW},
};

fn canvas() -> Rect {
    Rect::new(0.0, 0.0, 1200.0, 1800.0)
}

#[test]
fn kernel_sums_to_one_in_q16_and_is_symmetric() {
    for (radius, sigma) in [(1u32, 0.5f32), (8, 2.5), (38, 12.5)] {
        let k = gaussian_kernel_q16(radius, sigma).unwrap();
        assert_eq!(k.len(), (2 * radius + 1) as usize);
        assert_eq!(k.iter().map(|&w| u64::from(w)).sum::<u64>(), 1 << 16);
        for i in 0..k.len() / 2 {
            let j = k.len() - 1 - i;
            assert!(k[i].abs_diff(k[j]) <= 1);
        }
    }
    assert_eq!(gaussian_kernel_q16(0, 0.0).unwrap(), vec![1 << 16]);
    assert!(gaussian_kernel_q16(2, 0.0).is_err());
}

#[test]
fn rect_shadow_peaks_inside_and_fades_outside() {
    let rect = Rect::new(100.0, 100.0, 500.0, 400.0);
    let s = rect_shadow(rect, &PHOTO_SHADOW, canvas()).unwrap();

    // Offset by +10 in y, spread 38 px each side.
    assert_eq!((s.origin_x, s.origin_y), (62, 72));
    assert_eq!((s.width, s.height), (476, 376));

    // Deep inside: full 10% of 255.
    let inside = s.alpha_at(300 - 62, 260 - 72);
    assert!(inside == 25 || inside == 26, "{inside}");
    // On the (offset) edge: about half.
    let edge = s.alpha_at(300 - 62, 410 - 72);
    assert!((11..=14).contains(&edge), "{edge}");
    // Far corner: nothing.
    assert_eq!(s.alpha_at(0, 0), 0);
    assert!(s.rgba8_premul.chunks_exact(4).all(|p| p[0] == 0 && p[1] == 0 && p[2] == 0));
}

#[test]
fn rect_shadow_is_clipped_to_canvas() {
    let rect = Rect::new(-50.0, -50.0, 20.0, 20.0);
    let s = rect_shadow(rect, &PHOTO_SHADOW, canvas()).unwrap();
    assert_eq!((s.origin_x, s.origin_y), (0, 0));
    assert_eq!((s.width, s.height), (58, 68));

    let off = Rect::new(-500.0, -500.0, -400.0, -400.0);
    assert!(rect_shadow(off, &PHOTO_SHADOW, canvas()).is_none());
}

#[test]
fn rect_shadow_respects_zero_offset_symmetry() {
    let style = ShadowStyle {
        offset: Vec2::ZERO,
        ..PHOTO_SHADOW
    };
    let s = rect_shadow(Rect::new(200.0, 200.0, 300.0, 300.0), &style, canvas()).unwrap();
    for i in 0..s.width {
        assert_eq!(s.alpha_at(i, 0), s.alpha_at(i, s.height - 1));
        assert_eq!(s.alpha_at(0, i), s.alpha_at(s.width - 1, i));
    }
}

#[test]
fn coverage_shadow_pads_and_blurs_alpha() {
    // 4x4 opaque square.
    let src = PreparedImage {
        width: 4,
        height: 4,
        rgba8_premul: Arc::new(vec![255u8; 4 * 4 * 4]),
    };
    let s = coverage_shadow(&src, &STICKER_SHADOW).unwrap();
    assert_eq!((s.origin_x, s.origin_y), (-8, -8));
    assert_eq!((s.width, s.height), (20, 20));

    let center = s.alpha_at(9, 9);
    assert!(center > 0 && center <= 26, "{center}");
    assert_eq!(s.alpha_at(0, 0), 0);
    assert!(s.alpha_at(9, 12) > s.alpha_at(9, 16));
    assert!(s.alpha_at(9, 9) >= s.alpha_at(9, 13));
}

#[test]
fn coverage_shadow_of_transparent_raster_is_empty() {
    let src = PreparedImage {
        width: 3,
        height: 2,
        rgba8_premul: Arc::new(vec![0u8; 3 * 2 * 4]),
    };
    let s = coverage_shadow(&src, &STICKER_SHADOW).unwrap();
    assert!(s.rgba8_premul.iter().all(|&b| b == 0));
}

use super::*;
use crate::{layout::template::LayoutKind, scene::model::Placement};

fn settings(shadows: bool, parallel: bool, capacity: usize) -> RenderSettings {
    RenderSettings {
        shadows,
        parallel_decode: parallel,
        sticker_cache_capacity: capacity,
    }
}

fn solid_png(w: u32, h: u32, rgba: [u8; 4]) -> Vec<u8> {
    let img = image::RgbaImage::from_pixel(w, h, image::Rgba(rgba));
    let mut out = Vec::new();
    img.write_to(&mut std::io::Cursor::new(&mut out), image::ImageFormat::Png)
        .unwrap();
    out
}

fn raster(px: u32) -> StickerRaster {
    let img = PreparedImage {
        width: px,
        height: px,
        rgba8_premul: Arc::new(vec![0u8; (px * px * 4) as usize]),
    };
    StickerRaster {
        image: image_paint(&img).unwrap(),
        shadow: None,
    }
}

#[test]
fn sticker_cache_evicts_least_recently_used() {
    let mut cache = StickerCache::new(2);
    let a = StickerKey {
        kind: StickerKind::Heart,
        px: 150,
    };
    let b = StickerKey {
        kind: StickerKind::Crab,
        px: 150,
    };
    let c = StickerKey {
        kind: StickerKind::Heart,
        px: 300,
    };
    cache.insert(a, raster(4));
    cache.insert(b, raster(4));
    assert!(cache.get(a).is_some());
    cache.insert(c, raster(4));

    assert_eq!(cache.len(), 2);
    assert!(cache.get(a).is_some());
    assert!(cache.get(b).is_none());
    assert!(cache.get(c).is_some());
}

#[test]
fn pixmap_rejects_wrong_length_and_oversized_dims() {
    assert!(pixmap_from_premul_bytes(&[0; 15], 2, 2).is_err());
    assert!(pixmap_from_premul_bytes(&[], 70_000, 0).is_err());
    assert!(pixmap_from_premul_bytes(&[0; 16], 2, 2).is_ok());
}

#[test]
fn empty_postcard_is_all_frame_color() {
    let scene = CompositeScene::new(LayoutKind::Postcard).with_frame_color("#123456");
    let surface = Compositor::new(settings(true, false, 8))
        .rasterize(&scene)
        .unwrap();
    assert_eq!((surface.width, surface.height), (1200, 1800));
    assert!(surface.premultiplied);
    for (x, y) in [(0, 0), (600, 900), (1199, 1799), (300, 1500)] {
        assert_eq!(surface.pixel(x, y), Some([0x12, 0x34, 0x56, 255]));
    }
}

#[test]
fn photo_fills_its_slot_and_missing_slots_show_background() {
    let red = solid_png(16, 9, [255, 0, 0, 255]);
    let scene = CompositeScene::new(LayoutKind::Postcard).with_photos(vec![
        PhotoFrame::missing(),
        PhotoFrame::new(red),
    ]);
    let surface = Compositor::new(settings(false, true, 8))
        .rasterize(&scene)
        .unwrap();

    assert_eq!(surface.pixel(600, 320), Some([255, 255, 255, 255]));
    assert_eq!(surface.pixel(600, 900), Some([255, 0, 0, 255]));
    assert_eq!(surface.pixel(600, 1480), Some([255, 255, 255, 255]));
}

#[test]
fn bad_photo_is_a_decode_error_naming_the_slot() {
    let scene = CompositeScene::new(LayoutKind::Strips)
        .with_photos(vec![PhotoFrame::new(b"not an image".to_vec())]);
    let err = Compositor::default().rasterize(&scene).unwrap_err();
    match err {
        BoothError::Decode(msg) => assert!(msg.starts_with("photo 0"), "{msg}"),
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn sticker_rasters_are_cached_across_renders() {
    let scene = CompositeScene::new(LayoutKind::Postcard).with_placements(vec![
        Placement::new("a", StickerKind::Heart, 50.0, 50.0),
        Placement::new("b", StickerKind::Heart, 20.0, 20.0),
        Placement::new("c", StickerKind::Starfish, 80.0, 80.0).with_scale(2.0),
    ]);
    let mut comp = Compositor::new(settings(true, true, 8));
    let first = comp.rasterize(&scene).unwrap();
    assert_eq!(comp.cached_sticker_rasters(), 2);
    let second = comp.rasterize(&scene).unwrap();
    assert_eq!(first, second);
}

#[test]
fn shadows_toggle_changes_pixels_near_photos() {
    let blue = solid_png(8, 8, [0, 0, 255, 255]);
    let scene =
        CompositeScene::new(LayoutKind::Postcard).with_photos(vec![PhotoFrame::new(blue)]);

    let with = Compositor::new(settings(true, false, 8))
        .rasterize(&scene)
        .unwrap();
    let without = Compositor::new(settings(false, false, 8))
        .rasterize(&scene)
        .unwrap();

    // Just below the first slot, inside the offset shadow.
    let (x, y) = (600, 605);
    assert_eq!(without.pixel(x, y), Some([255, 255, 255, 255]));
    let shaded = with.pixel(x, y).unwrap();
    assert!(shaded[0] < 255, "expected shadow, got {shaded:?}");
}

use super::*;

#[test]
fn placement_json_uses_editor_field_names() {
    let p: Placement = serde_json::from_str(
        r#"{"id":"s1","type":"heart","x":50,"y":25.5,"scale":1.2,"rotation":-30}"#,
    )
    .unwrap();
    assert_eq!(p.kind, "heart");
    assert_eq!(p.sticker_kind().unwrap(), StickerKind::Heart);
    assert_eq!((p.x, p.y, p.scale, p.rotation), (50.0, 25.5, 1.2, -30.0));
    assert!((p.box_side_px() - 180.0).abs() < 1e-9);

    let v = serde_json::to_value(&p).unwrap();
    assert_eq!(v["type"], "heart");
}

#[test]
fn placement_defaults_scale_and_rotation() {
    let p: Placement = serde_json::from_str(r#"{"id":"a","type":"crab","x":0,"y":100}"#).unwrap();
    assert_eq!(p.scale, 1.0);
    assert_eq!(p.rotation, 0.0);
}

#[test]
fn validate_rejects_non_finite_and_non_positive_scale() {
    let base = Placement::new("p", StickerKind::Bow, 10.0, 10.0);
    base.validate().unwrap();
    // Out-of-range positions and unclamped scales are rendered as given.
    base.clone().with_scale(7.5).validate().unwrap();
    Placement { x: -20.0, ..base.clone() }.validate().unwrap();

    assert!(base.clone().with_scale(0.0).validate().is_err());
    assert!(base.clone().with_scale(-1.0).validate().is_err());
    assert!(base.clone().with_rotation(f64::INFINITY).validate().is_err());
    assert!(Placement { y: f64::NAN, ..base }.validate().is_err());
}

#[test]
fn unknown_kind_surfaces_as_unknown_asset() {
    let mut p = Placement::new("p", StickerKind::Heart, 1.0, 1.0);
    p.kind = "kraken".into();
    assert!(matches!(
        p.sticker_kind(),
        Err(BoothError::UnknownAsset(ref k)) if k == "kraken"
    ));
}

#[test]
fn scene_file_defaults_and_aliases() {
    let f = SceneFile::from_json_str(
        r#"{"layout":"postcard","photos":["a.png",null,""],"placements":[{"id":"1","type":"heart","x":50,"y":50}]}"#,
    )
    .unwrap();
    assert_eq!(f.frame_color, "#ffffff");
    assert_eq!(f.photos.len(), 3);
    assert_eq!(f.stickers.len(), 1);

    assert!(matches!(
        SceneFile::from_json_str("{"),
        Err(BoothError::Validation(_))
    ));
}

#[test]
fn scene_file_load_reads_photos_and_keeps_missing_slots() {
    let dir = std::env::temp_dir().join(format!("deepbooth-scene-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("a.bin"), [1u8, 2, 3]).unwrap();

    let f = SceneFile {
        layout: "strips".into(),
        photos: vec![Some("a.bin".into()), None, Some(String::new())],
        stickers: vec![],
        frame_color: "#000".into(),
    };
    let scene = f.load(&dir).unwrap();
    assert_eq!(scene.layout, "strips");
    assert_eq!(scene.photos[0].bytes(), &[1, 2, 3]);
    assert!(scene.photos[1].is_missing());
    assert!(scene.photos[2].is_missing());
    assert_eq!(scene.frame_color, "#000");

    let missing = SceneFile {
        photos: vec![Some("nope.png".into())],
        ..f
    };
    assert!(matches!(missing.load(&dir), Err(BoothError::Other(_))));

    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn scene_builder_defaults_to_white_frame() {
    let s = CompositeScene::new(LayoutKind::Strips)
        .with_photos(vec![PhotoFrame::new(vec![1u8])])
        .with_frame_color("#123456");
    assert_eq!(s.layout, "strips");
    assert_eq!(s.photos.len(), 1);
    assert_eq!(s.frame_color, "#123456");
    assert_eq!(CompositeScene::new(LayoutKind::Postcard).frame_color, "#ffffff");
    assert_eq!(format!("{:?}", PhotoFrame::new(vec![0u8; 3])), "PhotoFrame { len: 3 }");
}

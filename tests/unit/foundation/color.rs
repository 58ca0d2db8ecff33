use super::*;

#[test]
fn parses_long_short_and_alpha_forms() {
    assert_eq!(FrameColor::parse("#ffffff").unwrap(), FrameColor::WHITE);
    assert_eq!(
        FrameColor::parse("#0EA5E9").unwrap(),
        FrameColor::rgb(0x0e, 0xa5, 0xe9)
    );
    assert_eq!(
        FrameColor::parse("f43").unwrap(),
        FrameColor::rgb(0xff, 0x44, 0x33)
    );
    assert_eq!(
        FrameColor::parse(" #00000080 ").unwrap(),
        FrameColor {
            r: 0,
            g: 0,
            b: 0,
            a: 0x80
        }
    );
}

#[test]
fn rejects_malformed_input() {
    for bad in ["", "#", "#12", "#12345", "#gggggg", "white", "#ffééff", "#+fffff"] {
        let err = FrameColor::parse(bad).unwrap_err();
        assert!(
            matches!(err, BoothError::Validation(_)),
            "{bad:?} -> {err:?}"
        );
    }
}

#[test]
fn hex_output_is_canonical() {
    assert_eq!(FrameColor::parse("#ABC").unwrap().to_hex(), "#aabbcc");
    assert_eq!(
        FrameColor::parse("#11223344").unwrap().to_hex(),
        "#11223344"
    );
    assert_eq!(FrameColor::default().to_hex(), "#ffffff");
}

#[test]
fn premul_of_opaque_color_is_identity() {
    let c = FrameColor::rgb(12, 34, 56);
    assert_eq!(c.to_premul().to_array(), [12, 34, 56, 255]);
}

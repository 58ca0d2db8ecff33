use super::*;

#[test]
fn percent_maps_to_canvas_corners_and_center() {
    let c = Canvas {
        width: 1200,
        height: 1800,
    };
    assert_eq!(c.point_from_percent(0.0, 0.0), Point::ZERO);
    assert_eq!(c.point_from_percent(50.0, 50.0), Point::new(600.0, 900.0));
    assert_eq!(
        c.point_from_percent(100.0, 100.0),
        Point::new(1200.0, 1800.0)
    );
}

#[test]
fn premultiply_rounds_to_nearest() {
    let p = Rgba8Premul::from_straight_rgba(255, 128, 0, 128);
    assert_eq!(p.to_array(), [128, 64, 0, 128]);
    assert_eq!(
        Rgba8Premul::from_straight_rgba(10, 20, 30, 255).to_array(),
        [10, 20, 30, 255]
    );
}

#[test]
fn diagonal_rounds_up() {
    let c = Canvas {
        width: 1200,
        height: 1800,
    };
    assert_eq!(c.diagonal_px(), 2164);
    assert_eq!(
        Canvas {
            width: 3,
            height: 4
        }
        .diagonal_px(),
        5
    );
}

use super::*;

#[test]
fn lerp_clamps_and_rounds() {
    assert_eq!(lerp_u8(0, 255, 0.0), 0);
    assert_eq!(lerp_u8(0, 255, 1.0), 255);
    assert_eq!(lerp_u8(0, 255, 0.5), 128);
    assert_eq!(lerp_u8(200, 100, 2.0), 100);
    assert_eq!(lerp_u8(200, 100, -1.0), 200);
}

#[test]
fn format_value_drops_trailing_zero() {
    assert_eq!(format_value(10.0), "10");
    assert_eq!(format_value(4.26), "4.3");
    assert_eq!(format_value(0.0), "0");
    assert_eq!(format_value(12.46), "12.5");
}

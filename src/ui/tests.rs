use super::hud_speed::format_speed;

// ============================================================================
// Speed readout
// ============================================================================

#[test]
fn test_speed_is_shown_with_one_decimal() {
    assert_eq!(format_speed(6.0), "Speed: 6.0");
    assert_eq!(format_speed(7.24), "Speed: 7.2");
    assert_eq!(format_speed(9.96), "Speed: 10.0");
}

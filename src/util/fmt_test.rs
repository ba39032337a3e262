use super::*;

#[test]
fn progress_rounds_half_up() {
    assert_eq!(progress_percent(15, 20), 75);
    assert_eq!(progress_percent(8, 12), 67);
    assert_eq!(progress_percent(1, 3), 33);
}

#[test]
fn progress_without_plan_is_zero() {
    assert_eq!(progress_percent(10, 0), 0);
    assert_eq!(progress_percent(0, 0), 0);
}

#[test]
fn progress_may_exceed_one_hundred() {
    assert_eq!(progress_percent(30, 20), 150);
}

#[test]
fn dates_render_in_brazilian_order() {
    assert_eq!(format_date_br("2024-06-12T10:00:00+00:00"), "12/06/2024");
    assert_eq!(format_date_br("2024-06-12"), "12/06/2024");
}

#[test]
fn malformed_dates_pass_through() {
    assert_eq!(format_date_br("ontem"), "ontem");
    assert_eq!(format_date_br(""), "");
}

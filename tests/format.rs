//! Tests for magnitude formatting.

use scalefmt::{Options, Scale};

#[test]
fn zero_formats_without_prefix() {
    assert_eq!(scalefmt::format(0), "0B");
}

#[test]
fn nan_formats_as_zero() {
    assert_eq!(scalefmt::format(f64::NAN), "0B");
}

#[test]
fn zero_keeps_custom_unit() {
    let watts = Options::new().unit("W");
    assert_eq!(scalefmt::format_with(0, &watts), "0W");
    assert_eq!(scalefmt::format_with(f64::NAN, &watts), "0W");
}

#[test]
fn kilo_band() {
    assert_eq!(scalefmt::format(1500), "1.5kB");
}

#[test]
fn giga_band() {
    assert_eq!(scalefmt::format(1e9), "1GB");
}

#[test]
fn unscaled_band_keeps_value() {
    assert_eq!(scalefmt::format(5), "5B");
    assert_eq!(scalefmt::format(999), "999B");
}

#[test]
fn rounds_to_two_decimals() {
    assert_eq!(scalefmt::format(1250), "1.25kB");
    assert_eq!(scalefmt::format(1555), "1.56kB");
    assert_eq!(scalefmt::format(1100), "1.1kB");
}

#[test]
fn sub_unity_values_use_fractional_prefixes() {
    assert_eq!(scalefmt::format(0.1), "100mB");
    assert_eq!(scalefmt::format(0.000002), "2µB");
}

#[test]
fn values_above_the_table_clamp_to_largest_prefix() {
    assert_eq!(scalefmt::format(1e24), "1YB");
    assert_eq!(scalefmt::format(5e26), "500YB");
}

#[test]
fn values_below_the_table_floor_to_smallest_prefix() {
    assert_eq!(scalefmt::format(1e-27), "0yB");
}

#[test]
fn custom_unit_follows_the_tag() {
    assert_eq!(
        scalefmt::format_with(1500, &Options::new().unit("W")),
        "1.5kW"
    );
    assert_eq!(scalefmt::format_with(1500, &Options::new().unit("")), "1.5k");
}

#[test]
fn binary_scale_formats_powers_of_1024() {
    let binary = Options::new().scale(Scale::binary().clone());
    assert_eq!(scalefmt::format_with(2048, &binary), "2KiB");
    assert_eq!(scalefmt::format_with(1_572_864, &binary), "1.5MiB");
    assert_eq!(scalefmt::format_with(512, &binary), "512B");
}

#[test]
fn negative_values_select_smallest_prefix() {
    // The search runs on the signed value, so negatives always land on the
    // smallest entry.
    assert_eq!(Scale::si().prefix_for(-2000.0).tag, "y");
    let formatted = scalefmt::format(-2000);
    assert!(formatted.starts_with('-'));
    assert!(formatted.ends_with("yB"));
}

#[test]
fn prefix_selection_is_monotonic() {
    let scale = Scale::si();
    let values = [
        1e-30, 1e-24, 0.004, 0.5, 1.0, 30.0, 999.0, 1000.0, 1e4, 1e7, 1e9, 1e15, 1e24, 1e28,
    ];
    let mut last = 0.0;
    for value in values {
        let selected = scale.prefix_for(value).multiplier;
        assert!(selected >= last, "selection went backwards at {value}");
        last = selected;
    }
}

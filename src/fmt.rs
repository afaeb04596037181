//! Turning raw magnitudes into "1.5kB"-style strings.

use crate::options::Options;

/// Formats with the default options: SI scale, "B" unit.
#[must_use]
pub fn format(value: impl Into<f64>) -> String {
    format_with(value, &Options::default())
}

/// Zero and NaN short-circuit to `"0" + unit`. Anything else picks the
/// greatest prefix not exceeding the value and renders with at most two
/// decimals, trailing zeros dropped.
#[must_use]
pub fn format_with(value: impl Into<f64>, options: &Options) -> String {
    let value = value.into();
    let unit = options.unit_or_default();

    if value == 0.0 || value.is_nan() {
        return format!("0{unit}");
    }

    let prefix = options.scale_or_default().prefix_for(value);
    let scaled = (value * 100.0 / prefix.multiplier).round() / 100.0;
    // Rounding a tiny magnitude can leave -0.0, which would render signed.
    let scaled = if scaled == 0.0 { 0.0 } else { scaled };

    format!("{scaled}{}{unit}", prefix.tag)
}

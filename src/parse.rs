//! Reading "1.5kB"-style strings back into raw magnitudes.

use crate::options::Options;

/// Parses with the default options: SI scale, "B" unit.
#[must_use]
pub fn parse(input: &str) -> Option<f64> {
    parse_with(input, &Options::default())
}

/// Returns `None` for anything unrecognized: malformed numbers, unknown
/// prefixes, or tags whose multiplier is absent or zero. Never panics.
#[must_use]
pub fn parse_with(input: &str, options: &Options) -> Option<f64> {
    let scale = options.scale_or_default();
    let captures = scale.pattern().captures(input)?;

    let number: f64 = captures.get(1)?.as_str().parse().ok()?;
    let tag = captures.get(2).map_or("", |m| m.as_str());
    let rest = captures.get(3).map_or("", |m| m.as_str());

    // A bare number may carry the unit ("5B") but nothing else: leftover
    // text that matched no prefix is an unknown tag, not ignorable noise.
    if tag.is_empty() {
        let rest = rest.trim();
        if !rest.is_empty() && rest.to_lowercase() != options.unit_or_default().to_lowercase() {
            return None;
        }
    }

    // The pattern matches tags case-insensitively, but the lookup is exact:
    // "1k" resolves, "1K" does not.
    let multiplier = scale.multiplier(tag)?;
    if multiplier == 0.0 || multiplier.is_nan() {
        return None;
    }

    Some(number * multiplier)
}

use crate::constants::CoreConstants;

/// Formats an evaluation result as a display token.
///
/// Integral values drop the fractional part, other values use the shortest
/// round-trip representation, never exponent notation.
#[must_use]
pub fn format_number(n: f64) -> String {
    let formatted = if n.fract() == 0.0 {
        format!("{n:.0}")
    } else {
        format!("{n}")
    };

    if formatted.starts_with(CoreConstants::DECIMAL_POINT) {
        format!("{}{formatted}", CoreConstants::LEADING_ZERO)
    } else {
        formatted
    }
}

//! ECMAScript `Number.prototype.toString` formatting
//!
//! Color strings embed floating point percentages. Legacy icons were produced
//! by a JavaScript engine, so the digits must match its shortest round-trip
//! output, including when it switches to exponent notation.

/// Format `value` the way `String(value)` does in ECMAScript
pub fn format_ecmascript_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs();
    if (1e-6..1e21).contains(&magnitude) {
        return format!("{value}");
    }

    let exponential = format!("{value:e}");
    match exponential.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => exponential,
    }
}

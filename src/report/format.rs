//! Number formatting for report values
//!
//! Rust's `{:e}` writes exponents bare (`6.95e8`); the report uses the
//! conventional signed two-digit form (`6.950e+08`). Shortest round-trip
//! values switch to scientific notation outside `[1e-4, 1e16)`.

/// Fixed-point with `digits` decimals
pub fn fixed(value: f64, digits: usize) -> String {
    if !value.is_finite() {
        return non_finite(value);
    }
    format!("{value:.digits$}")
}

/// Scientific notation with `digits` mantissa decimals and a signed exponent
pub fn scientific(value: f64, digits: usize) -> String {
    if !value.is_finite() {
        return non_finite(value);
    }
    signed_exponent(&format!("{value:.digits$e}"))
}

/// Shortest representation that parses back to the same `f64`
pub fn shortest(value: f64) -> String {
    if !value.is_finite() {
        return non_finite(value);
    }

    let magnitude = value.abs();
    if magnitude == 0.0 || (1e-4..1e16).contains(&magnitude) {
        let text = value.to_string();
        if text.contains('.') {
            text
        } else {
            format!("{text}.0")
        }
    } else {
        signed_exponent(&format!("{value:e}"))
    }
}

fn signed_exponent(text: &str) -> String {
    match text.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{mantissa}e{sign}{digits:0>2}")
        }
        None => text.to_string(),
    }
}

fn non_finite(value: f64) -> String {
    if value.is_nan() {
        "nan".to_string()
    } else if value > 0.0 {
        "inf".to_string()
    } else {
        "-inf".to_string()
    }
}

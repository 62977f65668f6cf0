/// Renders `value` with a fixed number of decimals.
///
/// Non-finite values are written as `NaN`, `+Inf` and `-Inf`.
pub(crate) fn format_fixed(value: f64, precision: usize) -> String {
    if value.is_nan() {
        "NaN".to_owned()
    } else if value == f64::INFINITY {
        "+Inf".to_owned()
    } else if value == f64::NEG_INFINITY {
        "-Inf".to_owned()
    } else {
        format!("{value:.precision$}")
    }
}

/// `name=value` with six decimals, the format of every perfdata entry.
pub(crate) fn perf_entry(name: &str, value: f64) -> String {
    format!("{}={}", name, format_fixed(value, 6))
}

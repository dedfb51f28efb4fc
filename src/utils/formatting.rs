const KB: f64 = 1024.0;
const MB: f64 = KB * 1024.0;
const GB: f64 = MB * 1024.0;
const TB: f64 = GB * 1024.0;
const PB: f64 = TB * 1024.0;

/// Round the magnitude of `value` up to `places` decimals, keeping its sign.
/// Zero stays zero.
pub fn signed_ceil(value: f64, places: i32) -> f64 {
    if value == 0.0 {
        return 0.0;
    }
    let factor = 10f64.powi(places);
    value.signum() * (value.abs() * factor).ceil() / factor
}

/// Byte count with a binary unit, at most two decimals and no trailing
/// zeros: `0 B`, `1023 B`, `1.34 KB`, `149.7 KB`.
pub fn format_bytes(size: u64) -> String {
    let value = size as f64;
    let (scaled, unit) = if value >= PB {
        (value / PB, "PB")
    } else if value >= TB {
        (value / TB, "TB")
    } else if value >= GB {
        (value / GB, "GB")
    } else if value >= MB {
        (value / MB, "MB")
    } else if value >= KB {
        (value / KB, "KB")
    } else {
        (value, "B")
    };

    format!("{} {}", trim_decimals(&format!("{:.2}", scaled)), unit)
}

fn trim_decimals(fixed: &str) -> &str {
    if !fixed.contains('.') {
        return fixed;
    }
    fixed.trim_end_matches('0').trim_end_matches('.')
}

/// Seconds at or above one render as tenths of a second, rounded up;
/// anything shorter renders as whole milliseconds, rounded up.
pub fn format_time(seconds: f64) -> String {
    if seconds >= 1.0 {
        format!("{} s", (seconds * 10.0).ceil() / 10.0)
    } else {
        format!("{} ms", (seconds * 1000.0).ceil())
    }
}

/// Percentage with the sign carried by the number itself, e.g. `-9.02%`.
/// Positive values are not prefixed here.
pub fn format_percent(value: f64) -> String {
    format!("{}%", value)
}

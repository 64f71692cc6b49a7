const UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

/// Formats a byte count with binary (1024) steps, e.g. `1536` -> `"1.5 KB"`.
///
/// Negative counts are treated as zero and anything past terabytes stays in TB.
pub fn format_bytes(bytes: i64) -> String {
    format_bytes_with_precision(bytes, 2)
}

pub fn format_bytes_with_precision(bytes: i64, precision: usize) -> String {
    let bytes = bytes.max(0) as u64;
    let pow = if bytes == 0 {
        0
    } else {
        (bytes.ilog(1024) as usize).min(UNITS.len() - 1)
    };
    let value = bytes as f64 / 1024f64.powi(pow as i32);
    // Halves round away from zero.
    let factor = 10f64.powi(precision as i32);
    let rounded = (value * factor).round() / factor;

    format!("{} {}", trim_decimals(format!("{rounded:.precision$}")), UNITS[pow])
}

fn trim_decimals(formatted: String) -> String {
    if !formatted.contains('.') {
        return formatted;
    }
    formatted
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}

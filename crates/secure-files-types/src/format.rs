//! Human-readable byte sizes for the storage widgets.

/// Unit symbols, smallest first. Sizes past the last unit stay in it.
const UNITS: [&str; 5] = ["Bytes", "KB", "MB", "GB", "TB"];

const KIBI: u64 = 1024;

/// Decimal places used by the dashboard.
pub const DEFAULT_DECIMALS: u32 = 2;

/// Format a byte count using the largest unit the value reaches.
///
/// The scaled value is rounded half-up to `decimals` places and trailing
/// zeros are dropped, so the output is the shortest exact rendering:
///
/// - `0` -> `"0 Bytes"`
/// - `1024` -> `"1 KB"`
/// - `1536` -> `"1.5 KB"`
/// - `1234` with 0 decimals -> `"1 KB"`
pub fn format_bytes(bytes: u64, decimals: u32) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let mut index = 0;
    let mut divisor = 1u64;
    while index + 1 < UNITS.len() && bytes / divisor >= KIBI {
        divisor *= KIBI;
        index += 1;
    }

    let value = round_half_up(bytes as f64 / divisor as f64, decimals);
    let rendered = format!("{:.*}", decimals as usize, value);

    format!("{} {}", trim_fraction(&rendered), UNITS[index])
}

/// [`format_bytes`] with [`DEFAULT_DECIMALS`].
pub fn format_bytes_default(bytes: u64) -> String {
    format_bytes(bytes, DEFAULT_DECIMALS)
}

// `{:.N}` breaks exact ties to even; the dashboard has always rounded them up.
fn round_half_up(value: f64, decimals: u32) -> f64 {
    let scale = 10f64.powi(decimals.min(15) as i32);
    (value * scale).round() / scale
}

fn trim_fraction(rendered: &str) -> &str {
    if rendered.contains('.') {
        rendered.trim_end_matches('0').trim_end_matches('.')
    } else {
        rendered
    }
}

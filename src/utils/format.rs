//! Formatting utilities for file sizes and progress values.

/// Size units, 1024 apart.
const SIZE_UNITS: [&str; 6] = ["Bytes", "KB", "MB", "GB", "TB", "PB"];

/// Format a byte count for display (e.g., "0 Bytes", "1.5 KB", "3.27 MB").
///
/// Uses 1024-based units with at most two decimals, trailing zeros dropped.
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let mut unit = 0;
    let mut scaled = bytes;
    while scaled >= 1024 && unit < SIZE_UNITS.len() - 1 {
        scaled /= 1024;
        unit += 1;
    }

    let mut value = bytes as f64 / 1024f64.powi(unit as i32);
    // Rounding can carry into the next unit (1023.999 KB prints as 1024)
    if (value * 100.0).round() >= 1024.0 * 100.0 && unit < SIZE_UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{} {}", trim_decimals(&format!("{value:.2}")), SIZE_UNITS[unit])
}

/// Format a percentage for the progress bar text (e.g., "42%").
pub fn format_percent(percent: f64) -> String {
    format!("{:.0}%", percent.clamp(0.0, 100.0))
}

fn trim_decimals(number: &str) -> &str {
    if number.contains('.') {
        number.trim_end_matches('0').trim_end_matches('.')
    } else {
        number
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_file_size() {
        assert_eq!(format_file_size(0), "0 Bytes");
        assert_eq!(format_file_size(1), "1 Bytes");
        assert_eq!(format_file_size(1000), "1000 Bytes");
        assert_eq!(format_file_size(1024), "1 KB");
        assert_eq!(format_file_size(1536), "1.5 KB");
        assert_eq!(format_file_size(1_048_576), "1 MB");
        assert_eq!(format_file_size(3_430_000), "3.27 MB");
        assert_eq!(format_file_size(5 * 1024 * 1024 * 1024), "5 GB");
    }

    #[test]
    fn test_format_file_size_rounds_into_next_unit() {
        assert_eq!(format_file_size(1023), "1023 Bytes");
        assert_eq!(format_file_size(1_048_575), "1 MB");
        assert_eq!(format_file_size(1_048_570), "1023.99 KB");
        assert_eq!(format_file_size(1024 * 1024 * 1024 - 1), "1 GB");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(5.0), "5%");
        assert_eq!(format_percent(42.4), "42%");
        assert_eq!(format_percent(99.6), "100%");
        assert_eq!(format_percent(120.0), "100%");
    }
}

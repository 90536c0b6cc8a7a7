//! Human-readable formatting of sizes, view counts and durations

/// Format a byte count as a human-readable string with binary units.
///
/// Divides by 1024 until the value drops below 1024 or the unit list is
/// exhausted. There is no unit beyond TB, so very large inputs render as
/// however many TB they are.
pub fn format_size(bytes: f64) -> String {
    const UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB"];

    let mut value = bytes;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{:.2} {}", value, UNITS[unit])
}

/// Format a view count as an abbreviated magnitude string.
///
/// Counts from 1,000,000 through 1,099,000 inclusive all collapse to the
/// literal "1M". The thresholds are kept exactly as the display layer has
/// always produced them.
pub fn format_views(views: u64) -> String {
    if views < 1_000 {
        views.to_string()
    } else if views < 1_000_000 {
        format!("{:.1}K", views as f64 / 1_000.0)
    } else if views <= 1_099_000 {
        "1M".to_string()
    } else if views < 1_000_000_000 {
        format!("{:.1}M", views as f64 / 1_000_000.0)
    } else if views < 1_000_000_000_000 {
        format!("{:.1}B", views as f64 / 1_000_000_000.0)
    } else if views < 1_000_000_000_000_000 {
        format!("{:.1}T", views as f64 / 1_000_000_000_000.0)
    } else {
        format!("{:.1}Q", views as f64 / 1_000_000_000_000_000.0)
    }
}

/// Format a duration in seconds as zero-padded `HH:MM:SS`.
///
/// Each field is padded to a minimum of two digits; the hours field is
/// not capped and grows past two digits for durations of 100 hours or more.
pub fn format_duration(total_seconds: u64) -> String {
    let (minutes, seconds) = (total_seconds / 60, total_seconds % 60);
    let (hours, minutes) = (minutes / 60, minutes % 60);
    format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(0.0), "0.00 B");
        assert_eq!(format_size(512.0), "512.00 B");
        assert_eq!(format_size(1024.0), "1.00 KB");
        assert_eq!(format_size(1536.0), "1.50 KB");
        assert_eq!(format_size(1048576.0), "1.00 MB");
        assert_eq!(format_size(1073741824.0), "1.00 GB");
        assert_eq!(format_size(1024f64.powi(4)), "1.00 TB");
    }

    #[test]
    fn test_format_size_no_unit_beyond_tb() {
        assert_eq!(format_size(1024f64.powi(5)), "1024.00 TB");
        assert_eq!(format_size(1024f64.powi(5) * 2.0), "2048.00 TB");
    }

    #[test]
    fn test_format_views_plain_and_thousands() {
        assert_eq!(format_views(0), "0");
        assert_eq!(format_views(500), "500");
        assert_eq!(format_views(999), "999");
        assert_eq!(format_views(1_000), "1.0K");
        assert_eq!(format_views(1_500), "1.5K");
        assert_eq!(format_views(999_999), "1000.0K");
    }

    #[test]
    fn test_format_views_one_million_band() {
        // The whole closed band renders as "1M"
        assert_eq!(format_views(1_000_000), "1M");
        assert_eq!(format_views(1_050_000), "1M");
        assert_eq!(format_views(1_099_000), "1M");
        // First value past the band resumes one-decimal formatting
        assert_eq!(format_views(1_099_001), "1.1M");
        assert_eq!(format_views(1_100_000), "1.1M");
    }

    #[test]
    fn test_format_views_large_magnitudes() {
        assert_eq!(format_views(25_400_000), "25.4M");
        assert_eq!(format_views(1_000_000_000), "1.0B");
        assert_eq!(format_views(2_500_000_000), "2.5B");
        assert_eq!(format_views(1_000_000_000_000), "1.0T");
        assert_eq!(format_views(1_000_000_000_000_000), "1.0Q");
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(0), "00:00:00");
        assert_eq!(format_duration(59), "00:00:59");
        assert_eq!(format_duration(60), "00:01:00");
        assert_eq!(format_duration(3661), "01:01:01");
        assert_eq!(format_duration(86399), "23:59:59");
    }

    #[test]
    fn test_format_duration_hours_uncapped() {
        assert_eq!(format_duration(360000), "100:00:00");
        assert_eq!(format_duration(360061), "100:01:01");
    }
}

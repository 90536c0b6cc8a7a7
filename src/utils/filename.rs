//! Safe filename generation from video titles

use regex::Regex;

/// Convert a video title into a safe filename with the given extension.
///
/// Characters that are invalid on common filesystems are replaced with
/// underscores, leading and trailing dots and spaces are stripped, and
/// the stem is truncated well under the usual 255 byte limit.
pub fn to_safe_filename(title: &str, extension: &str) -> String {
    let invalid = Regex::new(r#"[<>:"/\\|?*\x00-\x1f]"#).unwrap();
    let mut stem = invalid.replace_all(title, "_").to_string();

    stem = stem
        .trim_matches(|c: char| c == '.' || c == ' ')
        .to_string();

    if stem.len() > 200 {
        let mut cut = 200;
        while !stem.is_char_boundary(cut) {
            cut -= 1;
        }
        stem.truncate(cut);
        stem = stem.trim_end().to_string();
    }

    if stem.is_empty() {
        stem = "video".to_string();
    }

    if extension.is_empty() {
        stem
    } else {
        format!("{}.{}", stem, extension.trim_start_matches('.'))
    }
}

//! MIME type to file extension mapping

/// Get the file extension for a MIME type.
///
/// The provider reports full MIME strings like `video/mp4; codecs="avc1"`,
/// so matching is on the `type/subtype` prefix.
pub fn ext_from_mime(mime_type: &str) -> &'static str {
    let base = mime_type.split(';').next().unwrap_or("").trim();

    match base {
        "video/mp4" => "mp4",
        "video/webm" => "webm",
        "video/3gpp" => "3gp",
        "audio/mp4" => "m4a",
        "audio/webm" => "webm",
        "audio/mpeg" => "mp3",
        _ if base.starts_with("video/") => "mp4",
        _ if base.starts_with("audio/") => "m4a",
        _ => "bin",
    }
}

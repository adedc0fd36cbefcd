//! MIME utilities shared across modules

/// Best-effort content type for a filename, falling back to octet-stream.
#[must_use]
pub fn mime_for_filename(filename: &str) -> String {
    mime_guess::from_path(filename)
        .first_or_octet_stream()
        .essence_str()
        .to_string()
}

//! Application configuration.
//!
//! Centralized configuration for the WTOP frontend. In development these
//! are hardcoded; in production they could be loaded from the environment
//! at build time.

/// Backend API base URL.
///
/// The conversion server exposing `/api/convert` and `/api/download`.
pub const BACKEND_URL: &str = "http://localhost:5000";

/// Accepted upload types: MIME type to file extensions.
///
/// Enforced client-side only; the backend is free to reject more.
pub const ACCEPTED_TYPES: &[(&str, &[&str])] = &[
    ("application/msword", &[".doc"]),
    (
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        &[".docx"],
    ),
    ("application/vnd.oasis.opendocument.text", &[".odt"]),
];

/// Value for the file input's `accept` attribute.
pub const ACCEPT_ATTR: &str = ".doc,.docx,.odt";

/// Whether a MIME type is in the allow-list.
///
/// Used during drag-over, where only MIME types are visible.
pub fn is_accepted_mime(mime: &str) -> bool {
    ACCEPTED_TYPES.iter().any(|(accepted, _)| *accepted == mime)
}

/// Whether a file is accepted, by MIME type or extension.
///
/// Some browsers report an empty MIME type for dropped files, so the
/// extension serves as a fallback.
pub fn is_accepted_file(name: &str, mime: &str) -> bool {
    if is_accepted_mime(mime) {
        return true;
    }
    let name = name.to_ascii_lowercase();
    ACCEPTED_TYPES
        .iter()
        .flat_map(|(_, exts)| exts.iter())
        .any(|ext| name.ends_with(ext))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_allow_listed_mime_types() {
        assert!(is_accepted_mime("application/msword"));
        assert!(is_accepted_mime(
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
        ));
        assert!(is_accepted_mime("application/vnd.oasis.opendocument.text"));
    }

    #[test]
    fn rejects_other_mime_types() {
        assert!(!is_accepted_mime("text/plain"));
        assert!(!is_accepted_mime("application/pdf"));
        assert!(!is_accepted_mime(""));
    }

    #[test]
    fn accepts_by_extension_when_mime_is_missing() {
        assert!(is_accepted_file("contract.docx", ""));
        assert!(is_accepted_file("notes.odt", ""));
        assert!(is_accepted_file("OLD.DOC", ""));
    }

    #[test]
    fn rejects_unsupported_files() {
        assert!(!is_accepted_file("readme.txt", "text/plain"));
        assert!(!is_accepted_file("report.pdf", "application/pdf"));
        assert!(!is_accepted_file("archive.docx.zip", "application/zip"));
    }
}

/// Coarse file classification for evidence previews, derived from the
/// submission's MIME string.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FileKind {
    Image,
    Pdf,
    Doc,
    Other,
}

impl FileKind {
    pub fn icon(self) -> &'static str {
        match self {
            FileKind::Image => "image",
            FileKind::Pdf => "picture_as_pdf",
            FileKind::Doc => "description",
            FileKind::Other => "insert_drive_file",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            FileKind::Image => "image-file",
            FileKind::Pdf => "pdf-file",
            FileKind::Doc => "doc-file",
            FileKind::Other => "other-file",
        }
    }

    pub fn is_image(self) -> bool {
        self == FileKind::Image
    }
}

pub fn classify(mime: &str) -> FileKind {
    let lower = mime.to_lowercase();
    if lower.starts_with("image/") {
        FileKind::Image
    } else if lower.contains("pdf") {
        FileKind::Pdf
    } else if lower.contains("word") || lower.contains("officedocument") {
        FileKind::Doc
    } else {
        FileKind::Other
    }
}

/// Uppercase extension badge for non-image previews. A name without an
/// extension shows as itself; a blank segment falls back to "FILE".
pub fn file_ext(name: &str) -> String {
    match name.rsplit('.').next() {
        Some(ext) if !ext.is_empty() => ext.to_uppercase(),
        _ => "FILE".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_by_mime_substring() {
        assert_eq!(classify("image/png"), FileKind::Image);
        assert_eq!(classify("application/pdf"), FileKind::Pdf);
        assert_eq!(
            classify("application/vnd.openxmlformats-officedocument.wordprocessingml.document"),
            FileKind::Doc
        );
        assert_eq!(classify("application/msword"), FileKind::Doc);
        assert_eq!(classify("text/plain"), FileKind::Other);
    }

    #[test]
    fn image_detection_requires_mime_prefix() {
        assert!(classify("image/jpeg").is_image());
        assert!(!classify("application/imagemagick").is_image());
    }

    #[test]
    fn extension_badge_uppercases_last_segment() {
        assert_eq!(file_ext("report.pdf"), "PDF");
        assert_eq!(file_ext("archive.tar.gz"), "GZ");
        assert_eq!(file_ext("README"), "README");
        assert_eq!(file_ext("trailing."), "FILE");
        assert_eq!(file_ext(""), "FILE");
    }
}

//! Services the projector consumes but does not own.
//!
//! Each seam is a trait with a default implementation; hosts swap in their
//! own through [`Collaborators`].

use std::rc::Rc;

use tess_core::enums::TextShowAsType;
use tess_core::field::FieldDescriptor;
use tess_core::value::CellValue;

use crate::format::DefaultFormatter;

/// Field-aware conversion of raw values to display strings.
pub trait CellFormatter {
    /// Whole cell value; lists are rendered as one string.
    fn cell_value_to_string(&self, field: &FieldDescriptor, value: Option<&CellValue>) -> String;

    /// A single item of a (possibly multi-valued) cell.
    fn item_to_string(&self, field: &FieldDescriptor, item: &CellValue) -> String;
}

/// Receives clicks on url, email and phone text.
pub trait ReferenceOpener {
    fn open(&self, show_as: TextShowAsType, text: &str);
}

/// Maps an attachment to the thumbnail shown in its cell.
pub trait CoverResolver {
    fn cover_url(&self, mimetype: &str, url: &str) -> String;
}

/// The set of collaborators a grid projection runs with.
#[derive(Clone)]
pub struct Collaborators {
    pub formatter: Rc<dyn CellFormatter>,
    pub opener: Rc<dyn ReferenceOpener>,
    pub covers: Rc<dyn CoverResolver>,
}

impl Default for Collaborators {
    fn default() -> Self {
        Self {
            formatter: Rc::new(DefaultFormatter),
            opener: Rc::new(LoggingOpener),
            covers: Rc::new(FileCoverResolver::default()),
        }
    }
}

impl std::fmt::Debug for Collaborators {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Collaborators").finish_non_exhaustive()
    }
}

impl Collaborators {
    #[must_use]
    pub fn with_formatter(mut self, formatter: Rc<dyn CellFormatter>) -> Self {
        self.formatter = formatter;
        self
    }

    #[must_use]
    pub fn with_opener(mut self, opener: Rc<dyn ReferenceOpener>) -> Self {
        self.opener = opener;
        self
    }

    #[must_use]
    pub fn with_covers(mut self, covers: Rc<dyn CoverResolver>) -> Self {
        self.covers = covers;
        self
    }
}

/// Navigation target for clicked reference text.
///
/// Urls without a scheme get `https://`; emails and phone numbers get
/// `mailto:` and `tel:` unless already prefixed.
#[must_use]
pub fn reference_target(show_as: TextShowAsType, text: &str) -> String {
    let text = text.trim();
    match show_as {
        TextShowAsType::Url if text.contains("://") => text.to_string(),
        TextShowAsType::Url => format!("https://{text}"),
        TextShowAsType::Email if text.starts_with("mailto:") => text.to_string(),
        TextShowAsType::Email => format!("mailto:{text}"),
        TextShowAsType::Phone if text.starts_with("tel:") => text.to_string(),
        TextShowAsType::Phone => {
            let digits: String = text
                .chars()
                .filter(|c| c.is_ascii_digit() || *c == '+')
                .collect();
            format!("tel:{digits}")
        }
    }
}

/// Opener for hosts without navigation: records the target in the log.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingOpener;

impl ReferenceOpener for LoggingOpener {
    fn open(&self, show_as: TextShowAsType, text: &str) {
        let target = reference_target(show_as, text);
        tracing::info!(%show_as, %target, "open reference");
    }
}

/// Icon base path used by [`FileCoverResolver::default`].
pub const DEFAULT_FILE_ICON_BASE: &str = "/images/file";

/// Images cover themselves; other files get a category icon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileCoverResolver {
    icon_base: String,
}

impl Default for FileCoverResolver {
    fn default() -> Self {
        Self::new(DEFAULT_FILE_ICON_BASE)
    }
}

impl FileCoverResolver {
    #[must_use]
    pub fn new(icon_base: impl Into<String>) -> Self {
        Self {
            icon_base: icon_base.into().trim_end_matches('/').to_string(),
        }
    }

    /// Icon category for a non-image mimetype.
    #[must_use]
    pub fn category(mimetype: &str) -> &'static str {
        let mimetype = mimetype.to_ascii_lowercase();
        let (top, sub) = mimetype.split_once('/').unwrap_or((mimetype.as_str(), ""));
        match (top, sub) {
            ("video", _) => "video",
            ("audio", _) => "audio",
            (_, "pdf") => "pdf",
            (_, s) if s.contains("spreadsheet") || s.contains("excel") || s == "csv" => "excel",
            (_, s) if s.contains("wordprocessing") || s.contains("msword") => "word",
            (_, s) if s.contains("presentation") || s.contains("powerpoint") => "ppt",
            (_, s) if s.contains("zip") || s.contains("compressed") || s.contains("tar") => "zip",
            ("text", _) => "text",
            _ => "file",
        }
    }
}

impl CoverResolver for FileCoverResolver {
    fn cover_url(&self, mimetype: &str, url: &str) -> String {
        if url.is_empty() {
            return String::new();
        }
        if mimetype.to_ascii_lowercase().starts_with("image/") {
            return url.to_string();
        }
        format!("{}/{}.svg", self.icon_base, Self::category(mimetype))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(TextShowAsType::Url, "example.com", "https://example.com")]
    #[case(TextShowAsType::Url, "http://example.com/a", "http://example.com/a")]
    #[case(TextShowAsType::Email, "a@b.io", "mailto:a@b.io")]
    #[case(TextShowAsType::Email, "mailto:a@b.io", "mailto:a@b.io")]
    #[case(TextShowAsType::Phone, "+1 (555) 010-2030", "tel:+15550102030")]
    fn reference_targets(
        #[case] show_as: TextShowAsType,
        #[case] text: &str,
        #[case] expected: &str,
    ) {
        assert_eq!(reference_target(show_as, text), expected);
    }

    #[rstest]
    #[case("application/pdf", "pdf")]
    #[case(
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
        "excel"
    )]
    #[case("application/msword", "word")]
    #[case(
        "application/vnd.openxmlformats-officedocument.presentationml.presentation",
        "ppt"
    )]
    #[case("video/mp4", "video")]
    #[case("audio/mpeg", "audio")]
    #[case("application/zip", "zip")]
    #[case("text/plain", "text")]
    #[case("application/octet-stream", "file")]
    fn file_categories(#[case] mimetype: &str, #[case] expected: &str) {
        assert_eq!(FileCoverResolver::category(mimetype), expected);
    }

    #[test]
    fn images_cover_themselves() {
        let resolver = FileCoverResolver::default();
        assert_eq!(
            resolver.cover_url("image/png", "https://cdn/a.png"),
            "https://cdn/a.png"
        );
        assert_eq!(
            resolver.cover_url("application/pdf", "https://cdn/a.pdf"),
            "/images/file/pdf.svg"
        );
        assert_eq!(resolver.cover_url("image/png", ""), "");
    }

    #[test]
    fn custom_icon_base_drops_trailing_slash() {
        let resolver = FileCoverResolver::new("/static/icons/");
        assert_eq!(
            resolver.cover_url("text/csv", "https://cdn/a.csv"),
            "/static/icons/excel.svg"
        );
    }
}

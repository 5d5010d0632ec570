//! The two fixed documents served from server-side storage.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A fixed document backed by a file in the content data directory.
///
/// # Examples
///
/// ```
/// use devfolio_core::FixedDocument;
///
/// let doc = FixedDocument::from_file_name("contact.md").unwrap();
/// assert_eq!(doc, FixedDocument::Contact);
/// assert_eq!(doc.endpoint(), "/api/contact");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FixedDocument {
    /// Biography document, opened on startup.
    About,
    /// Contact details.
    Contact,
}

impl FixedDocument {
    /// Both documents, in explorer order.
    pub const ALL: [Self; 2] = [Self::About, Self::Contact];

    /// File name used as the tab identifier and on disk.
    #[must_use]
    pub const fn file_name(self) -> &'static str {
        match self {
            Self::About => "alqavi.md",
            Self::Contact => "contact.md",
        }
    }

    /// Last path segment of the content endpoint.
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::About => "alqavi",
            Self::Contact => "contact",
        }
    }

    /// Path of the content endpoint serving this document.
    #[must_use]
    pub const fn endpoint(self) -> &'static str {
        match self {
            Self::About => "/api/alqavi",
            Self::Contact => "/api/contact",
        }
    }

    /// Matches an identifier against the document file names.
    #[must_use]
    pub fn from_file_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|doc| doc.file_name() == name)
    }
}

impl fmt::Display for FixedDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_name())
    }
}

impl FromStr for FixedDocument {
    type Err = crate::Error;

    /// Accepts the slug, the file name, or `about`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "about" | "alqavi" | "alqavi.md" => Ok(Self::About),
            "contact" | "contact.md" => Ok(Self::Contact),
            _ => Err(crate::Error::InvalidArgument(format!(
                "unknown document: '{s}' (expected: about or contact)"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_name_round_trip() {
        for doc in FixedDocument::ALL {
            assert_eq!(FixedDocument::from_file_name(doc.file_name()), Some(doc));
        }
        assert_eq!(FixedDocument::from_file_name("README.md"), None);
    }

    #[test]
    fn test_endpoint_matches_slug() {
        for doc in FixedDocument::ALL {
            assert_eq!(doc.endpoint(), format!("/api/{}", doc.slug()));
        }
    }

    #[test]
    fn test_parse_aliases() {
        assert_eq!("about".parse::<FixedDocument>().unwrap(), FixedDocument::About);
        assert_eq!("ALQAVI".parse::<FixedDocument>().unwrap(), FixedDocument::About);
        assert_eq!(
            "contact.md".parse::<FixedDocument>().unwrap(),
            FixedDocument::Contact
        );
        assert!("resume".parse::<FixedDocument>().is_err());
    }
}

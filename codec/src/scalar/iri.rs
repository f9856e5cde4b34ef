//! IRIs as they appear in documents.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use url::Url;

use crate::error::ScalarError;

/// An absolute IRI.
///
/// Parsing validates the text with [`url::Url`], but the original text is what
/// gets written back, so `https://example.com` does not come back as
/// `https://example.com/`. Equality and hashing use the text.
#[derive(Debug, Clone)]
pub struct Iri {
    text: String,
    url: Url,
}

impl Iri {
    /// Parses an absolute IRI.
    ///
    /// # Errors
    ///
    /// Returns [`ScalarError::InvalidIri`] if the text is not an absolute URL
    /// (relative references have no base to resolve against here).
    pub fn parse(text: impl Into<String>) -> Result<Self, ScalarError> {
        let text = text.into();
        match Url::parse(&text) {
            Ok(url) => Ok(Self { text, url }),
            Err(source) => Err(ScalarError::InvalidIri { text, source }),
        }
    }

    /// Returns the IRI exactly as it was written.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Returns the parsed URL.
    #[must_use]
    pub fn as_url(&self) -> &Url {
        &self.url
    }

    /// Consumes the IRI, returning its text.
    #[must_use]
    pub fn into_string(self) -> String {
        self.text
    }
}

impl PartialEq for Iri {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
    }
}

impl Eq for Iri {}

impl Hash for Iri {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.text.hash(state);
    }
}

impl fmt::Display for Iri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl FromStr for Iri {
    type Err = ScalarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Iri::parse(s)
    }
}

impl From<Url> for Iri {
    fn from(url: Url) -> Self {
        Self {
            text: url.as_str().to_owned(),
            url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_original_text() {
        let iri = Iri::parse("https://example.com").expect("valid");
        assert_eq!(iri.as_str(), "https://example.com");
        assert_eq!(iri.as_url().as_str(), "https://example.com/");
    }

    #[test]
    fn rejects_relative_references() {
        let err = Iri::parse("/users/alice").expect_err("relative");
        assert!(matches!(err, ScalarError::InvalidIri { .. }));
    }

    #[test]
    fn accepts_non_http_schemes() {
        assert!(Iri::parse("urn:uuid:6e8bc430-9c3a-11d9-9669-0800200c9a66").is_ok());
        assert!(Iri::parse("acct:alice@example.com").is_ok());
    }

    #[test]
    fn equality_is_textual() {
        let a = Iri::parse("https://example.com").expect("valid");
        let b = Iri::parse("https://example.com/").expect("valid");
        assert_ne!(a, b);
        assert_eq!(a, "https://example.com".parse::<Iri>().expect("valid"));
    }
}

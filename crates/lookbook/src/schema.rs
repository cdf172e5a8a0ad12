use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque, percent-encoded path naming one look.
///
/// The second-to-last path segment is the designer, the last one is the file
/// whose stem holds the look description and a trailing look number.
/// Two identifiers are the same look only if their raw strings are equal.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Identifier(String);

impl Identifier {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Percent-decoded form. Bytes that do not decode to UTF-8 are replaced
    /// rather than rejected.
    pub fn decoded(&self) -> Cow<'_, str> {
        match urlencoding::decode(&self.0) {
            Ok(text) => text,
            Err(_) => {
                let bytes = urlencoding::decode_binary(self.0.as_bytes());
                Cow::Owned(String::from_utf8_lossy(&bytes).into_owned())
            }
        }
    }

    pub fn parts(&self) -> IdentifierParts {
        let decoded = self.decoded();
        let mut segments = decoded.rsplit('/');
        let filename = segments.next().unwrap_or_default().to_string();
        let designer = segments.next().map(str::to_string);
        IdentifierParts { designer, filename }
    }

    /// Designer segment, if the path has one.
    pub fn designer(&self) -> Option<String> {
        self.parts().designer
    }
}

impl From<&str> for Identifier {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for Identifier {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IdentifierParts {
    pub designer: Option<String>,
    pub filename: String,
}

/// A card as shown in the feed. Derived on demand, never stored.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DisplayItem {
    pub identifier: Identifier,
    /// Uppercased designer name.
    pub designer: String,
    pub subtitle: String,
}

//! Registry keys for node handlers.

use std::fmt;
use std::str::FromStr;

use crate::error::ConvertError;

/// Spelling of [`TagKey::Text`] in string form.
pub const TEXT_TAG: &str = "#text";

/// Key a handler is registered under.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TagKey {
    /// Text nodes.
    Text,
    /// Elements, by lowercase local name.
    Element(String),
}

impl TagKey {
    /// Validates and normalizes an element name.
    pub fn element(name: &str) -> Result<Self, ConvertError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ConvertError::InvalidTag {
                tag: name.to_string(),
                reason: "tag name is empty",
            });
        }
        if !name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | ':'))
        {
            return Err(ConvertError::InvalidTag {
                tag: name.to_string(),
                reason: "tag names may only contain ASCII letters, digits, '-', '_' and ':'",
            });
        }
        Ok(TagKey::Element(name.to_ascii_lowercase()))
    }

    /// Key for an element name coming out of the parser, which is already
    /// lowercase.
    pub(crate) fn parsed(name: &str) -> Self {
        TagKey::Element(name.to_string())
    }

    pub fn as_str(&self) -> &str {
        match self {
            TagKey::Text => TEXT_TAG,
            TagKey::Element(name) => name,
        }
    }
}

impl FromStr for TagKey {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim() == TEXT_TAG {
            Ok(TagKey::Text)
        } else {
            TagKey::element(s)
        }
    }
}

impl fmt::Display for TagKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

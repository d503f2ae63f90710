use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// A Brazilian postal code (CEP), always held as its 8 digits.
///
/// This is the key of the address store and the argument of every postal lookup, so it
/// is validated once at the edge and trusted afterwards.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PostalCode(String);

/// Why a string was rejected as a postal code.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("`{input}` is not a valid postal code, expected 8 digits (e.g. 01001000 or 01001-000)")]
pub struct PostalCodeError {
    input: String,
}

impl PostalCode {
    /// Parses `NNNNNNNN` or `NNNNN-NNN`, ignoring surrounding whitespace.
    pub fn parse(input: impl AsRef<str>) -> Result<Self, PostalCodeError> {
        let raw = input.as_ref();
        let trimmed = raw.trim();
        let digits: String = match trimmed.split_once('-') {
            Some((head, tail)) if head.len() == 5 && tail.len() == 3 => format!("{head}{tail}"),
            Some(_) => return Err(Self::invalid(raw)),
            None => trimmed.to_string(),
        };

        if digits.len() == 8 && digits.bytes().all(|b| b.is_ascii_digit()) {
            Ok(Self(digits))
        } else {
            Err(Self::invalid(raw))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn invalid(input: &str) -> PostalCodeError {
        PostalCodeError {
            input: input.to_string(),
        }
    }
}

impl AsRef<str> for PostalCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for PostalCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for PostalCode {
    type Error = PostalCodeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<PostalCode> for String {
    fn from(code: PostalCode) -> Self {
        code.0
    }
}

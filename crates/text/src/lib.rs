use std::{
    fmt,
    ops::Deref,
};

use thiserror::Error;

/// An owned UTF-8 value of at most [Text::MAX_LEN] bytes.
///
/// The length limit is checked once, at construction. Every other code
/// path can rely on it without re-measuring.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Text(String);

/// The value offered to [Text::new] was over the limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("value is {len} bytes, the limit is {max}", max = Text::MAX_LEN)]
pub struct TooLong {
    /// Byte length of the rejected value.
    pub len: usize,
}

impl Text {
    /// Maximum length of a value, in bytes.
    pub const MAX_LEN: usize = 100;

    /// Take ownership of `value`, rejecting it if its byte length exceeds
    /// [Text::MAX_LEN]. The limit is measured in bytes, not chars.
    pub fn new(value: impl Into<String>) -> Result<Self, TooLong> {
        let value = value.into();
        if value.len() > Self::MAX_LEN {
            return Err(TooLong { len: value.len() });
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Deref for Text {
    type Target = str;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<str> for Text {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Text> for String {
    fn from(value: Text) -> Self {
        value.0
    }
}

impl TryFrom<&str> for Text {
    type Error = TooLong;
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<String> for Text {
    type Error = TooLong;
    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl PartialEq<str> for Text {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Text {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl PartialEq<Text> for str {
    fn eq(&self, other: &Text) -> bool {
        self == other.0
    }
}

impl PartialEq<Text> for &str {
    fn eq(&self, other: &Text) -> bool {
        *self == other.0
    }
}

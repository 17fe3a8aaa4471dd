//! Length-bounded text fields.

use serde::{Deserialize, Serialize};

use crate::value_object::ValueObject;

/// Text holding at most `MAX` characters.
///
/// Longer input is silently truncated at construction. Length is counted in
/// `char`s, so a multi-byte character is never split.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct BoundedText<const MAX: usize>(String);

impl<const MAX: usize> BoundedText<MAX> {
    pub const MAX_CHARS: usize = MAX;

    pub fn new(value: impl AsRef<str>) -> Self {
        let value = value.as_ref();
        let kept = match value.char_indices().nth(MAX) {
            Some((cut, _)) => &value[..cut],
            None => value,
        };
        Self(kept.to_owned())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// ASCII case-insensitive comparison, the way `strcasecmp` compares.
    pub fn eq_ignore_case(&self, other: &str) -> bool {
        self.0.eq_ignore_ascii_case(other)
    }
}

impl<const MAX: usize> ValueObject for BoundedText<MAX> {}

impl<const MAX: usize> From<String> for BoundedText<MAX> {
    fn from(value: String) -> Self {
        if value.chars().count() <= MAX {
            Self(value)
        } else {
            Self::new(value)
        }
    }
}

impl<const MAX: usize> From<&str> for BoundedText<MAX> {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl<const MAX: usize> From<BoundedText<MAX>> for String {
    fn from(value: BoundedText<MAX>) -> Self {
        value.0
    }
}

impl<const MAX: usize> AsRef<str> for BoundedText<MAX> {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl<const MAX: usize> core::fmt::Display for BoundedText<MAX> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        // Forward to `str` so width/alignment flags apply.
        core::fmt::Display::fmt(self.0.as_str(), f)
    }
}

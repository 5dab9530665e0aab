//! Method lookup key for type tag/suffix pairs.

use std::fmt;

/// Suffix of the text-conversion behavior used by `stringify`.
pub const STR: &str = "__str__";

/// Suffix of the representation behavior used by `represent`.
pub const REPR: &str = "__repr__";

/// Key for looking up behaviors in a [`Registry`](super::Registry).
///
/// Displays as the composite `"<TypeTag><suffix>"` string the registry is
/// keyed by, e.g. `Point__str__`.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct MethodKey {
    /// The object type tag (e.g., "Point", "Dog")
    pub type_tag: String,
    /// The behavior suffix (e.g., "__str__", "__area")
    pub suffix: String,
}

impl MethodKey {
    /// Create a new method key.
    #[inline]
    pub fn new(type_tag: impl Into<String>, suffix: impl Into<String>) -> Self {
        Self {
            type_tag: type_tag.into(),
            suffix: suffix.into(),
        }
    }

    /// The composite registry key.
    pub fn composite(&self) -> String {
        composite(&self.type_tag, &self.suffix)
    }
}

/// Join a type tag and suffix into a registry key.
#[inline]
pub(crate) fn composite(type_tag: &str, suffix: &str) -> String {
    let mut key = String::with_capacity(type_tag.len() + suffix.len());
    key.push_str(type_tag);
    key.push_str(suffix);
    key
}

impl fmt::Display for MethodKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.type_tag, self.suffix)
    }
}

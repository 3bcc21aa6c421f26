//! Structured key/value fields
//!
//! A [`Field`] stringifies its value once, at construction. A [`FieldSet`]
//! keeps fields in insertion order and permits duplicate keys.

use crate::printf::{Arg, ToArg};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One pre-rendered key/value pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Field {
    key: String,
    value: String,
}

impl Field {
    /// Create a field from any value with a built-in argument representation.
    ///
    /// ```
    /// use redlog::Field;
    ///
    /// let field = Field::new("port", 8080);
    /// assert_eq!(field.value(), "8080");
    /// ```
    pub fn new<K: Into<String>, V: ToArg>(key: K, value: V) -> Self {
        Self::from_arg(key, value.to_arg())
    }

    /// Create a field from an already-built argument.
    pub fn from_arg<K: Into<String>>(key: K, value: Arg<'_>) -> Self {
        Self {
            key: key.into(),
            value: value.stringify().into_owned(),
        }
    }

    /// Create a field from a value rendered through `Display`.
    pub fn display<K: Into<String>, V: fmt::Display + ?Sized>(key: K, value: &V) -> Self {
        Self {
            key: key.into(),
            value: Arg::Display(&DisplayRef(value)).stringify().into_owned(),
        }
    }

    #[inline]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[inline]
    pub fn value(&self) -> &str {
        &self.value
    }
}

// Lets unsized `Display` values go through `Arg::Display`.
struct DisplayRef<'a, V: ?Sized>(&'a V);

impl<V: fmt::Display + ?Sized> fmt::Display for DisplayRef<'_, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.key, self.value)
    }
}

/// Ordered collection of fields.
///
/// `add`/`merge` mutate in place for building; `with_field`/`with_fields`
/// return a modified copy and leave the receiver alone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldSet {
    fields: Vec<Field>,
}

impl FieldSet {
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            fields: Vec::with_capacity(capacity),
        }
    }

    /// Append a field. Duplicate keys are kept.
    pub fn add(&mut self, field: Field) -> &mut Self {
        self.fields.push(field);
        self
    }

    /// Append every field of `other`, in order.
    pub fn merge(&mut self, other: &FieldSet) -> &mut Self {
        self.fields.extend_from_slice(&other.fields);
        self
    }

    /// A copy with `field` appended.
    #[must_use]
    pub fn with_field(&self, field: Field) -> FieldSet {
        let mut copy = FieldSet::with_capacity(self.len() + 1);
        copy.merge(self).add(field);
        copy
    }

    /// A copy with all of `other` appended.
    #[must_use]
    pub fn with_fields(&self, other: &FieldSet) -> FieldSet {
        let mut copy = FieldSet::with_capacity(self.len() + other.len());
        copy.merge(self).merge(other);
        copy
    }

    #[inline]
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Field> {
        self.fields.iter()
    }

    /// First value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.iter().find(|f| f.key == key).map(Field::value)
    }
}

impl fmt::Display for FieldSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, field) in self.fields.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", field)?;
        }
        Ok(())
    }
}

impl From<Vec<Field>> for FieldSet {
    fn from(fields: Vec<Field>) -> Self {
        Self { fields }
    }
}

impl<const N: usize> From<[Field; N]> for FieldSet {
    fn from(fields: [Field; N]) -> Self {
        Self {
            fields: fields.into(),
        }
    }
}

impl From<Field> for FieldSet {
    fn from(field: Field) -> Self {
        Self {
            fields: vec![field],
        }
    }
}

impl FromIterator<Field> for FieldSet {
    fn from_iter<I: IntoIterator<Item = Field>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}

impl Extend<Field> for FieldSet {
    fn extend<I: IntoIterator<Item = Field>>(&mut self, iter: I) {
        self.fields.extend(iter);
    }
}

impl IntoIterator for FieldSet {
    type Item = Field;
    type IntoIter = std::vec::IntoIter<Field>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}

impl<'a> IntoIterator for &'a FieldSet {
    type Item = &'a Field;
    type IntoIter = std::slice::Iter<'a, Field>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}

//! Tagged partial-update value
//!
//! Update payloads must distinguish "field not supplied" from "field
//! explicitly cleared". A plain `Option<T>` conflates the two, so clearable
//! fields use [`Patch<T>`]:
//!
//! - key missing from the JSON body -> [`Patch::Absent`] (leave untouched)
//! - key present with `null` -> [`Patch::Null`] (clear the field)
//! - key present with a value -> [`Patch::Value`]
//!
//! Fields of this type must be declared with `#[serde(default)]` so a
//! missing key falls back to `Absent`.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Three-state partial-update field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Patch<T> {
    /// Field was not supplied; do not touch the stored value
    Absent,
    /// Field was supplied as an explicit null; clear the stored value
    Null,
    /// Field was supplied with a value
    Value(T),
}

impl<T> Patch<T> {
    pub fn is_absent(&self) -> bool {
        matches!(self, Patch::Absent)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Patch::Null)
    }

    pub fn is_value(&self) -> bool {
        matches!(self, Patch::Value(_))
    }

    /// Borrow the inner value if one was supplied
    pub fn as_value(&self) -> Option<&T> {
        match self {
            Patch::Value(v) => Some(v),
            _ => None,
        }
    }

    /// Map the supplied value, preserving Absent/Null
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Patch<U> {
        match self {
            Patch::Absent => Patch::Absent,
            Patch::Null => Patch::Null,
            Patch::Value(v) => Patch::Value(f(v)),
        }
    }

    /// Collapse into the double-option form: outer = supplied at all,
    /// inner = set vs cleared
    pub fn into_option(self) -> Option<Option<T>> {
        match self {
            Patch::Absent => None,
            Patch::Null => Some(None),
            Patch::Value(v) => Some(Some(v)),
        }
    }
}

impl<T> Default for Patch<T> {
    fn default() -> Self {
        Patch::Absent
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Patch<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // A present key deserializes here; a missing key never reaches this
        // point and is handled by #[serde(default)] on the field.
        Option::<T>::deserialize(deserializer).map(|opt| match opt {
            Some(v) => Patch::Value(v),
            None => Patch::Null,
        })
    }
}

impl<T: Serialize> Serialize for Patch<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            // Absent is normally skipped via skip_serializing_if; if it is
            // serialized anyway it degrades to null.
            Patch::Absent | Patch::Null => serializer.serialize_none(),
            Patch::Value(v) => v.serialize(serializer),
        }
    }
}

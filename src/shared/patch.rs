use serde::{Deserialize, Serialize};

//
// ──────────────────────────────────────────────────────────
// PatchField (explicit PATCH semantics)
// ──────────────────────────────────────────────────────────
// Meaning:
// - Unset: field not provided => keep stored value
// - Null: explicitly null => keep stored value
// - Value(v): replace with v, even when v is "" or 0
//
// Serde behavior (with #[serde(default)] on the field):
// - omitted field => Unset
// - null => Null
// - value => Value(value)
//

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PatchField<T> {
    #[serde(skip)]
    Unset,
    Null,
    Value(T),
}

impl<T> Default for PatchField<T> {
    fn default() -> Self {
        PatchField::Unset
    }
}

impl<T> PatchField<T> {
    pub fn is_unset(&self) -> bool {
        matches!(self, PatchField::Unset)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, PatchField::Null)
    }

    pub fn is_value(&self) -> bool {
        matches!(self, PatchField::Value(_))
    }

    pub fn as_value(&self) -> Option<&T> {
        if let PatchField::Value(v) = self {
            Some(v)
        } else {
            None
        }
    }

    /// Takes the incoming value if present, otherwise keeps `current`.
    pub fn merge(self, current: T) -> T {
        match self {
            PatchField::Value(v) => v,
            PatchField::Unset | PatchField::Null => current,
        }
    }

    /// Same as [`PatchField::merge`] for nullable stored fields.
    pub fn merge_optional(self, current: Option<T>) -> Option<T> {
        match self {
            PatchField::Value(v) => Some(v),
            PatchField::Unset | PatchField::Null => current,
        }
    }
}

/// Field-wise overlay of a partial update onto a stored record.
///
/// Implementations only touch the fields listed in their patch type; the
/// identifier and relationship references always come from `self`.
pub trait Merge {
    type Patch: Send + 'static;

    fn merge(self, patch: Self::Patch) -> Self;
}

/// Patch type for records whose partial update is a plain re-save.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoPatchableFields {}

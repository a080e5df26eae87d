// src/shared/casing.rs
//! Key renaming between storage rows (snake_case) and view models (camelCase).
//!
//! Each resource declares the keys it renames in a [`FieldMap`]. Keys not in
//! the table pass through untouched, so single-word columns need no entry.

use serde::{de::DeserializeOwned, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CasingError {
    #[error("failed to serialize {0}: {1}")]
    Serialize(&'static str, String),

    #[error("failed to reshape {0}: {1}")]
    Shape(&'static str, String),
}

/// Storage-key to view-key pairs for one resource.
#[derive(Debug, Clone, Copy)]
pub struct FieldMap {
    name: &'static str,
    pairs: &'static [(&'static str, &'static str)],
}

impl FieldMap {
    pub const fn new(name: &'static str, pairs: &'static [(&'static str, &'static str)]) -> Self {
        Self { name, pairs }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn pairs(&self) -> &'static [(&'static str, &'static str)] {
        self.pairs
    }

    /// Storage keys → view keys, recursively.
    pub fn to_view(&self, value: Value) -> Value {
        self.rename(value, |key| {
            self.pairs
                .iter()
                .find(|(storage, _)| *storage == key)
                .map(|(_, view)| *view)
        })
    }

    /// View keys → storage keys, recursively.
    pub fn to_storage(&self, value: Value) -> Value {
        self.rename(value, |key| {
            self.pairs
                .iter()
                .find(|(_, view)| *view == key)
                .map(|(storage, _)| *storage)
        })
    }

    fn rename<F>(&self, value: Value, lookup: F) -> Value
    where
        F: Fn(&str) -> Option<&'static str> + Copy,
    {
        match value {
            Value::Object(fields) => {
                let mut renamed = Map::with_capacity(fields.len());
                for (key, inner) in fields {
                    let key = lookup(&key).map(str::to_string).unwrap_or(key);
                    renamed.insert(key, self.rename(inner, lookup));
                }
                Value::Object(renamed)
            }
            Value::Array(items) => {
                Value::Array(items.into_iter().map(|v| self.rename(v, lookup)).collect())
            }
            leaf => leaf,
        }
    }
}

pub const PROFILE_FIELDS: FieldMap = FieldMap::new(
    "profile",
    &[
        ("github_url", "githubUrl"),
        ("linkedin_url", "linkedinUrl"),
        ("profile_photo", "profilePhoto"),
    ],
);

pub const ABOUT_FIELDS: FieldMap = FieldMap::new(
    "about",
    &[
        ("technical_programs", "technicalPrograms"),
        ("technical_competencies", "technicalCompetencies"),
        ("soft_skills", "softSkills"),
    ],
);

pub const PROJECT_FIELDS: FieldMap = FieldMap::new(
    "projects",
    &[
        ("long_description", "longDescription"),
        ("image_gallery", "imageGallery"),
        ("github_link", "githubLink"),
    ],
);

pub const EXPERIENCE_FIELDS: FieldMap = FieldMap::new("experience", &[]);

pub const CONTACT_FIELDS: FieldMap = FieldMap::new("contact", &[]);

/// Storage row → view model.
pub fn decode_row<R, V>(row: &R, map: &FieldMap) -> Result<V, CasingError>
where
    R: Serialize,
    V: DeserializeOwned,
{
    let raw = serde_json::to_value(row)
        .map_err(|e| CasingError::Serialize(map.name, e.to_string()))?;
    serde_json::from_value(map.to_view(raw)).map_err(|e| CasingError::Shape(map.name, e.to_string()))
}

/// View model → storage row.
pub fn encode_row<V, R>(view: &V, map: &FieldMap) -> Result<R, CasingError>
where
    V: Serialize,
    R: DeserializeOwned,
{
    let raw = serde_json::to_value(view)
        .map_err(|e| CasingError::Serialize(map.name, e.to_string()))?;
    serde_json::from_value(map.to_storage(raw))
        .map_err(|e| CasingError::Shape(map.name, e.to_string()))
}

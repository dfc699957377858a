//! Genre value type.

use serde::{Deserialize, Serialize};

/// A genre reference.
///
/// Genres are plain values: the store never requires a follow-up fetch to
/// complete one, although pages differ in whether they carry the id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Genre {
    /// Store genre id, when the page carried one.
    pub id: Option<String>,
    /// Display name.
    pub name: String,
}

impl Genre {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
        }
    }

    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }
}

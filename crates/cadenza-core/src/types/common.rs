//! Common value types shared across page records.

use serde::{Deserialize, Serialize};

/// One breadcrumb segment of a page's `Path` node.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PathSegment {
    /// Display name of the segment.
    pub name: String,
    /// Store URL the segment links to.
    pub url: String,
}

impl PathSegment {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}

/// An image reference with optional pixel dimensions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ImageRef {
    pub url: String,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

impl ImageRef {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            width: None,
            height: None,
        }
    }

    #[must_use]
    pub const fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }
}

/// Pagination counters for an artist page's selected-albums grid.
///
/// `start` and `end` are only present when the page carried an
/// `Albums: <start>-<end> of <total>` label; `total` falls back to the
/// number of album tiles actually found, so `total` is always at least the
/// selected-albums count.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AlbumCounters {
    pub start: Option<u32>,
    pub end: Option<u32>,
    pub total: u32,
}

impl AlbumCounters {
    /// Counters for a page with no pagination label and `total` tiles.
    pub const fn from_total(total: u32) -> Self {
        Self {
            start: None,
            end: None,
            total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_ref_builder() {
        let img = ImageRef::new("http://images.example/cover.jpg").with_size(200, 200);
        assert_eq!(img.width, Some(200));
        assert_eq!(img.height, Some(200));
    }

    #[test]
    fn test_counters_from_total() {
        let c = AlbumCounters::from_total(6);
        assert_eq!(c.total, 6);
        assert!(c.start.is_none());
        assert!(c.end.is_none());
    }
}

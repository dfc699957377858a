//! Artist page records.

use serde::{Deserialize, Serialize};

use super::{AlbumCounters, AlbumSummary, Genre, PathSegment};

/// A partial artist reference (for tiles and track lists).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ArtistRef {
    /// Store artist id (if the tile carried one).
    pub id: Option<String>,
    /// Artist name.
    pub name: String,
}

impl ArtistRef {
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

/// Everything one artist-view fetch yields.
///
/// `name` is `None` only when the page has no usable breadcrumb; the
/// session treats that as fatal, everything else as a missing value.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ArtistPage {
    /// Display name, conventionally the last breadcrumb segment.
    pub name: Option<String>,
    /// Primary genre, conventionally the first breadcrumb segment plus the
    /// root's `genreId`.
    pub genre: Option<Genre>,
    /// Outbound website link, when the page shows one.
    pub website: Option<String>,
    /// Breadcrumb path in document order.
    pub path: Vec<PathSegment>,
    /// The best-selling subset shown on the page, in grid order.
    pub selected_albums: Vec<AlbumSummary>,
    /// Pagination counters for the grid.
    pub counters: AlbumCounters,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_artist_ref_builder() {
        let artist = ArtistRef::new("Wilco").with_id("3244");
        assert_eq!(artist.name, "Wilco");
        assert_eq!(artist.id.as_deref(), Some("3244"));
    }

    #[test]
    fn test_counters_cover_selected_albums() {
        let mut page = ArtistPage::default();
        page.selected_albums.push(AlbumSummary::new("1", "A"));
        page.counters = AlbumCounters::from_total(1);
        assert!(page.counters.total as usize >= page.selected_albums.len());
    }
}

//! Album page and album summary records.

use serde::{Deserialize, Serialize};

use super::{ArtistRef, Genre, ImageRef, PathSegment, TrackRecord};

/// A partially-populated album, as carried by a grid tile, a discography
/// listing, or a search result.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AlbumSummary {
    /// Store album id.
    pub id: String,
    /// Album title.
    pub title: String,
    /// Tile thumbnail. Only ever supplied here; album pages carry the full
    /// cover instead.
    pub thumbnail: Option<ImageRef>,
    /// Partial artist, when the tile carried one.
    pub artist: Option<ArtistRef>,
    /// Partial genre, when the tile carried one.
    pub genre: Option<Genre>,
}

impl AlbumSummary {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            thumbnail: None,
            artist: None,
            genre: None,
        }
    }

    #[must_use]
    pub fn with_thumbnail(mut self, thumbnail: ImageRef) -> Self {
        self.thumbnail = Some(thumbnail);
        self
    }

    #[must_use]
    pub fn with_artist(mut self, artist: ArtistRef) -> Self {
        self.artist = Some(artist);
        self
    }

    #[must_use]
    pub fn with_genre(mut self, genre: Genre) -> Self {
        self.genre = Some(genre);
        self
    }
}

/// Everything one album-view fetch yields.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AlbumPage {
    /// Display title, from the authoritative `ViewAlbum` node or the
    /// breadcrumb. `None` means the page is unusable.
    pub title: Option<String>,
    /// The page's artist id, from the root attributes.
    pub artist_id: Option<String>,
    /// Artist display name, resolved against `artist_id`.
    pub artist_name: Option<String>,
    /// Primary genre.
    pub genre: Option<Genre>,
    /// Full-size cover image.
    pub cover: Option<ImageRef>,
    /// Breadcrumb path in document order.
    pub path: Vec<PathSegment>,
    /// Free-standing text lines shown beside the cover.
    pub info: Vec<String>,
    /// Trailing notes block; empty when the page has none.
    pub notes: Vec<String>,
    /// Track list in document order.
    pub tracks: Vec<TrackRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_builders() {
        let summary = AlbumSummary::new("6993", "A Ghost Is Born")
            .with_thumbnail(ImageRef::new("http://images.example/t.jpg"))
            .with_artist(ArtistRef::new("Wilco").with_id("3244"))
            .with_genre(Genre::new("Alternative").with_id("20"));
        assert_eq!(summary.title, "A Ghost Is Born");
        assert!(summary.thumbnail.is_some());
        assert_eq!(summary.artist.as_ref().map(|a| a.name.as_str()), Some("Wilco"));
    }

    #[test]
    fn test_album_page_default_is_empty() {
        let page = AlbumPage::default();
        assert!(page.title.is_none());
        assert!(page.notes.is_empty());
        assert!(page.tracks.is_empty());
    }
}

//! Lazy domain entities.
//!
//! Each entity wraps a store identifier plus the session, and populates
//! whole field groups on first access of any field in the group (see
//! [`group`]). Cross-references between entities are cheap handle clones;
//! no entity is interned or deduplicated by id — fetching the same artist
//! twice yields two independent objects with independent caches.

mod album;
mod artist;
mod group;
mod song;

pub use album::Album;
pub use artist::Artist;
pub use song::Song;

/// Ordered results of one basic search: partially-populated albums.
#[derive(Clone)]
pub struct SearchResults {
    /// Album summaries in result order, each prefilled with whatever the
    /// tile carried (title, thumbnail, partial artist and genre).
    pub albums: Vec<Album>,
}

impl std::fmt::Debug for SearchResults {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchResults")
            .field("len", &self.albums.len())
            .finish()
    }
}

impl SearchResults {
    pub fn len(&self) -> usize {
        self.albums.len()
    }

    pub fn is_empty(&self) -> bool {
        self.albums.is_empty()
    }
}

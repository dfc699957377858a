//! Search-results extractor.

use cadenza_core::{AlbumSummary, ArtistRef, Genre};

use crate::document::{Document, Node};
use crate::extract::{album_tiles, tile_summary};

/// Genre tiles print their text with this label in front of the name.
const GENRE_LABEL: &str = "Genre: ";

/// Extract the album summaries of a basic-search results page.
///
/// The grid is the same two-level tile walk the artist page uses; each
/// tile additionally carries a partial artist and genre when the store
/// knows them.
pub fn extract_search_page(doc: &Document) -> Vec<AlbumSummary> {
    album_tiles(doc.root())
        .into_iter()
        .filter_map(|tile| {
            let summary = tile_summary(tile)?;
            Some(enrich_tile(tile, summary))
        })
        .collect()
}

fn enrich_tile(tile: Node<'_>, mut summary: AlbumSummary) -> AlbumSummary {
    if let Some(view) = tile.descendants_named("ViewArtist").next() {
        let name = view.text();
        if !name.is_empty() {
            let mut artist = ArtistRef::new(name);
            if let Some(id) = view.attr("id") {
                artist = artist.with_id(id);
            }
            summary = summary.with_artist(artist);
        }
    }

    if let Some(view) = tile.descendants_named("ViewGenre").next() {
        let text = view.text();
        let name = text.strip_prefix(GENRE_LABEL).unwrap_or(text);
        if !name.is_empty() {
            let mut genre = Genre::new(name);
            if let Some(id) = view.attr("id") {
                genre = genre.with_id(id);
            }
            summary = summary.with_genre(genre);
        }
    }

    summary
}

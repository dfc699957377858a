//! Entity extractors: one per store page type.
//!
//! Each extractor walks a fixed structural path through a parsed document
//! and emits a plain record. Extractors perform no I/O and treat an absent
//! structural node as a missing value, never as a failure; the session
//! decides what is fatal.

mod album;
mod artist;
mod path;
mod plist;
mod search;

pub use album::extract_album_page;
pub use artist::{extract_artist_page, extract_discography};
pub use path::{extract_path, page_title, primary_genre};
pub use search::extract_search_page;

use cadenza_core::{AlbumSummary, ImageRef};
use tracing::debug;

use crate::document::Node;

/// Album tiles of the first grid below `scope`: `MatrixView` rows
/// (`HBoxView`) of columns (`VBoxView`), one tile per column, grid order.
///
/// Both the artist page's selected-albums grid and the search-results page
/// use this same two-level shape.
pub(crate) fn album_tiles(scope: Node<'_>) -> Vec<Node<'_>> {
    let Some(matrix) = scope.descendants_named("MatrixView").next() else {
        return Vec::new();
    };
    matrix
        .children_named("HBoxView")
        .flat_map(|row| row.children_named("VBoxView"))
        .collect()
}

/// The album summary a tile carries, or `None` for a tile without a usable
/// `ViewAlbum` (spacer columns exist in real pages).
pub(crate) fn tile_summary(tile: Node<'_>) -> Option<AlbumSummary> {
    let view = tile.descendants_named("ViewAlbum").next()?;
    let id = view.attr("id")?;

    let title = view
        .attr("draggingName")
        .map(str::to_owned)
        .or_else(|| tile_title_text(tile))?;

    let mut summary = AlbumSummary::new(id, title);
    if let Some(picture) = tile.descendants_named("PictureView").next() {
        summary = summary.with_thumbnail(picture_ref(picture));
    }
    Some(summary)
}

/// Fallback tile title: the first non-empty `TextView` below the tile.
fn tile_title_text(tile: Node<'_>) -> Option<String> {
    let title = tile
        .descendants_named("TextView")
        .map(|n| n.text())
        .find(|t| !t.is_empty())?;
    Some(title.to_owned())
}

/// An image reference from a `PictureView` node.
pub(crate) fn picture_ref(picture: Node<'_>) -> ImageRef {
    let url = picture.attr("url").unwrap_or_else(|| {
        debug!("PictureView without url attribute");
        ""
    });
    let mut image = ImageRef::new(url);
    image.width = picture.attr("width").and_then(|w| w.parse().ok());
    image.height = picture.attr("height").and_then(|h| h.parse().ok());
    image
}

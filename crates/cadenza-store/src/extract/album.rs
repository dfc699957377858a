//! Album page extractor.

use cadenza_core::{AlbumPage, Genre, TrackRecord};
use tracing::debug;

use crate::document::{Document, Node};
use crate::extract::plist::{plist_dicts, PlistDict};
use crate::extract::{extract_path, page_title, picture_ref, primary_genre};

/// Extract everything one album-view fetch yields.
///
/// Several `ViewAlbum` nodes can appear in one document (related-albums
/// strips, upsells); the authoritative one is the first that carries both
/// a `draggingName` and a `PictureView` — that node names the page and
/// holds the cover. The artist is the `ViewArtist` whose id matches the
/// root's `artistId`.
pub fn extract_album_page(doc: &Document) -> AlbumPage {
    let root = doc.root();
    let path = extract_path(root);

    let mut page = AlbumPage {
        title: page_title(&path).map(str::to_owned),
        artist_id: root.attr("artistId").map(str::to_owned),
        genre: primary_genre(&path, root),
        path,
        ..AlbumPage::default()
    };

    if let Some(view) = authoritative_album_view(root) {
        if let Some(title) = view.attr("draggingName") {
            page.title = Some(title.to_owned());
        }
        page.cover = view.descendants_named("PictureView").next().map(picture_ref);
    } else {
        debug!("album page has no structurally complete ViewAlbum");
    }

    page.artist_name = page
        .artist_id
        .as_deref()
        .and_then(|artist_id| matching_artist_name(root, artist_id));

    let main = root
        .descendants_named("ScrollView")
        .next()
        .and_then(|scroll| scroll.first_child("VBoxView"));

    if let Some(main) = main {
        page.info = text_lines(main.children_named("TextView"));
        // The trailing box is the notes block; pages without notes simply
        // do not have it.
        page.notes = main
            .last_child("VBoxView")
            .map(|notes| text_lines(notes.descendants_named("TextView")))
            .unwrap_or_default();
    }

    page.tracks = extract_tracks(root);
    page
}

/// First `ViewAlbum` that is structurally complete: display title
/// attribute plus a picture child.
fn authoritative_album_view(root: Node<'_>) -> Option<Node<'_>> {
    root.descendants_named("ViewAlbum").find(|view| {
        view.attr("draggingName").is_some()
            && view.descendants_named("PictureView").next().is_some()
    })
}

/// Display name of the `ViewArtist` matching the page's artist id.
fn matching_artist_name(root: Node<'_>, artist_id: &str) -> Option<String> {
    let view = root
        .descendants_named("ViewArtist")
        .find(|view| view.attr("id") == Some(artist_id))?;
    let name = view.text();
    if name.is_empty() {
        None
    } else {
        Some(name.to_owned())
    }
}

fn text_lines<'doc>(views: impl Iterator<Item = Node<'doc>>) -> Vec<String> {
    views
        .map(|view| view.text())
        .filter(|text| !text.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Track records from the `TrackList` property-list block, document order.
fn extract_tracks(root: Node<'_>) -> Vec<TrackRecord> {
    let Some(track_list) = root.descendants_named("TrackList").next() else {
        return Vec::new();
    };

    plist_dicts(track_list)
        .into_iter()
        .map(PlistDict::parse)
        .filter_map(|dict| track_from_dict(&dict))
        .collect()
}

fn track_from_dict(dict: &PlistDict<'_>) -> Option<TrackRecord> {
    let id = dict.string("songId")?;
    let title = dict.string("itemName")?;

    let mut track = TrackRecord::new(id, title);
    track.artist_name = dict.string("artistName");
    track.album_title = dict.string("playlistName");
    track.genre = dict.string("genre").map(|name| {
        let genre = Genre::new(name);
        match dict.string("genreId") {
            Some(genre_id) => genre.with_id(genre_id),
            None => genre,
        }
    });
    track.year = dict.integer("year");
    track.track_number = dict.integer("trackNumber");
    track.track_count = dict.integer("trackCount");
    track.disc_number = dict.integer("discNumber");
    track.disc_count = dict.integer("discCount");
    track.explicit = dict.boolean("explicit");
    track.comments = dict.string("comments");
    track.copyright = dict.string("copyright");
    track.preview_url = dict.string("previewURL");
    track.release_date = dict.string("releaseDate").map(|date| strip_alphabetic(&date));
    track.price_display = dict.string("priceDisplay");
    track.vendor_id = dict.string("vendorId");
    Some(track)
}

/// The store ships release dates as timestamps; this client has always
/// stripped the embedded alphabetic characters rather than parsing them.
fn strip_alphabetic(date: &str) -> String {
    date.chars().filter(|c| !c.is_ascii_alphabetic()).collect()
}

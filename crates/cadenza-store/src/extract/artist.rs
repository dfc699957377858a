//! Artist page extractors: basic info and discography.

use cadenza_core::{AlbumCounters, AlbumSummary, ArtistPage};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::document::{Document, Node};
use crate::extract::plist::{plist_dicts, PlistDict};
use crate::extract::{album_tiles, extract_path, page_title, primary_genre, tile_summary};

/// `Albums: <start>-<end> of <total>` as printed on artist pages.
#[allow(clippy::expect_used)] // the pattern is a compile-time constant
static COUNTERS_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Albums:\s*(\d+)-(\d+) of (\d+)").expect("counters pattern"));

/// Extract everything one artist-view fetch yields.
///
/// The walk is `ScrollView` → first `VBoxView`; within that container live
/// the optional website link, the selected-albums grid, and the pagination
/// label. A page without the container yields an empty record (the session
/// then fails on the missing name if the breadcrumb is gone too).
pub fn extract_artist_page(doc: &Document) -> ArtistPage {
    let root = doc.root();
    let path = extract_path(root);

    let mut page = ArtistPage {
        name: page_title(&path).map(str::to_owned),
        genre: primary_genre(&path, root),
        path,
        ..ArtistPage::default()
    };

    let Some(container) = root
        .descendants_named("ScrollView")
        .next()
        .and_then(|scroll| scroll.first_child("VBoxView"))
    else {
        debug!("artist page has no ScrollView/VBoxView container");
        return page;
    };

    page.website = container
        .descendants_named("OpenURL")
        .next()
        .and_then(|open| {
            open.attr("url").map(str::to_owned).or_else(|| {
                let text = open.text();
                if text.is_empty() {
                    None
                } else {
                    Some(text.to_owned())
                }
            })
        });

    page.selected_albums = album_tiles(container)
        .into_iter()
        .filter_map(tile_summary)
        .collect();

    page.counters = extract_counters(container, page.selected_albums.len());
    page
}

/// Pagination counters from the first text node matching the `Albums:`
/// label; falls back to the number of tiles actually found.
#[allow(clippy::cast_possible_truncation)]
fn extract_counters(container: Node<'_>, tile_count: usize) -> AlbumCounters {
    for text_view in container.descendants_named("TextView") {
        if let Some(captures) = COUNTERS_PATTERN.captures(text_view.text()) {
            let group = |i| captures.get(i).and_then(|m| m.as_str().parse().ok());
            if let (Some(start), Some(end), Some(total)) = (group(1), group(2), group(3)) {
                return AlbumCounters {
                    start: Some(start),
                    end: Some(end),
                    total,
                };
            }
        }
    }
    AlbumCounters::from_total(tile_count as u32)
}

/// Extract an artist's full discography from a browse document: a
/// property-list array with one dict per album, document order preserved.
pub fn extract_discography(doc: &Document) -> Vec<AlbumSummary> {
    plist_dicts(doc.root())
        .into_iter()
        .map(PlistDict::parse)
        .filter_map(|dict| {
            let id = dict.string("playlistId")?;
            let title = dict.string("playlistName")?;
            Some(AlbumSummary::new(id, title))
        })
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::document::Document;

    const ARTIST_PAGE: &str = r#"
        <Document artistId="3244" genreId="20">
            <Path>
                <PathElement displayName="Alternative">http://store.example/genre?id=20</PathElement>
                <PathElement displayName="Wilco">http://store.example/artist?id=3244</PathElement>
            </Path>
            <ScrollView>
                <VBoxView>
                    <HBoxView>
                        <TextView styleSet="bold">Albums: 1-2 of 9</TextView>
                        <OpenURL url="http://wilcoworld.net/"/>
                    </HBoxView>
                    <MatrixView>
                        <HBoxView>
                            <VBoxView>
                                <ViewAlbum id="6993" draggingName="A Ghost Is Born"/>
                                <PictureView url="http://i.example/6993.jpg" width="100" height="100"/>
                            </VBoxView>
                            <VBoxView>
                                <ViewAlbum id="5532" draggingName="Yankee Hotel Foxtrot"/>
                                <PictureView url="http://i.example/5532.jpg" width="100" height="100"/>
                            </VBoxView>
                        </HBoxView>
                    </MatrixView>
                </VBoxView>
            </ScrollView>
        </Document>"#;

    #[test]
    fn test_basic_info_group_fields() {
        let doc = Document::parse(ARTIST_PAGE).unwrap();
        let page = extract_artist_page(&doc);

        assert_eq!(page.name.as_deref(), Some("Wilco"));
        assert_eq!(page.website.as_deref(), Some("http://wilcoworld.net/"));
        assert_eq!(page.genre.as_ref().unwrap().name, "Alternative");
        assert_eq!(page.genre.as_ref().unwrap().id.as_deref(), Some("20"));
        assert_eq!(page.path.len(), 2);
    }

    #[test]
    fn test_selected_albums_in_grid_order() {
        let doc = Document::parse(ARTIST_PAGE).unwrap();
        let page = extract_artist_page(&doc);

        let titles: Vec<_> = page
            .selected_albums
            .iter()
            .map(|a| a.title.as_str())
            .collect();
        assert_eq!(titles, ["A Ghost Is Born", "Yankee Hotel Foxtrot"]);
        assert!(page.selected_albums[0].thumbnail.is_some());
    }

    #[test]
    fn test_counters_from_label() {
        let doc = Document::parse(ARTIST_PAGE).unwrap();
        let page = extract_artist_page(&doc);

        assert_eq!(page.counters.start, Some(1));
        assert_eq!(page.counters.end, Some(2));
        assert_eq!(page.counters.total, 9);
    }

    #[test]
    fn test_counters_parse_all_three_groups() {
        let relabeled = ARTIST_PAGE.replace("Albums: 1-2 of 9", "Albums: 1-6 of 42");
        let doc = Document::parse(&relabeled).unwrap();
        let counters = extract_artist_page(&doc).counters;

        assert_eq!(counters.start, Some(1));
        assert_eq!(counters.end, Some(6));
        assert_eq!(counters.total, 42);
    }

    #[test]
    fn test_counters_default_to_tile_count() {
        let stripped = ARTIST_PAGE.replace("Albums: 1-2 of 9", "New Releases");
        let doc = Document::parse(&stripped).unwrap();
        let page = extract_artist_page(&doc);

        assert_eq!(page.counters.start, None);
        assert_eq!(page.counters.end, None);
        assert_eq!(page.counters.total, 2);
        assert!(page.counters.total as usize >= page.selected_albums.len());
    }

    #[test]
    fn test_missing_container_keeps_breadcrumb_fields() {
        let doc = Document::parse(
            r#"<Document><Path>
                 <PathElement displayName="Rock">u1</PathElement>
                 <PathElement displayName="Sparta">u2</PathElement>
               </Path></Document>"#,
        )
        .unwrap();
        let page = extract_artist_page(&doc);

        assert_eq!(page.name.as_deref(), Some("Sparta"));
        assert!(page.website.is_none());
        assert!(page.selected_albums.is_empty());
        assert_eq!(page.counters.total, 0);
    }

    #[test]
    fn test_discography_order_preserved() {
        let doc = Document::parse(
            r#"<Document><plist><array>
                 <dict><key>playlistId</key><string>100</string>
                       <key>playlistName</key><string>A.M.</string></dict>
                 <dict><key>playlistId</key><string>101</string>
                       <key>playlistName</key><string>Being There</string></dict>
                 <dict><key>playlistName</key><string>No Id, Dropped</string></dict>
               </array></plist></Document>"#,
        )
        .unwrap();

        let albums = extract_discography(&doc);
        let titles: Vec<_> = albums.iter().map(|a| a.title.as_str()).collect();
        assert_eq!(titles, ["A.M.", "Being There"]);
        assert_eq!(albums[0].id, "100");
    }
}

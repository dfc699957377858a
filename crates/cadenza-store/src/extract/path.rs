//! Breadcrumb (`Path`) extraction.

use cadenza_core::{Genre, PathSegment};

use crate::document::Node;

/// Ordered breadcrumb segments of the page's `Path` node. Each
/// `PathElement` carries its display name as an attribute and its URL as
/// text content.
pub fn extract_path(root: Node<'_>) -> Vec<PathSegment> {
    let Some(path) = root.first_child("Path") else {
        return Vec::new();
    };
    path.children_named("PathElement")
        .filter_map(|element| {
            let name = element.attr("displayName")?;
            Some(PathSegment::new(name, element.text()))
        })
        .collect()
}

/// The page subject's display name: by convention, the last breadcrumb
/// segment.
pub fn page_title(path: &[PathSegment]) -> Option<&str> {
    path.last().map(|segment| segment.name.as_str())
}

/// The page's primary genre: by convention, the first breadcrumb segment,
/// with the id taken from the root's `genreId` attribute when present.
pub fn primary_genre(path: &[PathSegment], root: Node<'_>) -> Option<Genre> {
    let first = path.first()?;
    let genre = Genre::new(first.name.clone());
    Some(match root.attr("genreId") {
        Some(id) => genre.with_id(id),
        None => genre,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::document::Document;

    const PAGE: &str = r#"
        <Document genreId="20">
            <Path>
                <PathElement displayName="Alternative">http://store.example/genre?id=20</PathElement>
                <PathElement displayName="Wilco">http://store.example/artist?id=3244</PathElement>
                <PathElement displayName="A Ghost Is Born">http://store.example/album?id=6993</PathElement>
            </Path>
        </Document>"#;

    #[test]
    fn test_segments_in_document_order() {
        let doc = Document::parse(PAGE).unwrap();
        let path = extract_path(doc.root());
        let names: Vec<_> = path.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["Alternative", "Wilco", "A Ghost Is Born"]);
        assert_eq!(path[0].url, "http://store.example/genre?id=20");
    }

    #[test]
    fn test_title_and_genre_conventions() {
        let doc = Document::parse(PAGE).unwrap();
        let path = extract_path(doc.root());
        assert_eq!(page_title(&path), Some("A Ghost Is Born"));

        let genre = primary_genre(&path, doc.root()).unwrap();
        assert_eq!(genre.name, "Alternative");
        assert_eq!(genre.id.as_deref(), Some("20"));
    }

    #[test]
    fn test_missing_path_yields_empty() {
        let doc = Document::parse("<Document/>").unwrap();
        let path = extract_path(doc.root());
        assert!(path.is_empty());
        assert!(page_title(&path).is_none());
        assert!(primary_genre(&path, doc.root()).is_none());
    }

    #[test]
    fn test_segment_without_display_name_is_dropped() {
        let doc = Document::parse(
            r#"<Document><Path>
                 <PathElement>http://store.example/broken</PathElement>
                 <PathElement displayName="Kept">http://store.example/kept</PathElement>
               </Path></Document>"#,
        )
        .unwrap();
        let path = extract_path(doc.root());
        assert_eq!(path.len(), 1);
        assert_eq!(path[0].name, "Kept");
    }
}

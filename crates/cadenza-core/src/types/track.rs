//! Track record extracted from an album's track list.

use serde::{Deserialize, Serialize};

use super::Genre;

/// One track, as carried by the property-list block of an album page.
///
/// Tracks are never fetched on their own: every field comes from a single
/// extraction pass over the parent album's `TrackList`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TrackRecord {
    /// Store song id.
    pub id: String,
    /// Track title.
    pub title: String,
    /// Artist display name, as printed in the track list.
    pub artist_name: Option<String>,
    /// Album title, as printed in the track list.
    pub album_title: Option<String>,
    /// Genre, with id when the list carried one.
    pub genre: Option<Genre>,
    /// Release year.
    pub year: Option<i32>,
    pub track_number: Option<u32>,
    pub track_count: Option<u32>,
    pub disc_number: Option<u32>,
    pub disc_count: Option<u32>,
    /// Explicit-lyrics flag.
    pub explicit: bool,
    pub comments: Option<String>,
    pub copyright: Option<String>,
    /// Preview clip URL.
    pub preview_url: Option<String>,
    /// Release date with any alphabetic characters stripped, exactly as the
    /// store has always shipped it.
    pub release_date: Option<String>,
    /// Display price string, currency included.
    pub price_display: Option<String>,
    pub vendor_id: Option<String>,
}

impl TrackRecord {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            artist_name: None,
            album_title: None,
            genre: None,
            year: None,
            track_number: None,
            track_count: None,
            disc_number: None,
            disc_count: None,
            explicit: false,
            comments: None,
            copyright: None,
            preview_url: None,
            release_date: None,
            price_display: None,
            vendor_id: None,
        }
    }

    /// Position display like "3/12", when both numbers are known.
    pub fn position_display(&self) -> Option<String> {
        match (self.track_number, self.track_count) {
            (Some(n), Some(total)) => Some(format!("{n}/{total}")),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_track_creation() {
        let track = TrackRecord::new("8234", "Test Song");
        assert_eq!(track.id, "8234");
        assert_eq!(track.title, "Test Song");
        assert!(!track.explicit);
    }

    #[test]
    fn test_position_display() {
        let mut track = TrackRecord::new("1", "T");
        assert!(track.position_display().is_none());
        track.track_number = Some(3);
        track.track_count = Some(12);
        assert_eq!(track.position_display().as_deref(), Some("3/12"));
    }
}

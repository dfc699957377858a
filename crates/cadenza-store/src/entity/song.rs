//! The Song entity.

use cadenza_core::{Genre, TrackRecord};

use crate::entity::{Album, Artist};

/// One track of an album.
///
/// Songs are never fetched on their own: every field comes from the
/// parent album's track list in a single extraction pass, so the record
/// is complete from construction. The album and artist handles are
/// non-owning references to independently constructed entities.
#[derive(Clone)]
pub struct Song {
    record: TrackRecord,
    album: Album,
    artist: Option<Artist>,
}

impl Song {
    pub(crate) fn from_record(record: TrackRecord, album: Album, artist: Option<Artist>) -> Self {
        Self {
            record,
            album,
            artist,
        }
    }

    /// Store song id.
    pub fn id(&self) -> &str {
        &self.record.id
    }

    /// Track title.
    pub fn title(&self) -> &str {
        &self.record.title
    }

    /// The album this track belongs to, prefilled with its title.
    pub fn album(&self) -> &Album {
        &self.album
    }

    /// The track's artist, when the page identified one.
    pub fn artist(&self) -> Option<&Artist> {
        self.artist.as_ref()
    }

    /// The track's genre, when the track list carried one.
    pub fn genre(&self) -> Option<&Genre> {
        self.record.genre.as_ref()
    }

    pub fn year(&self) -> Option<i32> {
        self.record.year
    }

    pub fn track_number(&self) -> Option<u32> {
        self.record.track_number
    }

    pub fn track_count(&self) -> Option<u32> {
        self.record.track_count
    }

    pub fn disc_number(&self) -> Option<u32> {
        self.record.disc_number
    }

    pub fn disc_count(&self) -> Option<u32> {
        self.record.disc_count
    }

    /// Explicit-lyrics flag.
    pub fn explicit(&self) -> bool {
        self.record.explicit
    }

    pub fn comments(&self) -> Option<&str> {
        self.record.comments.as_deref()
    }

    pub fn copyright(&self) -> Option<&str> {
        self.record.copyright.as_deref()
    }

    /// Preview clip URL.
    pub fn preview_url(&self) -> Option<&str> {
        self.record.preview_url.as_deref()
    }

    /// Release date, alphabetics stripped (see [`TrackRecord`]).
    pub fn release_date(&self) -> Option<&str> {
        self.record.release_date.as_deref()
    }

    /// Display price, currency included.
    pub fn price_display(&self) -> Option<&str> {
        self.record.price_display.as_deref()
    }

    pub fn vendor_id(&self) -> Option<&str> {
        self.record.vendor_id.as_deref()
    }

    /// The full underlying track record.
    pub fn record(&self) -> &TrackRecord {
        &self.record
    }
}

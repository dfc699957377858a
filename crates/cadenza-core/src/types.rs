//! Plain records and value types shared across the client.
//!
//! These are the outputs of the entity extractors and the payloads cached
//! by the lazy field groups. They carry no behavior beyond small helpers
//! and perform no I/O.

mod album;
mod artist;
mod common;
mod genre;
mod track;

pub use album::{AlbumPage, AlbumSummary};
pub use artist::{ArtistPage, ArtistRef};
pub use common::{AlbumCounters, ImageRef, PathSegment};
pub use genre::Genre;
pub use track::TrackRecord;

//! The lazy Album entity.

use std::sync::Arc;

use cadenza_core::{AlbumSummary, ExtractionError, Genre, ImageRef, PathSegment, Result};

use crate::entity::group::FieldGroup;
use crate::entity::{Artist, Song};
use crate::extract::extract_album_page;
use crate::session::StoreSession;

/// An album in the store catalog.
///
/// One field group populated by the album-view fetch: title, artist,
/// genre, cover, breadcrumb, info lines, notes, and the track list. The
/// thumbnail is different — it only ever arrives as prefill from a parent
/// document (an artist's grid or a search tile) and is never fetched.
#[derive(Clone)]
pub struct Album {
    inner: Arc<AlbumInner>,
}

impl std::fmt::Debug for Album {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Album")
            .field("id", &self.inner.id)
            .finish_non_exhaustive()
    }
}

struct AlbumInner {
    session: StoreSession,
    id: String,
    prefill: Prefill,
    info: FieldGroup<AlbumInfo>,
}

#[derive(Default)]
struct Prefill {
    title: Option<String>,
    thumbnail: Option<ImageRef>,
    artist: Option<Artist>,
    genre: Option<Genre>,
}

/// The field group one album-view fetch populates.
struct AlbumInfo {
    title: String,
    artist: Option<Artist>,
    genre: Option<Genre>,
    cover: Option<ImageRef>,
    path: Vec<PathSegment>,
    info: Vec<String>,
    notes: Vec<String>,
    tracks: Vec<Song>,
}

impl Album {
    pub(crate) fn new(session: StoreSession, id: String) -> Self {
        Self::build(session, id, Prefill::default())
    }

    /// An album prefilled from a grid tile, discography entry, or search
    /// result. Prefilled fields never trigger a fetch.
    pub(crate) fn from_summary(session: StoreSession, summary: AlbumSummary) -> Self {
        let artist = summary.artist.and_then(|artist_ref| {
            // A name-only reference cannot back a fetchable entity.
            let id = artist_ref.id?;
            Some(Artist::with_name(session.clone(), id, artist_ref.name))
        });
        let prefill = Prefill {
            title: Some(summary.title),
            thumbnail: summary.thumbnail,
            artist,
            genre: summary.genre,
        };
        Self::build(session, summary.id, prefill)
    }

    fn build(session: StoreSession, id: String, prefill: Prefill) -> Self {
        Self {
            inner: Arc::new(AlbumInner {
                session,
                id,
                prefill,
                info: FieldGroup::new(),
            }),
        }
    }

    /// Store album id. Always available, never fetched.
    pub fn id(&self) -> &str {
        &self.inner.id
    }

    /// Grid-tile thumbnail, if a parent document supplied one. Never
    /// triggers a fetch; album pages carry the full cover instead.
    pub fn thumbnail(&self) -> Option<ImageRef> {
        self.inner.prefill.thumbnail.clone()
    }

    /// Album title.
    pub async fn title(&self) -> Result<String> {
        if let Some(title) = &self.inner.prefill.title {
            return Ok(title.clone());
        }
        Ok(self.info_group().await?.title.clone())
    }

    /// The album's artist, possibly only partially populated.
    pub async fn artist(&self) -> Result<Option<Artist>> {
        if let Some(artist) = &self.inner.prefill.artist {
            return Ok(Some(artist.clone()));
        }
        Ok(self.info_group().await?.artist.clone())
    }

    /// Primary genre.
    pub async fn genre(&self) -> Result<Option<Genre>> {
        if let Some(genre) = &self.inner.prefill.genre {
            return Ok(Some(genre.clone()));
        }
        Ok(self.info_group().await?.genre.clone())
    }

    /// Full-size cover image.
    pub async fn cover(&self) -> Result<Option<ImageRef>> {
        Ok(self.info_group().await?.cover.clone())
    }

    /// Breadcrumb path in document order.
    pub async fn path(&self) -> Result<Vec<PathSegment>> {
        Ok(self.info_group().await?.path.clone())
    }

    /// Free-standing info lines from the album page.
    pub async fn info(&self) -> Result<Vec<String>> {
        Ok(self.info_group().await?.info.clone())
    }

    /// Notes block; empty when the page has none.
    pub async fn notes(&self) -> Result<Vec<String>> {
        Ok(self.info_group().await?.notes.clone())
    }

    /// The track list, in document order.
    pub async fn tracks(&self) -> Result<Vec<Song>> {
        Ok(self.info_group().await?.tracks.clone())
    }

    async fn info_group(&self) -> Result<Arc<AlbumInfo>> {
        let inner = &self.inner;
        inner
            .info
            .get_or_fetch(|| async {
                let url = inner.session.config().view_album_url(&inner.id)?;
                let doc = inner.session.fetch_document(&url).await?;
                let page = extract_album_page(&doc);

                let title = page
                    .title
                    .ok_or_else(|| ExtractionError::missing("ViewAlbum/@draggingName"))?;

                let artist = page.artist_id.map(|artist_id| match page.artist_name {
                    Some(name) => Artist::with_name(inner.session.clone(), artist_id, name),
                    None => Artist::new(inner.session.clone(), artist_id),
                });

                // Songs reference a freshly constructed, prefilled album:
                // handing them this Album would tie a reference cycle
                // through the cache.
                let song_album = Self::build(
                    inner.session.clone(),
                    inner.id.clone(),
                    Prefill {
                        title: Some(title.clone()),
                        thumbnail: None,
                        artist: artist.clone(),
                        genre: page.genre.clone(),
                    },
                );
                let tracks = page
                    .tracks
                    .into_iter()
                    .map(|record| {
                        Song::from_record(record, song_album.clone(), artist.clone())
                    })
                    .collect();

                Ok(AlbumInfo {
                    title,
                    artist,
                    genre: page.genre,
                    cover: page.cover,
                    path: page.path,
                    info: page.info,
                    notes: page.notes,
                    tracks,
                })
            })
            .await
    }
}

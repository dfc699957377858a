//! The lazy Artist entity.

use std::sync::Arc;

use cadenza_core::{AlbumCounters, ExtractionError, Genre, PathSegment, Result};

use crate::entity::group::FieldGroup;
use crate::entity::Album;
use crate::extract::{extract_artist_page, extract_discography};
use crate::session::StoreSession;

/// An artist in the store catalog.
///
/// Two field groups: the basic info group (name, genre, website,
/// breadcrumb, selected albums, counters — one artist-view fetch) and the
/// discography (a separate browse fetch). Accessing any field of an
/// unfetched group performs that group's fetch exactly once.
#[derive(Clone)]
pub struct Artist {
    inner: Arc<ArtistInner>,
}

impl std::fmt::Debug for Artist {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Artist")
            .field("id", &self.inner.id)
            .finish_non_exhaustive()
    }
}

struct ArtistInner {
    session: StoreSession,
    id: String,
    prefill_name: Option<String>,
    info: FieldGroup<ArtistInfo>,
    discography: FieldGroup<Vec<Album>>,
}

/// The basic-info field group, populated by one artist-view fetch.
struct ArtistInfo {
    name: String,
    genre: Option<Genre>,
    website: Option<String>,
    path: Vec<PathSegment>,
    selected_albums: Vec<Album>,
    counters: AlbumCounters,
}

impl Artist {
    pub(crate) fn new(session: StoreSession, id: String) -> Self {
        Self::build(session, id, None)
    }

    /// An artist whose name is already known from a parent document; the
    /// name accessor then never triggers a fetch.
    pub(crate) fn with_name(session: StoreSession, id: String, name: String) -> Self {
        Self::build(session, id, Some(name))
    }

    fn build(session: StoreSession, id: String, prefill_name: Option<String>) -> Self {
        Self {
            inner: Arc::new(ArtistInner {
                session,
                id,
                prefill_name,
                info: FieldGroup::new(),
                discography: FieldGroup::new(),
            }),
        }
    }

    /// Store artist id. Always available, never fetched.
    pub fn id(&self) -> &str {
        &self.inner.id
    }

    /// Artist display name.
    pub async fn name(&self) -> Result<String> {
        if let Some(name) = &self.inner.prefill_name {
            return Ok(name.clone());
        }
        Ok(self.info().await?.name.clone())
    }

    /// Primary genre, when the page carried one.
    pub async fn genre(&self) -> Result<Option<Genre>> {
        Ok(self.info().await?.genre.clone())
    }

    /// Outbound website link, when the page shows one.
    pub async fn website(&self) -> Result<Option<String>> {
        Ok(self.info().await?.website.clone())
    }

    /// Breadcrumb path in document order.
    pub async fn path(&self) -> Result<Vec<PathSegment>> {
        Ok(self.info().await?.path.clone())
    }

    /// The best-selling subset of albums shown on the artist page, each
    /// prefilled with title and thumbnail.
    pub async fn selected_albums(&self) -> Result<Vec<Album>> {
        Ok(self.info().await?.selected_albums.clone())
    }

    /// Total number of albums, from the page's pagination label (or the
    /// selected-albums count when the label is absent).
    pub async fn total_albums(&self) -> Result<u32> {
        Ok(self.info().await?.counters.total)
    }

    /// Raw pagination counters for the selected-albums grid.
    pub async fn album_counters(&self) -> Result<AlbumCounters> {
        Ok(self.info().await?.counters)
    }

    /// The full discography, in store order, each album prefilled with its
    /// title. Independent of the basic-info group.
    pub async fn discography(&self) -> Result<Vec<Album>> {
        let inner = &self.inner;
        let albums = inner
            .discography
            .get_or_fetch(|| async {
                let url = inner.session.config().browse_artist_url(&inner.id)?;
                let doc = inner.session.fetch_document(&url).await?;
                Ok(extract_discography(&doc)
                    .into_iter()
                    .map(|summary| Album::from_summary(inner.session.clone(), summary))
                    .collect())
            })
            .await?;
        Ok(albums.as_ref().clone())
    }

    async fn info(&self) -> Result<Arc<ArtistInfo>> {
        let inner = &self.inner;
        inner
            .info
            .get_or_fetch(|| async {
                let url = inner.session.config().view_artist_url(&inner.id)?;
                let doc = inner.session.fetch_document(&url).await?;
                let page = extract_artist_page(&doc);

                let name = page.name.ok_or_else(|| {
                    ExtractionError::missing("Path/PathElement/@displayName")
                })?;
                let selected_albums = page
                    .selected_albums
                    .into_iter()
                    .map(|summary| Album::from_summary(inner.session.clone(), summary))
                    .collect();

                Ok(ArtistInfo {
                    name,
                    genre: page.genre,
                    website: page.website,
                    path: page.path,
                    selected_albums,
                    counters: page.counters,
                })
            })
            .await
    }
}

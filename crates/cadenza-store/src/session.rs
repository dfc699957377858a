//! The store session: transport + decode + parse glue, and the entry
//! points that hand out entities.

use std::sync::Arc;

use cadenza_core::{Error, Result};
use tracing::debug;

use crate::config::StoreConfig;
use crate::decode::{decode, DecodeOptions};
use crate::document::Document;
use crate::entity::{Album, Artist, SearchResults};
use crate::extract::extract_search_page;
use crate::transport::{HttpTransport, Transport};

/// A session against the store.
///
/// Holds the transport and the read-only configuration; cheap to clone,
/// and every entity it hands out keeps a handle back to it for its lazy
/// fetches. The session itself caches nothing — two `artist()` calls with
/// the same id yield two independent entities.
#[derive(Clone)]
pub struct StoreSession {
    inner: Arc<SessionInner>,
}

struct SessionInner {
    transport: Box<dyn Transport>,
    config: StoreConfig,
}

impl StoreSession {
    /// A session over the production HTTP transport.
    pub fn new() -> Result<Self> {
        Ok(Self::with_transport(HttpTransport::new()?, StoreConfig::new()))
    }

    /// A session over a custom transport (tests use a scripted one).
    pub fn with_transport(transport: impl Transport + 'static, config: StoreConfig) -> Self {
        Self {
            inner: Arc::new(SessionInner {
                transport: Box::new(transport),
                config,
            }),
        }
    }

    pub(crate) fn config(&self) -> &StoreConfig {
        &self.inner.config
    }

    /// An artist entity for a store id. Validates the id, performs no I/O.
    pub fn artist(&self, artist_id: &str) -> Result<Artist> {
        self.inner.config.view_artist_url(artist_id)?;
        Ok(Artist::new(self.clone(), artist_id.to_owned()))
    }

    /// An album entity for a store id. Validates the id, performs no I/O.
    pub fn album(&self, album_id: &str) -> Result<Album> {
        self.inner.config.view_album_url(album_id)?;
        Ok(Album::new(self.clone(), album_id.to_owned()))
    }

    /// Run a basic search and return the result albums, prefilled with
    /// whatever each tile carried.
    pub async fn search(&self, term: &str) -> Result<SearchResults> {
        let url = self.inner.config.search_url(term)?;
        let doc = self.fetch_document(&url).await?;
        let albums = extract_search_page(&doc)
            .into_iter()
            .map(|summary| Album::from_summary(self.clone(), summary))
            .collect();
        Ok(SearchResults { albums })
    }

    /// One GET, decoded and parsed. The shared leg of every lazy fetch.
    pub(crate) async fn fetch_document(&self, url: &str) -> Result<Document> {
        let response = self.inner.transport.get(url).await?;
        if !response.is_success() {
            return Err(Error::transport(
                url,
                Some(response.status),
                format!("status {}", response.status),
            ));
        }

        debug!(
            "fetched {url}: {} bytes, encrypted: {}",
            response.body.len(),
            response.crypto_iv.is_some()
        );

        let text = decode(
            &response.body,
            response.crypto_iv.as_deref(),
            DecodeOptions::default(),
        )?;
        Ok(Document::parse(&text)?)
    }
}

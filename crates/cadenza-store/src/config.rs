//! Store endpoints, wire constants, and the session configuration.

use cadenza_core::{Error, Result};
use url::Url;

const STORE_BASE: &str = "http://phobos.apple.com/WebObjects/MZStore.woa/wa";
const SEARCH_BASE: &str =
    "http://phobos.apple.com/WebObjects/MZSearch.woa/wa/com.apple.jingle.search.DirectAction/search";

/// The fixed 16-byte AES key the store encrypts responses with.
///
/// This is a property of the wire protocol, not a secret of this client,
/// and it is not configurable.
pub const STORE_AES_KEY: [u8; 16] = [
    0x8a, 0x9d, 0xad, 0x39, 0x9f, 0xb0, 0x14, 0xc1, 0x31, 0xbe, 0x61, 0x18, 0x20, 0xd7, 0x88,
    0x95,
];

/// Response header carrying the hex-encoded AES initialization vector.
pub const CRYPTO_IV_HEADER: &str = "x-apple-crypto-iv";

/// Outbound `Accept-Language` value.
pub const ACCEPT_LANGUAGE: &str = "en-us, en;q=0.50";

/// Outbound cookie asserting the verified-country flag; the store refuses
/// catalog pages without it.
pub const STORE_COOKIE: &str = "countryVerified=1";

/// Outbound `Accept-Encoding`: gzip plus the store's cipher token.
pub const ACCEPT_ENCODING: &str = "gzip, x-aes-cbc";

/// User agent the store expects.
pub const USER_AGENT: &str = "iTunes/4.7.1 (Macintosh; U; PPC Mac OS X 10.3)";

/// Read-only session configuration: URL templates for every page type.
///
/// Shared by every entity of a session; safe to clone freely.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    store_base: String,
    search_base: String,
}

impl StoreConfig {
    pub fn new() -> Self {
        Self {
            store_base: STORE_BASE.to_string(),
            search_base: SEARCH_BASE.to_string(),
        }
    }

    /// Override the endpoints, e.g. to point at a capture replay server.
    pub fn with_bases(store_base: impl Into<String>, search_base: impl Into<String>) -> Self {
        Self {
            store_base: store_base.into(),
            search_base: search_base.into(),
        }
    }

    /// Search-by-term URL. The term is percent-encoded.
    pub fn search_url(&self, term: &str) -> Result<String> {
        if term.trim().is_empty() {
            return Err(Error::usage("search term is empty"));
        }
        let mut url = Url::parse(&self.search_base)
            .map_err(|e| Error::usage(format!("bad search base URL: {e}")))?;
        url.query_pairs_mut().append_pair("term", term);
        Ok(url.into())
    }

    /// Album-view URL for a store album id.
    pub fn view_album_url(&self, album_id: &str) -> Result<String> {
        self.id_url("viewAlbum", "album id", album_id)
    }

    /// Artist-view URL for a store artist id.
    pub fn view_artist_url(&self, artist_id: &str) -> Result<String> {
        self.id_url("viewArtist", "artist id", artist_id)
    }

    /// Artist biography URL. No extractor consumes this page yet; the
    /// builder exists because the endpoint is part of the store surface.
    pub fn artist_biography_url(&self, artist_id: &str) -> Result<String> {
        self.id_url("viewArtistBio", "artist id", artist_id)
    }

    /// Artist influencers URL. Same status as the biography page.
    pub fn artist_influencers_url(&self, artist_id: &str) -> Result<String> {
        self.id_url("viewArtistInfluencers", "artist id", artist_id)
    }

    /// Browse URL for an artist's full discography.
    pub fn browse_artist_url(&self, artist_id: &str) -> Result<String> {
        self.id_url("browseArtist", "artist id", artist_id)
    }

    fn id_url(&self, action: &str, what: &str, id: &str) -> Result<String> {
        validate_id(what, id)?;
        Ok(format!("{}/{action}?id={id}", self.store_base))
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Reject empty or non-numeric identifiers before any I/O.
fn validate_id(what: &str, id: &str) -> Result<()> {
    if id.is_empty() {
        return Err(Error::usage(format!("{what} is empty")));
    }
    if !id.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::usage(format!("{what} {id:?} is not numeric")));
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_id_urls() {
        let config = StoreConfig::new();
        assert_eq!(
            config.view_album_url("6993").unwrap(),
            "http://phobos.apple.com/WebObjects/MZStore.woa/wa/viewAlbum?id=6993"
        );
        assert_eq!(
            config.browse_artist_url("3244").unwrap(),
            "http://phobos.apple.com/WebObjects/MZStore.woa/wa/browseArtist?id=3244"
        );
    }

    #[test]
    fn test_search_url_encodes_term() {
        let config = StoreConfig::new();
        let url = config.search_url("a ghost is born").unwrap();
        assert!(url.ends_with("?term=a+ghost+is+born"));
    }

    #[test]
    fn test_bad_input_is_rejected_before_io() {
        let config = StoreConfig::new();
        assert!(config.search_url("   ").unwrap_err().is_usage());
        assert!(config.view_album_url("").unwrap_err().is_usage());
        assert!(config.view_artist_url("abc").unwrap_err().is_usage());
    }
}

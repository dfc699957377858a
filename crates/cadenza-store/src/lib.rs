//! # cadenza-store
//!
//! Client for a legacy music-store catalog service that answers with
//! UI-description XML instead of a data API.
//!
//! The pipeline: a [`transport::Transport`] performs one GET per logical
//! fetch; [`decode`] turns the raw bytes (possibly AES-encrypted, possibly
//! gzip-compressed) into text; [`document`] parses the text into a
//! queryable tree; [`extract`] walks the tree's layout containers into
//! plain records; and [`entity`] wraps those records in lazily-populated
//! domain objects handed out by a [`StoreSession`].

pub mod config;
pub mod decode;
pub mod document;
pub mod entity;
pub mod extract;
pub mod session;
pub mod transport;

pub use config::StoreConfig;
pub use decode::{decode, DecodeOptions, DecryptMode};
pub use entity::{Album, Artist, SearchResults, Song};
pub use session::StoreSession;
pub use transport::{HttpTransport, Transport, TransportResponse};

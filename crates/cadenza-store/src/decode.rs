//! Decode pipeline: optional AES-CBC decryption, optional gunzip.
//!
//! The store serves three shapes of body: plaintext gzip, AES-128-CBC over
//! gzip (the IV arrives in a response header, the key is fixed), and, for a
//! few error pages, bare text. [`DecryptMode::Auto`] handles all three by
//! keying off the presence of the IV header.

use std::io::Read;

use aes::cipher::{block_padding::Pkcs7, BlockDecryptMut, KeyIvInit};
use cadenza_core::DecodeError;
use flate2::read::GzDecoder;
use tracing::debug;

use crate::config::STORE_AES_KEY;

type Aes128CbcDec = cbc::Decryptor<aes::Aes128>;

/// Whether to attempt decryption of the response body.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DecryptMode {
    /// Never decrypt; bytes pass straight to the inflate stage.
    Skip,
    /// Decrypt when the response carried an IV header, pass through when it
    /// did not. This is the shape of real store traffic.
    #[default]
    Auto,
    /// Always decrypt; a missing or malformed IV header is an error.
    Force,
}

/// Options for [`decode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeOptions {
    pub decrypt: DecryptMode,
    /// Treat the (possibly decrypted) bytes as a gzip stream.
    pub gunzip: bool,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            decrypt: DecryptMode::Auto,
            gunzip: true,
        }
    }
}

/// Turn raw response bytes into the text document they carry.
///
/// `crypto_iv` is the hex-encoded IV response header, when present. No
/// partial output: any stage failure fails the whole decode.
pub fn decode(
    raw: &[u8],
    crypto_iv: Option<&str>,
    options: DecodeOptions,
) -> Result<String, DecodeError> {
    let bytes = match options.decrypt {
        DecryptMode::Skip => raw.to_vec(),
        DecryptMode::Auto => match crypto_iv {
            Some(header) => decrypt(raw, header)?,
            None => {
                debug!("no crypto IV header, treating body as plaintext");
                raw.to_vec()
            }
        },
        DecryptMode::Force => {
            let header = crypto_iv.ok_or(DecodeError::BadIv)?;
            decrypt(raw, header)?
        }
    };

    let bytes = if options.gunzip {
        gunzip(&bytes)?
    } else {
        bytes
    };

    String::from_utf8(bytes).map_err(|_| DecodeError::InvalidText)
}

/// AES-128-CBC with PKCS#7 padding; the IV is the hex-decoded header value.
fn decrypt(raw: &[u8], iv_header: &str) -> Result<Vec<u8>, DecodeError> {
    let iv_bytes = hex::decode(iv_header.trim()).map_err(|_| DecodeError::BadIv)?;
    let iv: [u8; 16] = iv_bytes.try_into().map_err(|_| DecodeError::BadIv)?;

    Aes128CbcDec::new(&STORE_AES_KEY.into(), &iv.into())
        .decrypt_padded_vec_mut::<Pkcs7>(raw)
        .map_err(|e| DecodeError::DecryptFailed(e.to_string()))
}

/// Inflate a gzip stream wholly in memory.
fn gunzip(bytes: &[u8]) -> Result<Vec<u8>, DecodeError> {
    let mut decoder = GzDecoder::new(bytes);
    let mut out = Vec::new();
    decoder
        .read_to_end(&mut out)
        .map_err(|e| DecodeError::DecompressFailed(e.to_string()))?;
    Ok(out)
}

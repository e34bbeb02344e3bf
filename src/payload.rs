//! Obfuscated payload loader.
//!
//! A payload is sealed by base64-encoding it and XOR-ing the base64 text
//! with a repeating key. Loading reverses both steps. The key itself is
//! never stored whole; it is the concatenation of short fragments.
//!
//! ```text
//! seal:   plain ──base64──► text ──XOR key──► payload
//! reveal: payload ──XOR key──► text ──base64⁻¹──► artifact
//! ```
//!
//! The recovered artifact is opaque data. Nothing in this crate interprets
//! or executes it.
//!
//! Each [`PayloadLoader`] decodes at most once and caches the outcome,
//! failures included. [`engine_room`] is the process-wide loader over the
//! built-in constants.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{LazyLock, OnceLock};

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use tracing::{debug, error};

use crate::error::RingSeedError;

/// Built-in obfuscated payload.
pub const ENGINE_ROOM_PAYLOAD: [u8; 7] = [42, 55, 73, 19, 88, 101, 202];

/// Fragments of the built-in key, in concatenation order.
pub const ENGINE_ROOM_KEY_FRAGMENTS: [&[u8]; 8] =
    [b"phi", b"_", b"lane", b"97", b"c", b"sun", b"_tau", b"::"];

/// Concatenates key fragments into one key.
pub fn derive_key(fragments: &[&[u8]]) -> Vec<u8> {
    fragments.concat()
}

/// XORs `data` with `key` repeated over its length.
///
/// The transform is its own inverse.
///
/// # Errors
/// Returns [`RingSeedError::Initialization`] if `key` is empty.
pub fn xor_stream(data: &[u8], key: &[u8]) -> Result<Vec<u8>, RingSeedError> {
    if key.is_empty() {
        return Err(RingSeedError::Initialization("key is empty".into()));
    }
    Ok(data
        .iter()
        .zip(key.iter().cycle())
        .map(|(b, k)| b ^ k)
        .collect())
}

/// Seals `plain` into an obfuscated payload.
///
/// # Examples
///
/// ```
/// use ringseed::payload::{obfuscate, reveal};
///
/// let key = b"phi_lane97csun_tau::";
/// let sealed = obfuscate(b"phi-path aligned", key).unwrap();
/// assert_eq!(reveal(&sealed, key).unwrap(), b"phi-path aligned");
/// ```
///
/// # Errors
/// Returns [`RingSeedError::Initialization`] if `key` is empty.
pub fn obfuscate(plain: &[u8], key: &[u8]) -> Result<Vec<u8>, RingSeedError> {
    xor_stream(STANDARD.encode(plain).as_bytes(), key)
}

/// Recovers the plain bytes of an obfuscated payload.
///
/// # Errors
/// Returns [`RingSeedError::Initialization`] if `key` is empty or the
/// unmasked text is not valid standard base64.
pub fn reveal(payload: &[u8], key: &[u8]) -> Result<Vec<u8>, RingSeedError> {
    let text = xor_stream(payload, key)?;
    STANDARD
        .decode(&text)
        .map_err(|e| RingSeedError::Initialization(format!("payload is not valid base64: {}", e)))
}

/// Decoded payload bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObfuscatedArtifact {
    bytes: Vec<u8>,
}

impl ObfuscatedArtifact {
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// UTF-8 view of the artifact, if it is valid UTF-8.
    pub fn as_text(&self) -> Option<&str> {
        std::str::from_utf8(&self.bytes).ok()
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Decodes one payload lazily and caches the result.
///
/// Concurrent first calls to [`load`](Self::load) run the decode exactly
/// once; every caller observes the same cached value.
#[derive(Debug)]
pub struct PayloadLoader {
    payload: Vec<u8>,
    key: Vec<u8>,
    artifact: OnceLock<Result<ObfuscatedArtifact, RingSeedError>>,
    decodes: AtomicUsize,
}

impl PayloadLoader {
    /// Creates a loader for `payload` under `key`. Nothing is decoded yet.
    pub fn new(payload: impl Into<Vec<u8>>, key: impl Into<Vec<u8>>) -> Self {
        PayloadLoader {
            payload: payload.into(),
            key: key.into(),
            artifact: OnceLock::new(),
            decodes: AtomicUsize::new(0),
        }
    }

    /// Creates a loader whose key is the concatenation of `fragments`.
    pub fn from_fragments(payload: impl Into<Vec<u8>>, fragments: &[&[u8]]) -> Self {
        Self::new(payload, derive_key(fragments))
    }

    /// Loader over the built-in payload and key fragments.
    pub fn builtin() -> Self {
        Self::from_fragments(ENGINE_ROOM_PAYLOAD, &ENGINE_ROOM_KEY_FRAGMENTS)
    }

    /// Returns the decoded artifact, decoding on the first call.
    ///
    /// # Errors
    /// Returns [`RingSeedError::Initialization`] if the payload does not
    /// decode. The failure is cached: later calls return the same error
    /// without decoding again.
    pub fn load(&self) -> Result<&ObfuscatedArtifact, RingSeedError> {
        self.artifact
            .get_or_init(|| self.decode())
            .as_ref()
            .map_err(Clone::clone)
    }

    /// Whether the decode has already run.
    pub fn is_loaded(&self) -> bool {
        self.artifact.get().is_some()
    }

    /// Number of times the decode step has run (0 or 1).
    pub fn decode_count(&self) -> usize {
        self.decodes.load(Ordering::SeqCst)
    }

    fn decode(&self) -> Result<ObfuscatedArtifact, RingSeedError> {
        self.decodes.fetch_add(1, Ordering::SeqCst);
        match reveal(&self.payload, &self.key) {
            Ok(bytes) => {
                debug!(
                    payload_len = self.payload.len(),
                    artifact_len = bytes.len(),
                    "Decoded obfuscated payload"
                );
                Ok(ObfuscatedArtifact { bytes })
            }
            Err(e) => {
                error!(error = %e, "Obfuscated payload failed to decode");
                Err(e)
            }
        }
    }
}

static ENGINE_ROOM: LazyLock<PayloadLoader> = LazyLock::new(PayloadLoader::builtin);

/// Process-wide loader over the built-in payload.
pub fn engine_room_loader() -> &'static PayloadLoader {
    &ENGINE_ROOM
}

/// Returns the process-wide built-in artifact, decoding it on first access.
///
/// # Errors
/// Returns [`RingSeedError::Initialization`]: the built-in buffer unmasks to
/// `Z_ L4\x04\xA4`, which is not base64. The error is produced once and then
/// served from the cache.
pub fn engine_room() -> Result<&'static ObfuscatedArtifact, RingSeedError> {
    ENGINE_ROOM.load()
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY: &[u8] = b"phi_lane97csun_tau::";

    /// `base64("phi-path aligned")` sealed under the built-in key.
    const SEALED: [u8; 24] = [
        19, 47, 1, 47, 32, 57, 44, 13, 93, 112, 4, 20, 44, 57, 39, 4, 59, 71, 15, 86, 42, 41, 84,
        98,
    ];

    #[test]
    fn test_derive_key_builtin() {
        assert_eq!(derive_key(&ENGINE_ROOM_KEY_FRAGMENTS), KEY);
    }

    #[test]
    fn test_xor_stream_builtin_payload() {
        let text = xor_stream(&ENGINE_ROOM_PAYLOAD, KEY).unwrap();
        assert_eq!(text, b"Z_ L4\x04\xA4");
    }

    #[test]
    fn test_xor_stream_is_involution() {
        let data = b"The quick brown fox jumps over the lazy dog, twice over.";
        let once = xor_stream(data, KEY).unwrap();
        assert_ne!(once.as_slice(), data.as_slice());
        assert_eq!(xor_stream(&once, KEY).unwrap(), data);
    }

    #[test]
    fn test_xor_stream_empty_key() {
        assert!(matches!(
            xor_stream(b"abc", b""),
            Err(RingSeedError::Initialization(_))
        ));
    }

    #[test]
    fn test_obfuscate_frozen_vector() {
        assert_eq!(obfuscate(b"phi-path aligned", KEY).unwrap(), SEALED);
    }

    #[test]
    fn test_reveal_frozen_vector() {
        assert_eq!(reveal(&SEALED, KEY).unwrap(), b"phi-path aligned");
    }

    #[test]
    fn test_reveal_builtin_is_not_base64() {
        let err = reveal(&ENGINE_ROOM_PAYLOAD, KEY).unwrap_err();
        assert!(matches!(err, RingSeedError::Initialization(_)));
    }

    #[test]
    fn test_loader_decodes_once() {
        let loader = PayloadLoader::new(SEALED, KEY);
        assert!(!loader.is_loaded());
        assert_eq!(loader.decode_count(), 0);

        let first = loader.load().unwrap();
        let second = loader.load().unwrap();
        assert_eq!(first.as_text(), Some("phi-path aligned"));
        assert!(std::ptr::eq(first, second));
        assert_eq!(loader.decode_count(), 1);
        assert!(loader.is_loaded());
    }

    #[test]
    fn test_loader_caches_failure() {
        let loader = PayloadLoader::builtin();
        let first = loader.load().unwrap_err();
        let second = loader.load().unwrap_err();
        assert_eq!(first, second);
        assert_eq!(loader.decode_count(), 1);
    }

    #[test]
    fn test_loader_from_fragments() {
        let fragments: [&[u8]; 3] = [b"phi_lane", b"97csun", b"_tau::"];
        let loader = PayloadLoader::from_fragments(SEALED, &fragments);
        assert_eq!(loader.load().unwrap().len(), 16);
    }

    #[test]
    fn test_artifact_binary_text_view() {
        let sealed = obfuscate(&[0xFF, 0xFE, 0x00], KEY).unwrap();
        let loader = PayloadLoader::new(sealed, KEY);
        let artifact = loader.load().unwrap();
        assert_eq!(artifact.as_bytes(), &[0xFF, 0xFE, 0x00]);
        assert_eq!(artifact.as_text(), None);
        assert!(!artifact.is_empty());
    }
}

//! # Codec — Byte and Text Transforms
//!
//! Pure transforms between documents, encoded text, hashes, and composite
//! identifier strings. This module knows nothing about document semantics;
//! it moves bytes.
//!
//! ## Layers
//!
//! 1. Minified JSON, in the document's own key order.
//! 2. Multicodec tag `0x80 0x04` ("json") prefixed to the UTF-8 bytes.
//! 3. Multibase base58-btc text encoding, prefix `z`.
//! 4. Multihash `0x12 0x20` (sha2-256, 32 bytes) over the encoded text,
//!    multibase-encoded the same way, forming the hash segment.
//! 5. Composite identifier: `did:peer:4<hash>` or `did:peer:4<hash>:<doc>`.
//!
//! Every layer is exactly reversible; [`decode_document`] rejects any
//! deviation from the tags above bit-for-bit.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;
use sha2::{Digest, Sha256};

use crate::document::Document;
use crate::error::FormatError;

/// The method prefix shared by both identifier forms.
pub const DID_PEER_4_PREFIX: &str = "did:peer:4";

/// Multicodec tag for JSON content.
pub const MULTICODEC_JSON: [u8; 2] = [0x80, 0x04];

/// Multihash tag for a 32-byte sha2-256 digest.
pub const MULTIHASH_SHA2_256: [u8; 2] = [0x12, 0x20];

/// Multibase prefix for base58-btc.
pub const MULTIBASE_BASE58_BTC: char = 'z';

/// The base58-btc alphabet (excludes `0`, `I`, `O`, `l`).
pub const BASE58_ALPHABET: &str = "123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

// The hash segment is always `zQm` + 44 base58 characters: a fixed-size
// property of the sha2-256 multihash, not an incidental choice.
static LONG_FORM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        "^did:peer:4zQm[{BASE58_ALPHABET}]{{44}}:z[{BASE58_ALPHABET}]{{6,}}$"
    ))
    .expect("invalid long form pattern")
});

static SHORT_FORM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("^did:peer:4zQm[{BASE58_ALPHABET}]{{44}}$"))
        .expect("invalid short form pattern")
});

/// Whether `did` matches the long form grammar.
pub fn is_long_form(did: &str) -> bool {
    LONG_FORM.is_match(did)
}

/// Whether `did` matches the short form grammar.
pub fn is_short_form(did: &str) -> bool {
    SHORT_FORM.is_match(did)
}

/// Encode a document to multibase text.
///
/// Serializes to minified JSON in insertion order, prefixes the
/// [`MULTICODEC_JSON`] tag, and base58-encodes with the multibase `z`
/// prefix. Deterministic: an unchanged document always yields the same
/// text.
pub fn encode_document(document: &Document) -> Result<String, FormatError> {
    let json = serde_json::to_string(document)?;
    let mut bytes = Vec::with_capacity(MULTICODEC_JSON.len() + json.len());
    bytes.extend_from_slice(&MULTICODEC_JSON);
    bytes.extend_from_slice(json.as_bytes());
    Ok(format!(
        "{MULTIBASE_BASE58_BTC}{}",
        bs58::encode(bytes).into_string()
    ))
}

/// Decode multibase text back into a document.
///
/// Exact inverse of [`encode_document`]. Fails if the multibase prefix is
/// not `z`, the decoded bytes do not start with the JSON multicodec tag,
/// or the remaining bytes are not a JSON object.
pub fn decode_document(encoded: &str) -> Result<Document, FormatError> {
    let mut chars = encoded.chars();
    let encoding = chars.next().ok_or(FormatError::EmptyEncodedDocument)?;
    if encoding != MULTIBASE_BASE58_BTC {
        return Err(FormatError::UnsupportedMultibase(encoding));
    }

    let decoded = bs58::decode(chars.as_str()).into_vec()?;
    if decoded.len() < MULTICODEC_JSON.len() || decoded[..2] != MULTICODEC_JSON {
        return Err(FormatError::UnsupportedMulticodec {
            tag: decoded.iter().take(2).copied().collect(),
        });
    }

    match serde_json::from_slice(&decoded[2..])? {
        Value::Object(document) => Ok(document),
        _ => Err(FormatError::NotAnObject),
    }
}

/// Compute the multihash of encoded document text.
///
/// Hashes the UTF-8 bytes of `encoded` (including its `z` prefix) with
/// sha2-256, prefixes the [`MULTIHASH_SHA2_256`] tag, and base58-encodes
/// with the multibase `z` prefix.
pub fn hash_encoded_document(encoded: &str) -> String {
    let digest = Sha256::digest(encoded.as_bytes());
    let mut bytes = Vec::with_capacity(MULTIHASH_SHA2_256.len() + digest.len());
    bytes.extend_from_slice(&MULTIHASH_SHA2_256);
    bytes.extend_from_slice(&digest);
    format!(
        "{MULTIBASE_BASE58_BTC}{}",
        bs58::encode(bytes).into_string()
    )
}

/// Assemble the long form identifier for a document.
pub fn long_form(document: &Document) -> Result<String, FormatError> {
    let encoded = encode_document(document)?;
    let hash = hash_encoded_document(&encoded);
    Ok(format!("{DID_PEER_4_PREFIX}{hash}:{encoded}"))
}

/// Assemble the short form identifier for a document.
///
/// The hash segment is identical to the long form's; only the document
/// segment is omitted.
pub fn short_form(document: &Document) -> Result<String, FormatError> {
    let encoded = encode_document(document)?;
    Ok(format!(
        "{DID_PEER_4_PREFIX}{}",
        hash_encoded_document(&encoded)
    ))
}

/// Split a long form identifier into its hash and encoded document
/// segments.
pub fn split_long(did: &str) -> Result<(&str, &str), FormatError> {
    if !is_long_form(did) {
        return Err(FormatError::NotLongForm {
            did: did.to_owned(),
        });
    }
    // The grammar guarantees exactly one colon after the method prefix.
    did[DID_PEER_4_PREFIX.len()..]
        .split_once(':')
        .ok_or_else(|| FormatError::NotLongForm {
            did: did.to_owned(),
        })
}

/// Return the short form of a long form identifier.
pub fn long_to_short(did: &str) -> Result<String, FormatError> {
    let (hash, _) = split_long(did)?;
    Ok(format!("{DID_PEER_4_PREFIX}{hash}"))
}

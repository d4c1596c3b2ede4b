//! # Resolution — From Identifier to Contextualized Document
//!
//! Orchestrates the codec and the document visitor: an identifier is
//! decoded with integrity verification, then contextualized into a
//! display-ready document — `id` and `alsoKnownAs` stamped, and every
//! object with an id annotated with a `controller` when it lacks one.
//!
//! Every operation is a pure function from its arguments to a fresh
//! document; the caller's document is never mutated in place.
//!
//! Relative `#fragment` references are never rewritten to fully
//! qualified form, and `id`/`alsoKnownAs` are set unconditionally.

use serde_json::Value;

use crate::codec;
use crate::document::Document;
use crate::error::{FormatError, Peer4Error};
use crate::valid::validate_input_document;
use crate::visitor::{visit_document, DocumentVisitor};

/// Encode an input document into a long form did:peer:4.
///
/// With `validate` set, the document must pass
/// [`validate_input_document`] first. Skipping validation is for
/// documents already known to be well formed.
pub fn encode(document: &Document, validate: bool) -> Result<String, Peer4Error> {
    if validate {
        validate_input_document(document)?;
    }
    let did = codec::long_form(document)?;
    tracing::debug!(%did, "encoded input document");
    Ok(did)
}

/// Encode an input document into a short form did:peer:4.
///
/// No validation gate: the short form is a lighter-weight handle and the
/// document is not independently resolvable from it.
pub fn encode_short(document: &Document) -> Result<String, Peer4Error> {
    Ok(codec::short_form(document)?)
}

/// Decode a long form did:peer:4 into its document, verifying integrity.
///
/// The hash segment must recompute exactly from the document segment;
/// a mismatch is a trust failure and is surfaced as
/// [`Peer4Error::Integrity`], never silently ignored.
pub fn decode(did: &str) -> Result<Document, Peer4Error> {
    if !did.starts_with(codec::DID_PEER_4_PREFIX) {
        return Err(FormatError::UnknownPrefix {
            did: did.to_owned(),
        }
        .into());
    }

    if codec::is_short_form(did) {
        return Err(Peer4Error::ShortFormDid);
    }

    let (hash, encoded) = codec::split_long(did)?;
    if codec::hash_encoded_document(encoded) != hash {
        return Err(Peer4Error::Integrity {
            did: did.to_owned(),
        });
    }

    Ok(codec::decode_document(encoded)?)
}

/// Resolve a long form did:peer:4 into its contextualized document.
///
/// The resolved document's `id` is the long form; `alsoKnownAs` holds
/// the short form.
pub fn resolve(did: &str) -> Result<Document, Peer4Error> {
    let decoded = decode(did)?;
    let short = codec::long_to_short(did)?;
    let mut document = contextualize(did, decoded);
    document.insert(
        "alsoKnownAs".to_owned(),
        Value::Array(vec![Value::String(short)]),
    );
    tracing::debug!(%did, "resolved long form document");
    Ok(document)
}

/// Resolve the short form document variant of a did:peer:4.
///
/// `did` is expected to be long form — the document is only recoverable
/// from there. The resolved document's `id` is the short form;
/// `alsoKnownAs` holds the long form.
pub fn resolve_short(did: &str) -> Result<Document, Peer4Error> {
    let decoded = decode(did)?;
    let short = codec::long_to_short(did)?;
    let mut document = contextualize(&short, decoded);
    document.insert(
        "alsoKnownAs".to_owned(),
        Value::Array(vec![Value::String(did.to_owned())]),
    );
    tracing::debug!(%did, "resolved short form document");
    Ok(document)
}

/// Resolve the short form document variant directly from an input
/// document.
///
/// If `did` is provided it must equal the short form derivable from the
/// document; disagreement is caller-side inconsistency, reported as
/// [`Peer4Error::Mismatch`].
pub fn resolve_short_from_document(
    document: &Document,
    did: Option<&str>,
) -> Result<Document, Peer4Error> {
    let long = encode(document, true)?;
    if let Some(expected) = did {
        let derived = codec::long_to_short(&long)?;
        if expected != derived {
            return Err(Peer4Error::Mismatch {
                expected: expected.to_owned(),
                derived,
            });
        }
    }
    resolve_short(&long)
}

/// Strategy that stamps `controller` on every object with an id, unless
/// the object already declares one.
struct Contextualizer<'a> {
    did: &'a str,
}

impl DocumentVisitor for Contextualizer<'_> {
    fn visit_value_with_id(&mut self, mut value: Document) -> Document {
        value
            .entry("controller")
            .or_insert_with(|| Value::String(self.did.to_owned()));
        value
    }
}

/// Contextualize a decoded document with the given DID: stamp
/// controllers and set the top-level `id`.
fn contextualize(did: &str, decoded: Document) -> Document {
    let mut document = visit_document(decoded, &mut Contextualizer { did });
    document.insert("id".to_owned(), Value::String(did.to_owned()));
    document
}

//! # Error Types
//!
//! Error taxonomy for the codec. All errors use `thiserror` for
//! derive-based `Display` and `Error` implementations, and all are
//! terminal for the call that raised them — there is no partial result
//! and no internal retry.
//!
//! - [`ValidationError`] — the input document is structurally unfit to be
//!   encoded; names the offending field and index.
//! - [`FormatError`] — an identifier string or encoded payload does not
//!   parse; the caller must treat the identifier as unusable.
//! - [`Peer4Error::Integrity`] — the embedded hash does not recompute
//!   from the document segment. A trust failure, never auto-corrected.
//! - [`Peer4Error::Mismatch`] — a caller-declared short DID disagrees
//!   with the one derivable from the supplied document.

use thiserror::Error;

/// Top-level error type for did:peer:4 operations.
#[derive(Error, Debug)]
pub enum Peer4Error {
    /// Input document failed structural validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Identifier or encoded payload failed to parse.
    #[error(transparent)]
    Format(#[from] FormatError),

    /// The embedded hash does not verify against the document segment.
    #[error("hash is invalid for did: {did}")]
    Integrity {
        /// The identifier that failed verification.
        did: String,
    },

    /// A declared short DID does not match the supplied document.
    #[error("document does not match did: expected {expected}, derived {derived}")]
    Mismatch {
        /// The short DID declared by the caller.
        expected: String,
        /// The short DID derived from the document.
        derived: String,
    },

    /// Decode was attempted on a short form DID, which does not embed
    /// a document.
    #[error("cannot decode document from short form did:peer:4")]
    ShortFormDid,
}

/// Structural defect in an input document.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    /// The input document carried no fields at all.
    #[error("document must not be empty")]
    EmptyDocument,

    /// `id` is assigned during resolution and must not be authored.
    #[error("id must not be present in input document")]
    IdPresent,

    /// `alsoKnownAs` was present but not an array.
    #[error("alsoKnownAs must be an array")]
    AlsoKnownAsNotAnArray,

    /// A collection field was present but not an array.
    #[error("{field} must be an array")]
    NotAnArray {
        /// The offending field.
        field: &'static str,
    },

    /// A resource object is missing its `id`.
    #[error("{field}[{index}]: resource must have an id")]
    MissingId {
        /// The field containing the resource.
        field: &'static str,
        /// Position of the resource within the field.
        index: usize,
    },

    /// A resource `id` was not a string.
    #[error("{field}[{index}]: resource id must be a string")]
    IdNotAString {
        /// The field containing the resource.
        field: &'static str,
        /// Position of the resource within the field.
        index: usize,
    },

    /// A resource `id` was absolute; ids are rooted in the document and
    /// must be relative fragments.
    #[error("{field}[{index}]: resource id must be relative: {id}")]
    IdNotRelative {
        /// The field containing the resource.
        field: &'static str,
        /// Position of the resource within the field.
        index: usize,
        /// The offending id.
        id: String,
    },

    /// A resource object is missing its `type`.
    #[error("{field}[{index}]: resource must have a type")]
    MissingType {
        /// The field containing the resource.
        field: &'static str,
        /// Position of the resource within the field.
        index: usize,
    },
}

/// Lexical or structural defect in an identifier string or encoded
/// document payload.
#[derive(Error, Debug)]
pub enum FormatError {
    /// The string does not start with `did:peer:4`.
    #[error("invalid did:peer:4: {did}")]
    UnknownPrefix {
        /// The rejected string.
        did: String,
    },

    /// The identifier does not match the long form grammar.
    #[error("did is not a long form did:peer:4: {did}")]
    NotLongForm {
        /// The rejected identifier.
        did: String,
    },

    /// The encoded document text was empty.
    #[error("encoded document is empty")]
    EmptyEncodedDocument,

    /// The multibase prefix was not base58-btc (`z`).
    #[error("unsupported multibase encoding: {0}")]
    UnsupportedMultibase(char),

    /// The decoded bytes did not start with the JSON multicodec tag.
    #[error("unsupported multicodec tag: {tag:02x?}")]
    UnsupportedMulticodec {
        /// The leading bytes that were found instead.
        tag: Vec<u8>,
    },

    /// The payload was not valid base58.
    #[error("invalid base58: {0}")]
    Base58(#[from] bs58::decode::Error),

    /// The payload was not valid JSON.
    #[error("invalid JSON payload: {0}")]
    Json(#[from] serde_json::Error),

    /// The payload decoded to JSON, but not to a JSON object.
    #[error("encoded payload is not a JSON object")]
    NotAnObject,
}

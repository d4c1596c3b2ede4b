//! # peer4-core — did:peer:4 Codec Core
//!
//! Implements the `did:peer:4` DID method: a deterministic, self-certifying
//! identifier derived purely from the document it names. No registry, no
//! network lookup — the identifier embeds the document and a content hash
//! of it, so resolution is a local, verifiable decode.
//!
//! ## Key Design Principles
//!
//! 1. **Insertion-ordered documents.** [`Document`] is a `serde_json` map
//!    with `preserve_order` enabled. Identifier derivation hashes the
//!    document exactly as authored; key order is significant and must
//!    survive every round trip.
//!
//! 2. **Content addressing.** The long form carries both the encoded
//!    document and a multihash of it. [`resolve::decode`] recomputes the
//!    hash and refuses any identifier whose segments disagree.
//!
//! 3. **Typed dispatch over a fixed schema.** Document traversal is not a
//!    generic tree walk. The schema has exactly three node kinds (objects
//!    with an id, relationship entries, the root); [`DocumentVisitor`]
//!    exposes one hook per kind plus per-relationship refinements, all
//!    defaulting to identity.
//!
//! 4. **Shallow, early validation.** [`validate_input_document`] gates
//!    untrusted input before an identifier is minted. It checks structure
//!    only — key material and type registries are the caller's concern.
//!
//! ## Crate Policy
//!
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - Pure, synchronous functions; no I/O, no shared state between calls.

#![forbid(unsafe_code)]

pub mod codec;
pub mod document;
pub mod error;
pub mod resolve;
pub mod valid;
pub mod visitor;

// Re-export primary types for ergonomic imports.
pub use document::{Document, Relationship, VerificationMethodOrRef};
pub use error::{FormatError, Peer4Error, ValidationError};
pub use resolve::{
    decode, encode, encode_short, resolve, resolve_short, resolve_short_from_document,
};
pub use valid::validate_input_document;
pub use visitor::{visit_document, DocumentVisitor};

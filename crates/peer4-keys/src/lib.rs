//! # peer4-keys — Input Document Construction
//!
//! Convenience layer over `peer4-core`: build a well-formed input
//! document from typed key descriptors and service definitions instead
//! of assembling JSON by hand.
//!
//! The builder's contract is `peer4_core::validate_input_document` — its
//! output always satisfies the validation gate, by construction. It adds
//! no invariants of its own.

#![forbid(unsafe_code)]

pub mod builder;
pub mod material;

pub use builder::{input_document_from_keys_and_services, BASE_CONTEXT};
pub use material::{KeyEntry, KeyMaterial};
